//! The measured frame loop

use crate::clock::{FrameClock, FrameMark};
use crate::collector::{Collector, Phase};
use crate::report::Report;
use pbench_core::{Result, SimConfig};
use pbench_render::{render_particles, RenderAdapter};
use pbench_sim::Simulation;

/// One benchmark run: a simulation, a renderer, and the clock that times them.
///
/// Each frame is timed from before the simulation step until after the
/// renderer has submitted; the render span alone is timed separately. The
/// measured duration of a frame is the `dt` the simulation advances by on the
/// next one.
pub struct Benchmark<C: FrameClock, R: RenderAdapter> {
    sim: Simulation,
    collector: Collector,
    clock: C,
    renderer: R,
    last_frame: f64,
    quiet: bool,
}

impl<C: FrameClock, R: RenderAdapter> Benchmark<C, R> {
    pub fn new(config: SimConfig, clock: C, renderer: R) -> Result<Self> {
        let collector = Collector::from_config(&config);
        let sim = Simulation::new(config)?;
        Ok(Self {
            sim,
            collector,
            clock,
            renderer,
            last_frame: 0.0,
            quiet: false,
        })
    }

    /// Suppress the `[bench]` progress lines on stderr
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Run a single frame and return the collector's phase afterwards
    pub fn frame(&mut self) -> Result<Phase> {
        if self.collector.is_complete() {
            return Ok(Phase::Complete);
        }

        let frame_start = self.clock.mark(FrameMark::FrameStart);
        let outcome = self.sim.advance(self.last_frame)?;
        if let Some(skipped) = outcome.compacted {
            self.log(format_args!(
                "compacted pool: skipped {} dead slots, live window [{}, {})",
                skipped,
                self.sim.pool().min_live(),
                self.sim.pool().live_count()
            ));
        }

        let render_start = self.clock.mark(FrameMark::RenderStart);
        render_particles(&mut self.renderer, self.sim.live_particles())?;
        let render_end = self.clock.mark(FrameMark::RenderEnd);
        let frame_end = self.clock.mark(FrameMark::FrameEnd);

        let frame_duration = frame_end - frame_start;
        self.last_frame = frame_duration;

        let before = self.collector.phase();
        let phase = self
            .collector
            .record(frame_duration, render_end - render_start);
        if before == Phase::WarmUp && phase != Phase::WarmUp {
            self.log(format_args!(
                "warm-up finished after {} frames, sampling",
                self.collector.frames()
            ));
        }
        Ok(phase)
    }

    /// Run frames until the configured running time has elapsed
    pub fn run(&mut self) -> Result<Report> {
        self.log(format_args!(
            "running {}s ({}s warm-up) with {} renderer, pool capacity {}",
            self.sim.config().running_time(),
            self.sim.config().max_lifetime(),
            self.renderer.name(),
            self.sim.pool().capacity()
        ));
        while self.frame()? != Phase::Complete {}
        self.log(format_args!(
            "run complete: {} frames, {} samples, {} particles alive",
            self.collector.frames(),
            self.collector.samples().len(),
            self.sim.pool().alive_count()
        ));
        Ok(self.report())
    }

    /// Snapshot of the results so far
    pub fn report(&self) -> Report {
        Report {
            frames: self.collector.frames(),
            run_time: self.collector.run_time(),
            stats: self.collector.stats(),
            particles_spawned: self.sim.pool().live_count(),
            particles_alive: self.sim.pool().alive_count(),
            frame_rates: self.collector.samples().rates().collect(),
        }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn collector(&self) -> &Collector {
        &self.collector
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    fn log(&self, args: std::fmt::Arguments<'_>) {
        if !self.quiet {
            eprintln!("[bench] {args}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SyntheticClock;
    use pbench_render::InstanceRecorder;

    fn synthetic_run(frame_dt: f64, render_dt: f64) -> (Report, u64) {
        let clock = SyntheticClock::new(frame_dt, render_dt).unwrap();
        let mut bench = Benchmark::new(SimConfig::default(), clock, InstanceRecorder::new())
            .unwrap()
            .quiet(true);
        let report = bench.run().unwrap();
        (report, bench.renderer().frames_submitted())
    }

    #[test]
    fn full_run_regression_baseline() {
        // Power-of-two durations keep every sum exact
        let (report, submitted) = synthetic_run(1.0 / 64.0, 1.0 / 256.0);

        assert_eq!(report.frames, 1600);
        assert_eq!(submitted, 1600);
        assert_eq!(report.run_time, 25.0);
        // Frames 321..=1600 lie past the 5s warm-up
        assert_eq!(report.stats.samples, 1280);
        assert_eq!(report.frame_rates.len(), 1280);
        assert_eq!(report.stats.mean_fps, Some(64.0));
        assert_eq!(report.stats.fps_std_dev, Some(0.0));
        assert_eq!(report.stats.cpu_time, Some(0.01171875));
        // The first frame advances by zero seconds; every later one spawns a burst
        assert_eq!(report.particles_spawned, 1599 * 20);
        assert!(report.particles_alive > 0);
        assert!(report.particles_alive < report.particles_spawned);
    }

    #[test]
    fn runs_are_reproducible() {
        let (a, _) = synthetic_run(0.01, 0.004);
        let (b, _) = synthetic_run(0.01, 0.004);
        assert_eq!(a, b);
        assert!(a.frames >= 2499 && a.frames <= 2501);
        assert!((a.stats.mean_fps.unwrap() - 100.0).abs() < 1e-6);
        assert!((a.stats.cpu_time.unwrap() - 0.006).abs() < 1e-9);
    }

    #[test]
    fn frame_after_complete_is_noop() {
        let clock = SyntheticClock::new(1.0, 0.5).unwrap();
        let mut bench = Benchmark::new(SimConfig::default(), clock, InstanceRecorder::new())
            .unwrap()
            .quiet(true);
        bench.run().unwrap();
        let frames = bench.collector().frames();
        assert_eq!(bench.frame().unwrap(), Phase::Complete);
        assert_eq!(bench.collector().frames(), frames);
        assert_eq!(bench.simulation().frames(), frames);
    }

    #[test]
    fn renderer_sees_live_particles() {
        let clock = SyntheticClock::new(0.02, 0.005).unwrap();
        let mut bench = Benchmark::new(SimConfig::default(), clock, InstanceRecorder::new())
            .unwrap()
            .quiet(true);
        for _ in 0..50 {
            bench.frame().unwrap();
        }
        let alive = bench.simulation().pool().alive_count();
        assert_eq!(bench.renderer().instances().len(), alive);
        assert_eq!(bench.collector().phase(), Phase::WarmUp);
    }

    #[test]
    fn invalid_config_fails_fast() {
        let config = SimConfig {
            capacity: 1,
            ..SimConfig::default()
        };
        let clock = SyntheticClock::new(0.01, 0.0).unwrap();
        assert!(Benchmark::new(config, clock, InstanceRecorder::new()).is_err());
    }
}
