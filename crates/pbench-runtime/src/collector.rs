//! Run-length bookkeeping: warm-up, sampling and completion

use crate::stats::{FrameSamples, FrameStats};
use pbench_core::SimConfig;

/// Where the run currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Run time has not yet passed the warm-up window; frames are not sampled
    WarmUp,
    /// Every frame is recorded
    Sampling,
    /// Run time reached the configured length; no further frames are recorded
    Complete,
}

/// Accumulates run time and records frame samples once warm-up is over
pub struct Collector {
    warmup: f64,
    running_time: f64,
    run_time: f64,
    frames: u64,
    samples: FrameSamples,
    phase: Phase,
}

impl Collector {
    pub fn new(warmup: f64, running_time: f64, reserve: usize) -> Self {
        Self {
            warmup,
            running_time,
            run_time: 0.0,
            frames: 0,
            samples: FrameSamples::with_capacity(reserve),
            phase: Phase::WarmUp,
        }
    }

    /// Warm up for one maximum particle lifetime, so the pool reaches its
    /// steady-state population before anything is measured.
    pub fn from_config(config: &SimConfig) -> Self {
        Self::new(
            config.max_lifetime(),
            config.running_time(),
            config.sample_reserve(),
        )
    }

    /// Account for one finished frame and return the resulting phase.
    ///
    /// The frame that crosses the running time is still sampled.
    pub fn record(&mut self, frame_duration: f64, render_duration: f64) -> Phase {
        if self.phase == Phase::Complete {
            return self.phase;
        }

        self.run_time += frame_duration;
        self.frames += 1;

        if self.run_time > self.warmup {
            self.samples.push(frame_duration, render_duration);
            self.phase = Phase::Sampling;
        }
        if self.run_time >= self.running_time {
            self.phase = Phase::Complete;
        }
        self.phase
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// Sum of all recorded frame durations
    pub fn run_time(&self) -> f64 {
        self.run_time
    }

    /// Frames recorded, warm-up included
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn samples(&self) -> &FrameSamples {
        &self.samples
    }

    pub fn stats(&self) -> FrameStats {
        FrameStats::compute(&self.samples)
    }
}
