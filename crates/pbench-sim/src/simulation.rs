//! Per-frame simulation driver

use crate::particle::{Particle, ParticlePool};
use crate::rand::BenchRng;
use crate::wind::WindField;
use pbench_core::{Result, SimConfig};

/// What happened during one [`Simulation::advance`] call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// Particles appended this frame
    pub spawned: usize,
    /// Slots skipped if the pool was compacted this frame
    pub compacted: Option<usize>,
}

/// Owns every piece of mutable simulation state for one benchmark run.
///
/// Time never comes from a clock in here: each frame's elapsed seconds are
/// passed to [`Simulation::advance`], so runs can be replayed with synthetic
/// frame durations.
pub struct Simulation {
    config: SimConfig,
    pool: ParticlePool,
    wind: WindField,
    rng: BenchRng,
    /// Time accumulated towards the next spawn burst; remainders carry over
    spawn_timer: f64,
    /// Time since the last compaction
    compaction_timer: f64,
    frames: u64,
}

impl Simulation {
    /// Validate `config` and allocate the pool.
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;
        let pool = ParticlePool::new(config.capacity);
        let rng = BenchRng::new(config.seed);
        Ok(Self {
            config,
            pool,
            wind: WindField::new(),
            rng,
            spawn_timer: 0.0,
            compaction_timer: 0.0,
            frames: 0,
        })
    }

    /// Run one frame of simulation after `dt` seconds of wall time.
    ///
    /// Order matters: collisions run last so they see this frame's
    /// integrated positions and the particles spawned this frame.
    pub fn advance(&mut self, dt: f64) -> Result<StepOutcome> {
        let mut outcome = StepOutcome::default();
        self.spawn_timer += dt;
        self.compaction_timer += dt;

        self.pool.step(dt, self.wind.velocity(), &self.config);
        self.wind.drift(dt, &mut self.rng, &self.config);

        if self.spawn_timer >= self.config.spawn_interval {
            let count = self.config.particles_per_spawn();
            self.pool.spawn(count, &mut self.rng, &self.config)?;
            outcome.spawned = count;
            self.spawn_timer -= self.config.spawn_interval;
        }

        if self.compaction_timer >= self.config.max_lifetime() {
            outcome.compacted = Some(self.pool.compact());
            self.compaction_timer = 0.0;
        }

        self.pool.resolve_collisions(&self.config);
        self.frames += 1;
        Ok(outcome)
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    pub fn wind(&self) -> &WindField {
        &self.wind
    }

    /// Live particles, in slot order
    pub fn live_particles(&self) -> impl Iterator<Item = &Particle> {
        self.pool.live()
    }

    /// Frames advanced so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn spawn_timer(&self) -> f64 {
        self.spawn_timer
    }

    pub fn compaction_timer(&self) -> f64 {
        self.compaction_timer
    }
}
