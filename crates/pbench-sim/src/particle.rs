//! Particle records and the append-only particle pool
//!
//! The pool never moves or reuses a slot. Particles are appended at
//! `live_count` and marked dead in place when their lifetime runs out.
//! `min_live` is a low-water mark below which every slot is known to be dead,
//! so the per-frame scans only cover the live window `[min_live, live_count)`.

use crate::rand::BenchRng;
use pbench_core::{Axis, BenchError, Result, SimConfig, Vec3};

/// CPU-side particle state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    pub radius: f64,
    /// Remaining lifetime in seconds
    pub life: f64,
    pub alive: bool,
}

impl Particle {
    pub const fn dead() -> Self {
        Self {
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            radius: 0.0,
            life: 0.0,
            alive: false,
        }
    }

    /// Draw a new live particle around the spawn origin.
    ///
    /// The draw order (x, z, vx, vy, vz, radius, life) is part of the
    /// benchmark's reproducibility contract.
    pub fn spawn(rng: &mut BenchRng, config: &SimConfig) -> Self {
        let half_range = config.start_range as f64 / 2.0;
        let origin = config.spawn_origin;

        let x = origin.x + rng.below(config.start_range) as f64 - half_range;
        let z = origin.z + rng.below(config.start_range) as f64 - half_range;
        let vx = rng.below(config.max_init_vel) as f64;
        let vy = rng.below(config.max_init_vel) as f64;
        let vz = rng.below(config.max_init_vel) as f64;
        let radius = rng.below(config.max_scale * 100) as f64 / 200.0;
        let life = rng.below(config.max_life_ms) as f64 / 1000.0;

        Self {
            position: Vec3::new(x, origin.y, z),
            velocity: Vec3::new(vx, vy, vz),
            radius,
            life,
            alive: true,
        }
    }
}

/// Fixed-capacity pool with a lazily compacted live window
pub struct ParticlePool {
    particles: Vec<Particle>,
    min_live: usize,
    live_count: usize,
}

impl ParticlePool {
    /// Allocate every slot up front; the pool never grows.
    pub fn new(capacity: usize) -> Self {
        Self {
            particles: vec![Particle::dead(); capacity],
            min_live: 0,
            live_count: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.particles.len()
    }

    /// Lowest index that may still hold a live particle
    pub fn min_live(&self) -> usize {
        self.min_live
    }

    /// Next free append slot (total particles ever spawned)
    pub fn live_count(&self) -> usize {
        self.live_count
    }

    pub fn get(&self, index: usize) -> Option<&Particle> {
        self.particles[..self.live_count].get(index)
    }

    /// Slots that may hold live particles
    pub fn live_window(&self) -> &[Particle] {
        &self.particles[self.min_live..self.live_count]
    }

    pub fn live_window_mut(&mut self) -> &mut [Particle] {
        &mut self.particles[self.min_live..self.live_count]
    }

    /// Iterate the particles that are currently alive
    pub fn live(&self) -> impl Iterator<Item = &Particle> {
        self.live_window().iter().filter(|p| p.alive)
    }

    /// Number of live particles (scans the live window)
    pub fn alive_count(&self) -> usize {
        self.live().count()
    }

    /// Append one particle record, returning its slot index.
    pub fn insert(&mut self, particle: Particle) -> Result<usize> {
        if self.live_count >= self.particles.len() {
            return Err(BenchError::PoolExhausted {
                requested: 1,
                capacity: self.particles.len(),
            });
        }
        let idx = self.live_count;
        self.particles[idx] = particle;
        self.live_count += 1;
        Ok(idx)
    }

    /// Spawn `count` particles with randomized attributes.
    ///
    /// Fails without touching the pool when the burst does not fit.
    pub fn spawn(&mut self, count: usize, rng: &mut BenchRng, config: &SimConfig) -> Result<()> {
        if self.live_count + count > self.particles.len() {
            return Err(BenchError::PoolExhausted {
                requested: count,
                capacity: self.particles.len(),
            });
        }
        for slot in &mut self.particles[self.live_count..self.live_count + count] {
            *slot = Particle::spawn(rng, config);
        }
        self.live_count += count;
        Ok(())
    }

    /// Integrate every live particle by `dt` seconds under `wind`.
    ///
    /// Wind pushes the horizontal and depth velocity inversely to radius;
    /// gravity decelerates the vertical velocity.
    pub fn step(&mut self, dt: f64, wind: Vec3, config: &SimConfig) {
        for p in self.live_window_mut().iter_mut().filter(|p| p.alive) {
            p.position += p.velocity * dt;

            let r = p.radius.max(config.min_wind_radius);
            p.velocity.x += wind.x / r;
            p.velocity.z += wind.z / r;
            p.velocity.y -= config.gravity * dt;

            p.life -= dt;
            if p.life <= 0.0 {
                p.alive = false;
            }
        }
    }

    /// Clamp live particles into the bounding box.
    ///
    /// A particle past a wall is placed one radius inside it and its velocity
    /// along that axis is reversed and amplified by the bounce coefficient.
    pub fn resolve_collisions(&mut self, config: &SimConfig) {
        let bounds = config.bounds;
        let bounce = config.bounce;
        for p in self.live_window_mut().iter_mut().filter(|p| p.alive) {
            for axis in Axis::ALL {
                if p.position[axis] < bounds.min[axis] {
                    p.position[axis] = bounds.min[axis] + p.radius;
                    p.velocity[axis] *= -bounce;
                }
                if p.position[axis] > bounds.max[axis] {
                    p.position[axis] = bounds.max[axis] - p.radius;
                    p.velocity[axis] *= -bounce;
                }
            }
        }
    }

    /// Advance `min_live` to the first live slot. Leaves it unchanged when the
    /// window holds no live particle. Returns how many slots were skipped.
    pub fn compact(&mut self) -> usize {
        match self.live_window().iter().position(|p| p.alive) {
            Some(offset) => {
                self.min_live += offset;
                offset
            }
            None => 0,
        }
    }
}
