//! Randomly drifting wind vector

use crate::rand::BenchRng;
use pbench_core::{Axis, SimConfig, Vec3};

/// Three independently random-walked wind components
#[derive(Debug, Clone, Default)]
pub struct WindField {
    velocity: Vec3,
}

impl WindField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    /// Random-walk each component by a step in `[-1, 1) * dt`, then flip and
    /// halve any component whose magnitude exceeds `max_wind`.
    pub fn drift(&mut self, dt: f64, rng: &mut BenchRng, config: &SimConfig) {
        let resolution = config.wind_change as f64 / 2.0;
        for axis in Axis::ALL {
            let step = rng.below(config.wind_change) as f64 / resolution - 1.0;
            let c = &mut self.velocity[axis];
            *c += step * dt;
            if c.abs() > config.max_wind {
                *c *= -0.5;
            }
        }
    }
}
