//! Build-time simulation constants
//!
//! The benchmark is not configurable at runtime: every value here is fixed when
//! the binary is built. `SimConfig` gathers them so the simulation can be
//! instantiated independently (and with variations) in tests.

use crate::error::{BenchError, Result};
use crate::types::{Aabb, Vec3};
use serde::Serialize;

/// Particles spawned per simulated second
pub const SPAWN_RATE: u32 = 2000;
/// Exclusive upper bound of each initial velocity component
pub const MAX_INIT_VEL: u32 = 7;
/// Exclusive upper bound of particle lifetime, in milliseconds
pub const MAX_LIFE_MS: u32 = 5000;
/// Radius scale; radii are drawn from `[0, MAX_SCALE / 2)`
pub const MAX_SCALE: u32 = 4;
/// Seconds between spawn bursts
pub const SPAWN_INTERVAL: f64 = 0.01;
/// Side of the square spawn footprint, in whole units
pub const START_RANGE: u32 = 15;
/// Resolution of the wind random walk
pub const WIND_CHANGE: u32 = 2000;
/// Wind components beyond this magnitude are flipped and halved
pub const MAX_WIND: f64 = 3.0;
/// Downward deceleration applied to vertical velocity, per second
pub const GRAVITY: f64 = 0.5;
/// Velocity gain on every wall bounce
pub const BOUNCE: f64 = 1.1;
/// Smallest radius used as a wind divisor
pub const MIN_WIND_RADIUS: f64 = 0.005;
/// Total benchmark length in seconds
pub const RUNNING_TIME_SECS: u32 = (MAX_LIFE_MS / 1000) * 5;
/// Pool capacity: one slot for every particle the run can spawn
pub const MAX_PARTICLES: usize = RUNNING_TIME_SECS as usize * SPAWN_RATE as usize;
/// Frame samples reserved per second of running time
pub const SAMPLES_PER_SECOND: usize = 1000;
/// PRNG seed
pub const SEED: u32 = 1234569;

pub const MIN_X: f64 = -80.0;
pub const MAX_X: f64 = 80.0;
pub const MIN_Y: f64 = -90.0;
pub const MAX_Y: f64 = 50.0;
pub const MIN_DEPTH: f64 = 50.0;
pub const MAX_DEPTH: f64 = 250.0;

const _: () = assert!(MAX_PARTICLES >= RUNNING_TIME_SECS as usize * SPAWN_RATE as usize);

/// The full set of simulation constants
#[derive(Debug, Clone, Serialize)]
pub struct SimConfig {
    pub spawn_rate: u32,
    pub max_init_vel: u32,
    pub max_life_ms: u32,
    pub max_scale: u32,
    pub spawn_interval: f64,
    pub start_range: u32,
    /// Particles appear around this point; y is the spawn height
    pub spawn_origin: Vec3,
    pub wind_change: u32,
    pub max_wind: f64,
    pub gravity: f64,
    pub bounce: f64,
    pub min_wind_radius: f64,
    pub bounds: Aabb,
    pub running_time_secs: u32,
    pub capacity: usize,
    pub seed: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            spawn_rate: SPAWN_RATE,
            max_init_vel: MAX_INIT_VEL,
            max_life_ms: MAX_LIFE_MS,
            max_scale: MAX_SCALE,
            spawn_interval: SPAWN_INTERVAL,
            start_range: START_RANGE,
            spawn_origin: Vec3::new(0.0, MAX_Y, MIN_DEPTH + (MIN_DEPTH + MAX_DEPTH) / 2.0),
            wind_change: WIND_CHANGE,
            max_wind: MAX_WIND,
            gravity: GRAVITY,
            bounce: BOUNCE,
            min_wind_radius: MIN_WIND_RADIUS,
            bounds: Aabb::new(
                Vec3::new(MIN_X, MIN_Y, MIN_DEPTH),
                Vec3::new(MAX_X, MAX_Y, MAX_DEPTH),
            ),
            running_time_secs: RUNNING_TIME_SECS,
            capacity: MAX_PARTICLES,
            seed: SEED,
        }
    }
}

impl SimConfig {
    /// Longest possible particle lifetime in seconds. Doubles as the warm-up
    /// window and the compaction cadence.
    pub fn max_lifetime(&self) -> f64 {
        self.max_life_ms as f64 / 1000.0
    }

    /// Total benchmark length in seconds
    pub fn running_time(&self) -> f64 {
        self.running_time_secs as f64
    }

    /// Particles appended by one spawn burst
    pub fn particles_per_spawn(&self) -> usize {
        (self.spawn_interval * self.spawn_rate as f64) as usize
    }

    /// Slots needed to hold every particle the run can spawn
    pub fn required_capacity(&self) -> usize {
        self.running_time_secs as usize * self.spawn_rate as usize
    }

    /// Frame samples to preallocate for the run
    pub fn sample_reserve(&self) -> usize {
        self.running_time_secs as usize * SAMPLES_PER_SECOND
    }

    /// Check the constants for consistency. A failure here is fatal: the
    /// benchmark must not start with a pool that could overflow.
    pub fn validate(&self) -> Result<()> {
        if self.capacity < self.required_capacity() {
            return Err(BenchError::InvalidConfig(format!(
                "pool capacity {} is below spawn rate x running time ({})",
                self.capacity,
                self.required_capacity()
            )));
        }
        if !(self.spawn_interval > 0.0) {
            return Err(BenchError::InvalidConfig(
                "spawn interval must be positive".into(),
            ));
        }
        if self.particles_per_spawn() == 0 {
            return Err(BenchError::InvalidConfig(
                "spawn interval x spawn rate must yield at least one particle".into(),
            ));
        }
        for (name, value) in [
            ("max_init_vel", self.max_init_vel),
            ("max_life_ms", self.max_life_ms),
            ("max_scale", self.max_scale),
            ("start_range", self.start_range),
            ("wind_change", self.wind_change),
        ] {
            if value == 0 {
                return Err(BenchError::InvalidConfig(format!("{name} must be non-zero")));
            }
        }
        if !self.bounds.is_ordered() {
            return Err(BenchError::InvalidConfig(
                "bounding box min exceeds max".into(),
            ));
        }
        if !(self.bounce > 1.0) {
            return Err(BenchError::InvalidConfig(format!(
                "bounce coefficient must exceed 1, got {}",
                self.bounce
            )));
        }
        if !(self.min_wind_radius > 0.0) {
            return Err(BenchError::InvalidConfig(
                "minimum wind radius must be positive".into(),
            ));
        }
        if self.running_time() <= self.max_lifetime() {
            return Err(BenchError::InvalidConfig(format!(
                "running time {}s leaves no sampling window after {}s warm-up",
                self.running_time(),
                self.max_lifetime()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SimConfig::default();
        config.validate().unwrap();
        assert_eq!(config.running_time_secs, 25);
        assert_eq!(config.capacity, 50_000);
        assert_eq!(config.particles_per_spawn(), 20);
        assert!((config.max_lifetime() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn spawn_origin_matches_box() {
        let config = SimConfig::default();
        assert_eq!(config.spawn_origin, Vec3::new(0.0, 50.0, 200.0));
        assert!(config.bounds.contains(config.spawn_origin));
    }

    #[test]
    fn undersized_pool_rejected() {
        let config = SimConfig {
            capacity: MAX_PARTICLES - 1,
            ..SimConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(BenchError::InvalidConfig(_))
        ));
    }

    #[test]
    fn damping_bounce_rejected() {
        let config = SimConfig {
            bounce: 0.9,
            ..SimConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_modulus_rejected() {
        let config = SimConfig {
            wind_change: 0,
            ..SimConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("wind_change"));
    }
}
