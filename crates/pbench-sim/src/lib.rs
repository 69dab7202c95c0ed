//! ParticleBench Sim - CPU particle simulation under continuous churn
//!
//! Provides the simulated workload of the benchmark:
//! - Deterministic xorshift PRNG shared by spawning and wind
//! - Append-only particle pool with a lazily compacted live window
//! - Random-walk wind field
//! - `Simulation` context that advances everything one frame at a time

pub mod particle;
pub mod rand;
pub mod simulation;
pub mod wind;

pub use particle::{Particle, ParticlePool};
pub use rand::BenchRng;
pub use simulation::{Simulation, StepOutcome};
pub use wind::WindField;
