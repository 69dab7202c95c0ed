//! ParticleBench Core - Foundational types for the particle benchmark
//!
//! This crate provides the types that all other pbench crates depend on:
//! - `SimConfig` - Build-time simulation constants and derived sizes
//! - `Vec3`, `Aabb` - Spatial types
//! - Error types and Result alias

pub mod config;
mod error;
mod types;

pub use config::SimConfig;
pub use error::{BenchError, Result};
pub use types::{Aabb, Axis, Vec3};
