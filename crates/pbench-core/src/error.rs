//! Error types for the particle benchmark

use thiserror::Error;

/// The main error type for benchmark operations
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Particle pool exhausted: {requested} more particles requested, capacity is {capacity}")]
    PoolExhausted { requested: usize, capacity: usize },

    #[error("Run profile error: {0}")]
    ProfileError(String),

    #[error("Frame graph error: {0}")]
    GraphError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),
}

/// Result type alias for benchmark operations
pub type Result<T> = std::result::Result<T, BenchError>;

impl From<toml::de::Error> for BenchError {
    fn from(err: toml::de::Error) -> Self {
        BenchError::TomlParseError(err.to_string())
    }
}
