//! Error types for CLT simulations
//!
//! Provides a unified error type for all clt-lab crates.

use thiserror::Error;

/// Core error type for simulation and verification operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// A statistic was requested from too few observations
    #[error("Degenerate statistic: expected at least {expected} observations, got {actual}")]
    DegenerateStatistic { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// IO error (for plot export)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error (for plot export)
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a size or count that must be at least `min`
    pub fn too_small(name: &str, value: usize, min: usize) -> Self {
        Self::InvalidParameter(format!("{name} must be at least {min}, got {value}"))
    }

    /// Create an error for a probability outside its allowed range
    pub fn invalid_probability(p: f64) -> Self {
        Self::InvalidParameter(format!("Probability {p} must be in (0, 1)"))
    }

    /// Create an error for a confidence level outside (0, 1)
    pub fn invalid_confidence(level: f64) -> Self {
        Self::InvalidParameter(format!("Confidence level {level} must be in (0, 1)"))
    }

    /// Create an error for a distribution name the registry does not know
    pub fn unknown_distribution(name: &str) -> Self {
        Self::InvalidParameter(format!("Unsupported distribution: {name}"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidParameter(format!("{context} must be finite"))
    }
}
