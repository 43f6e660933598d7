//! Parametric distributions for CLT simulations
//!
//! Each family is an immutable value object implementing
//! [`ContinuousDistribution`](clt_core::ContinuousDistribution) with
//! mean, variance, density, CDF and quantile function.
//!
//! | Family        | Parameters   | Mean            | Variance                  |
//! |---------------|--------------|-----------------|---------------------------|
//! | [`Uniform`]   | min, max     | (a+b)/2         | (b−a)²/12                 |
//! | [`Normal`]    | μ, σ         | μ               | σ²                        |
//! | [`LogNormal`] | μ, σ         | exp(μ+σ²/2)     | (exp(σ²)−1)·exp(2μ+σ²)    |
//! | [`Gumbel`]    | μ, β         | μ+βγ            | π²β²/6                    |
//!
//! Distributions are looked up by name through a [`DistributionRegistry`]
//! that is built once and passed around by reference.
//!
//! # Example
//!
//! ```rust
//! use clt_core::ContinuousDistribution;
//! use clt_distributions::DistributionRegistry;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let registry = DistributionRegistry::standard().unwrap();
//! let normal = registry.get("Normal").unwrap();
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let draws = normal.sample(10, &mut rng);
//! assert_eq!(draws.len(), 10);
//! assert_eq!(normal.variance(), 1.0);
//! ```

mod gumbel;
mod lognormal;
mod normal;
pub mod registry;
mod uniform;

pub use gumbel::Gumbel;
pub use lognormal::LogNormal;
pub use normal::Normal;
pub use registry::{DistributionRegistry, DistributionSpec};
pub use uniform::Uniform;

pub use clt_core::{ContinuousDistribution, Error, Result};

/// Reject probabilities outside the open interval (0, 1)
pub(crate) fn check_open_probability(p: f64) -> Result<()> {
    if p > 0.0 && p < 1.0 {
        Ok(())
    } else {
        Err(Error::invalid_probability(p))
    }
}

/// Reject non-finite or non-positive scale parameters
pub(crate) fn check_scale(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(Error::non_finite(name));
    }
    if value <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "{name} must be positive, got {value}"
        )));
    }
    Ok(())
}

/// Standard normal used for Φ and Φ⁻¹ by the log-normal family
pub(crate) fn standard_normal() -> Result<statrs::distribution::Normal> {
    statrs::distribution::Normal::new(0.0, 1.0).map_err(|e| {
        Error::Computation(format!("Failed to create normal distribution: {}", e))
    })
}
