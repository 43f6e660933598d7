//! Normal distribution

use crate::registry::DistributionSpec;
use clt_core::{ContinuousDistribution, Error, Result};
use rand::RngCore;
use rand_distr::Distribution;
use statrs::distribution::{Continuous, ContinuousCDF};

/// Normal distribution N(μ, σ²)
///
/// Density, CDF and quantile come from `statrs`; draws from `rand_distr`.
#[derive(Debug, Clone, Copy)]
pub struct Normal {
    mean: f64,
    std_dev: f64,
    density: statrs::distribution::Normal,
    sampler: rand_distr::Normal<f64>,
}

impl Normal {
    /// Create N(mean, std_dev²)
    ///
    /// # Errors
    /// `InvalidParameter` if `mean` is not finite or `std_dev` is not a
    /// finite positive number.
    pub fn new(mean: f64, std_dev: f64) -> Result<Self> {
        if !mean.is_finite() {
            return Err(Error::non_finite("Normal mean"));
        }
        crate::check_scale("Normal standard deviation", std_dev)?;

        let density = statrs::distribution::Normal::new(mean, std_dev).map_err(|e| {
            Error::Computation(format!("Failed to create normal distribution: {}", e))
        })?;
        let sampler = rand_distr::Normal::new(mean, std_dev).map_err(|e| {
            Error::Computation(format!("Failed to create normal sampler: {}", e))
        })?;

        Ok(Self {
            mean,
            std_dev,
            density,
            sampler,
        })
    }

    /// The standard normal N(0, 1)
    pub fn standard() -> Result<Self> {
        Self::new(0.0, 1.0)
    }

    /// Build from a mean and a variance rather than a standard deviation
    pub fn from_mean_variance(mean: f64, variance: f64) -> Result<Self> {
        crate::check_scale("Normal variance", variance)?;
        Self::new(mean, variance.sqrt())
    }

    pub fn spec(&self) -> DistributionSpec {
        DistributionSpec::Normal {
            mean: self.mean,
            std_dev: self.std_dev,
        }
    }
}

impl ContinuousDistribution for Normal {
    fn name(&self) -> &str {
        "Normal"
    }

    fn mean(&self) -> f64 {
        self.mean
    }

    fn variance(&self) -> f64 {
        self.std_dev * self.std_dev
    }

    fn std_dev(&self) -> f64 {
        self.std_dev
    }

    fn pdf(&self, x: f64) -> f64 {
        self.density.pdf(x)
    }

    fn cdf(&self, x: f64) -> f64 {
        self.density.cdf(x)
    }

    fn quantile(&self, p: f64) -> Result<f64> {
        crate::check_open_probability(p)?;
        Ok(self.density.inverse_cdf(p))
    }

    fn draw(&self, rng: &mut dyn RngCore) -> f64 {
        self.sampler.sample(rng)
    }
}
