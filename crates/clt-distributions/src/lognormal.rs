//! Log-normal distribution

use crate::registry::DistributionSpec;
use clt_core::{ContinuousDistribution, Error, Result};
use rand::RngCore;
use rand_distr::Distribution;
use statrs::distribution::{Continuous, ContinuousCDF};

/// Log-normal distribution: `exp(X)` with `X ~ N(mu, sigma²)`
///
/// `mu` is the log of the median, so `LogNormal::new(0.0, 0.5)` has median 1
/// (scipy's `lognorm(s=0.5, scale=1)`). Density and CDF come from `statrs`;
/// the quantile maps the standard normal quantile through `exp`.
#[derive(Debug, Clone, Copy)]
pub struct LogNormal {
    mu: f64,
    sigma: f64,
    density: statrs::distribution::LogNormal,
    standard: statrs::distribution::Normal,
    sampler: rand_distr::LogNormal<f64>,
}

impl LogNormal {
    /// Create a log-normal distribution with log-mean `mu` and log-std `sigma`
    ///
    /// # Errors
    /// `InvalidParameter` if `mu` is not finite or `sigma` is not a finite
    /// positive number.
    pub fn new(mu: f64, sigma: f64) -> Result<Self> {
        if !mu.is_finite() {
            return Err(Error::non_finite("LogNormal mu"));
        }
        crate::check_scale("LogNormal sigma", sigma)?;

        let density = statrs::distribution::LogNormal::new(mu, sigma).map_err(|e| {
            Error::Computation(format!("Failed to create log-normal distribution: {}", e))
        })?;
        let sampler = rand_distr::LogNormal::new(mu, sigma).map_err(|e| {
            Error::Computation(format!("Failed to create log-normal sampler: {}", e))
        })?;

        Ok(Self {
            mu,
            sigma,
            density,
            standard: crate::standard_normal()?,
            sampler,
        })
    }

    /// Build from scipy-style shape `s` and `scale` (the median)
    pub fn from_shape_scale(shape: f64, scale: f64) -> Result<Self> {
        crate::check_scale("LogNormal scale", scale)?;
        Self::new(scale.ln(), shape)
    }

    pub fn mu(&self) -> f64 {
        self.mu
    }

    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    pub fn median(&self) -> f64 {
        self.mu.exp()
    }

    pub fn spec(&self) -> DistributionSpec {
        DistributionSpec::LogNormal {
            mu: self.mu,
            sigma: self.sigma,
        }
    }
}

impl ContinuousDistribution for LogNormal {
    fn name(&self) -> &str {
        "LogNormal"
    }

    fn mean(&self) -> f64 {
        (self.mu + self.sigma * self.sigma / 2.0).exp()
    }

    fn variance(&self) -> f64 {
        let s2 = self.sigma * self.sigma;
        (s2.exp() - 1.0) * (2.0 * self.mu + s2).exp()
    }

    fn pdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        self.density.pdf(x)
    }

    fn cdf(&self, x: f64) -> f64 {
        if x <= 0.0 {
            return 0.0;
        }
        self.density.cdf(x)
    }

    fn quantile(&self, p: f64) -> Result<f64> {
        crate::check_open_probability(p)?;
        Ok((self.mu + self.sigma * self.standard.inverse_cdf(p)).exp())
    }

    fn draw(&self, rng: &mut dyn RngCore) -> f64 {
        self.sampler.sample(rng)
    }
}
