//! Continuous uniform distribution on `[min, max]`

use crate::registry::DistributionSpec;
use clt_core::{ContinuousDistribution, Error, Result};
use rand::RngCore;
use rand_distr::Distribution;
use statrs::distribution::{Continuous, ContinuousCDF};

/// Continuous uniform distribution on `[min, max]`
///
/// - PDF: 1/(max−min) inside the support, 0 outside
/// - Mean: (min+max)/2
/// - Variance: (max−min)²/12
///
/// Density and CDF come from `statrs`; draws from `rand_distr`.
#[derive(Debug, Clone, Copy)]
pub struct Uniform {
    min: f64,
    max: f64,
    density: statrs::distribution::Uniform,
    sampler: rand_distr::Uniform<f64>,
}

impl Uniform {
    /// Create a uniform distribution on `[min, max]`
    ///
    /// # Errors
    /// `InvalidParameter` if either bound is not finite or `min >= max`.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(Error::non_finite("Uniform bounds"));
        }
        if min >= max {
            return Err(Error::InvalidParameter(format!(
                "Uniform requires min < max, got min={min}, max={max}"
            )));
        }
        let density = statrs::distribution::Uniform::new(min, max).map_err(|e| {
            Error::Computation(format!("Failed to create uniform distribution: {}", e))
        })?;
        Ok(Self {
            min,
            max,
            density,
            sampler: rand_distr::Uniform::new(min, max),
        })
    }

    /// Build from a `loc`/`scale` pair, i.e. the support `[loc, loc + scale]`
    pub fn from_loc_scale(loc: f64, scale: f64) -> Result<Self> {
        crate::check_scale("Uniform scale", scale)?;
        Self::new(loc, loc + scale)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn spec(&self) -> DistributionSpec {
        DistributionSpec::Uniform {
            min: self.min,
            max: self.max,
        }
    }

    fn width(&self) -> f64 {
        self.max - self.min
    }
}

impl ContinuousDistribution for Uniform {
    fn name(&self) -> &str {
        "Uniform"
    }

    fn mean(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    fn variance(&self) -> f64 {
        self.width().powi(2) / 12.0
    }

    fn pdf(&self, x: f64) -> f64 {
        self.density.pdf(x)
    }

    fn cdf(&self, x: f64) -> f64 {
        self.density.cdf(x)
    }

    /// The support is bounded, so `p = 0` and `p = 1` map to the endpoints.
    fn quantile(&self, p: f64) -> Result<f64> {
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::InvalidParameter(format!(
                "Probability {p} must be in [0, 1]"
            )));
        }
        Ok(self.min + p * self.width())
    }

    fn draw(&self, rng: &mut dyn RngCore) -> f64 {
        self.sampler.sample(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_moments() {
        let u = Uniform::new(-2.0, 2.0).unwrap();
        assert_relative_eq!(u.mean(), 0.0);
        assert_relative_eq!(u.variance(), 16.0 / 12.0);
        assert_relative_eq!(u.std_dev(), (4.0f64 / 3.0).sqrt());
    }

    #[test]
    fn test_loc_scale_matches_bounds() {
        let u = Uniform::from_loc_scale(-2.0, 4.0).unwrap();
        assert_eq!(u.min(), -2.0);
        assert_eq!(u.max(), 2.0);
        assert!(Uniform::from_loc_scale(0.0, 0.0).is_err());
    }

    #[test]
    fn test_density_and_cdf() {
        let u = Uniform::new(0.0, 4.0).unwrap();
        assert_relative_eq!(u.pdf(1.0), 0.25);
        assert_eq!(u.pdf(-0.1), 0.0);
        assert_eq!(u.pdf(4.1), 0.0);
        assert_relative_eq!(u.pdf(0.0), 0.25);
        assert_relative_eq!(u.pdf(4.0), 0.25);
        assert_relative_eq!(u.cdf(3.0), 0.75);
        assert_eq!(u.cdf(-1.0), 0.0);
        assert_relative_eq!(u.cdf(1.0), 0.25);
        assert_eq!(u.cdf(5.0), 1.0);
    }

    #[test]
    fn test_quantile() {
        let u = Uniform::new(-2.0, 2.0).unwrap();
        assert_relative_eq!(u.quantile(0.0).unwrap(), -2.0);
        assert_relative_eq!(u.quantile(0.5).unwrap(), 0.0);
        assert_relative_eq!(u.quantile(1.0).unwrap(), 2.0);
        assert!(u.quantile(-0.1).is_err());
        assert!(u.quantile(1.1).is_err());
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(Uniform::new(1.0, 1.0).is_err());
        assert!(Uniform::new(2.0, 1.0).is_err());
        assert!(Uniform::new(f64::NAN, 1.0).is_err());
        assert!(Uniform::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_draws_stay_in_support() {
        let u = Uniform::new(-2.0, 2.0).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let draws = u.sample(10_000, &mut rng);
        assert!(draws.iter().all(|&x| (-2.0..2.0).contains(&x)));
        let mean = draws.iter().sum::<f64>() / draws.len() as f64;
        assert!(mean.abs() < 0.05, "mean={mean}");
    }
}
