//! Gumbel (type I extreme value, right-skewed) distribution

use crate::registry::DistributionSpec;
use clt_core::{ContinuousDistribution, Error, Result};
use rand::RngCore;
use rand_distr::Distribution;
use statrs::consts::EULER_MASCHERONI;
use std::f64::consts::PI;

/// Gumbel distribution with location μ and scale β
///
/// With `z = (x − μ)/β`: PDF `exp(−(z + e^{−z}))/β`, CDF `exp(−e^{−z})`.
#[derive(Debug, Clone, Copy)]
pub struct Gumbel {
    location: f64,
    scale: f64,
    sampler: rand_distr::Gumbel<f64>,
}

impl Gumbel {
    /// Create a Gumbel distribution
    ///
    /// # Errors
    /// `InvalidParameter` if `location` is not finite or `scale` is not a
    /// finite positive number.
    pub fn new(location: f64, scale: f64) -> Result<Self> {
        if !location.is_finite() {
            return Err(Error::non_finite("Gumbel location"));
        }
        crate::check_scale("Gumbel scale", scale)?;

        let sampler = rand_distr::Gumbel::new(location, scale).map_err(|e| {
            Error::Computation(format!("Failed to create Gumbel sampler: {}", e))
        })?;

        Ok(Self {
            location,
            scale,
            sampler,
        })
    }

    pub fn location(&self) -> f64 {
        self.location
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn spec(&self) -> DistributionSpec {
        DistributionSpec::Gumbel {
            location: self.location,
            scale: self.scale,
        }
    }

    fn standardize(&self, x: f64) -> f64 {
        (x - self.location) / self.scale
    }
}

impl ContinuousDistribution for Gumbel {
    fn name(&self) -> &str {
        "Gumbel"
    }

    fn mean(&self) -> f64 {
        self.location + self.scale * EULER_MASCHERONI
    }

    fn variance(&self) -> f64 {
        PI * PI * self.scale * self.scale / 6.0
    }

    fn pdf(&self, x: f64) -> f64 {
        let z = self.standardize(x);
        (-(z + (-z).exp())).exp() / self.scale
    }

    fn cdf(&self, x: f64) -> f64 {
        (-(-self.standardize(x)).exp()).exp()
    }

    fn quantile(&self, p: f64) -> Result<f64> {
        crate::check_open_probability(p)?;
        Ok(self.location - self.scale * (-p.ln()).ln())
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
        let g = Gumbel::new(0.0, 1.0).unwrap();
        assert_relative_eq!(g.mean(), 0.5772156649, epsilon = 1e-9);
        assert_relative_eq!(g.variance(), PI * PI / 6.0, epsilon = 1e-12);

        let shifted = Gumbel::new(2.0, 3.0).unwrap();
        assert_relative_eq!(shifted.mean(), 2.0 + 3.0 * EULER_MASCHERONI, epsilon = 1e-12);
        assert_relative_eq!(shifted.variance(), 9.0 * PI * PI / 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_density_and_cdf() {
        let g = Gumbel::new(0.0, 1.0).unwrap();
        // Mode at the location with density 1/(e·β)
        assert_relative_eq!(g.pdf(0.0), (-1.0f64).exp(), epsilon = 1e-12);
        assert_relative_eq!(g.cdf(0.0), (-1.0f64).exp(), epsilon = 1e-12);
        assert!(g.pdf(0.0) > g.pdf(1.0));
        assert!(g.pdf(0.0) > g.pdf(-1.0));
    }

    #[test]
    fn test_quantile_inverts_cdf() {
        let g = Gumbel::new(1.0, 2.0).unwrap();
        for &p in &[0.001, 0.1, 0.5, 0.9, 0.999] {
            let x = g.quantile(p).unwrap();
            assert_relative_eq!(g.cdf(x), p, epsilon = 1e-10);
        }
        assert!(g.quantile(0.0).is_err());
        assert!(g.quantile(1.0).is_err());
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(Gumbel::new(0.0, 0.0).is_err());
        assert!(Gumbel::new(f64::NAN, 1.0).is_err());
    }

    #[test]
    fn test_sample_mean() {
        let g = Gumbel::new(0.0, 1.0).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let draws = g.sample(50_000, &mut rng);
        let mean = draws.iter().sum::<f64>() / draws.len() as f64;
        assert!((mean - g.mean()).abs() < 0.03, "mean={mean}");
    }
}
