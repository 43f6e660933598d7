//! The distribution abstraction shared by every experiment
//!
//! Experiments never care which family they draw from; they only need the
//! closed-form moments to compare against and a way to draw observations.
//! The random source is always passed in by the caller so that seeded runs
//! are reproducible.

use crate::Result;
use rand::RngCore;
use std::fmt;

/// A fixed-parameter continuous probability distribution
///
/// Implementations are immutable value objects: constructed once, validated
/// at construction, and then shared by reference across experiments.
pub trait ContinuousDistribution: fmt::Debug + Send + Sync {
    /// Display name of the family (e.g. "Normal")
    fn name(&self) -> &str;

    /// Theoretical mean
    fn mean(&self) -> f64;

    /// Theoretical variance
    fn variance(&self) -> f64;

    /// Theoretical standard deviation
    fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Probability density at `x`
    fn pdf(&self, x: f64) -> f64;

    /// Cumulative distribution at `x`
    fn cdf(&self, x: f64) -> f64;

    /// Inverse CDF at probability `p`
    ///
    /// Fails with `InvalidParameter` when `p` lies outside the range for
    /// which the quantile is finite.
    fn quantile(&self, p: f64) -> Result<f64>;

    /// Draw a single observation
    fn draw(&self, rng: &mut dyn RngCore) -> f64;

    /// Draw `n` i.i.d. observations
    fn sample(&self, n: usize, rng: &mut dyn RngCore) -> Vec<f64> {
        (0..n).map(|_| self.draw(rng)).collect()
    }
}
