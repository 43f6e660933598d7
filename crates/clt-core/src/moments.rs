//! Descriptive moments of a sample
//!
//! Every function fails explicitly instead of returning NaN: the mean needs
//! at least one observation, the unbiased variance at least two.

use crate::{Error, Result};

/// Arithmetic mean
pub fn mean(sample: &[f64]) -> Result<f64> {
    if sample.is_empty() {
        return Err(Error::DegenerateStatistic {
            expected: 1,
            actual: 0,
        });
    }
    Ok(sample.iter().sum::<f64>() / sample.len() as f64)
}

fn sum_of_squares(sample: &[f64], mean: f64) -> f64 {
    sample.iter().map(|&x| (x - mean).powi(2)).sum()
}

/// Unbiased sample variance (denominator `n - 1`)
pub fn sample_variance(sample: &[f64]) -> Result<f64> {
    if sample.len() < 2 {
        return Err(Error::DegenerateStatistic {
            expected: 2,
            actual: sample.len(),
        });
    }
    let mean = mean(sample)?;
    Ok(sum_of_squares(sample, mean) / (sample.len() - 1) as f64)
}

/// Population variance (denominator `n`)
pub fn population_variance(sample: &[f64]) -> Result<f64> {
    let mean = mean(sample)?;
    Ok(sum_of_squares(sample, mean) / sample.len() as f64)
}

/// Unbiased sample standard deviation
pub fn sample_std_dev(sample: &[f64]) -> Result<f64> {
    sample_variance(sample).map(f64::sqrt)
}

/// Population standard deviation
pub fn population_std_dev(sample: &[f64]) -> Result<f64> {
    population_variance(sample).map(f64::sqrt)
}
