//! Critical values and standard error models

use crate::types::ConfidenceLevel;
use clt_core::{Error, Result};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal, StudentsT};

/// How the standard error of each sample mean is obtained
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StandardErrorModel {
    /// `σ/√n` with the known population σ and a z critical value
    #[default]
    KnownSigma,
    /// `s/√n` with the sample's unbiased std and a t critical value on
    /// `n − 1` degrees of freedom
    EstimatedSigma,
}

impl StandardErrorModel {
    /// Smallest sample size the model can build an interval from
    pub fn min_sample_size(&self) -> usize {
        match self {
            Self::KnownSigma => 1,
            Self::EstimatedSigma => 2,
        }
    }

    /// Critical value for a two-sided interval at `level` with samples of
    /// `sample_size` observations
    pub fn critical_value(&self, level: ConfidenceLevel, sample_size: usize) -> Result<f64> {
        match self {
            Self::KnownSigma => z_critical(level),
            Self::EstimatedSigma => {
                if sample_size < 2 {
                    return Err(Error::DegenerateStatistic {
                        expected: 2,
                        actual: sample_size,
                    });
                }
                t_critical(level, (sample_size - 1) as f64)
            }
        }
    }
}

/// Two-tailed standard normal critical value, `Φ⁻¹(1 − α/2)`
pub fn z_critical(level: ConfidenceLevel) -> Result<f64> {
    let normal = Normal::new(0.0, 1.0).map_err(|e| {
        Error::Computation(format!("Failed to create normal distribution: {}", e))
    })?;
    finite_critical(normal.inverse_cdf(1.0 - level.tail_probability()), level)
}

/// Two-tailed Student-t critical value with `df` degrees of freedom
pub fn t_critical(level: ConfidenceLevel, df: f64) -> Result<f64> {
    if !(df > 0.0) {
        return Err(Error::InvalidParameter(format!(
            "Degrees of freedom must be positive, got {df}"
        )));
    }
    let t_dist = StudentsT::new(0.0, 1.0, df).map_err(|e| {
        Error::Computation(format!("Failed to create t-distribution: {}", e))
    })?;
    finite_critical(t_dist.inverse_cdf(1.0 - level.tail_probability()), level)
}

/// Levels within rounding of 1 put the upper quantile at 1.0, where the
/// critical value is infinite
fn finite_critical(value: f64, level: ConfidenceLevel) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidParameter(format!(
            "Confidence level {} is too close to 1: critical value is {value}",
            level.value()
        )))
    }
}
