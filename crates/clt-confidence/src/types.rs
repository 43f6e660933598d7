//! Common types for confidence interval experiments

use crate::critical::StandardErrorModel;
use clt_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Confidence level in the open interval (0, 1)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    /// Create a new confidence level
    ///
    /// # Errors
    /// `InvalidParameter` unless `0 < level < 1`; the critical value is
    /// undefined at the boundaries.
    pub fn new(level: f64) -> Result<Self> {
        if level > 0.0 && level < 1.0 {
            Ok(Self(level))
        } else {
            Err(Error::invalid_confidence(level))
        }
    }

    /// Get the confidence level value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Get the alpha level (1 - confidence level)
    pub fn alpha(&self) -> f64 {
        1.0 - self.0
    }

    /// Get the tail probability (alpha/2 for two-tailed)
    pub fn tail_probability(&self) -> f64 {
        self.alpha() / 2.0
    }

    /// Common confidence levels
    pub const NINETY: Self = Self(0.90);
    pub const NINETY_FIVE: Self = Self(0.95);
    pub const NINETY_NINE: Self = Self(0.99);
}

impl Default for ConfidenceLevel {
    fn default() -> Self {
        Self::NINETY_FIVE
    }
}

impl TryFrom<f64> for ConfidenceLevel {
    type Error = Error;

    fn try_from(level: f64) -> Result<Self> {
        Self::new(level)
    }
}

impl From<ConfidenceLevel> for f64 {
    fn from(level: ConfidenceLevel) -> f64 {
        level.0
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

/// One interval built around one sample mean
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceInterval {
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
    /// The point estimate (the sample mean)
    pub estimate: f64,
    /// Whether `lower <= truth <= upper` for the parameter being estimated
    pub contains_truth: bool,
}

impl ConfidenceInterval {
    /// Build `estimate ± margin` and record whether it covers `truth`
    pub fn around(estimate: f64, margin: f64, truth: f64) -> Self {
        let lower = estimate - margin;
        let upper = estimate + margin;
        Self {
            lower,
            upper,
            estimate,
            contains_truth: lower <= truth && truth <= upper,
        }
    }

    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Margin of error (half-width)
    pub fn margin_of_error(&self) -> f64 {
        self.width() / 2.0
    }

    /// Midpoint of the bounds
    pub fn midpoint(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    /// Check if a value is contained in the interval (bounds inclusive)
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.4}, {:.4}], estimate: {:.4}{}",
            self.lower,
            self.upper,
            self.estimate,
            if self.contains_truth { "" } else { " (miss)" }
        )
    }
}

/// All intervals of one experiment plus the miss tally
///
/// `miss_count` is derived from the intervals at construction, so it always
/// equals the number of intervals that fail to cover the true mean.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperimentResult {
    intervals: Vec<ConfidenceInterval>,
    miss_count: usize,
    confidence: ConfidenceLevel,
    critical_value: f64,
    true_mean: f64,
    model: StandardErrorModel,
}

impl ExperimentResult {
    /// Collect intervals into a result
    ///
    /// # Errors
    /// `InvalidParameter` if `intervals` is empty, which would make the miss
    /// rate undefined.
    pub fn from_intervals(
        intervals: Vec<ConfidenceInterval>,
        confidence: ConfidenceLevel,
        critical_value: f64,
        true_mean: f64,
        model: StandardErrorModel,
    ) -> Result<Self> {
        if intervals.is_empty() {
            return Err(Error::too_small("number of intervals", 0, 1));
        }
        let miss_count = intervals.iter().filter(|ci| !ci.contains_truth).count();
        Ok(Self {
            intervals,
            miss_count,
            confidence,
            critical_value,
            true_mean,
            model,
        })
    }

    pub fn intervals(&self) -> &[ConfidenceInterval] {
        &self.intervals
    }

    pub fn miss_count(&self) -> usize {
        self.miss_count
    }

    pub fn total_count(&self) -> usize {
        self.intervals.len()
    }

    /// Fraction of intervals that missed the true mean
    pub fn miss_rate(&self) -> f64 {
        self.miss_count as f64 / self.total_count() as f64
    }

    /// The nominal miss rate, `1 − confidence`
    pub fn expected_miss_rate(&self) -> f64 {
        self.confidence.alpha()
    }

    pub fn confidence(&self) -> ConfidenceLevel {
        self.confidence
    }

    /// The z (or t) multiplier used for every interval
    pub fn critical_value(&self) -> f64 {
        self.critical_value
    }

    pub fn true_mean(&self) -> f64 {
        self.true_mean
    }

    pub fn model(&self) -> StandardErrorModel {
        self.model
    }
}

impl fmt::Display for ExperimentResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Out of {} intervals, {} did NOT contain the true mean.",
            self.total_count(),
            self.miss_count
        )?;
        write!(
            f,
            "This is roughly {:.1}%, close to the expected {:.0}% for a {:.0}% CI.",
            self.miss_rate() * 100.0,
            self.expected_miss_rate() * 100.0,
            self.confidence.value() * 100.0
        )
    }
}
