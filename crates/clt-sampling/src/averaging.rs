//! Averaging experiment: empirical moments of sample means vs the CLT

use crate::batch::SampleBatch;
use clt_core::{moments, ContinuousDistribution, Error, Result};
use rand::Rng;
use serde::Serialize;
use std::fmt;
use tracing::{debug, instrument};

/// Empirical vs theoretical moments of N sample means of size m
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MomentSummary {
    /// Observations averaged per sample mean
    pub m: usize,
    /// Number of sample means
    pub n: usize,
    /// Arithmetic mean of the sample means
    pub empirical_mean: f64,
    /// Unbiased variance (N − 1) of the sample means
    pub empirical_variance: f64,
    /// Mean of the underlying distribution
    pub theoretical_mean: f64,
    /// Variance of the underlying distribution divided by m
    pub theoretical_variance_of_mean: f64,
}

impl MomentSummary {
    /// Variance of a single observation, i.e. σ² before averaging
    pub fn raw_variance(&self) -> f64 {
        self.theoretical_variance_of_mean * self.m as f64
    }

    /// Standard deviation of the CLT Normal
    pub fn theoretical_std_of_mean(&self) -> f64 {
        self.theoretical_variance_of_mean.sqrt()
    }

    /// |empirical − theoretical| / theoretical for the variance of the mean
    pub fn variance_relative_error(&self) -> f64 {
        (self.empirical_variance - self.theoretical_variance_of_mean).abs()
            / self.theoretical_variance_of_mean
    }
}

/// Result of one averaging run
///
/// Besides the moment summary this carries the raw sample means so a
/// presentation layer can bin them and overlay the CLT Normal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AveragingOutcome {
    /// Name shown in reports; the family name unless relabelled
    pub distribution: String,
    pub summary: MomentSummary,
    /// The N sample means, in draw order
    pub sample_means: Vec<f64>,
}

impl AveragingOutcome {
    /// Report under `label` (e.g. a registry key) instead of the family name
    pub fn labelled(mut self, label: impl Into<String>) -> Self {
        self.distribution = label.into();
        self
    }

    /// The one-line averaging summary, naming the distribution `label`
    pub fn summary_line(&self, label: &str) -> String {
        let s = &self.summary;
        format!(
            "For m={}, theoretical mean (CLT) ~ N({:.3}, {:.3}/{} = {:.3}) | \
             simulated: for {} {} samples. avg={:.3}, Var={:.3}",
            s.m,
            s.theoretical_mean,
            s.raw_variance(),
            s.m,
            s.theoretical_variance_of_mean,
            s.n,
            label,
            s.empirical_mean,
            s.empirical_variance
        )
    }

    /// `(mean, variance)` of the Normal the CLT predicts for the sample means
    pub fn clt_normal(&self) -> (f64, f64) {
        (
            self.summary.theoretical_mean,
            self.summary.theoretical_variance_of_mean,
        )
    }
}

impl fmt::Display for AveragingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary_line(&self.distribution))
    }
}

/// σ²/m, the variance of the mean of m i.i.d. draws
///
/// # Errors
/// `InvalidParameter` if `m` is zero.
pub fn theoretical_variance_of_mean(distribution: &dyn ContinuousDistribution, m: usize) -> Result<f64> {
    if m == 0 {
        return Err(Error::too_small("m", m, 1));
    }
    Ok(distribution.variance() / m as f64)
}

pub(crate) fn validate_sample_count(n: usize) -> Result<()> {
    match n {
        0 => Err(Error::too_small("number of samples", n, 2)),
        1 => Err(Error::DegenerateStatistic {
            expected: 2,
            actual: 1,
        }),
        _ => Ok(()),
    }
}

/// Draw `n` sample means of `m` observations each and compare their moments
/// with the CLT prediction
///
/// # Errors
/// - `InvalidParameter` if `m == 0` or `n == 0`
/// - `DegenerateStatistic` if `n == 1` (the unbiased variance is undefined)
#[instrument(skip(distribution, rng), fields(family = distribution.name()))]
pub fn run_averaging_experiment<R: Rng>(
    distribution: &dyn ContinuousDistribution,
    n: usize,
    m: usize,
    rng: &mut R,
) -> Result<AveragingOutcome> {
    validate_sample_count(n)?;
    let theoretical_variance_of_mean = theoretical_variance_of_mean(distribution, m)?;

    let batch = SampleBatch::draw(distribution, n, m, rng)?;
    let sample_means = batch.row_means();

    let empirical_mean = moments::mean(&sample_means)?;
    let empirical_variance = moments::sample_variance(&sample_means)?;

    debug!(
        empirical_mean,
        empirical_variance,
        theoretical_variance_of_mean,
        "averaging experiment completed"
    );

    Ok(AveragingOutcome {
        distribution: distribution.name().to_string(),
        summary: MomentSummary {
            m,
            n,
            empirical_mean,
            empirical_variance,
            theoretical_mean: distribution.mean(),
            theoretical_variance_of_mean,
        },
        sample_means,
    })
}

/// Run the averaging experiment once per entry of `m_list`, in order
///
/// The same random source is threaded through every run.
pub fn averaging_sweep<R: Rng>(
    distribution: &dyn ContinuousDistribution,
    n: usize,
    m_list: &[usize],
    rng: &mut R,
) -> Result<Vec<AveragingOutcome>> {
    if m_list.is_empty() {
        return Err(Error::InvalidParameter("m_list must not be empty".to_string()));
    }
    m_list
        .iter()
        .map(|&m| run_averaging_experiment(distribution, n, m, rng))
        .collect()
}

/// `n` raw draws, the m = 1 case shown as a plain histogram
pub fn raw_sampling<R: Rng>(
    distribution: &dyn ContinuousDistribution,
    n: usize,
    rng: &mut R,
) -> Result<Vec<f64>> {
    if n == 0 {
        return Err(Error::too_small("number of samples", n, 1));
    }
    Ok(distribution.sample(n, rng))
}
