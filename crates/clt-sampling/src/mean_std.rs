//! Sample means next to sample standard deviations
//!
//! The CLT says the means are approximately Normal. It says nothing about the
//! standard deviations, which are reported only for contrast.

use crate::averaging::theoretical_variance_of_mean;
use crate::batch::SampleBatch;
use clt_core::{ContinuousDistribution, Result};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, instrument};

/// Per-sample means and standard deviations of N samples of size m
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeanStdOutcome {
    /// Name shown in reports; the family name unless relabelled
    pub distribution: String,
    pub m: usize,
    pub sample_means: Vec<f64>,
    /// Population standard deviation (divide by m) of each sample
    pub sample_std_devs: Vec<f64>,
    pub theoretical_mean: f64,
    /// sqrt(σ²/m)
    pub theoretical_std_of_mean: f64,
}

impl MeanStdOutcome {
    /// Report under `label` instead of the family name
    pub fn labelled(mut self, label: impl Into<String>) -> Self {
        self.distribution = label.into();
        self
    }
}

/// Draw `n` samples of size `m` and report each sample's mean and
/// population standard deviation
///
/// # Errors
/// `InvalidParameter` if `n` or `m` is zero.
#[instrument(skip(distribution, rng), fields(family = distribution.name()))]
pub fn mean_std_experiment<R: Rng>(
    distribution: &dyn ContinuousDistribution,
    n: usize,
    m: usize,
    rng: &mut R,
) -> Result<MeanStdOutcome> {
    let variance_of_mean = theoretical_variance_of_mean(distribution, m)?;
    let batch = SampleBatch::draw(distribution, n, m, rng)?;

    let sample_means = batch.row_means();
    let sample_std_devs = batch.row_std_devs()?;
    debug!(samples = sample_means.len(), "mean/std experiment completed");

    Ok(MeanStdOutcome {
        distribution: distribution.name().to_string(),
        m,
        sample_means,
        sample_std_devs,
        theoretical_mean: distribution.mean(),
        theoretical_std_of_mean: variance_of_mean.sqrt(),
    })
}
