//! Repeated-sampling coverage experiment

use crate::critical::StandardErrorModel;
use crate::types::{ConfidenceInterval, ConfidenceLevel, ExperimentResult};
use clt_core::{moments, ContinuousDistribution, Error, Result};
use clt_distributions::Normal;
use rand::Rng;
use tracing::{debug, info, instrument};

/// A validated coverage experiment against a Normal population
#[derive(Debug, Clone)]
pub struct CiExperiment {
    n_samples: usize,
    sample_size: usize,
    population: Normal,
    confidence: ConfidenceLevel,
    model: StandardErrorModel,
}

impl CiExperiment {
    /// Set up an experiment with the known-σ model
    ///
    /// # Errors
    /// `InvalidParameter` if `n_samples` or `sample_size` is zero, the
    /// population parameters are invalid, or `confidence` is outside (0, 1).
    pub fn new(
        n_samples: usize,
        sample_size: usize,
        true_mean: f64,
        true_std: f64,
        confidence: f64,
    ) -> Result<Self> {
        if n_samples == 0 {
            return Err(Error::too_small("N_samples", n_samples, 1));
        }
        if sample_size == 0 {
            return Err(Error::too_small("sample_size", sample_size, 1));
        }
        Ok(Self {
            n_samples,
            sample_size,
            population: Normal::new(true_mean, true_std)?,
            confidence: ConfidenceLevel::new(confidence)?,
            model: StandardErrorModel::KnownSigma,
        })
    }

    /// Switch the standard error model
    ///
    /// # Errors
    /// `DegenerateStatistic` if the sample size is too small for the model.
    pub fn with_model(mut self, model: StandardErrorModel) -> Result<Self> {
        if self.sample_size < model.min_sample_size() {
            return Err(Error::DegenerateStatistic {
                expected: model.min_sample_size(),
                actual: self.sample_size,
            });
        }
        self.model = model;
        Ok(self)
    }

    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    pub fn true_mean(&self) -> f64 {
        self.population.mean()
    }

    pub fn true_std(&self) -> f64 {
        self.population.std_dev()
    }

    pub fn confidence(&self) -> ConfidenceLevel {
        self.confidence
    }

    pub fn model(&self) -> StandardErrorModel {
        self.model
    }

    /// Standard error under the known-σ model, `σ/√n`
    pub fn known_standard_error(&self) -> f64 {
        self.true_std() / (self.sample_size as f64).sqrt()
    }

    /// Build the interval for one sample given the critical value
    pub fn interval_for(&self, sample: &[f64], critical_value: f64) -> Result<ConfidenceInterval> {
        let estimate = moments::mean(sample)?;
        let standard_error = match self.model {
            StandardErrorModel::KnownSigma => self.true_std() / (sample.len() as f64).sqrt(),
            StandardErrorModel::EstimatedSigma => {
                moments::sample_std_dev(sample)? / (sample.len() as f64).sqrt()
            }
        };
        Ok(ConfidenceInterval::around(
            estimate,
            critical_value * standard_error,
            self.true_mean(),
        ))
    }

    /// Draw `n_samples` samples, build one interval per sample and tally
    /// the misses
    #[instrument(skip(self, rng), fields(
        n_samples = self.n_samples,
        sample_size = self.sample_size,
        confidence = self.confidence.value(),
    ))]
    pub fn run<R: Rng>(&self, rng: &mut R) -> Result<ExperimentResult> {
        let critical_value = self.model.critical_value(self.confidence, self.sample_size)?;
        debug!(critical_value, model = ?self.model, "critical value computed");

        let mut intervals = Vec::with_capacity(self.n_samples);
        for _ in 0..self.n_samples {
            let sample = self.population.sample(self.sample_size, rng);
            intervals.push(self.interval_for(&sample, critical_value)?);
        }

        let result = ExperimentResult::from_intervals(
            intervals,
            self.confidence,
            critical_value,
            self.true_mean(),
            self.model,
        )?;
        info!(
            misses = result.miss_count(),
            total = result.total_count(),
            miss_rate = result.miss_rate(),
            "confidence interval experiment completed"
        );
        Ok(result)
    }
}

/// Known-σ coverage experiment
///
/// Draws `n_samples` samples of `sample_size` observations from
/// N(`true_mean`, `true_std`²), builds `mean ± z·σ/√n` for each, and counts
/// the intervals that miss `true_mean`.
pub fn run_ci_experiment<R: Rng>(
    n_samples: usize,
    sample_size: usize,
    true_mean: f64,
    true_std: f64,
    confidence: f64,
    rng: &mut R,
) -> Result<ExperimentResult> {
    CiExperiment::new(n_samples, sample_size, true_mean, true_std, confidence)?.run(rng)
}
