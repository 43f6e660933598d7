//! Invocation parameters for the coverage experiment

use crate::critical::StandardErrorModel;
use crate::experiment::CiExperiment;
use clt_core::Result;
use serde::{Deserialize, Serialize};

/// Parameters of a confidence interval coverage run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CiConfig {
    /// Number of independent samples, one interval each
    pub n_samples: usize,
    /// Observations per sample
    pub sample_size: usize,
    pub true_mean: f64,
    pub true_std: f64,
    pub confidence: f64,
    pub model: StandardErrorModel,
}

impl Default for CiConfig {
    fn default() -> Self {
        Self {
            n_samples: 100,
            sample_size: 30,
            true_mean: 67.0,
            true_std: 10.0,
            confidence: 0.95,
            model: StandardErrorModel::KnownSigma,
        }
    }
}

impl CiConfig {
    pub fn with_n_samples(mut self, n_samples: usize) -> Self {
        self.n_samples = n_samples;
        self
    }

    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    pub fn with_population(mut self, true_mean: f64, true_std: f64) -> Self {
        self.true_mean = true_mean;
        self.true_std = true_std;
        self
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn with_model(mut self, model: StandardErrorModel) -> Self {
        self.model = model;
        self
    }

    /// Validate and turn into a runnable experiment
    pub fn experiment(&self) -> Result<CiExperiment> {
        CiExperiment::new(
            self.n_samples,
            self.sample_size,
            self.true_mean,
            self.true_std,
            self.confidence,
        )?
        .with_model(self.model)
    }

    pub fn validate(&self) -> Result<()> {
        self.experiment().map(|_| ())
    }
}
