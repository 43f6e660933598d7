//! Invocation parameters for the sampling experiments

use crate::averaging::validate_sample_count;
use clt_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Parameters of the averaging, scaling and mean/std experiments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AveragingConfig {
    /// Number of sample means (N)
    pub n_samples: usize,
    /// Observations per sample for single-m experiments
    pub m: usize,
    /// Sample sizes swept by the averaging and scaling experiments
    pub m_list: Vec<usize>,
}

impl Default for AveragingConfig {
    fn default() -> Self {
        Self {
            n_samples: 1000,
            m: 10,
            m_list: vec![1, 2, 10, 100],
        }
    }
}

impl AveragingConfig {
    pub fn with_n_samples(mut self, n_samples: usize) -> Self {
        self.n_samples = n_samples;
        self
    }

    pub fn with_m(mut self, m: usize) -> Self {
        self.m = m;
        self
    }

    pub fn with_m_list(mut self, m_list: Vec<usize>) -> Self {
        self.m_list = m_list;
        self
    }

    /// Check every parameter before any sampling happens
    pub fn validate(&self) -> Result<()> {
        validate_sample_count(self.n_samples)?;
        if self.m == 0 {
            return Err(Error::too_small("m", self.m, 1));
        }
        if self.m_list.is_empty() {
            return Err(Error::InvalidParameter("m_list must not be empty".to_string()));
        }
        if let Some(&m) = self.m_list.iter().find(|&&m| m == 0) {
            return Err(Error::too_small("m", m, 1));
        }
        Ok(())
    }
}
