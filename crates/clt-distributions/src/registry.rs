//! Named distribution registry
//!
//! Experiments look distributions up by name. The registry is built once,
//! never mutated afterwards, and handed to experiments by shared reference.

use crate::{Gumbel, LogNormal, Normal, Uniform};
use clt_core::{ContinuousDistribution, Error, Result};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Parameters of a supported family
///
/// This is the serializable form used in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family")]
pub enum DistributionSpec {
    Uniform { min: f64, max: f64 },
    Normal { mean: f64, std_dev: f64 },
    LogNormal { mu: f64, sigma: f64 },
    Gumbel { location: f64, scale: f64 },
}

impl DistributionSpec {
    /// Validate the parameters and build the distribution
    pub fn build(&self) -> Result<Arc<dyn ContinuousDistribution>> {
        let dist: Arc<dyn ContinuousDistribution> = match *self {
            Self::Uniform { min, max } => Arc::new(Uniform::new(min, max)?),
            Self::Normal { mean, std_dev } => Arc::new(Normal::new(mean, std_dev)?),
            Self::LogNormal { mu, sigma } => Arc::new(LogNormal::new(mu, sigma)?),
            Self::Gumbel { location, scale } => Arc::new(Gumbel::new(location, scale)?),
        };
        Ok(dist)
    }

    /// Family name, matching [`ContinuousDistribution::name`]
    pub fn family(&self) -> &'static str {
        match self {
            Self::Uniform { .. } => "Uniform",
            Self::Normal { .. } => "Normal",
            Self::LogNormal { .. } => "LogNormal",
            Self::Gumbel { .. } => "Gumbel",
        }
    }

    /// Build a spec from a family name and its two parameters
    ///
    /// Names are matched case-insensitively; `"lognormal"` and `"lognorm"`
    /// are both accepted.
    pub fn from_name(family: &str, first: f64, second: f64) -> Result<Self> {
        match family.to_ascii_lowercase().as_str() {
            "uniform" => Ok(Self::Uniform {
                min: first,
                max: second,
            }),
            "normal" | "norm" => Ok(Self::Normal {
                mean: first,
                std_dev: second,
            }),
            "lognormal" | "lognorm" => Ok(Self::LogNormal {
                mu: first,
                sigma: second,
            }),
            "gumbel" | "gumbel_r" => Ok(Self::Gumbel {
                location: first,
                scale: second,
            }),
            _ => Err(Error::unknown_distribution(family)),
        }
    }
}

/// A registered distribution with its display label
#[derive(Debug, Clone)]
pub struct RegistryEntry {
    pub label: String,
    pub distribution: Arc<dyn ContinuousDistribution>,
}

/// Ordered mapping from label to immutable distribution
#[derive(Debug, Clone, Default)]
pub struct DistributionRegistry {
    entries: Vec<RegistryEntry>,
}

impl DistributionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The four reference distributions, in display order:
    ///
    /// - `Uniform` on [-2, 2]
    /// - `Normal` N(0, 1)
    /// - `Lognormal` with sigma 0.5 and median 1
    /// - `Gumbel` with location 0 and scale 1
    ///
    /// # Errors
    /// Propagates a failed build of any of the four entries.
    pub fn standard() -> Result<Self> {
        Self::from_specs([
            ("Uniform", DistributionSpec::Uniform { min: -2.0, max: 2.0 }),
            ("Normal", DistributionSpec::Normal { mean: 0.0, std_dev: 1.0 }),
            ("Lognormal", DistributionSpec::LogNormal { mu: 0.0, sigma: 0.5 }),
            ("Gumbel", DistributionSpec::Gumbel { location: 0.0, scale: 1.0 }),
        ])
    }

    /// Build a registry from labelled specs, failing on the first invalid one
    pub fn from_specs<'a, I>(specs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, DistributionSpec)>,
    {
        let mut registry = Self::new();
        for (label, spec) in specs {
            registry = registry.with(label, spec.build()?)?;
        }
        Ok(registry)
    }

    /// Add a distribution under `label`
    ///
    /// # Errors
    /// `InvalidParameter` if the label is empty or already registered.
    pub fn with(
        mut self,
        label: impl Into<String>,
        distribution: Arc<dyn ContinuousDistribution>,
    ) -> Result<Self> {
        let label = label.into();
        if label.trim().is_empty() {
            return Err(Error::InvalidParameter(
                "Distribution label must not be empty".to_string(),
            ));
        }
        if self.contains(&label) {
            return Err(Error::InvalidParameter(format!(
                "Distribution {label} is already registered"
            )));
        }
        debug!(label = %label, family = distribution.name(), "registering distribution");
        self.entries.push(RegistryEntry {
            label,
            distribution,
        });
        Ok(self)
    }

    /// Look up a distribution by label (case-insensitive)
    pub fn get(&self, label: &str) -> Result<&dyn ContinuousDistribution> {
        self.entries
            .iter()
            .find(|e| e.label.eq_ignore_ascii_case(label))
            .map(|e| e.distribution.as_ref())
            .ok_or_else(|| Error::unknown_distribution(label))
    }

    /// Shared handle to a distribution, for callers that keep it around
    pub fn get_shared(&self, label: &str) -> Result<Arc<dyn ContinuousDistribution>> {
        self.entries
            .iter()
            .find(|e| e.label.eq_ignore_ascii_case(label))
            .map(|e| Arc::clone(&e.distribution))
            .ok_or_else(|| Error::unknown_distribution(label))
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries
            .iter()
            .any(|e| e.label.eq_ignore_ascii_case(label))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }

    /// Iterate `(label, distribution)` pairs in registration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn ContinuousDistribution)> {
        self.entries
            .iter()
            .map(|e| (e.label.as_str(), e.distribution.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
