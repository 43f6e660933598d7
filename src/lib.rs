//! Central Limit Theorem and confidence interval coverage simulations
//!
//! This crate re-exports the workspace members:
//!
//! - [`core`]: error type, the [`ContinuousDistribution`](core::ContinuousDistribution) trait, moments
//! - [`distributions`]: Uniform, Normal, LogNormal, Gumbel and the standard registry
//! - [`sampling`]: averaging, variance-scaling and mean-vs-std experiments
//! - [`confidence`]: repeated confidence intervals and their miss rate
//! - [`viz`]: plot data and visualizers
//!
//! # Example
//!
//! ```rust
//! use clt_lab::prelude::*;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let registry = DistributionRegistry::standard()?;
//! let mut rng = StdRng::seed_from_u64(7);
//!
//! let table = variance_scaling_table(registry.get("Uniform")?, 1000, &[1, 10], &mut rng)?;
//! assert_eq!(table.rows.len(), 2);
//!
//! let result = run_ci_experiment(100, 30, 67.0, 10.0, 0.95, &mut rng)?;
//! assert_eq!(result.total_count(), 100);
//! # Ok::<(), clt_lab::core::Error>(())
//! ```

pub use clt_confidence as confidence;
pub use clt_core as core;
pub use clt_distributions as distributions;
pub use clt_sampling as sampling;
pub use clt_viz as viz;

/// Commonly used items
pub mod prelude {
    pub use clt_confidence::{
        run_ci_experiment, CiConfig, CiExperiment, ConfidenceInterval, ConfidenceLevel,
        ExperimentResult, StandardErrorModel,
    };
    pub use clt_core::{ContinuousDistribution, Error, Result};
    pub use clt_distributions::{
        DistributionRegistry, DistributionSpec, Gumbel, LogNormal, Normal, Uniform,
    };
    pub use clt_sampling::{
        averaging_sweep, mean_std_experiment, raw_sampling, run_averaging_experiment,
        variance_scaling_table, AveragingConfig, AveragingOutcome, MeanStdOutcome,
        VarianceScalingTable,
    };
    pub use clt_viz::{
        ExperimentVisualizer, JsonVisualizer, NullVisualizer, PlotConfig, RecordingVisualizer,
    };
}
