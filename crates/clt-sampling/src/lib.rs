//! Distribution sampler and moment comparator
//!
//! Draws repeated batches from a [`ContinuousDistribution`], reduces each
//! batch to its mean and compares the empirical moments of those means with
//! what the Central Limit Theorem predicts: same mean, variance σ²/m.
//!
//! # Experiments
//!
//! - [`run_averaging_experiment`]: N means of m draws, empirical vs theoretical moments
//! - [`averaging_sweep`]: the same for several values of m
//! - [`variance_scaling_table`]: empirical variance of the mean vs σ²/m per m
//! - [`mean_std_experiment`]: sample means next to sample standard deviations
//! - [`raw_sampling`]: plain draws (the m = 1 case) for a histogram
//!
//! # Example
//!
//! ```rust
//! use clt_distributions::DistributionRegistry;
//! use clt_sampling::run_averaging_experiment;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let registry = DistributionRegistry::standard().unwrap();
//! let normal = registry.get("Normal").unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let outcome = run_averaging_experiment(normal, 1000, 10, &mut rng).unwrap();
//! assert_eq!(outcome.sample_means.len(), 1000);
//! assert!((outcome.summary.theoretical_variance_of_mean - 0.1).abs() < 1e-12);
//! ```

pub mod averaging;
pub mod batch;
pub mod config;
pub mod mean_std;
pub mod scaling;

pub use averaging::{
    averaging_sweep, raw_sampling, run_averaging_experiment, theoretical_variance_of_mean,
    AveragingOutcome, MomentSummary,
};
pub use batch::SampleBatch;
pub use config::AveragingConfig;
pub use mean_std::{mean_std_experiment, MeanStdOutcome};
pub use scaling::{variance_scaling_table, ScalingRow, VarianceScalingTable};

pub use clt_core::{ContinuousDistribution, Error, Result};
