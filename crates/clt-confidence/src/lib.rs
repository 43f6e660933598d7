//! Confidence interval coverage experiments
//!
//! Repeatedly samples from a Normal population with known mean and standard
//! deviation, builds a two-sided interval around each sample mean and counts
//! how often the interval misses the true mean. Over many repetitions the
//! miss rate approaches `1 − confidence`.
//!
//! Two standard error models are available:
//!
//! - [`StandardErrorModel::KnownSigma`]: `σ/√n` with a standard normal
//!   critical value (the classic textbook construction, and the default)
//! - [`StandardErrorModel::EstimatedSigma`]: `s/√n` with a Student-t
//!   critical value on `n − 1` degrees of freedom
//!
//! # Example
//!
//! ```rust
//! use clt_confidence::run_ci_experiment;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let result = run_ci_experiment(100, 30, 67.0, 10.0, 0.95, &mut rng).unwrap();
//!
//! assert_eq!(result.total_count(), 100);
//! assert!(result.miss_count() <= result.total_count());
//! println!("{result}");
//! ```

pub mod config;
pub mod critical;
pub mod experiment;
pub mod types;

pub use config::CiConfig;
pub use critical::{t_critical, z_critical, StandardErrorModel};
pub use experiment::{run_ci_experiment, CiExperiment};
pub use types::{ConfidenceInterval, ConfidenceLevel, ExperimentResult};

pub use clt_core::{Error, Result};
