//! Core traits and types for CLT and confidence interval simulations
//!
//! This crate holds the pieces every other crate in the workspace agrees on:
//!
//! - [`Error`] / [`Result`]: the shared error taxonomy
//! - [`ContinuousDistribution`]: the abstraction experiments draw from
//! - [`moments`]: descriptive moments (mean, unbiased and population variance)
//!
//! # Example
//!
//! ```rust
//! use clt_core::moments;
//!
//! let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! assert_eq!(moments::mean(&data).unwrap(), 5.0);
//! assert_eq!(moments::population_variance(&data).unwrap(), 4.0);
//! ```

pub mod error;
pub mod moments;
pub mod traits;

pub use error::{Error, Result};
pub use traits::ContinuousDistribution;
