//! Variance scaling check: Var(mean of m) against σ²/m

use crate::averaging::run_averaging_experiment;
use clt_core::{ContinuousDistribution, Error, Result};
use rand::Rng;
use serde::Serialize;
use std::fmt;
use tracing::{info, instrument};

/// One row of the scaling table
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScalingRow {
    pub m: usize,
    /// Unbiased variance of the simulated sample means
    pub empirical_variance: f64,
    /// σ²/m
    pub expected_variance: f64,
}

impl ScalingRow {
    pub fn relative_error(&self) -> f64 {
        (self.empirical_variance - self.expected_variance).abs() / self.expected_variance
    }
}

/// Empirical vs expected variance of the mean for each m of a sweep
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VarianceScalingTable {
    /// Name shown in the header line; the family name unless relabelled
    pub distribution: String,
    /// σ² of a single observation
    pub original_variance: f64,
    pub n: usize,
    /// Rows in the order of the requested `m_list`
    pub rows: Vec<ScalingRow>,
}

impl VarianceScalingTable {
    /// Report under `label` instead of the family name
    pub fn labelled(mut self, label: impl Into<String>) -> Self {
        self.distribution = label.into();
        self
    }

    /// Row for a given m, if it was part of the sweep
    pub fn get(&self, m: usize) -> Option<&ScalingRow> {
        self.rows.iter().find(|row| row.m == m)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScalingRow> {
        self.rows.iter()
    }
}

impl fmt::Display for VarianceScalingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}: Original variance = {:.4}",
            self.distribution, self.original_variance
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "  m={}, Variance of mean = {:.4}, Expected = {:.4}",
                row.m, row.empirical_variance, row.expected_variance
            )?;
        }
        write!(f, "{}", "-".repeat(40))
    }
}

/// For each m in `m_list`, simulate `n` sample means and record their
/// empirical variance next to σ²/m
///
/// # Errors
/// `InvalidParameter` for an empty `m_list`, any `m == 0` or `n == 0`;
/// `DegenerateStatistic` for `n == 1`.
#[instrument(skip(distribution, rng), fields(family = distribution.name()))]
pub fn variance_scaling_table<R: Rng>(
    distribution: &dyn ContinuousDistribution,
    n: usize,
    m_list: &[usize],
    rng: &mut R,
) -> Result<VarianceScalingTable> {
    if m_list.is_empty() {
        return Err(Error::InvalidParameter("m_list must not be empty".to_string()));
    }
    if let Some(&m) = m_list.iter().find(|&&m| m == 0) {
        return Err(Error::too_small("m", m, 1));
    }

    let mut rows = Vec::with_capacity(m_list.len());
    for &m in m_list {
        let outcome = run_averaging_experiment(distribution, n, m, rng)?;
        rows.push(ScalingRow {
            m,
            empirical_variance: outcome.summary.empirical_variance,
            expected_variance: outcome.summary.theoretical_variance_of_mean,
        });
    }

    info!(rows = rows.len(), "variance scaling table built");

    Ok(VarianceScalingTable {
        distribution: distribution.name().to_string(),
        original_variance: distribution.variance(),
        n,
        rows,
    })
}
