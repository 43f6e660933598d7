//! Curves evaluated from distributions

use crate::types::Curve;
use clt_core::{ContinuousDistribution, Error, Result};
use clt_distributions::Normal;

/// Quantile range of the stand-alone pdf plots
const PDF_TAIL: f64 = 0.001;

/// `points` evenly spaced values from `start` to `end`, both included
pub fn linspace(start: f64, end: f64, points: usize) -> Result<Vec<f64>> {
    if points < 2 {
        return Err(Error::too_small("number of grid points", points, 2));
    }
    if !start.is_finite() || !end.is_finite() {
        return Err(Error::non_finite("grid bounds"));
    }
    let step = (end - start) / (points - 1) as f64;
    Ok((0..points)
        .map(|i| if i == points - 1 { end } else { start + i as f64 * step })
        .collect())
}

/// The pdf on `[lower, upper]`, for overlaying on a histogram
pub fn pdf_overlay(
    distribution: &dyn ContinuousDistribution,
    lower: f64,
    upper: f64,
    points: usize,
) -> Result<Curve> {
    let x = linspace(lower, upper, points)?;
    let y = x.iter().map(|&v| distribution.pdf(v)).collect();
    Ok(Curve::new(distribution.name(), x, y))
}

/// The pdf between its 0.1% and 99.9% quantiles
pub fn pdf_grid(distribution: &dyn ContinuousDistribution, points: usize) -> Result<Curve> {
    let lower = distribution.quantile(PDF_TAIL)?;
    let upper = distribution.quantile(1.0 - PDF_TAIL)?;
    pdf_overlay(distribution, lower, upper, points)
}

/// The Normal density the CLT predicts for sample means, on `[lower, upper]`
pub fn clt_normal_curve(
    mean: f64,
    variance: f64,
    lower: f64,
    upper: f64,
    points: usize,
) -> Result<Curve> {
    let normal = Normal::from_mean_variance(mean, variance)?;
    let mut curve = pdf_overlay(&normal, lower, upper, points)?;
    curve.label = "CLT Normal Approx".to_string();
    Ok(curve)
}
