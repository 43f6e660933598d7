//! Figures built from experiment results

use crate::config::PlotConfig;
use crate::curves::{clt_normal_curve, pdf_grid, pdf_overlay};
use crate::histogram::FixedWidthBuilder;
use crate::types::{Figure, IntervalRow, Panel};
use clt_confidence::ExperimentResult;
use clt_core::{Error, Result};
use clt_distributions::DistributionRegistry;
use clt_sampling::{AveragingOutcome, MeanStdOutcome};

fn data_range(values: &[f64]) -> Result<(f64, f64)> {
    if values.is_empty() {
        return Err(Error::too_small("number of values", 0, 1));
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Ok((min, max))
}

fn slug(label: &str) -> String {
    label
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect()
}

/// One pdf panel per registry entry
pub fn pdf_figure(registry: &DistributionRegistry, config: &PlotConfig) -> Result<Figure> {
    config.validate()?;
    registry.iter().try_fold(
        Figure::new("pdfs", "Probability density functions"),
        |figure, (label, dist)| {
            let curve = pdf_grid(dist, config.pdf_points)?;
            Ok(figure.with_panel(Panel::new(label).with_curve(curve)))
        },
    )
}

/// Histograms of raw draws with the pdf overlaid on the observed range
///
/// `draws` pairs each registry label with its samples, in registry order.
pub fn raw_sampling_figure(
    registry: &DistributionRegistry,
    draws: &[Vec<f64>],
    config: &PlotConfig,
) -> Result<Figure> {
    config.validate()?;
    if draws.len() != registry.len() {
        return Err(Error::InvalidParameter(format!(
            "expected {} sample sets, got {}",
            registry.len(),
            draws.len()
        )));
    }

    let builder = FixedWidthBuilder::new(config.bins);
    registry.iter().zip(draws).try_fold(
        Figure::new("raw_samples", "Histograms of raw samples"),
        |figure, ((label, dist), samples)| {
            let (lower, upper) = data_range(samples)?;
            let panel = Panel::new(label)
                .with_histogram(builder.build(samples)?)
                .with_curve(pdf_overlay(dist, lower, upper, config.overlay_points)?);
            Ok(figure.with_panel(panel))
        },
    )
}

/// One panel per m: histogram of sample means plus the CLT Normal
///
/// `label` names the distribution in the figure name, its title and every
/// panel's summary line.
pub fn averaging_figure(
    label: &str,
    outcomes: &[AveragingOutcome],
    config: &PlotConfig,
) -> Result<Figure> {
    config.validate()?;
    if outcomes.is_empty() {
        return Err(Error::InvalidParameter("no averaging outcomes to plot".to_string()));
    }

    let builder = FixedWidthBuilder::new(config.bins);
    let figure = Figure::new(
        format!("averaging_{}", slug(label)),
        format!("Averaging effect - {label}"),
    );
    outcomes.iter().try_fold(figure, |figure, outcome| {
        let (lower, upper) = data_range(&outcome.sample_means)?;
        let (mean, variance) = outcome.clt_normal();
        let panel = Panel::new(outcome.summary_line(label))
            .with_histogram(builder.build(&outcome.sample_means)?)
            .with_curve(clt_normal_curve(mean, variance, lower, upper, config.overlay_points)?);
        Ok(figure.with_panel(panel))
    })
}

/// Side-by-side histograms of sample means and sample standard deviations
pub fn mean_std_figure(
    label: &str,
    outcome: &MeanStdOutcome,
    config: &PlotConfig,
) -> Result<Figure> {
    config.validate()?;
    let builder = FixedWidthBuilder::new(config.bins);

    let (lower, upper) = data_range(&outcome.sample_means)?;
    let clt = clt_normal_curve(
        outcome.theoretical_mean,
        outcome.theoretical_std_of_mean.powi(2),
        lower,
        upper,
        config.overlay_points,
    )?;
    let means = Panel::new("Sample Means (≈ Normal by CLT)")
        .with_histogram(builder.build(&outcome.sample_means)?)
        .with_curve(clt);
    let stds = Panel::new("Sample Standard Deviations (not Normal)")
        .with_histogram(builder.build(&outcome.sample_std_devs)?);

    Ok(Figure::new(
        format!("mean_std_{}", slug(label)),
        format!("{label}: Sample Means vs Stds"),
    )
    .with_panel(means)
    .with_panel(stds))
}

/// `(index, lower, upper, midpoint, contains_truth)` per interval
pub fn interval_rows(result: &ExperimentResult) -> Vec<IntervalRow> {
    result
        .intervals()
        .iter()
        .enumerate()
        .map(|(index, ci)| IntervalRow {
            index,
            lower: ci.lower,
            upper: ci.upper,
            midpoint: ci.midpoint(),
            contains_truth: ci.contains_truth,
        })
        .collect()
}

pub fn interval_chart_title(result: &ExperimentResult) -> String {
    format!(
        "{:.0}% Confidence Intervals for Sample Means\nMissed intervals: {}/{}",
        result.confidence().value() * 100.0,
        result.miss_count(),
        result.total_count()
    )
}

/// Interval chart with the true mean as reference line
pub fn interval_figure(result: &ExperimentResult) -> Figure {
    let title = interval_chart_title(result);
    let panel = Panel::new(title.clone())
        .with_intervals(interval_rows(result))
        .with_reference_line(result.true_mean());
    Figure::new("confidence_intervals", title).with_panel(panel)
}
