//! End-to-end figure generation from experiment results

use approx::assert_relative_eq;
use clt_confidence::run_ci_experiment;
use clt_distributions::{DistributionRegistry, Normal};
use clt_sampling::{averaging_sweep, mean_std_experiment, raw_sampling};
use clt_viz::{
    averaging_figure, interval_chart_title, interval_figure, interval_rows, mean_std_figure,
    pdf_figure, raw_sampling_figure, ExperimentVisualizer, JsonVisualizer, PlotConfig,
    RecordingVisualizer,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;

#[test]
fn test_pdf_figure_has_one_panel_per_distribution() {
    let registry = DistributionRegistry::standard().unwrap();
    let figure = pdf_figure(&registry, &PlotConfig::default()).unwrap();

    assert_eq!(figure.name, "pdfs");
    let titles: Vec<_> = figure.panels.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Uniform", "Normal", "Lognormal", "Gumbel"]);
    for panel in &figure.panels {
        assert_eq!(panel.curves.len(), 1);
        assert_eq!(panel.curves[0].len(), 1000);
        assert!(panel.histogram.is_none());
    }
}

#[test]
fn test_raw_sampling_figure() {
    let registry = DistributionRegistry::standard().unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let draws: Vec<Vec<f64>> = registry
        .iter()
        .map(|(_, dist)| raw_sampling(dist, 1000, &mut rng))
        .collect::<Result<_, _>>()
        .unwrap();

    let config = PlotConfig::default();
    let figure = raw_sampling_figure(&registry, &draws, &config).unwrap();
    assert_eq!(figure.panels.len(), 4);
    for (panel, samples) in figure.panels.iter().zip(&draws) {
        let hist = panel.histogram.as_ref().unwrap();
        assert_eq!(hist.len(), 20);
        assert_eq!(hist.total_count(), 1000);
        assert_relative_eq!(hist.area(), 1.0, epsilon = 1e-9);

        let overlay = &panel.curves[0];
        assert_eq!(overlay.len(), 200);
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        assert_eq!(overlay.x[0], min);
    }

    assert!(raw_sampling_figure(&registry, &draws[..2], &config).is_err());
}

#[test]
fn test_averaging_figure_titles_and_overlays() {
    let registry = DistributionRegistry::standard().unwrap();
    let gumbel = registry.get("Gumbel").unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let outcomes = averaging_sweep(gumbel, 1000, &[1, 2, 10, 100], &mut rng).unwrap();

    let figure = averaging_figure("Gumbel", &outcomes, &PlotConfig::default()).unwrap();
    assert_eq!(figure.name, "averaging_gumbel");
    assert_eq!(figure.title, "Averaging effect - Gumbel");
    assert_eq!(figure.panels.len(), 4);

    for (panel, outcome) in figure.panels.iter().zip(&outcomes) {
        assert!(panel.title.starts_with(&format!("For m={},", outcome.summary.m)));
        let curve = &panel.curves[0];
        assert_eq!(curve.label, "CLT Normal Approx");
        // the overlay should peak near the theoretical mean
        let (x_peak, _) = curve.peak().unwrap();
        let sd = outcome.summary.theoretical_std_of_mean();
        assert!((x_peak - outcome.summary.theoretical_mean).abs() < sd);
    }

    assert!(averaging_figure("Gumbel", &[], &PlotConfig::default()).is_err());
}

#[test]
fn test_mean_std_figure() {
    let registry = DistributionRegistry::standard().unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let outcome = mean_std_experiment(registry.get("Lognormal").unwrap(), 1000, 10, &mut rng)
        .unwrap();

    let figure = mean_std_figure("Lognormal", &outcome, &PlotConfig::default()).unwrap();
    assert_eq!(figure.name, "mean_std_lognormal");
    assert_eq!(figure.title, "Lognormal: Sample Means vs Stds");
    assert_eq!(figure.panels.len(), 2);
    assert_eq!(figure.panels[0].curves.len(), 1);
    assert!(figure.panels[1].curves.is_empty());
    assert_eq!(figure.panels[1].histogram.as_ref().unwrap().total_count(), 1000);
}

#[test]
fn test_interval_figure() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let result = run_ci_experiment(100, 30, 67.0, 10.0, 0.95, &mut rng).unwrap();

    let rows = interval_rows(&result);
    assert_eq!(rows.len(), 100);
    let misses = rows.iter().filter(|r| !r.contains_truth).count();
    assert_eq!(misses, result.miss_count());
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.index, i);
        assert_relative_eq!(row.midpoint, (row.lower + row.upper) / 2.0, epsilon = 1e-12);
    }

    let title = interval_chart_title(&result);
    assert_eq!(
        title,
        format!(
            "95% Confidence Intervals for Sample Means\nMissed intervals: {}/100",
            result.miss_count()
        )
    );

    let figure = interval_figure(&result);
    assert_eq!(figure.panels[0].reference_line, Some(67.0));
    assert_eq!(figure.panels[0].intervals, rows);
}

#[test]
fn test_json_visualizer_writes_files() {
    let dir = std::env::temp_dir().join(format!("clt-viz-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let prefix = dir.join("run");
    let prefix = prefix.to_str().unwrap();

    let registry = DistributionRegistry::standard().unwrap();
    let vis = JsonVisualizer::new();
    vis.record_figure(pdf_figure(&registry, &PlotConfig::default().with_pdf_points(50)).unwrap())
        .unwrap();

    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let result = run_ci_experiment(20, 30, 67.0, 10.0, 0.95, &mut rng).unwrap();
    vis.record_figure(interval_figure(&result)).unwrap();

    let paths = vis.write_all(prefix).unwrap();
    assert_eq!(paths.len(), 2);
    assert!(paths[0].ends_with("run_pdfs.json"));
    assert!(paths[1].ends_with("run_confidence_intervals.json"));

    let text = std::fs::read_to_string(&paths[1]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["name"], "confidence_intervals");
    assert_eq!(value["panels"][0]["intervals"].as_array().unwrap().len(), 20);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_recording_visualizer_collects_pipeline() {
    let registry = DistributionRegistry::standard().unwrap();
    let config = PlotConfig::default();
    let vis = RecordingVisualizer::new();
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    vis.record_figure(pdf_figure(&registry, &config).unwrap()).unwrap();
    for (label, dist) in registry.iter() {
        let outcomes = averaging_sweep(dist, 200, &[1, 10], &mut rng).unwrap();
        vis.record_figure(averaging_figure(label, &outcomes, &config).unwrap()).unwrap();
    }

    assert_eq!(vis.len().unwrap(), 5);
    assert!(vis.figure("averaging_uniform").unwrap().is_some());
    assert!(vis.figure("averaging_lognormal").unwrap().is_some());
}

#[test]
fn test_figures_named_after_registry_labels() {
    let registry = DistributionRegistry::new()
        .with("narrow", Arc::new(Normal::new(0.0, 1.0).unwrap()))
        .unwrap()
        .with("wide", Arc::new(Normal::new(0.0, 5.0).unwrap()))
        .unwrap();
    let config = PlotConfig::default();
    let vis = JsonVisualizer::new();
    let mut rng = ChaCha8Rng::seed_from_u64(21);

    for (label, dist) in registry.iter() {
        let outcomes = averaging_sweep(dist, 200, &[1, 10], &mut rng).unwrap();
        let figure = averaging_figure(label, &outcomes, &config).unwrap();
        assert_eq!(figure.name, format!("averaging_{label}"));
        assert_eq!(figure.title, format!("Averaging effect - {label}"));
        for panel in &figure.panels {
            assert!(panel.title.contains(&format!(" {label} samples.")));
        }
        vis.record_figure(figure).unwrap();

        let outcome = mean_std_experiment(dist, 200, 10, &mut rng).unwrap();
        let figure = mean_std_figure(label, &outcome, &config).unwrap();
        assert_eq!(figure.title, format!("{label}: Sample Means vs Stds"));
        vis.record_figure(figure).unwrap();
    }

    let dir = std::env::temp_dir().join(format!("clt-viz-labels-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let prefix = dir.join("labels");
    let paths = vis.write_all(prefix.to_str().unwrap()).unwrap();

    let mut names: Vec<_> = paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec![
            "labels_averaging_narrow.json",
            "labels_averaging_wide.json",
            "labels_mean_std_narrow.json",
            "labels_mean_std_wide.json",
        ]
    );
    assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 4);

    std::fs::remove_dir_all(&dir).unwrap();
}
