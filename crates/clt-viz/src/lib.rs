//! Plot data for the CLT and confidence interval experiments
//!
//! Experiment crates return plain numbers; this crate turns them into
//! figures (evaluated curves, density-normalized histograms and interval
//! rows) and hands those to an [`ExperimentVisualizer`]. Nothing here draws
//! pixels: a visualizer either discards figures, keeps them in memory or
//! writes them out as JSON for an external plotting tool.
//!
//! # Example
//!
//! ```rust
//! use clt_distributions::DistributionRegistry;
//! use clt_viz::{pdf_figure, ExperimentVisualizer, PlotConfig, RecordingVisualizer};
//!
//! let registry = DistributionRegistry::standard().unwrap();
//! let visualizer = RecordingVisualizer::new();
//!
//! let figure = pdf_figure(&registry, &PlotConfig::default()).unwrap();
//! visualizer.record_figure(figure).unwrap();
//!
//! let recorded = visualizer.figure("pdfs").unwrap().unwrap();
//! assert_eq!(recorded.panels.len(), 4);
//! ```

pub mod config;
pub mod curves;
pub mod figures;
pub mod histogram;
pub mod types;
pub mod visualization;

pub use config::PlotConfig;
pub use curves::{clt_normal_curve, linspace, pdf_grid, pdf_overlay};
pub use figures::{
    averaging_figure, interval_chart_title, interval_figure, interval_rows, mean_std_figure,
    pdf_figure, raw_sampling_figure,
};
pub use histogram::FixedWidthBuilder;
pub use types::{Curve, DensityHistogram, Figure, HistogramBin, IntervalRow, Panel};
pub use visualization::{
    ExperimentVisualizer, JsonVisualizer, NullVisualizer, RecordingVisualizer,
};

pub use clt_core::{Error, Result};
