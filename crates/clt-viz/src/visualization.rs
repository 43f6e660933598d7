//! Visualizer interface
//!
//! Figure builders hand finished [`Figure`]s to a visualizer, which decides
//! what to do with them: nothing, keep them, or write them to disk.

use crate::types::Figure;
use clt_core::{Error, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info};

/// Receiver of experiment figures
pub trait ExperimentVisualizer {
    /// Record a finished figure
    fn record_figure(&self, figure: Figure) -> Result<()>;

    /// Save all recorded figures
    ///
    /// The path_prefix is used to generate one output per figure
    /// (e.g., "clt" -> "clt_pdfs.json", "clt_confidence_intervals.json").
    fn save_visualizations(&self, path_prefix: &str) -> Result<()>;

    /// Check if this visualizer actually produces output
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Visualizer that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullVisualizer;

impl ExperimentVisualizer for NullVisualizer {
    fn record_figure(&self, _figure: Figure) -> Result<()> {
        Ok(())
    }

    fn save_visualizations(&self, _path_prefix: &str) -> Result<()> {
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

/// Keeps figures in memory
#[derive(Debug, Default)]
pub struct RecordingVisualizer {
    figures: Mutex<Vec<Figure>>,
}

impl RecordingVisualizer {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Figure>>> {
        self.figures
            .lock()
            .map_err(|_| Error::Computation("figure store lock poisoned".to_string()))
    }

    /// Snapshot of everything recorded so far
    pub fn figures(&self) -> Result<Vec<Figure>> {
        Ok(self.lock()?.clone())
    }

    /// Most recent figure with this name
    pub fn figure(&self, name: &str) -> Result<Option<Figure>> {
        Ok(self.lock()?.iter().rev().find(|f| f.name == name).cloned())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.lock()?.is_empty())
    }
}

impl ExperimentVisualizer for RecordingVisualizer {
    fn record_figure(&self, figure: Figure) -> Result<()> {
        debug!(figure = %figure.name, panels = figure.panels.len(), "recorded figure");
        self.lock()?.push(figure);
        Ok(())
    }

    fn save_visualizations(&self, _path_prefix: &str) -> Result<()> {
        Ok(())
    }
}

/// Writes each figure to `<prefix>_<figure>.json`
#[derive(Debug, Default)]
pub struct JsonVisualizer {
    recorded: RecordingVisualizer,
}

impl JsonVisualizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write every recorded figure and return the paths written
    pub fn write_all(&self, path_prefix: &str) -> Result<Vec<PathBuf>> {
        let figures = self.recorded.lock()?;
        let mut written = Vec::with_capacity(figures.len());
        for figure in figures.iter() {
            let path = PathBuf::from(format!("{path_prefix}_{}.json", figure.name));
            let writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(writer, figure)?;
            info!(path = %path.display(), "wrote figure");
            written.push(path);
        }
        Ok(written)
    }

    pub fn figures(&self) -> Result<Vec<Figure>> {
        self.recorded.figures()
    }
}

impl ExperimentVisualizer for JsonVisualizer {
    fn record_figure(&self, figure: Figure) -> Result<()> {
        self.recorded.record_figure(figure)
    }

    fn save_visualizations(&self, path_prefix: &str) -> Result<()> {
        self.write_all(path_prefix).map(|_| ())
    }
}
