//! Plot resolution settings

use clt_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Resolution of the generated plot data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Grid points for the stand-alone pdf curves
    pub pdf_points: usize,
    /// Grid points for curves overlaid on histograms
    pub overlay_points: usize,
    /// Equal-width histogram bins
    pub bins: usize,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            pdf_points: 1000,
            overlay_points: 200,
            bins: 20,
        }
    }
}

impl PlotConfig {
    pub fn with_pdf_points(mut self, pdf_points: usize) -> Self {
        self.pdf_points = pdf_points;
        self
    }

    pub fn with_overlay_points(mut self, overlay_points: usize) -> Self {
        self.overlay_points = overlay_points;
        self
    }

    pub fn with_bins(mut self, bins: usize) -> Self {
        self.bins = bins;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.pdf_points < 2 {
            return Err(Error::too_small("pdf_points", self.pdf_points, 2));
        }
        if self.overlay_points < 2 {
            return Err(Error::too_small("overlay_points", self.overlay_points, 2));
        }
        if self.bins == 0 {
            return Err(Error::too_small("bins", self.bins, 1));
        }
        Ok(())
    }
}
