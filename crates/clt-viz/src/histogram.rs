//! Fixed-width density histograms

use crate::types::{DensityHistogram, HistogramBin};
use clt_core::{Error, Result};
use tracing::debug;

/// Equal-width bins spanning `[min, max]` of the data
#[derive(Debug, Clone, Copy)]
pub struct FixedWidthBuilder {
    num_bins: usize,
}

impl FixedWidthBuilder {
    pub fn new(num_bins: usize) -> Self {
        Self {
            num_bins: num_bins.max(1),
        }
    }

    pub fn num_bins(&self) -> usize {
        self.num_bins
    }

    /// Bin `sample`
    ///
    /// An empty sample gives an empty histogram; a constant sample collapses
    /// to one zero-width bin.
    ///
    /// # Errors
    /// `InvalidParameter` if any value is NaN or infinite.
    pub fn build(&self, sample: &[f64]) -> Result<DensityHistogram> {
        if sample.is_empty() {
            return Ok(DensityHistogram::new(vec![], 0, 0.0, 0.0));
        }
        if sample.iter().any(|x| !x.is_finite()) {
            return Err(Error::non_finite("histogram input"));
        }

        let total = sample.len();
        let min = sample.iter().copied().fold(f64::INFINITY, f64::min);
        let max = sample.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        if max == min {
            let bin = HistogramBin::new(min, max, total, total);
            return Ok(DensityHistogram::new(vec![bin], total, min, max));
        }

        let width = (max - min) / self.num_bins as f64;
        let mut counts = vec![0usize; self.num_bins];
        for &value in sample {
            let idx = ((value - min) / width).floor() as usize;
            counts[idx.min(self.num_bins - 1)] += 1;
        }

        let bins = counts
            .into_iter()
            .enumerate()
            .map(|(i, count)| {
                let left = min + i as f64 * width;
                let right = if i == self.num_bins - 1 {
                    max
                } else {
                    min + (i + 1) as f64 * width
                };
                HistogramBin::new(left, right, count, total)
            })
            .collect();

        debug!(bins = self.num_bins, total, min, max, "built density histogram");
        Ok(DensityHistogram::new(bins, total, min, max))
    }
}

impl Default for FixedWidthBuilder {
    fn default() -> Self {
        Self::new(20)
    }
}
