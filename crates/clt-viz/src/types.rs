//! Plot data types

use serde::{Deserialize, Serialize};
use std::fmt;

/// A curve evaluated on a grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub label: String,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Curve {
    pub fn new(label: impl Into<String>, x: Vec<f64>, y: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            x,
            y,
        }
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Trapezoidal area under the curve
    pub fn area(&self) -> f64 {
        self.x
            .windows(2)
            .zip(self.y.windows(2))
            .map(|(x, y)| (x[1] - x[0]) * (y[0] + y[1]) / 2.0)
            .sum()
    }

    /// Largest y value and where it occurs
    pub fn peak(&self) -> Option<(f64, f64)> {
        self.x
            .iter()
            .zip(&self.y)
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(&x, &y)| (x, y))
    }
}

/// A single bin in a density histogram
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Left edge (inclusive)
    pub left: f64,
    /// Right edge (exclusive, except for the last bin)
    pub right: f64,
    pub count: usize,
    /// count / (total_count * width)
    pub density: f64,
}

impl HistogramBin {
    pub fn new(left: f64, right: f64, count: usize, total_count: usize) -> Self {
        let width = right - left;
        let density = if width > 0.0 && total_count > 0 {
            count as f64 / (total_count as f64 * width)
        } else {
            0.0
        };
        Self {
            left,
            right,
            count,
            density,
        }
    }

    pub fn center(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.4}, {:.4}): count={}, density={:.4}",
            self.left, self.right, self.count, self.density
        )
    }
}

/// Equal-width histogram normalized so the bar areas sum to one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityHistogram {
    bins: Vec<HistogramBin>,
    total_count: usize,
    min: f64,
    max: f64,
}

impl DensityHistogram {
    pub fn new(bins: Vec<HistogramBin>, total_count: usize, min: f64, max: f64) -> Self {
        Self {
            bins,
            total_count,
            min,
            max,
        }
    }

    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|b| b.count).collect()
    }

    pub fn densities(&self) -> Vec<f64> {
        self.bins.iter().map(|b| b.density).collect()
    }

    pub fn centers(&self) -> Vec<f64> {
        self.bins.iter().map(HistogramBin::center).collect()
    }

    /// Sum of density × width over all bins
    pub fn area(&self) -> f64 {
        self.bins.iter().map(|b| b.density * b.width()).sum()
    }

    /// Index of the bin holding `value`
    pub fn find_bin(&self, value: f64) -> Option<usize> {
        let last = self.bins.len().checked_sub(1)?;
        self.bins.iter().enumerate().find_map(|(i, b)| {
            let inside = value >= b.left && (value < b.right || (i == last && value <= b.right));
            inside.then_some(i)
        })
    }
}

/// One row of the confidence interval chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalRow {
    pub index: usize,
    pub lower: f64,
    pub upper: f64,
    pub midpoint: f64,
    pub contains_truth: bool,
}

/// One subplot
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Panel {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub histogram: Option<DensityHistogram>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub curves: Vec<Curve>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub intervals: Vec<IntervalRow>,
    /// Vertical marker, e.g. the true mean
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_line: Option<f64>,
}

impl Panel {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_histogram(mut self, histogram: DensityHistogram) -> Self {
        self.histogram = Some(histogram);
        self
    }

    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curves.push(curve);
        self
    }

    pub fn with_intervals(mut self, rows: Vec<IntervalRow>) -> Self {
        self.intervals = rows;
        self
    }

    pub fn with_reference_line(mut self, x: f64) -> Self {
        self.reference_line = Some(x);
        self
    }
}

/// A named figure made of panels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    /// File-name friendly identifier
    pub name: String,
    pub title: String,
    pub panels: Vec<Panel>,
}

impl Figure {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            panels: Vec::new(),
        }
    }

    pub fn with_panel(mut self, panel: Panel) -> Self {
        self.panels.push(panel);
        self
    }

    pub fn panel(&self, title: &str) -> Option<&Panel> {
        self.panels.iter().find(|p| p.title == title)
    }
}
