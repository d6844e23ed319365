use serde::{Deserialize, Serialize};

use crate::core::{BucketSeries, HistogramBar, IntegralPoint, LayoutResult, Margin};
use crate::error::{ChartError, ChartResult};
use crate::render::{AxisTick, PathPoint};

/// Backend-agnostic scene for one histogram draw pass.
///
/// All geometry is in plot coordinates: the origin is the top-left corner of
/// the plotting area, already inset by `margin`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramFrame {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub x_domain: (f64, f64),
    pub y_domain: (f64, f64),
    pub layout: LayoutResult,
    pub buckets: BucketSeries,
    /// Normalized cumulative series; `None` when every frequency is zero.
    pub integral: Option<Vec<IntegralPoint>>,
    pub bars: Vec<HistogramBar>,
    pub integral_path: Vec<PathPoint>,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
}

impl HistogramFrame {
    /// Full surface width including horizontal margins.
    #[must_use]
    pub fn canvas_width(&self) -> f64 {
        self.width + self.margin.horizontal()
    }

    /// Full surface height including vertical margins.
    #[must_use]
    pub fn canvas_height(&self) -> f64 {
        self.height + self.margin.vertical()
    }

    /// Converts surface coordinates into plot coordinates.
    #[must_use]
    pub fn canvas_to_plot(&self, x: f64, y: f64) -> (f64, f64) {
        (x - self.margin.left, y - self.margin.top)
    }

    /// Index of the bar under a plot-space point, if any.
    #[must_use]
    pub fn bar_index_at(&self, x: f64, y: f64) -> Option<usize> {
        let candidate = self.bars.partition_point(|bar| bar.x <= x).checked_sub(1)?;
        self.bars[candidate].contains(x, y).then_some(candidate)
    }

    #[must_use]
    pub fn bar_at(&self, x: f64, y: f64) -> Option<&HistogramBar> {
        self.bar_index_at(x, y).map(|index| &self.bars[index])
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ChartError::InvalidData(
                "frame width must be finite and > 0".to_owned(),
            ));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(ChartError::InvalidData(
                "frame height must be finite and > 0".to_owned(),
            ));
        }
        self.margin.validate()?;

        if self.bars.len() != self.buckets.len() {
            return Err(ChartError::InvalidData(format!(
                "frame has {} bars for {} buckets",
                self.bars.len(),
                self.buckets.len()
            )));
        }
        for bar in &self.bars {
            if !bar.x.is_finite()
                || !bar.y.is_finite()
                || !bar.width.is_finite()
                || !bar.height.is_finite()
                || bar.width < 0.0
                || bar.height < 0.0
            {
                return Err(ChartError::InvalidData(format!(
                    "bar {} geometry must be finite and non-negative",
                    bar.upper_bound
                )));
            }
        }

        if let Some(integral) = &self.integral {
            if integral.len() != self.buckets.len() {
                return Err(ChartError::InvalidData(format!(
                    "frame has {} integral points for {} buckets",
                    integral.len(),
                    self.buckets.len()
                )));
            }
        }
        for point in &self.integral_path {
            point.validate()?;
        }
        for tick in self.x_ticks.iter().chain(&self.y_ticks) {
            tick.validate()?;
        }

        Ok(())
    }
}
