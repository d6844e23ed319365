use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One histogram bin keyed by its upper boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    pub upper_bound: i64,
    pub freq: f64,
}

impl Bucket {
    /// Builds a validated bucket. `freq` must be finite and `>= 0`.
    pub fn new(upper_bound: i64, freq: f64) -> ChartResult<Self> {
        if !freq.is_finite() || freq < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "bucket {upper_bound} frequency must be finite and >= 0"
            )));
        }
        Ok(Self { upper_bound, freq })
    }

    #[must_use]
    pub const fn empty(upper_bound: i64) -> Self {
        Self {
            upper_bound,
            freq: 0.0,
        }
    }
}

/// Pixel insets around the plotting area.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margin {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    #[must_use]
    pub fn horizontal(self) -> f64 {
        self.left + self.right
    }

    #[must_use]
    pub fn vertical(self) -> f64 {
        self.top + self.bottom
    }

    pub fn validate(self) -> ChartResult<()> {
        for (side, value) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "margin `{side}` must be finite"
                )));
            }
        }
        Ok(())
    }
}

/// Output of the band layout solver.
///
/// `len` is the total content width including margins, `range_padding_ratio`
/// the share of each step taken by inter-band padding and `band_size` the
/// drawable width of one bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub len: f64,
    pub range_padding_ratio: f64,
    pub band_size: f64,
}

impl LayoutResult {
    /// Pixel width of one band including its padding.
    #[must_use]
    pub fn step_size(self) -> f64 {
        self.band_size + 1.0
    }
}

/// One point of the cumulative overlay line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntegralPoint {
    pub upper_bound: i64,
    pub freq: f64,
}
