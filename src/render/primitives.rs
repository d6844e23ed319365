use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Vertex of the cumulative overlay polyline in plot coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
}

impl PathPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "path coordinates must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

/// One axis tick: the domain value and where it lands along the axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub position: f64,
}

impl AxisTick {
    #[must_use]
    pub const fn new(value: f64, position: f64) -> Self {
        Self { value, position }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.value.is_finite() || !self.position.is_finite() {
            return Err(ChartError::InvalidData(
                "axis tick must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}
