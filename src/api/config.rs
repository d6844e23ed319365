use serde::{Deserialize, Serialize};

use crate::core::Margin;
use crate::error::{ChartError, ChartResult};

/// Width budget used when no suggested width is configured.
pub const DEFAULT_TARGET_WIDTH: f64 = 1220.0;
/// Fixed surface height; the plot height is this minus vertical margins.
pub const CANVAS_HEIGHT: f64 = 760.0;
/// Extra pixels added to the solved content length to get the plot width.
pub const PLOT_WIDTH_SLACK_PX: f64 = 2.0;
pub const X_AXIS_TICK_COUNT: usize = 20;
pub const Y_AXIS_TICK_COUNT: usize = 10;

/// Top-level histogram configuration.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HistogramConfig {
    #[serde(default)]
    pub margin: Margin,
    #[serde(default, alias = "suggestedWidth")]
    pub suggested_width: Option<f64>,
}

impl HistogramConfig {
    #[must_use]
    pub fn new(margin: Margin) -> Self {
        Self {
            margin,
            suggested_width: None,
        }
    }

    #[must_use]
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }

    #[must_use]
    pub fn with_suggested_width(mut self, width: f64) -> Self {
        self.suggested_width = Some(width);
        self
    }

    /// Width budget handed to the band layout solver.
    ///
    /// A missing or zero suggested width falls back to
    /// [`DEFAULT_TARGET_WIDTH`].
    #[must_use]
    pub fn target_width(self) -> f64 {
        match self.suggested_width {
            Some(width) if width != 0.0 => width,
            _ => DEFAULT_TARGET_WIDTH,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        self.margin.validate()?;
        if let Some(width) = self.suggested_width {
            if !width.is_finite() || width < 0.0 {
                return Err(ChartError::InvalidData(
                    "suggested width must be finite and >= 0".to_owned(),
                ));
            }
        }
        if self.margin.vertical() >= CANVAS_HEIGHT {
            return Err(ChartError::InvalidData(format!(
                "vertical margins must leave room inside the {CANVAS_HEIGHT}px canvas"
            )));
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse histogram config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize histogram config: {e}"))
        })
    }
}
