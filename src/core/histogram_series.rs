use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::{Bucket, BucketSeries, LinearScale, PixelExactPositionMapper};
use crate::error::{ChartError, ChartResult};

/// Pixel rectangle of one histogram bar in plot coordinates.
///
/// `x`/`y` is the top-left corner; the bar extends down to the plot baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBar {
    pub upper_bound: i64,
    pub freq: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl HistogramBar {
    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }

    /// Half-open containment: left/top edges are inside, right/bottom are not.
    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Projects a (densified) bucket series into bar rectangles.
///
/// Left edges come from the pixel-exact mapper, bar tops from `y_scale`
/// (whose range runs from `plot_height` up to `0`), and every bar is
/// `mapper.band_size()` wide.
pub fn project_histogram_bars(
    series: &BucketSeries,
    mapper: PixelExactPositionMapper,
    y_scale: LinearScale,
    plot_height: f64,
) -> ChartResult<Vec<HistogramBar>> {
    if !plot_height.is_finite() || plot_height < 0.0 {
        return Err(ChartError::InvalidData(
            "plot height must be finite and >= 0".to_owned(),
        ));
    }

    #[cfg(feature = "parallel-projection")]
    {
        Ok(series
            .as_slice()
            .par_iter()
            .map(|bucket| project_single_bar(*bucket, mapper, y_scale, plot_height))
            .collect())
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        Ok(series
            .iter()
            .map(|bucket| project_single_bar(*bucket, mapper, y_scale, plot_height))
            .collect())
    }
}

fn project_single_bar(
    bucket: Bucket,
    mapper: PixelExactPositionMapper,
    y_scale: LinearScale,
    plot_height: f64,
) -> HistogramBar {
    let y = y_scale.map(bucket.freq);
    HistogramBar {
        upper_bound: bucket.upper_bound,
        freq: bucket.freq,
        x: mapper.position(bucket.upper_bound as f64),
        y,
        width: mapper.band_size(),
        height: plot_height - y,
    }
}
