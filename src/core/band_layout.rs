use tracing::trace;

use crate::core::{LayoutResult, Margin};
use crate::error::{ChartError, ChartResult};

/// Narrowest drawable bar, in pixels.
pub const MIN_BAND_WIDTH: f64 = 2.0;
/// Narrowest gap between two adjacent bars, in pixels.
pub const MIN_PADDING_WIDTH: f64 = 1.0;
/// Padding before the first and after the last band, in pixels.
pub const OUTER_BAND_PADDING: f64 = 0.0;

/// Total content width for `bucket_count` bands of `band_width` pixels,
/// including inter-band padding and horizontal margins.
#[must_use]
pub fn calc_len(bucket_count: usize, band_width: f64, margin: Margin) -> f64 {
    (MIN_PADDING_WIDTH + band_width) * bucket_count as f64
        + OUTER_BAND_PADDING * 2.0
        + margin.horizontal()
}

/// Fits `bucket_count` bands into `target_width`.
///
/// Bars shrink toward `MIN_BAND_WIDTH` before the chart is allowed to grow
/// past `target_width`. On the fitting branch the step size is floored so
/// `band_size` is a whole number of pixels.
///
/// Horizontal margins are added to `len` but do not reduce the per-step
/// budget: `target_width` alone bounds the step size. Callers that expect
/// margins to eat into the target width must subtract them beforehand.
pub fn solve_band_layout(
    target_width: f64,
    margin: Margin,
    bucket_count: usize,
) -> ChartResult<LayoutResult> {
    if !target_width.is_finite() {
        return Err(ChartError::InvalidData(
            "target width must be finite".to_owned(),
        ));
    }
    margin.validate()?;
    if bucket_count == 0 {
        return Err(ChartError::ZeroBucketCount);
    }

    let space_left = target_width - OUTER_BAND_PADDING * 2.0;
    let mut step_size = (space_left + MIN_PADDING_WIDTH) / bucket_count as f64;

    let len = if step_size >= MIN_BAND_WIDTH + MIN_PADDING_WIDTH {
        step_size = step_size.floor();
        trace!(bucket_count, step_size, "band layout fits target width");
        calc_len(bucket_count, step_size - MIN_PADDING_WIDTH, margin)
    } else {
        step_size = MIN_BAND_WIDTH + MIN_PADDING_WIDTH;
        trace!(
            bucket_count,
            target_width,
            "band layout overflows target width at minimum step"
        );
        calc_len(bucket_count, MIN_BAND_WIDTH, margin)
    };

    Ok(LayoutResult {
        len,
        range_padding_ratio: MIN_PADDING_WIDTH / step_size,
        band_size: step_size - 1.0,
    })
}
