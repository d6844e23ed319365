use crate::core::{LayoutResult, LinearScale};
use crate::error::{ChartError, ChartResult};

const PIXEL_SNAP_TOLERANCE: f64 = 1e-9;

/// Places bar left edges on whole pixels.
///
/// Plain linear interpolation over `[0, width]` lands integer keys on
/// fractional pixels whenever `width` is not a multiple of the key span, which
/// makes `band_size`-wide rectangles overlap or leave seams once rasterized.
/// The mapper keeps the linear scale for normalization but re-derives the
/// interpolation fraction from the step size, so key `k` maps to
/// `(k - min_key) * step_size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelExactPositionMapper {
    scale: LinearScale,
    band_size: f64,
}

impl PixelExactPositionMapper {
    /// Builds a mapper over `key_domain` onto `[0, width]`.
    pub fn new(key_domain: (i64, i64), width: f64, layout: LayoutResult) -> ChartResult<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(ChartError::InvalidData(
                "position mapper width must be finite and > 0".to_owned(),
            ));
        }
        if !layout.band_size.is_finite() || layout.band_size < 0.0 {
            return Err(ChartError::InvalidData(
                "band size must be finite and >= 0".to_owned(),
            ));
        }

        let scale = LinearScale::new((key_domain.0 as f64, key_domain.1 as f64), (0.0, width))?;
        Ok(Self {
            scale,
            band_size: layout.band_size,
        })
    }

    #[must_use]
    pub fn scale(self) -> LinearScale {
        self.scale
    }

    #[must_use]
    pub fn band_size(self) -> f64 {
        self.band_size
    }

    /// Left-edge pixel of the bar (or tick) at `value`.
    #[must_use]
    pub fn position(self, value: f64) -> f64 {
        let (a, b) = self.scale.range();
        let t = self.scale.normalize(value);
        snap_to_pixel(self.interpolate(a, b, t))
    }

    // Only valid for the scale's own range endpoints and normalized `t`.
    fn interpolate(self, a: f64, b: f64, t: f64) -> f64 {
        let span = self.scale.domain_span();
        if span == 0.0 {
            return a;
        }

        let vstatus = (self.band_size + 1.0) / b;
        let epsilon = 1.0 / span;
        let t0 = (t / epsilon) * vstatus;
        a * (1.0 - t0) + b * t0
    }
}

fn snap_to_pixel(value: f64) -> f64 {
    let rounded = value.round();
    if (value - rounded).abs() <= PIXEL_SNAP_TOLERANCE * rounded.abs().max(1.0) {
        rounded
    } else {
        value
    }
}
