use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// Tick values for one axis. Axes ask for at most a few dozen ticks.
pub type TickValues = SmallVec<[f64; 24]>;

/// Upper bound on generated ticks, as a multiple of the requested count.
const MAX_TICKS_PER_REQUESTED: usize = 4;

/// Continuous linear mapping from a numeric domain onto a pixel range.
///
/// A degenerate domain (`start == end`) is accepted: every value then maps to
/// the range start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start: domain.0,
            domain_end: domain.1,
            range_start: range.0,
            range_end: range.1,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn domain_span(self) -> f64 {
        self.domain_end - self.domain_start
    }

    /// Position of `value` inside the domain as a `[0, 1]` fraction (values
    /// outside the domain extrapolate).
    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        let span = self.domain_span();
        if span == 0.0 {
            return 0.0;
        }
        (value - self.domain_start) / span
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let t = self.normalize(value);
        self.range_start * (1.0 - t) + self.range_end * t
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let span = self.range_end - self.range_start;
        if span == 0.0 {
            return self.domain_start;
        }
        let t = (pixel - self.range_start) / span;
        self.domain_start + t * self.domain_span()
    }

    /// Round tick values covering the domain, roughly `count` of them.
    ///
    /// Steps are 1, 2 or 5 times a power of ten. A degenerate domain yields
    /// its single value, and so does a span too small or too large to step
    /// through with a finite step.
    #[must_use]
    pub fn ticks(self, count: usize) -> TickValues {
        let (min, max) = if self.domain_start <= self.domain_end {
            (self.domain_start, self.domain_end)
        } else {
            (self.domain_end, self.domain_start)
        };

        let mut ticks = TickValues::new();
        let span = max - min;
        if span == 0.0 || count == 0 {
            ticks.push(min);
            return ticks;
        }

        // Subnormal spans underflow the step to zero.
        let step = tick_step(span, count);
        if !step.is_finite() || step <= 0.0 {
            ticks.push(min);
            return ticks;
        }

        let first = (min / step).ceil();
        let last = (max / step).floor();
        let limit = count.saturating_mul(MAX_TICKS_PER_REQUESTED) as f64;
        if !first.is_finite() || !last.is_finite() || last < first || last - first > limit {
            ticks.push(min);
            return ticks;
        }

        let inverse = (1.0 / step).round();
        for index in first as i64..=last as i64 {
            let value = if step >= 1.0 || !inverse.is_finite() {
                index as f64 * step
            } else {
                index as f64 / inverse
            };
            ticks.push(value);
        }
        ticks
    }
}

fn tick_step(span: f64, count: usize) -> f64 {
    let raw = span / count as f64;
    let mut step = 10f64.powf(raw.log10().floor());
    let error = count as f64 / span * step;
    if error <= 0.15 {
        step *= 10.0;
    } else if error <= 0.35 {
        step *= 5.0;
    } else if error <= 0.75 {
        step *= 2.0;
    }
    step
}
