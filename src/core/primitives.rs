use serde::{Deserialize, Serialize};

use crate::core::Bucket;
use crate::error::{ChartError, ChartResult};

/// Textual bucket record as produced by a CSV-like loader, before coercion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBucketRecord {
    pub freq: String,
    pub upper_bound: String,
}

impl RawBucketRecord {
    #[must_use]
    pub fn new(freq: impl Into<String>, upper_bound: impl Into<String>) -> Self {
        Self {
            freq: freq.into(),
            upper_bound: upper_bound.into(),
        }
    }

    /// Coerces both fields to numbers and validates the resulting bucket.
    pub fn coerce(&self) -> ChartResult<Bucket> {
        let freq = coerce_number(&self.freq, "freq")?;
        let upper_bound = coerce_integer(&self.upper_bound, "upper_bound")?;
        Bucket::new(upper_bound, freq)
    }
}

/// Parses trimmed text as a finite number. Blank text coerces to `0`.
pub fn coerce_number(text: &str, field: &'static str) -> ChartResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ChartError::InvalidRecord {
            field,
            value: text.to_owned(),
        }),
    }
}

/// Parses trimmed text as an integral key. `"7"` and `"7.0"` are accepted,
/// `"7.5"` is not.
pub fn coerce_integer(text: &str, field: &'static str) -> ChartResult<i64> {
    let value = coerce_number(text, field)?;
    if value.fract() != 0.0 || value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(ChartError::InvalidRecord {
            field,
            value: text.to_owned(),
        });
    }
    Ok(value as i64)
}
