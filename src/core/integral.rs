use tracing::trace;

use crate::core::{BucketSeries, IntegralPoint};
use crate::error::{ChartError, ChartResult};

/// Cumulative overlay for a bucket series, rescaled so its final point equals
/// `y_max`.
///
/// Point `i` holds the sum of frequencies up to and including bucket `i`,
/// multiplied by `y_max / total`. An empty series yields an empty overlay; a
/// series summing to zero has no defined normalization and is rejected.
pub fn integral_series(series: &BucketSeries, y_max: f64) -> ChartResult<Vec<IntegralPoint>> {
    if !y_max.is_finite() {
        return Err(ChartError::InvalidData("y max must be finite".to_owned()));
    }
    if series.is_empty() {
        return Ok(Vec::new());
    }

    let (total, cumulative) = cumulative_sums(series);
    if total == 0.0 {
        return Err(ChartError::DegenerateSeries { total });
    }

    let norm_factor = y_max / total;
    trace!(total, norm_factor, "normalize integral series");
    Ok(cumulative
        .into_iter()
        .map(|point| IntegralPoint {
            freq: point.freq * norm_factor,
            ..point
        })
        .collect())
}

fn cumulative_sums(series: &BucketSeries) -> (f64, Vec<IntegralPoint>) {
    series.iter().fold(
        (0.0, Vec::with_capacity(series.len())),
        |(running, mut points), bucket| {
            let running = running + bucket.freq;
            points.push(IntegralPoint {
                upper_bound: bucket.upper_bound,
                freq: running,
            });
            (running, points)
        },
    )
}
