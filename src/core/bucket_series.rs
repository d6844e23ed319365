use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Bucket, RawBucketRecord};
use crate::error::{ChartError, ChartResult};

/// Upper bound on the number of buckets a densified series may hold.
pub const MAX_DENSE_BUCKETS: usize = 1 << 24;

/// Bucket sequence with strictly ascending, unique `upper_bound` keys.
///
/// The ordering invariant is checked on construction, so every operation on a
/// `BucketSeries` can rely on monotonic ascent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Bucket>", into = "Vec<Bucket>")]
pub struct BucketSeries {
    buckets: Vec<Bucket>,
}

impl BucketSeries {
    pub fn new(buckets: Vec<Bucket>) -> ChartResult<Self> {
        for bucket in &buckets {
            if !bucket.freq.is_finite() || bucket.freq < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "bucket {} frequency must be finite and >= 0",
                    bucket.upper_bound
                )));
            }
        }

        if let Some((index, pair)) = buckets
            .windows(2)
            .enumerate()
            .find(|(_, pair)| pair[1].upper_bound <= pair[0].upper_bound)
        {
            return Err(ChartError::NonMonotonicInput {
                index: index + 1,
                previous: pair[0].upper_bound,
                current: pair[1].upper_bound,
            });
        }

        Ok(Self { buckets })
    }

    /// Coerces textual records and validates the resulting series.
    pub fn from_records(records: &[RawBucketRecord]) -> ChartResult<Self> {
        let buckets = records
            .iter()
            .map(RawBucketRecord::coerce)
            .collect::<ChartResult<Vec<_>>>()?;
        Self::new(buckets)
    }

    /// Returns a gap-free copy of this series.
    ///
    /// Every integer key between the first and last `upper_bound` (inclusive)
    /// is present exactly once; keys missing from the input get `freq = 0`.
    /// Empty and single-bucket series come back unchanged.
    pub fn densify(&self) -> ChartResult<Self> {
        let (Some(first), Some(last)) = (self.buckets.first(), self.buckets.last()) else {
            return Ok(Self::default());
        };

        let span = last
            .upper_bound
            .abs_diff(first.upper_bound)
            .saturating_add(1);
        if span > MAX_DENSE_BUCKETS as u64 {
            return Err(ChartError::DenseRangeTooLarge {
                span,
                limit: MAX_DENSE_BUCKETS,
            });
        }

        let mut source = self.buckets.iter().peekable();
        let dense: Vec<Bucket> = (first.upper_bound..=last.upper_bound)
            .map(|key| {
                source
                    .next_if(|bucket| bucket.upper_bound == key)
                    .copied()
                    .unwrap_or(Bucket::empty(key))
            })
            .collect();

        debug!(
            sparse_count = self.buckets.len(),
            dense_count = dense.len(),
            "densify bucket series"
        );
        Ok(Self { buckets: dense })
    }

    /// Returns `true` when no integer key is missing between the first and
    /// last bucket.
    #[must_use]
    pub fn is_dense(&self) -> bool {
        self.buckets
            .windows(2)
            .all(|pair| pair[1].upper_bound - pair[0].upper_bound == 1)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&Bucket> {
        self.buckets.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Bucket> {
        self.buckets.last()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Bucket] {
        &self.buckets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bucket> {
        self.buckets.iter()
    }

    /// Inclusive `(min, max)` key range, `None` for an empty series.
    #[must_use]
    pub fn key_domain(&self) -> Option<(i64, i64)> {
        Some((self.first()?.upper_bound, self.last()?.upper_bound))
    }

    /// Largest frequency in the series, `None` for an empty series.
    #[must_use]
    pub fn max_freq(&self) -> Option<f64> {
        self.buckets
            .iter()
            .map(|bucket| OrderedFloat(bucket.freq))
            .max()
            .map(OrderedFloat::into_inner)
    }

    /// Sum of all frequencies.
    #[must_use]
    pub fn total_freq(&self) -> f64 {
        self.buckets.iter().map(|bucket| bucket.freq).sum()
    }
}

impl TryFrom<Vec<Bucket>> for BucketSeries {
    type Error = ChartError;

    fn try_from(buckets: Vec<Bucket>) -> ChartResult<Self> {
        Self::new(buckets)
    }
}

impl From<BucketSeries> for Vec<Bucket> {
    fn from(series: BucketSeries) -> Self {
        series.buckets
    }
}

impl<'a> IntoIterator for &'a BucketSeries {
    type Item = &'a Bucket;
    type IntoIter = std::slice::Iter<'a, Bucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter()
    }
}
