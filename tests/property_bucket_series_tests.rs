use std::collections::BTreeMap;

use histo_layout::core::{Bucket, BucketSeries};
use proptest::prelude::*;

proptest! {
    #[test]
    fn densify_covers_every_key_exactly_once(
        entries in proptest::collection::btree_map(-2_000i64..2_000, 0.0f64..100.0, 1..128)
    ) {
        let input: BTreeMap<i64, f64> = entries;
        let buckets: Vec<Bucket> = input
            .iter()
            .map(|(&upper_bound, &freq)| Bucket::new(upper_bound, freq).expect("bucket"))
            .collect();
        let series = BucketSeries::new(buckets).expect("series");
        let dense = series.densify().expect("densify");

        let first = *input.keys().next().expect("non-empty");
        let last = *input.keys().next_back().expect("non-empty");
        prop_assert_eq!(dense.len() as i64, last - first + 1);
        prop_assert!(dense.is_dense());

        for (offset, bucket) in dense.iter().enumerate() {
            let key = first + offset as i64;
            prop_assert_eq!(bucket.upper_bound, key);
            prop_assert_eq!(bucket.freq, input.get(&key).copied().unwrap_or(0.0));
        }

        prop_assert_eq!(dense.densify().expect("densify again"), dense);
    }
}
