use histo_layout::core::{Bucket, BucketSeries, integral_series};
use proptest::prelude::*;

proptest! {
    #[test]
    fn integral_is_monotonic_and_ends_at_y_max(
        freqs in proptest::collection::vec(0.0f64..1_000.0, 1..256),
        start in -500i64..500
    ) {
        prop_assume!(freqs.iter().any(|freq| *freq > 0.0));
        let buckets: Vec<Bucket> = freqs
            .iter()
            .enumerate()
            .map(|(offset, freq)| Bucket::new(start + offset as i64, *freq).expect("bucket"))
            .collect();
        let series = BucketSeries::new(buckets).expect("series");
        let y_max = series.max_freq().expect("non-empty");

        let integral = integral_series(&series, y_max).expect("integral");
        prop_assert_eq!(integral.len(), series.len());
        for pair in integral.windows(2) {
            prop_assert!(pair[1].freq >= pair[0].freq);
            prop_assert_eq!(pair[1].upper_bound, pair[0].upper_bound + 1);
        }
        let last = integral.last().expect("non-empty").freq;
        prop_assert!((last - y_max).abs() <= 1e-9 * y_max.max(1.0));
    }
}
