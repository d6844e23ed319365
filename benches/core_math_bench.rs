use criterion::{Criterion, criterion_group, criterion_main};
use histo_layout::api::build_histogram_frame;
use histo_layout::core::{
    Bucket, BucketSeries, Margin, PixelExactPositionMapper, integral_series, solve_band_layout,
};
use std::hint::black_box;

fn sparse_series(count: i64) -> BucketSeries {
    let buckets = (0..count)
        .filter(|i| i % 3 != 1)
        .map(|i| Bucket::new(i, (i % 17) as f64 + 1.0).expect("valid generated bucket"))
        .collect();
    BucketSeries::new(buckets).expect("ascending generated series")
}

fn bench_densify_10k(c: &mut Criterion) {
    let series = sparse_series(10_000);

    c.bench_function("densify_10k", |b| {
        b.iter(|| {
            let _ = black_box(&series).densify().expect("densify");
        })
    });
}

fn bench_pixel_exact_positions_10k(c: &mut Criterion) {
    let layout = solve_band_layout(1220.0, Margin::default(), 10_000).expect("layout");
    let mapper =
        PixelExactPositionMapper::new((0, 9_999), layout.len + 2.0, layout).expect("mapper");

    c.bench_function("pixel_exact_positions_10k", |b| {
        b.iter(|| {
            for key in 0..10_000 {
                black_box(mapper.position(black_box(key as f64)));
            }
        })
    });
}

fn bench_integral_10k(c: &mut Criterion) {
    let series = sparse_series(10_000).densify().expect("densify");
    let y_max = series.max_freq().expect("non-empty");

    c.bench_function("integral_10k", |b| {
        b.iter(|| {
            let _ = integral_series(black_box(&series), black_box(y_max)).expect("integral");
        })
    });
}

fn bench_histogram_frame_2k(c: &mut Criterion) {
    let series = sparse_series(2_000);
    let margin = Margin::new(20.0, 20.0, 30.0, 40.0);

    c.bench_function("histogram_frame_2k", |b| {
        b.iter(|| {
            let _ = build_histogram_frame(black_box(&series), margin, black_box(1220.0))
                .expect("frame should build");
        })
    });
}

criterion_group!(
    benches,
    bench_densify_10k,
    bench_pixel_exact_positions_10k,
    bench_integral_10k,
    bench_histogram_frame_2k
);
criterion_main!(benches);
