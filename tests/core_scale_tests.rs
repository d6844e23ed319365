use histo_layout::core::LinearScale;

#[test]
fn scale_round_trip_within_tolerance() {
    let scale = LinearScale::new((10.0, 110.0), (0.0, 1000.0)).expect("valid scale");

    let original = 42.5;
    let px = scale.map(original);
    let recovered = scale.invert(px);

    assert!((recovered - original).abs() <= 1e-9);
}

#[test]
fn inverted_range_maps_domain_top_to_zero() {
    let scale = LinearScale::new((0.0, 50.0), (700.0, 0.0)).expect("valid scale");
    assert_eq!(scale.map(0.0), 700.0);
    assert_eq!(scale.map(50.0), 0.0);
    assert_eq!(scale.map(25.0), 350.0);
}

#[test]
fn degenerate_domain_maps_to_range_start() {
    let scale = LinearScale::new((0.0, 0.0), (700.0, 0.0)).expect("valid scale");
    assert_eq!(scale.normalize(0.0), 0.0);
    assert_eq!(scale.map(0.0), 700.0);
}

#[test]
fn non_finite_bounds_are_rejected() {
    assert!(LinearScale::new((0.0, f64::NAN), (0.0, 1.0)).is_err());
    assert!(LinearScale::new((0.0, 1.0), (f64::NEG_INFINITY, 1.0)).is_err());
}

#[test]
fn ticks_use_round_steps() {
    let scale = LinearScale::new((0.0, 10.0), (0.0, 500.0)).expect("valid scale");
    let ticks = scale.ticks(20);

    assert_eq!(ticks.len(), 21);
    assert_eq!(ticks[0], 0.0);
    assert_eq!(ticks[1], 0.5);
    assert_eq!(ticks[20], 10.0);
}

#[test]
fn ticks_stay_inside_domain() {
    let scale = LinearScale::new((3.0, 97.0), (0.0, 500.0)).expect("valid scale");
    let ticks = scale.ticks(10);

    assert_eq!(ticks.first().copied(), Some(10.0));
    assert_eq!(ticks.last().copied(), Some(90.0));
    assert!(ticks.windows(2).all(|pair| (pair[1] - pair[0] - 10.0).abs() <= 1e-9));
}

#[test]
fn ticks_of_degenerate_domain_is_single_value() {
    let scale = LinearScale::new((4.0, 4.0), (0.0, 10.0)).expect("valid scale");
    assert_eq!(scale.ticks(10).as_slice(), &[4.0]);
}

#[test]
fn small_steps_do_not_accumulate_float_noise() {
    let scale = LinearScale::new((0.0, 1.0), (0.0, 100.0)).expect("valid scale");
    let ticks = scale.ticks(10);
    assert_eq!(ticks[3], 0.3);
    assert_eq!(ticks[7], 0.7);
}

#[test]
fn subnormal_span_yields_single_tick() {
    let scale = LinearScale::new((0.0, 5e-324), (760.0, 0.0)).expect("valid scale");
    assert_eq!(scale.ticks(10).as_slice(), &[0.0]);
}

#[test]
fn tiny_spans_keep_tick_count_bounded() {
    for max in [1e-310, 1e-300, f64::MIN_POSITIVE, 1e-12] {
        let scale = LinearScale::new((0.0, max), (760.0, 0.0)).expect("valid scale");
        let ticks = scale.ticks(10);
        assert!(!ticks.is_empty(), "no ticks for {max}");
        assert!(ticks.len() <= 40, "{} ticks for {max}", ticks.len());
        assert!(ticks.iter().all(|tick| tick.is_finite()));
    }
}

#[test]
fn huge_domain_ticks_stay_bounded() {
    let scale = LinearScale::new((-f64::MAX, f64::MAX), (0.0, 100.0)).expect("valid scale");
    let ticks = scale.ticks(10);
    assert!(!ticks.is_empty());
    assert!(ticks.len() <= 40);
}
