use gpui_chart_cursor::generator::{generate_series_data, ProgressiveTraceGenerator};
use gpui_chart_cursor::CursorConfig;

#[test]
fn test_trace_is_deterministic_per_seed() {
    let a = ProgressiveTraceGenerator::new(3).with_number_of_points(50).generate();
    let b = ProgressiveTraceGenerator::new(3).with_number_of_points(50).generate();
    let c = ProgressiveTraceGenerator::new(4).with_number_of_points(50).generate();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_trace_is_a_bounded_random_walk() {
    let trace = ProgressiveTraceGenerator::new(11).with_number_of_points(200).generate();
    assert_eq!(trace.len(), 200);
    assert!((0.0..1.0).contains(&trace[0].y));
    for (i, pair) in trace.windows(2).enumerate() {
        assert_eq!(pair[0].x, i as f64);
        assert_eq!(pair[1].x, (i + 1) as f64);
        assert!((pair[1].y - pair[0].y).abs() <= 1.0);
    }
}

#[test]
fn test_series_data_uses_frequency_and_order() {
    let config = CursorConfig {
        seed: Some(100),
        sample_count: 20,
        ..CursorConfig::default()
    };
    let data = generate_series_data(&config);
    assert_eq!(data.len(), 3);

    for (i, samples) in data.iter().enumerate() {
        assert_eq!(samples.len(), 20);
        assert_eq!(samples[1].x - samples[0].x, config.data_frequency_ms);

        let expected = ProgressiveTraceGenerator::new(100 + i as u64)
            .with_number_of_points(20)
            .generate();
        let ys: Vec<f64> = samples.iter().map(|s| s.y).collect();
        let expected_ys: Vec<f64> = expected.iter().map(|s| s.y).collect();
        assert_eq!(ys, expected_ys);
    }
}
