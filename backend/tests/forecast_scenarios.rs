//! End-to-end scenarios for the linear forecast computation.

use linear_forecast::api::{ForecastRequest, ForecastResponse, Point};
use linear_forecast::services::{linear_forecast, ForecastError, ForecastOptions};

fn run(request: &ForecastRequest) -> ForecastResponse {
    linear_forecast(request, &ForecastOptions::default()).expect("forecast should succeed")
}

fn assert_points(actual: &[Point], expected: &[(i64, f64)]) {
    assert_eq!(actual.len(), expected.len(), "point count: {:?}", actual);
    for (point, &(ts, value)) in actual.iter().zip(expected) {
        assert_eq!(point.ts, ts);
        assert!(
            (point.value - value).abs() < 1e-9,
            "ts={} expected {} got {}",
            ts,
            value,
            point.value
        );
    }
}

#[test]
fn test_two_points_default_step() {
    let request = ForecastRequest::new(vec![Point::new(0, 10.0), Point::new(1000, 20.0)], 3000);

    let response = run(&request);

    assert_points(&response.points, &[(2000, 30.0), (3000, 40.0), (4000, 50.0)]);
}

#[test]
fn test_tied_timestamps_floor_delta() {
    let request = ForecastRequest::new(vec![Point::new(5, 1.0), Point::new(5, 2.0)], 10);

    let response = run(&request);

    let expected: Vec<(i64, f64)> = (6..=15).map(|ts| (ts, (ts - 3) as f64)).collect();
    assert_points(&response.points, &expected);
    assert_eq!(response.points.len(), 10);
}

#[test]
fn test_empty_series() {
    let response = run(&ForecastRequest::new(vec![], 100));

    assert!(response.points.is_empty());
}

#[test]
fn test_single_point_series() {
    let response = run(&ForecastRequest::new(vec![Point::new(42, 1.0)], 100).with_step(1));

    assert!(response.points.is_empty());
}

#[test]
fn test_step_larger_than_horizon() {
    let request =
        ForecastRequest::new(vec![Point::new(0, 5.0), Point::new(10, 5.0)], 5).with_step(100);

    let response = run(&request);

    assert!(response.points.is_empty());
}

#[test]
fn test_unsorted_input_matches_sorted() {
    let sorted = ForecastRequest::new(
        vec![Point::new(0, 1.0), Point::new(60, 4.0), Point::new(120, 2.0)],
        240,
    );
    let shuffled = ForecastRequest::new(
        vec![Point::new(120, 2.0), Point::new(0, 1.0), Point::new(60, 4.0)],
        240,
    );

    let a = run(&sorted);
    let b = run(&shuffled);

    assert_eq!(a, b);
    // Slope comes from (60, 4) -> (120, 2): -2 per 60ms.
    assert_points(&a.points, &[(180, 0.0), (240, -2.0), (300, -4.0), (360, -6.0)]);
}

#[test]
fn test_explicit_step_finer_than_observations() {
    let request = ForecastRequest::new(vec![Point::new(0, 0.0), Point::new(1000, 100.0)], 1000)
        .with_step(250);

    let response = run(&request);

    assert_points(
        &response.points,
        &[(1250, 125.0), (1500, 150.0), (1750, 175.0), (2000, 200.0)],
    );
}

#[test]
fn test_negative_step_is_rejected() {
    let request =
        ForecastRequest::new(vec![Point::new(0, 0.0), Point::new(10, 1.0)], 100).with_step(-10);

    let result = linear_forecast(&request, &ForecastOptions::default());

    assert_eq!(result, Err(ForecastError::NonPositiveStep { step: -10 }));
}

#[test]
fn test_cap_rejects_and_unbounded_allows() {
    let request = ForecastRequest::new(vec![Point::new(0, 0.0), Point::new(1, 0.5)], 200_000);

    let capped = linear_forecast(&request, &ForecastOptions::with_max_points(100_000));
    let unbounded = linear_forecast(&request, &ForecastOptions::default()).unwrap();

    assert!(matches!(
        capped,
        Err(ForecastError::TooManyPoints { requested: 200_000, limit: 100_000 })
    ));
    assert_eq!(unbounded.points.len(), 200_000);
    assert_eq!(unbounded.points.last().map(|p| p.ts), Some(200_001));
}
