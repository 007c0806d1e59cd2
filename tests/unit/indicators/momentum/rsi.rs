//! Unit tests for RSI indicator

use chrono::{Duration, NaiveDate};
use stocksignal::indicators::momentum::calculate_rsi;
use stocksignal::models::BarSeries;

fn series_from(closes: &[f64]) -> BarSeries {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    BarSeries::from_closes(
        closes
            .iter()
            .enumerate()
            .map(|(i, &c)| (start + Duration::days(i as i64), c)),
    )
    .unwrap()
}

fn oscillating_closes(count: usize) -> Vec<f64> {
    (0..count)
        .map(|i| 100.0 + 10.0 * (i as f64 * 0.7).sin() + i as f64 * 0.1)
        .collect()
}

#[test]
fn test_rsi_insufficient_data() {
    let series = series_from(&oscillating_closes(13));
    let rsi = calculate_rsi(&series, "RSI_14", 14);
    assert_eq!(rsi.defined_count(), 0);
}

#[test]
fn test_rsi_first_value_at_window_end() {
    let series = series_from(&oscillating_closes(30));
    let rsi = calculate_rsi(&series, "RSI_14", 14);
    assert_eq!(rsi.get(12), None);
    assert!(rsi.get(13).is_some());
    assert_eq!(rsi.defined_count(), 17);
}

#[test]
fn test_rsi_wilder_smoothing() {
    // gains [0, 1, 1, 0], losses [0, 0, 0, 1], alpha 1/2
    let series = series_from(&[1.0, 2.0, 3.0, 2.0]);
    let rsi = calculate_rsi(&series, "RSI_2", 2);
    assert_eq!(rsi.get(0), None);
    assert_eq!(rsi.get(1), Some(100.0));
    assert_eq!(rsi.get(2), Some(100.0));
    let last = rsi.get(3).unwrap();
    assert!((last - (100.0 - 100.0 / 1.75)).abs() < 1e-9);
}

#[test]
fn test_rsi_bounds() {
    let series = series_from(&oscillating_closes(300));
    let rsi = calculate_rsi(&series, "RSI_14", 14);
    for value in rsi.values().iter().flatten() {
        assert!((0.0..=100.0).contains(value), "RSI out of range: {value}");
    }
}

#[test]
fn test_rsi_extremes() {
    let rising: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
    let falling: Vec<f64> = (0..20).map(|i| 100.0 - i as f64).collect();

    let up = calculate_rsi(&series_from(&rising), "RSI_14", 14);
    let down = calculate_rsi(&series_from(&falling), "RSI_14", 14);

    assert_eq!(up.get(19), Some(100.0));
    assert_eq!(down.get(19), Some(0.0));
}
