//! Unit tests for Bollinger Bands

use chrono::{Duration, NaiveDate};
use stocksignal::indicators::volatility::{calculate_bollinger_bands, calculate_bollinger_bands_default};
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

#[test]
fn test_bollinger_insufficient_data() {
    let series = series_from(&[100.0; 19]);
    let bands = calculate_bollinger_bands_default(&series);
    assert_eq!(bands.upper.defined_count(), 0);
    assert_eq!(bands.middle.defined_count(), 0);
    assert_eq!(bands.lower.defined_count(), 0);
}

#[test]
fn test_bollinger_flat_series_collapses() {
    let series = series_from(&[50.0; 25]);
    let bands = calculate_bollinger_bands_default(&series);
    assert_eq!(bands.middle.get(19), Some(50.0));
    assert_eq!(bands.upper.get(24), Some(50.0));
    assert_eq!(bands.lower.get(24), Some(50.0));
    assert_eq!(bands.upper.defined_count(), 6);
}

#[test]
fn test_bollinger_values() {
    let series = series_from(&[1.0, 2.0, 3.0]);
    let bands = calculate_bollinger_bands(&series, 3, 2.0);
    let std = (2.0f64 / 3.0).sqrt();
    assert_eq!(bands.middle.get(2), Some(2.0));
    assert!((bands.upper.get(2).unwrap() - (2.0 + 2.0 * std)).abs() < 1e-12);
    assert!((bands.lower.get(2).unwrap() - (2.0 - 2.0 * std)).abs() < 1e-12);
}

#[test]
fn test_bollinger_names() {
    let bands = calculate_bollinger_bands_default(&series_from(&[1.0]));
    assert_eq!(bands.upper.name, "BB_upper");
    assert_eq!(bands.middle.name, "BB_middle");
    assert_eq!(bands.lower.name, "BB_lower");
}
