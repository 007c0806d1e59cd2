//! Unit tests for the indicator bundle

use chrono::{Duration, NaiveDate};
use stocksignal::indicators::volatility::{calculate_bollinger_bands, calculate_bollinger_bands_default};
use stocksignal::indicators::{IndicatorEngine, BOLLINGER_PERIOD, BOLLINGER_STD_DEV, SMA_200, SMA_50};
use stocksignal::models::BarSeries;

fn create_series(count: usize) -> BarSeries {
    let start = NaiveDate::from_ymd_opt(2023, 10, 1).unwrap();
    BarSeries::from_closes((0..count).map(|i| {
        let close = 100.0 + 5.0 * (i as f64 * 0.3).sin() + i as f64 * 0.05;
        (start + Duration::days(i as i64), close)
    }))
    .unwrap()
}

#[test]
fn test_short_series_leaves_sma_undefined() {
    let bundle = IndicatorEngine::compute(&create_series(49));
    assert_eq!(bundle.sma_50.defined_count(), 0);
    assert_eq!(bundle.sma_200.defined_count(), 0);
    assert_eq!(bundle.len(), 49);
}

#[test]
fn test_defined_counts_follow_windows() {
    let bundle = IndicatorEngine::compute(&create_series(250));
    assert_eq!(bundle.sma_50.defined_count(), 201);
    assert_eq!(bundle.sma_200.defined_count(), 51);
    assert_eq!(bundle.rsi_14.defined_count(), 237);
    assert_eq!(bundle.bb_upper.defined_count(), 231);
    assert_eq!(bundle.bb_middle.defined_count(), 231);
    assert_eq!(bundle.bb_lower.defined_count(), 231);
    assert_eq!(bundle.sma_50.name, SMA_50);
    assert_eq!(bundle.sma_200.name, SMA_200);
}

#[test]
fn test_band_ordering() {
    let bundle = IndicatorEngine::compute(&create_series(100));
    for i in 19..100 {
        let lower = bundle.bb_lower.get(i).unwrap();
        let middle = bundle.bb_middle.get(i).unwrap();
        let upper = bundle.bb_upper.get(i).unwrap();
        assert!(lower <= middle && middle <= upper);
    }
}

#[test]
fn test_compute_is_deterministic() {
    let series = create_series(250);
    assert_eq!(IndicatorEngine::compute(&series), IndicatorEngine::compute(&series));
}

#[test]
fn test_empty_series() {
    let bundle = IndicatorEngine::compute(&BarSeries::default());
    assert!(bundle.is_empty());
}

#[test]
fn test_bundle_uses_default_bollinger_bands() {
    let series = create_series(120);
    let bundle = IndicatorEngine::compute(&series);
    let defaults = calculate_bollinger_bands_default(&series);
    let explicit = calculate_bollinger_bands(&series, BOLLINGER_PERIOD, BOLLINGER_STD_DEV);

    assert_eq!(bundle.bb_upper, defaults.upper);
    assert_eq!(bundle.bb_middle, defaults.middle);
    assert_eq!(bundle.bb_lower, defaults.lower);
    assert_eq!(defaults.upper, explicit.upper);
    assert_eq!(bundle.bb_upper.defined_count(), 120 - BOLLINGER_PERIOD + 1);
}
