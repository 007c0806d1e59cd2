//! SMA (Simple Moving Average) indicator

use crate::common::math;
use crate::models::{BarSeries, IndicatorSeries};

/// Trailing mean of `period` closes at every bar; undefined for the first
/// `period - 1` bars, and everywhere when the series is shorter than `period`.
pub fn calculate_sma(series: &BarSeries, name: &'static str, period: usize) -> IndicatorSeries {
    let closes = series.closes();
    IndicatorSeries::new(name, series.dates(), math::rolling_mean(&closes, period))
}
