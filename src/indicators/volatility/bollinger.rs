//! Bollinger Bands indicator

use crate::common::math;
use crate::indicators::engine::{BOLLINGER_PERIOD, BOLLINGER_STD_DEV};
use crate::models::{BarSeries, IndicatorSeries};

pub const BB_UPPER: &str = "BB_upper";
pub const BB_MIDDLE: &str = "BB_middle";
pub const BB_LOWER: &str = "BB_lower";

#[derive(Debug, Clone, PartialEq)]
pub struct BollingerBands {
    pub upper: IndicatorSeries,
    pub middle: IndicatorSeries,
    pub lower: IndicatorSeries,
}

/// Calculate Bollinger Bands
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * standard deviation)
/// Lower Band = Middle - (std_dev * standard deviation)
///
/// The deviation is the population figure over the same window.
pub fn calculate_bollinger_bands(series: &BarSeries, period: usize, std_dev: f64) -> BollingerBands {
    let closes = series.closes();
    let middle = math::rolling_mean(&closes, period);
    let std = math::rolling_std(&closes, period);

    let (upper, lower): (Vec<_>, Vec<_>) = middle
        .iter()
        .zip(&std)
        .map(|(m, s)| match (m, s) {
            (Some(m), Some(s)) => (Some(m + std_dev * s), Some(m - std_dev * s)),
            _ => (None, None),
        })
        .unzip();

    let dates = series.dates();
    BollingerBands {
        upper: IndicatorSeries::new(BB_UPPER, dates.clone(), upper),
        middle: IndicatorSeries::new(BB_MIDDLE, dates.clone(), middle),
        lower: IndicatorSeries::new(BB_LOWER, dates, lower),
    }
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn calculate_bollinger_bands_default(series: &BarSeries) -> BollingerBands {
    calculate_bollinger_bands(series, BOLLINGER_PERIOD, BOLLINGER_STD_DEV)
}
