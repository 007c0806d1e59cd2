//! Derives the full indicator bundle from a bar series.

use tracing::debug;

use crate::indicators::momentum::calculate_rsi;
use crate::indicators::trend::calculate_sma;
use crate::indicators::volatility::calculate_bollinger_bands_default;
use crate::models::{BarSeries, IndicatorBundle};

pub const SMA_FAST_PERIOD: usize = 50;
pub const SMA_SLOW_PERIOD: usize = 200;
pub const RSI_PERIOD: usize = 14;
pub const BOLLINGER_PERIOD: usize = 20;
pub const BOLLINGER_STD_DEV: f64 = 2.0;

pub const SMA_50: &str = "SMA_50";
pub const SMA_200: &str = "SMA_200";
pub const RSI_14: &str = "RSI_14";

pub struct IndicatorEngine;

impl IndicatorEngine {
    /// Pure and deterministic; short series produce all-undefined indicators.
    pub fn compute(series: &BarSeries) -> IndicatorBundle {
        let bands = calculate_bollinger_bands_default(series);

        let bundle = IndicatorBundle {
            sma_50: calculate_sma(series, SMA_50, SMA_FAST_PERIOD),
            sma_200: calculate_sma(series, SMA_200, SMA_SLOW_PERIOD),
            rsi_14: calculate_rsi(series, RSI_14, RSI_PERIOD),
            bb_upper: bands.upper,
            bb_middle: bands.middle,
            bb_lower: bands.lower,
        };

        for indicator in bundle.all() {
            debug!(
                indicator = indicator.name,
                defined = indicator.defined_count(),
                total = indicator.len(),
                "indicator computed"
            );
        }

        bundle
    }
}
