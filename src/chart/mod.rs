//! Chart description and rendering backends.
//!
//! [`ChartSpec`] is a backend-neutral picture of the run: price and average
//! lines, the Bollinger band and the recommendation label. Renderers only
//! draw what the [`ChartSpec`] holds.

pub mod window;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use thiserror::Error;

use crate::core::pipeline::Analysis;
use crate::models::{IndicatorSeries, Recommendation};

pub use window::EguiChartRenderer;

pub const BAND_ALPHA: f32 = 0.2;
pub const ANNOTATION_FONT_SIZE: f32 = 15.0;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("chart window failed: {0}")]
    Window(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChartColor {
    Blue,
    Green,
    Red,
    Gray,
    Orange,
}

impl ChartColor {
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            ChartColor::Blue => (31, 119, 180),
            ChartColor::Green => (0, 128, 0),
            ChartColor::Red => (214, 39, 40),
            ChartColor::Gray => (128, 128, 128),
            ChartColor::Orange => (255, 165, 0),
        }
    }
}

impl From<Recommendation> for ChartColor {
    fn from(recommendation: Recommendation) -> Self {
        match recommendation {
            Recommendation::Buy => ChartColor::Green,
            Recommendation::Sell => ChartColor::Red,
            Recommendation::Hold => ChartColor::Orange,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    pub label: String,
    pub color: ChartColor,
    pub points: Vec<(NaiveDate, f64)>,
}

impl LineSeries {
    fn from_indicator(label: &str, color: ChartColor, series: &IndicatorSeries) -> Self {
        Self {
            label: label.to_string(),
            color,
            points: series
                .iter()
                .filter_map(|(date, value)| value.map(|v| (date, v)))
                .collect(),
        }
    }
}

/// Shaded region between two bounds
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Band {
    pub label: String,
    pub color: ChartColor,
    pub alpha: f32,
    /// `(date, lower, upper)` for dates where both bounds exist
    pub points: Vec<(NaiveDate, f64, f64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub date: NaiveDate,
    pub price: f64,
    pub text: String,
    pub color: ChartColor,
    pub font_size: f32,
    pub bold: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub lines: Vec<LineSeries>,
    pub band: Band,
    pub annotation: Annotation,
}

impl ChartSpec {
    /// The label sits on the last bar's close.
    pub fn build(analysis: &Analysis) -> Self {
        let ticker = analysis.ticker();
        let indicators = analysis.indicators();
        let recommendation = analysis.recommendation();
        let last = analysis.last_bar();

        let close = LineSeries {
            label: format!("{ticker} Close Price"),
            color: ChartColor::Blue,
            points: analysis.bars().bars().iter().map(|b| (b.date, b.close)).collect(),
        };

        let band_points = indicators
            .bb_lower
            .iter()
            .zip(indicators.bb_upper.values())
            .filter_map(|((date, lower), upper)| Some((date, lower?, (*upper)?)))
            .collect();

        Self {
            title: format!("{ticker} Stock Price with Indicators"),
            x_label: "Date".to_string(),
            y_label: "Price".to_string(),
            lines: vec![
                close,
                LineSeries::from_indicator("50-Day SMA", ChartColor::Green, &indicators.sma_50),
                LineSeries::from_indicator("200-Day SMA", ChartColor::Red, &indicators.sma_200),
            ],
            band: Band {
                label: "Bollinger Bands".to_string(),
                color: ChartColor::Gray,
                alpha: BAND_ALPHA,
                points: band_points,
            },
            annotation: Annotation {
                date: last.date,
                price: last.close,
                text: recommendation.label().to_string(),
                color: recommendation.into(),
                font_size: ANNOTATION_FONT_SIZE,
                bold: true,
            },
        }
    }
}

/// Plot x coordinate for a date (days from the common era)
pub fn date_to_x(date: NaiveDate) -> f64 {
    f64::from(date.num_days_from_ce())
}

/// Inverse of [`date_to_x`], rounding to the nearest day
pub fn x_to_date(x: f64) -> Option<NaiveDate> {
    if !x.is_finite() || x.abs() > f64::from(i32::MAX) {
        return None;
    }
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
}

/// Draws a finished chart. Failures are reported, never retried.
pub trait ChartRenderer {
    fn render(&self, chart: &ChartSpec) -> Result<(), RenderError>;
}
