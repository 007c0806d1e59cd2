//! Error taxonomy shared across the pipeline layers.

use chrono::NaiveDate;
use thiserror::Error;

use crate::chart::RenderError;
use crate::models::SeriesError;
use crate::services::market_data::MarketDataError;

/// Top-level error for a single analysis run
#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid date range: start {start} must be before end {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("market data error: {0}")]
    MarketData(#[from] MarketDataError),

    #[error("bar series error: {0}")]
    Series(#[from] SeriesError),

    #[error("rendering failed: {0}")]
    Render(#[from] RenderError),
}
