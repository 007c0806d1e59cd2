//! Market data provider interface.

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::{Bar, BarSeries, SeriesError};

#[derive(Error, Debug)]
pub enum MarketDataError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("data source error {code}: {description}")]
    Api { code: String, description: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error(transparent)]
    Series(#[from] SeriesError),
}

/// Source of daily bars for one instrument.
///
/// `Ok(None)` means the source has no bars for the range; callers stop the
/// run there instead of treating it as a failure.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Daily bars for `ticker` from `start` (inclusive) to `end` (exclusive)
    async fn get_bars(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Option<BarSeries>, MarketDataError>;
}

/// Serves a fixed series, clipped to the requested range
#[derive(Debug, Clone, Default)]
pub struct InMemoryMarketDataProvider {
    series: BarSeries,
}

impl InMemoryMarketDataProvider {
    pub fn new(series: BarSeries) -> Self {
        Self { series }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MarketDataProvider for InMemoryMarketDataProvider {
    async fn get_bars(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Option<BarSeries>, MarketDataError> {
        let bars = self
            .series
            .bars()
            .iter()
            .filter(|b| b.date >= start && b.date < end)
            .cloned()
            .collect::<Vec<_>>();

        debug!(ticker = ticker, bars = bars.len(), "serving in-memory bars");

        if bars.is_empty() {
            return Ok(None);
        }
        Ok(Some(BarSeries::new(bars)?))
    }
}

/// Rows shown at each end of a fetched series
pub const EDGE_ROWS: usize = 5;

/// Head and tail of `bars`, at most `n` rows each. The tail never repeats a
/// head row, so short series come back whole in the head.
pub fn edge_rows(bars: &[Bar], n: usize) -> (&[Bar], &[Bar]) {
    let head_len = n.min(bars.len());
    let tail_start = bars.len().saturating_sub(n).max(head_len);
    (&bars[..head_len], &bars[tail_start..])
}

/// Header, head/tail rows and row count of a fetched series as printable lines
pub fn format_bar_table(series: &BarSeries) -> Vec<String> {
    let (head, tail) = edge_rows(series.bars(), EDGE_ROWS);
    let mut lines = vec![format!(
        "{:<10}  {:>12}  {:>12}  {:>12}  {:>12}  {:>14}",
        "Date", "Open", "High", "Low", "Close", "Volume"
    )];

    lines.extend(head.iter().map(format_bar_row));
    if !tail.is_empty() {
        if head.len() + tail.len() < series.len() {
            lines.push("...".to_string());
        }
        lines.extend(tail.iter().map(format_bar_row));
    }

    lines.push(format!("[{} rows]", series.len()));
    lines
}

fn format_bar_row(bar: &Bar) -> String {
    format!(
        "{:<10}  {:>12.4}  {:>12.4}  {:>12.4}  {:>12.4}  {:>14.0}",
        bar.date, bar.open, bar.high, bar.low, bar.close, bar.volume
    )
}

/// Print what was fetched to stdout and log a summary
pub fn print_bar_summary(ticker: &str, series: &BarSeries) {
    let (Some(first), Some(last)) = (series.first(), series.last()) else {
        return;
    };

    info!(
        ticker = ticker,
        bars = series.len(),
        first_date = %first.date,
        last_date = %last.date,
        last_close = last.close,
        "fetched daily bars"
    );

    for line in format_bar_table(series) {
        println!("{line}");
    }
}
