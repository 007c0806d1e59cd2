//! Sequential analysis run: fetch, indicators, signals, chart.

use chrono::NaiveDate;
use tracing::info;

use crate::chart::{ChartRenderer, ChartSpec};
use crate::error::AppError;
use crate::indicators::IndicatorEngine;
use crate::models::{Bar, BarSeries, IndicatorBundle, Recommendation, SignalSeries};
use crate::services::market_data::MarketDataProvider;
use crate::signals::{recommend, SignalEngine};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Instrument and date range for one run; `end` is exclusive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    pub ticker: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl RunRequest {
    pub fn new(ticker: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Result<Self, AppError> {
        if start >= end {
            return Err(AppError::InvalidDateRange { start, end });
        }
        Ok(Self {
            ticker: ticker.into(),
            start,
            end,
        })
    }

    /// Parse `YYYY-MM-DD` dates
    pub fn parse(ticker: impl Into<String>, start: &str, end: &str) -> Result<Self, AppError> {
        Self::new(ticker, parse_date(start)?, parse_date(end)?)
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| AppError::InvalidDate(value.to_string()))
}

/// Everything derived for one instrument. Only built by
/// [`Pipeline::analyze`], so the series is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    ticker: String,
    last: Bar,
    bars: BarSeries,
    indicators: IndicatorBundle,
    signals: SignalSeries,
    recommendation: Recommendation,
}

impl Analysis {
    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn bars(&self) -> &BarSeries {
        &self.bars
    }

    pub fn last_bar(&self) -> &Bar {
        &self.last
    }

    pub fn indicators(&self) -> &IndicatorBundle {
        &self.indicators
    }

    pub fn signals(&self) -> &SignalSeries {
        &self.signals
    }

    pub fn recommendation(&self) -> Recommendation {
        self.recommendation
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The source had no bars; nothing was computed or drawn
    NoData { message: String },
    Completed(Analysis),
}

pub fn no_data_message(ticker: &str) -> String {
    format!("No data found for {ticker}.")
}

pub fn no_stock_data_message(ticker: &str) -> String {
    format!("No stock data available for {ticker}.")
}

pub struct Pipeline;

impl Pipeline {
    /// Indicators, signals and recommendation for a fetched series.
    /// An empty series yields `None`.
    pub fn analyze(ticker: &str, bars: BarSeries) -> Option<Analysis> {
        let last = bars.last()?.clone();

        let indicators = IndicatorEngine::compute(&bars);
        let signals = SignalEngine::evaluate(&bars, &indicators);
        let recommendation = recommend(&signals);

        info!(
            ticker = ticker,
            bars = bars.len(),
            signal_sum = signals.signal_sum(),
            recommendation = %recommendation,
            "analysis complete"
        );

        Some(Analysis {
            ticker: ticker.to_string(),
            last,
            bars,
            indicators,
            signals,
            recommendation,
        })
    }

    /// Run the whole flow once. An empty fetch stops the run with a status
    /// message; fetch and render failures are returned as errors.
    pub async fn run<P, R>(
        provider: &P,
        renderer: &R,
        request: &RunRequest,
    ) -> Result<RunOutcome, AppError>
    where
        P: MarketDataProvider + ?Sized,
        R: ChartRenderer + ?Sized,
    {
        let ticker = request.ticker.as_str();
        info!(ticker = ticker, start = %request.start, end = %request.end, "fetching bars");

        let fetched = provider
            .get_bars(ticker, request.start, request.end)
            .await?;

        let Some(analysis) = fetched.and_then(|bars| Self::analyze(ticker, bars)) else {
            let message = no_data_message(ticker);
            println!("{message}");
            return Ok(RunOutcome::NoData { message });
        };

        renderer.render(&ChartSpec::build(&analysis))?;
        Ok(RunOutcome::Completed(analysis))
    }
}
