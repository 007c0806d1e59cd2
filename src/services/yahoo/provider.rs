//! Yahoo Finance market data provider implementation

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate};
use std::collections::BTreeMap;
use tracing::{info, warn};

use super::client::YahooRestClient;
use super::messages::{ChartResponse, ChartResult, NOT_FOUND_CODE};
use crate::config::DataSourceConfig;
use crate::models::{Bar, BarSeries};
use crate::services::market_data::{print_bar_summary, MarketDataError, MarketDataProvider};

pub struct YahooMarketDataProvider {
    client: YahooRestClient,
}

impl YahooMarketDataProvider {
    pub fn new(config: &DataSourceConfig) -> Result<Self, MarketDataError> {
        Ok(Self::with_client(YahooRestClient::new(config)?))
    }

    pub fn with_client(client: YahooRestClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MarketDataProvider for YahooMarketDataProvider {
    async fn get_bars(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Option<BarSeries>, MarketDataError> {
        let response = self.client.fetch_daily_chart(ticker, start, end).await?;
        let series = bars_from_response(response)?;

        match &series {
            Some(series) => print_bar_summary(ticker, series),
            None => info!(ticker = ticker, %start, %end, "data source returned no bars"),
        }

        Ok(series)
    }
}

/// Convert a chart payload into a bar series, or `None` when it holds no bars
pub fn bars_from_response(response: ChartResponse) -> Result<Option<BarSeries>, MarketDataError> {
    if let Some(error) = response.chart.error {
        if error.code == NOT_FOUND_CODE {
            return Ok(None);
        }
        return Err(MarketDataError::Api {
            code: error.code,
            description: error.description,
        });
    }

    let Some(result) = response.chart.result.and_then(|r| r.into_iter().next()) else {
        return Ok(None);
    };

    let bars = bars_from_result(result)?;
    if bars.is_empty() {
        return Ok(None);
    }
    Ok(Some(BarSeries::new(bars)?))
}

fn bars_from_result(result: ChartResult) -> Result<Vec<Bar>, MarketDataError> {
    let Some(quote) = result.indicators.quote.into_iter().next() else {
        return Ok(Vec::new());
    };

    let offset = result.meta.gmtoffset;

    // Keyed by date so a trailing intraday duplicate replaces the earlier row.
    let mut by_date: BTreeMap<NaiveDate, Bar> = BTreeMap::new();
    let mut skipped = 0usize;

    for (i, &ts) in result.timestamp.iter().enumerate() {
        let Some(close) = column_at(&quote.close, i).filter(|c| c.is_finite()) else {
            skipped += 1;
            continue;
        };

        let date = DateTime::from_timestamp(ts + offset, 0)
            .ok_or_else(|| MarketDataError::InvalidResponse(format!("timestamp {ts} out of range")))?
            .date_naive();

        let bar = Bar::new(
            date,
            column_at(&quote.open, i).unwrap_or(close),
            column_at(&quote.high, i).unwrap_or(close),
            column_at(&quote.low, i).unwrap_or(close),
            close,
            column_at(&quote.volume, i).unwrap_or(0.0),
        );
        by_date.insert(date, bar);
    }

    if skipped > 0 {
        warn!(skipped, "skipped rows without a close price");
    }

    Ok(by_date.into_values().collect())
}

fn column_at(values: &[Option<f64>], i: usize) -> Option<f64> {
    values.get(i).copied().flatten()
}
