//! HTTP client for the Yahoo Finance chart endpoint

use chrono::{NaiveDate, NaiveTime};
use tracing::debug;

use super::messages::ChartResponse;
use crate::config::DataSourceConfig;
use crate::services::market_data::MarketDataError;

const USER_AGENT: &str = "Mozilla/5.0";

pub struct YahooRestClient {
    base_url: String,
    http: reqwest::Client,
}

impl YahooRestClient {
    pub fn new(config: &DataSourceConfig) -> Result<Self, MarketDataError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;
        Ok(Self::with_client(config.base_url.clone(), http))
    }

    pub fn with_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    /// Daily chart between two dates, `end` exclusive.
    ///
    /// The body is decoded even on non-success statuses since the API
    /// reports unknown symbols as a 404 carrying a structured error.
    pub async fn fetch_daily_chart(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ChartResponse, MarketDataError> {
        let url = format!("{}/v8/finance/chart/{}", self.base_url, ticker);
        let period1 = start.and_time(NaiveTime::MIN).and_utc().timestamp();
        let period2 = end.and_time(NaiveTime::MIN).and_utc().timestamp();

        debug!(url = %url, period1, period2, "requesting daily chart");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("period1", period1.to_string()),
                ("period2", period2.to_string()),
                ("interval", "1d".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<ChartResponse>(&body) {
            Ok(chart) => Ok(chart),
            Err(_) if !status.is_success() => Err(MarketDataError::Status {
                status: status.as_u16(),
                body,
            }),
            Err(e) => Err(MarketDataError::InvalidResponse(e.to_string())),
        }
    }
}
