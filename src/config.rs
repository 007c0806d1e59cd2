//! Environment-driven settings for the ambient runtime and the data adapter.

use std::env;
use std::time::Duration;

pub const DEFAULT_YAHOO_BASE_URL: &str = "https://query1.finance.yahoo.com";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Deployment environment, read from `APP_ENV` (defaults to `sandbox`)
pub fn get_environment() -> String {
    env::var("APP_ENV")
        .map(|v| v.trim().to_lowercase())
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "sandbox".to_string())
}

/// Settings for the Yahoo Finance adapter
#[derive(Debug, Clone)]
pub struct DataSourceConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl DataSourceConfig {
    /// Read `YAHOO_BASE_URL` and `YAHOO_TIMEOUT_SECONDS`, falling back to defaults
    pub fn from_env() -> Self {
        let base_url = env::var("YAHOO_BASE_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_YAHOO_BASE_URL.to_string());

        let timeout_seconds = env::var("YAHOO_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);

        Self {
            base_url,
            timeout: Duration::from_secs(timeout_seconds),
        }
    }
}

impl Default for DataSourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_YAHOO_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}
