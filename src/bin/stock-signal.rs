//! Stock Signal
//!
//! Fetches daily bars for one instrument, votes moving-average, RSI and
//! Bollinger signals, and shows a chart labelled Buy, Sell or Hold.

use dotenvy::dotenv;
use stocksignal::chart::EguiChartRenderer;
use stocksignal::config::{get_environment, DataSourceConfig};
use stocksignal::core::pipeline::{no_stock_data_message, Pipeline, RunOutcome, RunRequest};
use stocksignal::logging;
use stocksignal::services::YahooMarketDataProvider;
use tracing::{error, info};

const TICKER: &str = "BTC-USD";
const START_DATE: &str = "2023-10-01";
const END_DATE: &str = "2024-10-01";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    info!(environment = %get_environment(), "Starting Stock Signal");

    let request = RunRequest::parse(TICKER, START_DATE, END_DATE)?;
    let provider = YahooMarketDataProvider::new(&DataSourceConfig::from_env())?;
    let renderer = EguiChartRenderer::new();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let outcome = runtime
        .block_on(Pipeline::run(&provider, &renderer, &request))
        .inspect_err(|e| {
            error!(error = %e, ticker = TICKER, "run failed");
            println!("Run for {TICKER} failed: {e}");
        })?;

    match outcome {
        RunOutcome::Completed(analysis) => {
            println!(
                "{}: {} (signal sum {} over {} bars)",
                analysis.ticker(),
                analysis.recommendation(),
                analysis.signals().signal_sum(),
                analysis.bars().len()
            );
        }
        RunOutcome::NoData { .. } => println!("{}", no_stock_data_message(TICKER)),
    }

    Ok(())
}
