//! End-to-end runs with in-process collaborators.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, NaiveDate};
use stocksignal::chart::{ChartColor, ChartRenderer, ChartSpec, RenderError};
use stocksignal::core::pipeline::{Pipeline, RunOutcome, RunRequest};
use stocksignal::models::{BarSeries, Recommendation};
use stocksignal::services::market_data::{MarketDataError, MarketDataProvider};
use stocksignal::services::InMemoryMarketDataProvider;
use stocksignal::AppError;

#[derive(Default)]
struct RecordingRenderer {
    charts: Mutex<Vec<ChartSpec>>,
}

impl RecordingRenderer {
    fn charts(&self) -> Vec<ChartSpec> {
        self.charts.lock().unwrap().clone()
    }
}

impl ChartRenderer for RecordingRenderer {
    fn render(&self, chart: &ChartSpec) -> Result<(), RenderError> {
        self.charts.lock().unwrap().push(chart.clone());
        Ok(())
    }
}

struct FailingRenderer;

impl ChartRenderer for FailingRenderer {
    fn render(&self, _chart: &ChartSpec) -> Result<(), RenderError> {
        Err(RenderError::Window("no display".to_string()))
    }
}

struct FailingProvider;

#[async_trait]
impl MarketDataProvider for FailingProvider {
    async fn get_bars(
        &self,
        _ticker: &str,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> Result<Option<BarSeries>, MarketDataError> {
        Err(MarketDataError::Api {
            code: "Bad Request".to_string(),
            description: "Invalid input".to_string(),
        })
    }
}

fn request() -> RunRequest {
    RunRequest::parse("BTC-USD", "2023-10-01", "2024-10-01").unwrap()
}

fn uptrend(count: usize) -> BarSeries {
    let start = NaiveDate::from_ymd_opt(2023, 10, 1).unwrap();
    BarSeries::from_closes(
        (0..count).map(|i| (start + Duration::days(i as i64), 100.0 + 0.5 * i as f64)),
    )
    .unwrap()
}

#[tokio::test]
async fn empty_dataset_stops_before_rendering() {
    let provider = InMemoryMarketDataProvider::empty();
    let renderer = RecordingRenderer::default();

    let outcome = Pipeline::run(&provider, &renderer, &request()).await.unwrap();

    assert_eq!(
        outcome,
        RunOutcome::NoData {
            message: "No data found for BTC-USD.".to_string()
        }
    );
    assert!(renderer.charts().is_empty());
}

#[tokio::test]
async fn completed_run_renders_one_annotated_chart() {
    let provider = InMemoryMarketDataProvider::new(uptrend(250));
    let renderer = RecordingRenderer::default();

    let outcome = Pipeline::run(&provider, &renderer, &request()).await.unwrap();

    let RunOutcome::Completed(analysis) = outcome else {
        panic!("expected a completed run");
    };
    assert_eq!(analysis.bars().len(), 250);
    assert_eq!(analysis.recommendation(), Recommendation::Sell);

    let charts = renderer.charts();
    assert_eq!(charts.len(), 1);
    let chart = &charts[0];
    assert_eq!(chart.annotation.text, "Sell");
    assert_eq!(chart.annotation.color, ChartColor::Red);
    assert_eq!(chart.annotation.price, analysis.bars().last().unwrap().close);
    assert_eq!(chart.lines[2].points.len(), 51);
}

#[tokio::test]
async fn short_history_completes_with_hold() {
    let provider = InMemoryMarketDataProvider::new(uptrend(10));
    let renderer = RecordingRenderer::default();

    let outcome = Pipeline::run(&provider, &renderer, &request()).await.unwrap();

    let RunOutcome::Completed(analysis) = outcome else {
        panic!("expected a completed run");
    };
    assert_eq!(analysis.recommendation(), Recommendation::Hold);
    assert_eq!(renderer.charts()[0].annotation.color, ChartColor::Orange);
}

#[tokio::test]
async fn fetch_failure_is_returned() {
    let renderer = RecordingRenderer::default();
    let result = Pipeline::run(&FailingProvider, &renderer, &request()).await;

    assert!(matches!(result, Err(AppError::MarketData(MarketDataError::Api { .. }))));
    assert!(renderer.charts().is_empty());
}

#[tokio::test]
async fn render_failure_is_returned() {
    let provider = InMemoryMarketDataProvider::new(uptrend(30));
    let result = Pipeline::run(&provider, &FailingRenderer, &request()).await;

    assert!(matches!(result, Err(AppError::Render(RenderError::Window(_)))));
}

#[tokio::test]
async fn runs_are_repeatable() {
    let provider = InMemoryMarketDataProvider::new(uptrend(250));
    let renderer = RecordingRenderer::default();

    let first = Pipeline::run(&provider, &renderer, &request()).await.unwrap();
    let second = Pipeline::run(&provider, &renderer, &request()).await.unwrap();

    assert_eq!(first, second);
    let charts = renderer.charts();
    assert_eq!(charts[0], charts[1]);
}
