//! Main signal evaluation engine.

use tracing::debug;

use crate::models::{BarSeries, IndicatorBundle, SignalRow, SignalSeries};
use crate::signals::aggregation::{combined_score, final_signal};
use crate::signals::rules::{bollinger_vote, ma_vote, rsi_vote};

pub struct SignalEngine;

impl SignalEngine {
    /// Vote every bar and combine the votes into the final signal.
    pub fn evaluate(series: &BarSeries, indicators: &IndicatorBundle) -> SignalSeries {
        let rows: Vec<SignalRow> = series
            .bars()
            .iter()
            .enumerate()
            .map(|(i, bar)| {
                let ma = ma_vote(indicators.sma_50.get(i), indicators.sma_200.get(i));
                let rsi = rsi_vote(indicators.rsi_14.get(i));
                let bb = bollinger_vote(bar.close, indicators.bb_lower.get(i), indicators.bb_upper.get(i));
                let combined = combined_score(ma, rsi, bb);

                SignalRow {
                    date: bar.date,
                    ma,
                    rsi,
                    bb,
                    combined,
                    final_signal: final_signal(combined),
                }
            })
            .collect();

        let signals = SignalSeries::new(rows);
        debug!(
            bars = signals.len(),
            signal_sum = signals.signal_sum(),
            "signals evaluated"
        );
        signals
    }
}
