//! RSI (Relative Strength Index) indicator

use crate::common::math;
use crate::models::{BarSeries, IndicatorSeries};

/// Calculate RSI at every bar
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Wilder-smoothed average gain / Wilder-smoothed average loss
///
/// The first bar has no prior close and counts as zero gain and zero loss,
/// so the first defined value lands on bar `period - 1`. A zero average
/// loss reads as 100.
pub fn calculate_rsi(series: &BarSeries, name: &'static str, period: usize) -> IndicatorSeries {
    let closes = series.closes();

    let mut gains = Vec::with_capacity(closes.len());
    let mut losses = Vec::with_capacity(closes.len());
    gains.extend(closes.first().map(|_| 0.0));
    losses.extend(closes.first().map(|_| 0.0));

    for pair in closes.windows(2) {
        let change = pair[1] - pair[0];
        gains.push(change.max(0.0));
        losses.push((-change).max(0.0));
    }

    let avg_gain = math::wilder_ewm(&gains, period);
    let avg_loss = math::wilder_ewm(&losses, period);

    let values = avg_gain
        .into_iter()
        .zip(avg_loss)
        .map(|(gain, loss)| match (gain, loss) {
            (Some(gain), Some(loss)) => Some(rsi_from_averages(gain, loss)),
            _ => None,
        })
        .collect();

    IndicatorSeries::new(name, series.dates(), values)
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    (100.0 - (100.0 / (1.0 + rs))).clamp(0.0, 100.0)
}
