//! Per-bar vote rules. An undefined input is always a neutral vote.

use crate::models::Vote;

pub const RSI_OVERSOLD: f64 = 30.0;
pub const RSI_OVERBOUGHT: f64 = 70.0;

/// Buy while the fast average is above the slow one, sell while below
pub fn ma_vote(fast: Option<f64>, slow: Option<f64>) -> Vote {
    match (fast, slow) {
        (Some(f), Some(s)) if f > s => Vote::Buy,
        (Some(f), Some(s)) if f < s => Vote::Sell,
        _ => Vote::Hold,
    }
}

/// Buy when oversold, sell when overbought
pub fn rsi_vote(rsi: Option<f64>) -> Vote {
    match rsi {
        Some(v) if v < RSI_OVERSOLD => Vote::Buy,
        Some(v) if v > RSI_OVERBOUGHT => Vote::Sell,
        _ => Vote::Hold,
    }
}

/// Buy below the lower band, sell above the upper band
pub fn bollinger_vote(close: f64, lower: Option<f64>, upper: Option<f64>) -> Vote {
    if lower.is_some_and(|l| close < l) {
        Vote::Buy
    } else if upper.is_some_and(|u| close > u) {
        Vote::Sell
    } else {
        Vote::Hold
    }
}
