//! Combining votes into a per-bar signal

use crate::models::{Recommendation, SignalSeries, Vote};

pub const VOTE_COUNT: f64 = 3.0;

/// Mean of the three votes. Neutral votes count, so the divisor is always 3.
pub fn combined_score(ma: Vote, rsi: Vote, bb: Vote) -> f64 {
    f64::from(ma.as_i8() + rsi.as_i8() + bb.as_i8()) / VOTE_COUNT
}

pub fn final_signal(score: f64) -> Vote {
    Vote::from_score(score)
}

/// Whole-run verdict: sign of the final signal summed over every bar.
/// Long one-sided histories dominate; the latest bar carries no extra weight.
pub fn recommend(signals: &SignalSeries) -> Recommendation {
    Recommendation::from_signal_sum(signals.signal_sum())
}
