//! Per-bar votes, the combined signal and the whole-run recommendation.

use chrono::NaiveDate;
use serde::Serialize;

/// Discrete direction in {-1, 0, +1}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
pub enum Vote {
    Sell,
    #[default]
    Hold,
    Buy,
}

impl Vote {
    pub fn as_i8(self) -> i8 {
        match self {
            Vote::Sell => -1,
            Vote::Hold => 0,
            Vote::Buy => 1,
        }
    }

    /// Sign of a score, with sign(0) = Hold
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            Vote::Buy
        } else if score < 0.0 {
            Vote::Sell
        } else {
            Vote::Hold
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignalRow {
    pub date: NaiveDate,
    pub ma: Vote,
    pub rsi: Vote,
    pub bb: Vote,
    pub combined: f64,
    pub final_signal: Vote,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalSeries {
    rows: Vec<SignalRow>,
}

impl SignalSeries {
    pub fn new(rows: Vec<SignalRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[SignalRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn last(&self) -> Option<&SignalRow> {
        self.rows.last()
    }

    /// Sum of the final signal over every bar
    pub fn signal_sum(&self) -> i64 {
        self.rows
            .iter()
            .map(|r| i64::from(r.final_signal.as_i8()))
            .sum()
    }

    pub fn recommendation(&self) -> Recommendation {
        Recommendation::from_signal_sum(self.signal_sum())
    }
}

/// Whole-run verdict derived from the sign of the summed final signals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Recommendation {
    Buy,
    Sell,
    Hold,
}

impl Recommendation {
    pub fn from_signal_sum(sum: i64) -> Self {
        match sum {
            s if s > 0 => Recommendation::Buy,
            s if s < 0 => Recommendation::Sell,
            _ => Recommendation::Hold,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Recommendation::Buy => "Buy",
            Recommendation::Sell => "Sell",
            Recommendation::Hold => "Hold",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
