//! Shared data models spanning the engine layers.

pub mod bars;
pub mod indicators;
pub mod signal;

pub use bars::{Bar, BarSeries, SeriesError};
pub use indicators::{IndicatorBundle, IndicatorSeries};
pub use signal::{Recommendation, SignalRow, SignalSeries, Vote};
