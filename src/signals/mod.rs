//! Signal evaluation: per-indicator votes and their combination.

pub mod aggregation;
pub mod engine;
pub mod rules;

pub use aggregation::*;
pub use engine::*;
pub use rules::*;
