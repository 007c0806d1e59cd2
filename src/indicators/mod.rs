pub mod engine;

pub mod momentum;
pub mod trend;
pub mod volatility;

pub use engine::*;
