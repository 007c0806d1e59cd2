//! Technical-indicator signal engine for a single instrument.
//!
//! Fetches daily bars, derives moving averages, RSI and Bollinger Bands,
//! votes them into a per-bar signal and renders an annotated chart.

pub mod chart;
pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod services;
pub mod signals;

pub use error::AppError;
