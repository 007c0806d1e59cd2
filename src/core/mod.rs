//! Core application primitives (orchestration)

pub mod pipeline;

pub use pipeline::*;
