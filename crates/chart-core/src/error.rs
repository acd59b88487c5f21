// File: crates/chart-core/src/error.rs
// Summary: Error type for chart configuration and draw preconditions.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    #[error("surface must have positive dimensions, got {width}x{height}")]
    InvalidSurface { width: i32, height: i32 },

    #[error("configured minimum {min} is above configured maximum {max}")]
    InvalidValueBounds { min: f64, max: f64 },

    #[error("entry {index} has a non-finite value ({value})")]
    NonFiniteValue { index: usize, value: f64 },

    #[error("entry index {index} out of range for {len} entries")]
    EntryOutOfRange { index: usize, len: usize },
}
