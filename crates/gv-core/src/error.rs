//! Framework error type.
//!
//! Sub-crates either return `GvError` directly or wrap it as one variant of
//! their own enum via `#[from]`.

use thiserror::Error;

use crate::Day;

/// The top-level error type for `gv-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum GvError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("grid has no nodes; percentages are undefined")]
    EmptyGrid,

    /// Stats were requested for a day the model has not produced yet.
    #[error("stats for {day} requested but only {available} day(s) computed")]
    DayNotComputed { day: Day, available: usize },

    #[error("stats for {got} published out of order (expected {expected})")]
    DayOutOfOrder { expected: Day, got: Day },

    #[error("target percentages for {day} sum to {sum:.2}, expected 100")]
    InvalidTargets { day: Day, sum: f64 },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `gv-*` crates.
pub type GvResult<T> = Result<T, GvError>;
