//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `RwError` as one variant
//! via `From`, so configuration failures raised here propagate with `?`.

use thiserror::Error;

/// The top-level error type for `rw-core` and a common base for sub-crates.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RwError {
    /// Invalid configuration detected at construction time (unknown walker
    /// kind, wrong weight count, statistics cutoff outside the step budget).
    #[error("configuration error: {0}")]
    Config(String),

    /// Malformed textual input (coordinates, weights).
    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for all `rw-*` crates.
pub type RwResult<T> = Result<T, RwError>;
