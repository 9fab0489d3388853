//! Plane-subsystem error type.

use thiserror::Error;

use rw_core::RwError;

/// Errors produced by `rw-plane` (coordinate parsing only; geometry itself
/// cannot fail).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlaneError {
    #[error("invalid coordinate {value:?}: {reason}")]
    InvalidNumber { value: String, reason: String },

    #[error("{what} coordinates must come in groups of {group}, got {got} values")]
    CoordinateCount {
        what:  &'static str,
        group: usize,
        got:   usize,
    },
}

impl From<PlaneError> for RwError {
    fn from(e: PlaneError) -> Self {
        RwError::Parse(e.to_string())
    }
}

pub type PlaneResult<T> = Result<T, PlaneError>;
