use rw_core::{RunId, RwError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] RwError),

    #[error("{run} could not create its walker: {source}")]
    Walker {
        run:    RunId,
        source: RwError,
    },
}

pub type SimResult<T> = Result<T, SimError>;
