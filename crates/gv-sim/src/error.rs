use gv_core::{Day, GvError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] GvError),

    /// The epidemic model could not produce a day's stats.
    #[error("epidemic model failed on {day}: {message}")]
    Model { day: Day, message: String },
}

pub type SimResult<T> = Result<T, SimError>;
