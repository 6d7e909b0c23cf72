use skypos_core::{InvalidInputKind, SkyError};
use skypos_time::TimeError;
use thiserror::Error;

pub type CoordResult<T> = Result<T, CoordError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoordError {
    #[error("Invalid coordinate: {source}")]
    InvalidCoordinate {
        #[from]
        source: SkyError,
    },

    #[error("Time conversion failed: {source}")]
    TimeConversion {
        #[from]
        source: TimeError,
    },
}

impl CoordError {
    /// The kind of invalid input, if this error came from validation.
    pub fn invalid_input_kind(&self) -> Option<InvalidInputKind> {
        match self {
            Self::InvalidCoordinate { source } => Some(source.kind()),
            Self::TimeConversion { .. } => None,
        }
    }
}
