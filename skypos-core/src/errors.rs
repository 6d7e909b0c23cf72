//! Error types for angle construction and parsing.
//!
//! Every failure in this crate is an invalid input: the caller handed over
//! numbers or text that cannot describe a valid angle. [`InvalidInputKind`]
//! records which rule was broken so callers can react without matching on
//! message text.
//!
//! | Kind | Raised when |
//! |------|-------------|
//! | [`InconsistentSign`](InvalidInputKind::InconsistentSign) | Subdivisions mix positive and negative parts |
//! | [`NegativeMagnitude`](InvalidInputKind::NegativeMagnitude) | A magnitude-only input is below zero |
//! | [`OutOfRange`](InvalidInputKind::OutOfRange) | A value leaves its coordinate's range |
//! | [`NotFinite`](InvalidInputKind::NotFinite) | A value is NaN or infinite |
//! | [`Malformed`](InvalidInputKind::Malformed) | Text could not be parsed |
//!
//! ```
//! use skypos_core::{Angle, AngleKind, InvalidInputKind, SkyError};
//!
//! let err = Angle::from_subdivisions(AngleKind::Degree, 44, -22, 36.0).unwrap_err();
//! assert!(matches!(
//!     err,
//!     SkyError::InvalidInput { kind: InvalidInputKind::InconsistentSign, .. }
//! ));
//! ```

use thiserror::Error;

/// Classification of invalid inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInputKind {
    /// Major, minor and seconds parts do not share one sign.
    InconsistentSign,
    /// A magnitude that must be non-negative was negative.
    NegativeMagnitude,
    /// Value outside the valid domain (e.g., declination > 90°).
    OutOfRange,
    /// Value is NaN or infinity.
    NotFinite,
    /// Text input that does not match any accepted notation.
    Malformed,
}

/// Error raised when an angle or coordinate cannot be built from its inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SkyError {
    #[error("Invalid input to {operation} ({kind:?}): {message}")]
    InvalidInput {
        operation: String,
        kind: InvalidInputKind,
        message: String,
    },
}

/// Convenience alias for `Result<T, SkyError>`.
pub type SkyResult<T> = Result<T, SkyError>;

impl SkyError {
    /// Creates an [`InvalidInput`](Self::InvalidInput) error.
    pub fn invalid_input(operation: &str, kind: InvalidInputKind, reason: &str) -> Self {
        Self::InvalidInput {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    pub fn kind(&self) -> InvalidInputKind {
        match self {
            Self::InvalidInput { kind, .. } => *kind,
        }
    }
}
