//! Time scales needed to point at a star: Julian dates, mean sidereal time and
//! the attachment of a civil time zone to a naive local clock reading.
//!
//! All sidereal quantities are in degrees. Nothing here reduces a value into
//! [0°, 360°) unless asked to via `reduced()`.

pub mod julian;
pub mod sidereal;
pub mod zone;

pub use julian::JulianDate;
pub use sidereal::{sidereal_to_solar_rate, GMST, LMST};
pub use zone::attach_zone;

use chrono::NaiveDateTime;
use thiserror::Error;

pub type TimeResult<T> = Result<T, TimeError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TimeError {
    /// The zone skips this wall-clock reading (daylight-saving gap).
    #[error("Local time {local} does not exist in the configured time zone")]
    NonexistentLocalTime { local: NaiveDateTime },

    #[error("Time arithmetic overflow: {message}")]
    Overflow { message: String },
}

impl TimeError {
    pub fn overflow(message: impl Into<String>) -> Self {
        Self::Overflow {
            message: message.into(),
        }
    }
}
