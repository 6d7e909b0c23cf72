mod equatorial;
mod geographic;
mod horizontal;
#[cfg(feature = "serde")]
mod serde_;

pub use equatorial::EquatorialCoordinate;
pub use geographic::{GeographicCoordinate, LatitudeDirection, LongitudeDirection};
pub use horizontal::HorizontalCoordinate;
