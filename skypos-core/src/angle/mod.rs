mod core;
mod format;
mod normalize;
mod parse;
#[cfg(feature = "serde")]
mod serde_;
mod subdivisions;
mod validate;

pub use core::{Angle, AngleKind};
pub use format::{DmsFmt, HmsFmt};
pub use normalize::reduce_degrees;
pub use parse::{parse_dms, parse_hms, AngleUnits};
pub use subdivisions::Subdivisions;
pub use validate::{
    validate_altitude, validate_azimuth, validate_declination, validate_latitude,
    validate_longitude, validate_magnitudes, validate_right_ascension,
};
