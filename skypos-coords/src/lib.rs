//! Coordinate frames and star positions for a ground observer.
//!
//! | Type | Meaning |
//! |------|---------|
//! | [`EquatorialCoordinate`] | Right ascension and declination of a star |
//! | [`GeographicCoordinate`] | Observer latitude and longitude |
//! | [`HorizontalCoordinate`] | Altitude and azimuth in the observer's sky |
//! | [`StarLocator`] | Equatorial to horizontal at a local time, meridian transit |
//!
//! Every constructor validates its ranges and returns a [`CoordResult`].

pub mod errors;
pub mod frames;
pub mod locator;

pub use errors::{CoordError, CoordResult};
pub use frames::{
    EquatorialCoordinate, GeographicCoordinate, HorizontalCoordinate, LatitudeDirection,
    LongitudeDirection,
};
pub use locator::StarLocator;

pub use skypos_core::Angle;
pub use skypos_time::{TimeError, TimeResult};
