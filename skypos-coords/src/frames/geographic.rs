//! Observer position on Earth.
//!
//! The hemisphere is carried by a direction rather than by signed inputs:
//! every subdivision handed to [`GeographicCoordinate::new`] is a magnitude
//! and the direction supplies the sign. Reading the direction back derives it
//! from the stored value, so a zero latitude reports no direction whatever was
//! passed in.

use crate::CoordResult;
use skypos_core::angle::{validate_latitude, validate_longitude, validate_magnitudes};
use skypos_core::{Angle, InvalidInputKind, SkyError};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LatitudeDirection {
    North,
    South,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LongitudeDirection {
    East,
    West,
}

impl LatitudeDirection {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::North => "N",
            Self::South => "S",
        }
    }

    fn sign(direction: Option<Self>) -> i32 {
        match direction {
            Some(Self::South) => -1,
            Some(Self::North) | None => 1,
        }
    }
}

impl LongitudeDirection {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::East => "E",
            Self::West => "W",
        }
    }

    fn sign(direction: Option<Self>) -> i32 {
        match direction {
            Some(Self::West) => -1,
            Some(Self::East) | None => 1,
        }
    }
}

fn unknown_direction(operation: &str, s: &str) -> SkyError {
    SkyError::invalid_input(
        operation,
        InvalidInputKind::Malformed,
        &format!("unknown direction '{}'", s),
    )
}

impl FromStr for LatitudeDirection {
    type Err = SkyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "N" | "NORTH" => Ok(Self::North),
            "S" | "SOUTH" => Ok(Self::South),
            _ => Err(unknown_direction("latitude_direction", s)),
        }
    }
}

impl FromStr for LongitudeDirection {
    type Err = SkyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "E" | "EAST" => Ok(Self::East),
            "W" | "WEST" => Ok(Self::West),
            _ => Err(unknown_direction("longitude_direction", s)),
        }
    }
}

/// Latitude and longitude of an observer, in degrees.
///
/// North and east are positive. `|latitude| <= 90°`, `|longitude| <= 180°`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GeographicCoordinate {
    latitude: Angle,
    longitude: Angle,
}

impl GeographicCoordinate {
    /// Builds a coordinate from direction-signed magnitudes.
    ///
    /// An absent direction counts as north or east.
    ///
    /// ```
    /// use skypos_coords::{GeographicCoordinate, LatitudeDirection, LongitudeDirection};
    ///
    /// let sao_paulo = GeographicCoordinate::new(
    ///     Some(LatitudeDirection::South), 23, 33, 36.0,
    ///     Some(LongitudeDirection::West), 46, 39, 15.0,
    /// )?;
    /// assert_eq!(sao_paulo.lat_degree(), 23);
    /// assert!(sao_paulo.lat_degrees() < 0.0);
    /// # Ok::<(), skypos_coords::CoordError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// `NegativeMagnitude` if any subdivision is below zero, `OutOfRange` if
    /// the latitude exceeds 90° or the longitude 180°.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        lat_direction: Option<LatitudeDirection>,
        lat_degree: i32,
        lat_minute: i32,
        lat_second: f64,
        long_direction: Option<LongitudeDirection>,
        long_degree: i32,
        long_minute: i32,
        long_second: f64,
    ) -> CoordResult<Self> {
        validate_magnitudes("geographic_coordinate", lat_degree, lat_minute, lat_second)?;
        validate_magnitudes("geographic_coordinate", long_degree, long_minute, long_second)?;

        let lat_sign = LatitudeDirection::sign(lat_direction);
        let latitude = Angle::from_dms(
            lat_degree * lat_sign,
            lat_minute * lat_sign,
            lat_second * lat_sign as f64,
        )?;

        let long_sign = LongitudeDirection::sign(long_direction);
        let longitude = Angle::from_dms(
            long_degree * long_sign,
            long_minute * long_sign,
            long_second * long_sign as f64,
        )?;

        Self::from_angles(latitude, longitude)
    }

    /// Builds a coordinate from signed decimal degrees.
    pub fn from_degrees(latitude: f64, longitude: f64) -> CoordResult<Self> {
        Self::from_angles(Angle::from_degrees(latitude), Angle::from_degrees(longitude))
    }

    pub fn from_angles(latitude: Angle, longitude: Angle) -> CoordResult<Self> {
        Ok(Self {
            latitude: validate_latitude(latitude)?,
            longitude: validate_longitude(longitude)?,
        })
    }

    pub fn latitude(&self) -> Angle {
        self.latitude
    }

    pub fn longitude(&self) -> Angle {
        self.longitude
    }

    /// `None` exactly when the latitude is zero.
    pub fn lat_direction(&self) -> Option<LatitudeDirection> {
        let value = self.latitude.degrees();
        if value > 0.0 {
            Some(LatitudeDirection::North)
        } else if value < 0.0 {
            Some(LatitudeDirection::South)
        } else {
            None
        }
    }

    pub fn lat_degree(&self) -> i32 {
        self.latitude.degree().abs()
    }

    pub fn lat_minute(&self) -> i32 {
        self.latitude.arc_minute().abs()
    }

    pub fn lat_second(&self) -> f64 {
        self.latitude.arc_second().abs()
    }

    /// Signed latitude in decimal degrees.
    pub fn lat_degrees(&self) -> f64 {
        self.latitude.degrees()
    }

    /// `None` exactly when the longitude is zero.
    pub fn long_direction(&self) -> Option<LongitudeDirection> {
        let value = self.longitude.degrees();
        if value > 0.0 {
            Some(LongitudeDirection::East)
        } else if value < 0.0 {
            Some(LongitudeDirection::West)
        } else {
            None
        }
    }

    pub fn long_degree(&self) -> i32 {
        self.longitude.degree().abs()
    }

    pub fn long_minute(&self) -> i32 {
        self.longitude.arc_minute().abs()
    }

    pub fn long_second(&self) -> f64 {
        self.longitude.arc_second().abs()
    }

    /// Signed longitude in decimal degrees, east positive.
    pub fn long_degrees(&self) -> f64 {
        self.longitude.degrees()
    }
}

impl fmt::Display for GeographicCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GeographicCoordinate{{lat: {}°{}'{:.4}\"({:.4}) {}, long: {}°{}'{:.4}\"({:.4}) {}}}",
            self.lat_degree(),
            self.lat_minute(),
            self.lat_second(),
            self.lat_degrees(),
            self.lat_direction().map_or("-", |d| d.symbol()),
            self.long_degree(),
            self.long_minute(),
            self.long_second(),
            self.long_degrees(),
            self.long_direction().map_or("-", |d| d.symbol()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LatitudeDirection::{North, South};
    use LongitudeDirection::{East, West};

    const DELTA: f64 = 1e-10;

    #[test]
    fn test_construct_tokyo() {
        let tokyo =
            GeographicCoordinate::new(Some(North), 35, 42, 9.0, Some(East), 139, 44, 42.0).unwrap();
        assert_eq!(tokyo.lat_direction(), Some(North));
        assert_eq!(tokyo.lat_degree(), 35);
        assert_eq!(tokyo.lat_minute(), 42);
        assert!((tokyo.lat_second() - 9.0).abs() < DELTA);
        assert!((tokyo.lat_degrees() - 35.7025).abs() < DELTA);
        assert_eq!(tokyo.long_direction(), Some(East));
        assert_eq!(tokyo.long_degree(), 139);
        assert_eq!(tokyo.long_minute(), 44);
        assert!((tokyo.long_second() - 42.0).abs() < DELTA);
        assert!((tokyo.long_degrees() - 139.74499999999998).abs() < DELTA);
    }

    #[test]
    fn test_construct_sao_paulo() {
        let sao_paulo =
            GeographicCoordinate::new(Some(South), 23, 33, 36.0, Some(West), 46, 39, 15.0).unwrap();
        assert_eq!(sao_paulo.lat_direction(), Some(South));
        assert_eq!(sao_paulo.lat_degree(), 23);
        assert_eq!(sao_paulo.lat_minute(), 33);
        assert!((sao_paulo.lat_second() - 36.0).abs() < DELTA);
        assert_eq!(sao_paulo.lat_degrees(), -23.560000000000002);
        assert_eq!(sao_paulo.long_direction(), Some(West));
        assert_eq!(sao_paulo.long_degree(), 46);
        assert_eq!(sao_paulo.long_minute(), 39);
        assert!((sao_paulo.long_second() - 15.0).abs() < DELTA);
        assert!((sao_paulo.long_degrees() + 46.65416666666667).abs() < DELTA);
    }

    #[test]
    fn test_invalid_latitude() {
        let err =
            GeographicCoordinate::new(Some(North), -1, 0, -1.0, Some(West), 1, 1, 1.0).unwrap_err();
        assert_eq!(
            err.invalid_input_kind(),
            Some(InvalidInputKind::NegativeMagnitude)
        );
        let err = GeographicCoordinate::new(Some(North), 90, 0, 0.0001, Some(West), 1, 1, 1.0)
            .unwrap_err();
        assert_eq!(err.invalid_input_kind(), Some(InvalidInputKind::OutOfRange));
        assert!(GeographicCoordinate::new(None, 0, 0, 0.0, Some(West), 1, 1, 1.0).is_ok());
        assert!(GeographicCoordinate::new(Some(South), 90, 0, 0.0, None, 0, 0, 0.0).is_ok());
    }

    #[test]
    fn test_invalid_longitude() {
        assert!(GeographicCoordinate::new(Some(North), 1, 1, 1.0, Some(West), -1, 0, 0.0).is_err());
        assert!(
            GeographicCoordinate::new(Some(North), 1, 1, 1.0, Some(West), 180, 0, 0.0001).is_err()
        );
        assert!(GeographicCoordinate::new(Some(North), 1, 1, 1.0, None, 0, 0, 0.0).is_ok());
        assert!(GeographicCoordinate::new(Some(North), 1, 1, 1.0, None, 180, 0, 0.0).is_ok());
    }

    #[test]
    fn test_absent_direction_is_positive() {
        let geo = GeographicCoordinate::new(None, 10, 0, 0.0, None, 20, 0, 0.0).unwrap();
        assert_eq!(geo.lat_degrees(), 10.0);
        assert_eq!(geo.lat_direction(), Some(North));
        assert_eq!(geo.long_degrees(), 20.0);
        assert_eq!(geo.long_direction(), Some(East));
    }

    #[test]
    fn test_zero_has_no_direction() {
        let null_island =
            GeographicCoordinate::new(Some(South), 0, 0, 0.0, Some(West), 0, 0, 0.0).unwrap();
        assert_eq!(null_island.lat_direction(), None);
        assert_eq!(null_island.long_direction(), None);
    }

    #[test]
    fn test_from_degrees() {
        let nyc = GeographicCoordinate::from_degrees(40.711389, -74.008056).unwrap();
        assert_eq!(nyc.lat_direction(), Some(North));
        assert_eq!(nyc.long_direction(), Some(West));
        assert_eq!(nyc.long_degree(), 74);
        assert!(GeographicCoordinate::from_degrees(91.0, 0.0).is_err());
        assert!(GeographicCoordinate::from_degrees(0.0, -180.5).is_err());
    }

    #[test]
    fn test_direction_parsing() {
        assert_eq!("N".parse::<LatitudeDirection>().unwrap(), North);
        assert_eq!("south".parse::<LatitudeDirection>().unwrap(), South);
        assert_eq!("w".parse::<LongitudeDirection>().unwrap(), West);
        assert_eq!(East.symbol(), "E");
        let err = "X".parse::<LongitudeDirection>().unwrap_err();
        assert_eq!(err.kind(), InvalidInputKind::Malformed);
    }

    #[test]
    fn test_display() {
        let tokyo =
            GeographicCoordinate::new(Some(North), 35, 42, 9.0, Some(East), 139, 44, 42.0).unwrap();
        assert_eq!(
            tokyo.to_string(),
            "GeographicCoordinate{lat: 35°42'9.0000\"(35.7025) N, long: 139°44'42.0000\"(139.7450) E}"
        );
        let equator = GeographicCoordinate::new(None, 0, 0, 0.0, Some(West), 1, 0, 0.0).unwrap();
        assert!(equator.to_string().starts_with("GeographicCoordinate{lat: 0°0'0.0000\"(0.0000) -,"));
    }
}
