use crate::CoordResult;
use skypos_core::angle::{validate_altitude, validate_azimuth};
use skypos_core::Angle;
use std::fmt;

/// Apparent position in the observer's sky.
///
/// Altitude is measured from the horizon in [-90°, 90°]; azimuth from north
/// through east in [0°, 360°].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HorizontalCoordinate {
    altitude: Angle,
    azimuth: Angle,
}

impl HorizontalCoordinate {
    /// Builds a coordinate from degree subdivisions of both axes.
    pub fn new(
        alt_degree: i32,
        alt_arc_minute: i32,
        alt_arc_second: f64,
        az_degree: i32,
        az_arc_minute: i32,
        az_arc_second: f64,
    ) -> CoordResult<Self> {
        let altitude = Angle::from_dms(alt_degree, alt_arc_minute, alt_arc_second)?;
        let azimuth = Angle::from_dms(az_degree, az_arc_minute, az_arc_second)?;
        Self::from_angles(altitude, azimuth)
    }

    pub fn from_degrees(altitude: f64, azimuth: f64) -> CoordResult<Self> {
        Self::from_angles(Angle::from_degrees(altitude), Angle::from_degrees(azimuth))
    }

    pub fn from_angles(altitude: Angle, azimuth: Angle) -> CoordResult<Self> {
        Ok(Self {
            altitude: validate_altitude(altitude)?,
            azimuth: validate_azimuth(azimuth)?,
        })
    }

    pub fn altitude(&self) -> Angle {
        self.altitude
    }

    pub fn azimuth(&self) -> Angle {
        self.azimuth
    }

    pub fn alt_degree(&self) -> i32 {
        self.altitude.degree()
    }

    pub fn alt_arc_minute(&self) -> i32 {
        self.altitude.arc_minute()
    }

    pub fn alt_arc_second(&self) -> f64 {
        self.altitude.arc_second()
    }

    pub fn alt_degrees(&self) -> f64 {
        self.altitude.degrees()
    }

    pub fn az_degree(&self) -> i32 {
        self.azimuth.degree()
    }

    pub fn az_arc_minute(&self) -> i32 {
        self.azimuth.arc_minute()
    }

    pub fn az_arc_second(&self) -> f64 {
        self.azimuth.arc_second()
    }

    pub fn az_degrees(&self) -> f64 {
        self.azimuth.degrees()
    }

    pub fn is_above_horizon(&self) -> bool {
        self.altitude.degrees() > 0.0
    }
}

impl fmt::Display for HorizontalCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HorizontalCoordinate{{altitude: {}°{}'{:.4}\"({:.4}), azimuth: {}°{}'{:.4}\"({:.4})}}",
            self.alt_degree(),
            self.alt_arc_minute(),
            self.alt_arc_second(),
            self.alt_degrees(),
            self.az_degree(),
            self.az_arc_minute(),
            self.az_arc_second(),
            self.az_degrees()
        )
    }
}
