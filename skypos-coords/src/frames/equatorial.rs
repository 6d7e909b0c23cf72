use crate::CoordResult;
use skypos_core::angle::{validate_declination, validate_right_ascension};
use skypos_core::Angle;
use std::fmt;

/// Position of a star on the celestial sphere.
///
/// Right ascension is kept in hours and must lie in [0h, 24h]; declination in
/// degrees within [-90°, 90°]. Proper motion and epoch drift are ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EquatorialCoordinate {
    right_ascension: Angle,
    declination: Angle,
}

impl EquatorialCoordinate {
    /// Builds a coordinate from hour subdivisions of right ascension and
    /// degree subdivisions of declination.
    ///
    /// ```
    /// use skypos_coords::EquatorialCoordinate;
    ///
    /// let betelgeuse = EquatorialCoordinate::new(5, 56, 19.0, 7, 24, 33.0)?;
    /// assert_eq!(betelgeuse.ra_hour(), 5);
    /// assert!((betelgeuse.ra_degrees() - 89.0791666).abs() < 1e-6);
    /// # Ok::<(), skypos_coords::CoordError>(())
    /// ```
    pub fn new(
        ra_hour: i32,
        ra_minute: i32,
        ra_second: f64,
        dec_degree: i32,
        dec_arc_minute: i32,
        dec_arc_second: f64,
    ) -> CoordResult<Self> {
        let right_ascension = Angle::from_hms(ra_hour, ra_minute, ra_second)?;
        let declination = Angle::from_dms(dec_degree, dec_arc_minute, dec_arc_second)?;
        Self::from_angles(right_ascension, declination)
    }

    pub fn from_angles(right_ascension: Angle, declination: Angle) -> CoordResult<Self> {
        Ok(Self {
            right_ascension: validate_right_ascension(right_ascension)?,
            declination: validate_declination(declination)?,
        })
    }

    pub fn right_ascension(&self) -> Angle {
        self.right_ascension
    }

    pub fn declination(&self) -> Angle {
        self.declination
    }

    pub fn ra_degrees(&self) -> f64 {
        self.right_ascension.degrees()
    }

    pub fn ra_hours(&self) -> f64 {
        self.right_ascension.hours()
    }

    pub fn ra_hour(&self) -> i32 {
        self.right_ascension.hour()
    }

    pub fn ra_minute(&self) -> i32 {
        self.right_ascension.minute()
    }

    pub fn ra_second(&self) -> f64 {
        self.right_ascension.second()
    }

    pub fn dec_degrees(&self) -> f64 {
        self.declination.degrees()
    }

    pub fn dec_degree(&self) -> i32 {
        self.declination.degree()
    }

    pub fn dec_arc_minute(&self) -> i32 {
        self.declination.arc_minute()
    }

    pub fn dec_arc_second(&self) -> f64 {
        self.declination.arc_second()
    }
}

impl fmt::Display for EquatorialCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EquatorialCoordinate{{ra: {}h{}m{:.4}s({:.4}), dec: {}°{}'{:.4}\"({:.4})}}",
            self.ra_hour(),
            self.ra_minute(),
            self.ra_second(),
            self.ra_hours(),
            self.dec_degree(),
            self.dec_arc_minute(),
            self.dec_arc_second(),
            self.dec_degrees()
        )
    }
}
