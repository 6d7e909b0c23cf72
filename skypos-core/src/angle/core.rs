//! Core angle type for positional astronomy.
//!
//! [`Angle`] stores one angular quantity twice: as decimal degrees and as decimal
//! hours (1h = 15°). Each decimal value also carries its own [`Subdivisions`]
//! triple, so an angle can be read as `44°22'36"` or as `2h57m30.4s` without
//! recomputing anything.
//!
//! # Construction
//!
//! There are two construction paths and they agree within floating tolerance:
//!
//! - From a decimal value tagged with an [`AngleKind`]. Both triples are derived
//!   by truncation toward zero.
//! - From explicit subdivisions tagged with an [`AngleKind`]. The triple is kept
//!   as given for that kind; the other kind's triple is derived from the decimal
//!   value. Fails unless all three parts share one sign.
//!
//! ```
//! use skypos_core::{Angle, AngleKind};
//!
//! let from_value = Angle::new(AngleKind::Hour, 2.9584444444444444);
//! let from_parts = Angle::from_subdivisions(AngleKind::Degree, 44, 22, 36.0)?;
//!
//! assert_eq!(from_value.degree(), 44);
//! assert_eq!(from_parts.hour(), 2);
//! assert_eq!(from_parts.minute(), 57);
//! assert!((from_value.degrees() - from_parts.degrees()).abs() < 1e-10);
//! # Ok::<(), skypos_core::SkyError>(())
//! ```
//!
//! # Negative Angles
//!
//! A negative angle has every subdivision at or below zero: -44.3767° reads as
//! `(-44, -22, -36.0)`. This holds even when the major part truncates to zero,
//! so -0.0001° reads as `(0, 0, -0.36)`.

use super::subdivisions::Subdivisions;
use crate::constants::DEGREES_PER_HOUR;
use crate::errors::SkyResult;

/// Selects which unit system a constructor input is expressed in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AngleKind {
    /// Degrees, arcminutes, arcseconds.
    Degree,
    /// Hours, minutes, seconds (1h = 15°).
    Hour,
}

/// An angular quantity with degree and hour views.
///
/// Immutable once built. `degrees() == hours() * 15` always holds, and each
/// subdivision triple reconstructs its own decimal value.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Angle {
    degree_value: f64,
    hour_value: f64,
    dms: Subdivisions,
    hms: Subdivisions,
}

impl Angle {
    pub const ZERO: Self = Self {
        degree_value: 0.0,
        hour_value: 0.0,
        dms: Subdivisions::ZERO,
        hms: Subdivisions::ZERO,
    };

    /// Creates an angle from a decimal value in the given unit.
    ///
    /// Any real value is accepted, including negative values and values
    /// beyond a full circle.
    pub fn new(kind: AngleKind, value: f64) -> Self {
        let (degree_value, hour_value) = match kind {
            AngleKind::Degree => (value, value / DEGREES_PER_HOUR),
            AngleKind::Hour => (value * DEGREES_PER_HOUR, value),
        };
        Self {
            degree_value,
            hour_value,
            dms: Subdivisions::from_value(degree_value),
            hms: Subdivisions::from_value(hour_value),
        }
    }

    /// Creates an angle from explicit subdivisions in the given unit.
    ///
    /// # Errors
    ///
    /// Returns [`InconsistentSign`](crate::InvalidInputKind::InconsistentSign)
    /// unless `major`, `minor` and `seconds` are all non-negative or all
    /// non-positive.
    pub fn from_subdivisions(
        kind: AngleKind,
        major: i32,
        minor: i32,
        seconds: f64,
    ) -> SkyResult<Self> {
        let parts = Subdivisions::new(major, minor, seconds)?;
        let value = parts.to_value();
        let angle = match kind {
            AngleKind::Degree => {
                let hour_value = value / DEGREES_PER_HOUR;
                Self {
                    degree_value: value,
                    hour_value,
                    dms: parts,
                    hms: Subdivisions::from_value(hour_value),
                }
            }
            AngleKind::Hour => {
                let degree_value = value * DEGREES_PER_HOUR;
                Self {
                    degree_value,
                    hour_value: value,
                    dms: Subdivisions::from_value(degree_value),
                    hms: parts,
                }
            }
        };
        Ok(angle)
    }

    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self::new(AngleKind::Degree, deg)
    }

    #[inline]
    pub fn from_hours(h: f64) -> Self {
        Self::new(AngleKind::Hour, h)
    }

    /// Shorthand for [`from_subdivisions`](Self::from_subdivisions) with degrees.
    #[inline]
    pub fn from_dms(degree: i32, arc_minute: i32, arc_second: f64) -> SkyResult<Self> {
        Self::from_subdivisions(AngleKind::Degree, degree, arc_minute, arc_second)
    }

    /// Shorthand for [`from_subdivisions`](Self::from_subdivisions) with hours.
    #[inline]
    pub fn from_hms(hour: i32, minute: i32, second: f64) -> SkyResult<Self> {
        Self::from_subdivisions(AngleKind::Hour, hour, minute, second)
    }

    /// Returns the angle in decimal degrees.
    #[inline]
    pub fn degrees(&self) -> f64 {
        self.degree_value
    }

    /// Returns the angle in decimal hours.
    #[inline]
    pub fn hours(&self) -> f64 {
        self.hour_value
    }

    #[inline]
    pub fn radians(&self) -> f64 {
        self.degree_value.to_radians()
    }

    /// Degree/arcminute/arcsecond triple.
    #[inline]
    pub fn dms(&self) -> Subdivisions {
        self.dms
    }

    /// Hour/minute/second triple.
    #[inline]
    pub fn hms(&self) -> Subdivisions {
        self.hms
    }

    #[inline]
    pub fn degree(&self) -> i32 {
        self.dms.major()
    }

    #[inline]
    pub fn arc_minute(&self) -> i32 {
        self.dms.minor()
    }

    #[inline]
    pub fn arc_second(&self) -> f64 {
        self.dms.seconds()
    }

    #[inline]
    pub fn hour(&self) -> i32 {
        self.hms.major()
    }

    #[inline]
    pub fn minute(&self) -> i32 {
        self.hms.minor()
    }

    #[inline]
    pub fn second(&self) -> f64 {
        self.hms.seconds()
    }

    pub fn is_finite(&self) -> bool {
        self.degree_value.is_finite()
    }
}

impl Default for Angle {
    fn default() -> Self {
        Self::ZERO
    }
}
