use crate::constants::{MINUTES_PER_UNIT, SECONDS_PER_UNIT};
use crate::errors::{InvalidInputKind, SkyError, SkyResult};
use crate::math::trunc_i32;

/// A sexagesimal split of one decimal value: (major, minor, seconds).
///
/// For degrees this is (degree, arcminute, arcsecond); for hours it is
/// (hour, minute, second). All three parts share the sign of the value.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Subdivisions {
    major: i32,
    minor: i32,
    seconds: f64,
}

impl Subdivisions {
    pub const ZERO: Self = Self {
        major: 0,
        minor: 0,
        seconds: 0.0,
    };

    /// Builds a triple, rejecting mixed signs. Zero counts as either sign.
    pub fn new(major: i32, minor: i32, seconds: f64) -> SkyResult<Self> {
        let non_negative = major >= 0 && minor >= 0 && seconds >= 0.0;
        let non_positive = major <= 0 && minor <= 0 && seconds <= 0.0;
        if !(non_negative || non_positive) {
            return Err(SkyError::invalid_input(
                "subdivisions",
                InvalidInputKind::InconsistentSign,
                &format!(
                    "Sign of subdivisions are not consistent: {}, {}, {}",
                    major, minor, seconds
                ),
            ));
        }
        Ok(Self {
            major,
            minor,
            seconds,
        })
    }

    /// Splits a decimal value by truncating toward zero at each step.
    pub fn from_value(value: f64) -> Self {
        let major = trunc_i32(value);
        let minor_exact = (value - major as f64) * MINUTES_PER_UNIT;
        let minor = trunc_i32(minor_exact);
        let seconds = (minor_exact - minor as f64) * MINUTES_PER_UNIT;
        Self {
            major,
            minor,
            seconds,
        }
    }

    /// `major + minor / 60 + seconds / 3600`.
    #[inline]
    pub fn to_value(&self) -> f64 {
        self.major as f64 + self.minor as f64 / MINUTES_PER_UNIT + self.seconds / SECONDS_PER_UNIT
    }

    #[inline]
    pub fn major(&self) -> i32 {
        self.major
    }

    #[inline]
    pub fn minor(&self) -> i32 {
        self.minor
    }

    #[inline]
    pub fn seconds(&self) -> f64 {
        self.seconds
    }

    pub fn is_negative(&self) -> bool {
        self.major < 0 || self.minor < 0 || self.seconds < 0.0
    }

    /// Magnitudes of the three parts, sign dropped.
    pub fn abs(&self) -> Self {
        Self {
            major: self.major.abs(),
            minor: self.minor.abs(),
            seconds: self.seconds.abs(),
        }
    }
}
