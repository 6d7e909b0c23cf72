use super::gmst::GMST;
use skypos_core::angle::reduce_degrees;
use std::fmt;

/// Local mean sidereal time for an observer: GMST plus east longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LMST {
    degrees: f64,
    longitude: f64,
}

impl LMST {
    pub fn from_gmst(gmst: GMST, longitude_deg: f64) -> Self {
        Self {
            degrees: gmst.degrees() + longitude_deg,
            longitude: longitude_deg,
        }
    }

    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn reduced(&self) -> f64 {
        reduce_degrees(self.degrees)
    }

    /// Local hour angle of a target, in degrees: `LST - RA`.
    pub fn hour_angle(&self, right_ascension_deg: f64) -> f64 {
        self.degrees - right_ascension_deg
    }

    pub fn to_gmst(&self) -> GMST {
        GMST::from_degrees(self.degrees - self.longitude)
    }
}

impl fmt::Display for LMST {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LMST {:.6}° at {:.4}°", self.reduced(), self.longitude)
    }
}
