use super::lmst::LMST;
use crate::JulianDate;
use log::trace;
use skypos_core::angle::reduce_degrees;
use skypos_core::constants::DEGREES_PER_HOUR;
use std::fmt;

/// Greenwich mean sidereal time, in degrees, not range-reduced.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GMST(f64);

impl GMST {
    /// `280.46061837 + 360.98564736629*d + 0.000387933*T² - T³/38710000`
    /// where `d` is days and `T` centuries since J2000.0.
    pub fn from_julian_date(jd: &JulianDate) -> Self {
        let d = jd.days_since_j2000();
        let t = jd.julian_centuries();
        let degrees =
            280.46061837 + 360.98564736629 * d + 0.000387933 * t * t - t * t * t / 38710000.0;
        trace!("GMST for {}: T={:.12} θ0={:.9}°", jd, t, degrees);
        Self(degrees)
    }

    pub fn from_degrees(degrees: f64) -> Self {
        Self(degrees)
    }

    pub fn degrees(&self) -> f64 {
        self.0
    }

    pub fn hours(&self) -> f64 {
        self.0 / DEGREES_PER_HOUR
    }

    /// The same instant in [0°, 360°).
    pub fn reduced(&self) -> f64 {
        reduce_degrees(self.0)
    }

    /// Shifts to an observer at `longitude_deg` (east positive).
    pub fn to_lmst(&self, longitude_deg: f64) -> LMST {
        LMST::from_gmst(*self, longitude_deg)
    }
}

impl fmt::Display for GMST {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GMST {:.6}°", self.reduced())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gmst_j2000() {
        let gmst = GMST::from_julian_date(&JulianDate::j2000());
        assert_eq!(gmst.degrees(), 280.46061837);
        assert!((gmst.hours() - 18.697374558).abs() < 1e-9);
    }

    #[test]
    fn test_gmst_is_not_reduced() {
        let jd = JulianDate::from_calendar(2021, 1, 15, 13, 30, 10.0);
        let gmst = GMST::from_julian_date(&jd);
        assert!((gmst.degrees() - 2774477.7640291303).abs() < 1e-6);
        assert!((gmst.reduced() - 317.7640291303).abs() < 1e-6);
    }

    #[test]
    fn test_one_sidereal_day_later() {
        let a = GMST::from_julian_date(&JulianDate::new(2459230.0, 0.0));
        let b = GMST::from_julian_date(&JulianDate::new(2459231.0, 0.0));
        assert!((b.degrees() - a.degrees() - 360.98564736629).abs() < 1e-6);
    }

    #[test]
    fn test_display_is_reduced() {
        assert_eq!(GMST::from_degrees(725.5).to_string(), "GMST 5.500000°");
    }
}
