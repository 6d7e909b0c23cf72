//! Mean sidereal time in degrees.
//!
//! ```
//! use skypos_time::{JulianDate, GMST};
//!
//! let gmst = GMST::from_julian_date(&JulianDate::j2000());
//! assert!((gmst.degrees() - 280.46061837).abs() < 1e-9);
//! ```

mod gmst;
mod lmst;

pub use gmst::GMST;
pub use lmst::LMST;

/// Ratio of a mean solar day to a mean sidereal day at `t` Julian centuries
/// since J2000.0.
///
/// Divide a sidereal interval by this rate to get the solar interval.
pub fn sidereal_to_solar_rate(t: f64) -> f64 {
    1.002737909350795 + 5.9006e-11 * t - 5.9e-15 * t * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_at_j2000() {
        assert_eq!(sidereal_to_solar_rate(0.0), 1.002737909350795);
    }

    #[test]
    fn test_rate_drifts_slowly() {
        let now = sidereal_to_solar_rate(0.21);
        assert!(now > sidereal_to_solar_rate(0.0));
        assert!((now - 1.002737909350795).abs() < 1e-10);
    }
}
