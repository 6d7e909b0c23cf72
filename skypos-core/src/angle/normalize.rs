//! Reduction of unbounded angle values into one turn.
//!
//! Sidereal time grows without bound as the Julian date advances, so values
//! such as 7_700_000° are routine. [`reduce_degrees`] brings them back into
//! [0°, 360°).
//!
//! `fmod` (via [`crate::math::fmod`]) keeps the sign of the dividend, so a
//! negative remainder is shifted up by one turn afterwards:
//!
//! - `fmod(-10.0, 360.0)` = `-10.0` → `350.0`
//! - `fmod(370.0, 360.0)` = `10.0`

use crate::constants::DEGREES_PER_CIRCLE;
use crate::math::fmod;

/// Reduces a value in degrees into [0, 360).
///
/// ```
/// use skypos_core::angle::reduce_degrees;
///
/// assert_eq!(reduce_degrees(370.0), 10.0);
/// assert_eq!(reduce_degrees(-10.0), 350.0);
/// ```
#[inline]
pub fn reduce_degrees(degrees: f64) -> f64 {
    let reduced = fmod(degrees, DEGREES_PER_CIRCLE);
    if reduced < 0.0 {
        reduced + DEGREES_PER_CIRCLE
    } else {
        reduced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_in_range_unchanged() {
        assert_eq!(reduce_degrees(0.0), 0.0);
        assert_eq!(reduce_degrees(123.5), 123.5);
    }

    #[test]
    fn test_reduce_full_turn() {
        assert_eq!(reduce_degrees(360.0), 0.0);
        assert_eq!(reduce_degrees(720.0), 0.0);
    }

    #[test]
    fn test_reduce_large_sidereal_value() {
        let reduced = reduce_degrees(7_705_123.25);
        assert!((0.0..360.0).contains(&reduced));
        assert!((reduced - 43.25).abs() < 1e-6);
    }

    #[test]
    fn test_reduce_negative() {
        assert_eq!(reduce_degrees(-370.0), 350.0);
    }
}
