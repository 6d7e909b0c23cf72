use super::core::Angle;
use crate::constants::HOURS_PER_CIRCLE;
use crate::errors::{InvalidInputKind, SkyError, SkyResult};

fn check_finite(operation: &str, angle: &Angle) -> SkyResult<()> {
    if angle.is_finite() {
        return Ok(());
    }
    Err(SkyError::invalid_input(
        operation,
        InvalidInputKind::NotFinite,
        "value is not finite",
    ))
}

fn check_range(
    operation: &str,
    name: &str,
    value: f64,
    range: std::ops::RangeInclusive<f64>,
    unit: &str,
) -> SkyResult<()> {
    if range.contains(&value) {
        return Ok(());
    }
    Err(SkyError::invalid_input(
        operation,
        InvalidInputKind::OutOfRange,
        &format!(
            "{} {:.6}{} outside [{}{}, {}{}]",
            name,
            value,
            unit,
            range.start(),
            unit,
            range.end(),
            unit
        ),
    ))
}

/// Right ascension must lie in [0h, 24h]. No wrapping is applied.
pub fn validate_right_ascension(angle: Angle) -> SkyResult<Angle> {
    check_finite("validate_right_ascension", &angle)?;
    check_range(
        "validate_right_ascension",
        "right ascension",
        angle.hours(),
        0.0..=HOURS_PER_CIRCLE,
        "h",
    )?;
    Ok(angle)
}

pub fn validate_declination(angle: Angle) -> SkyResult<Angle> {
    check_finite("validate_declination", &angle)?;
    check_range(
        "validate_declination",
        "declination",
        angle.degrees(),
        -90.0..=90.0,
        "°",
    )?;
    Ok(angle)
}

pub fn validate_latitude(angle: Angle) -> SkyResult<Angle> {
    check_finite("validate_latitude", &angle)?;
    check_range(
        "validate_latitude",
        "latitude",
        angle.degrees(),
        -90.0..=90.0,
        "°",
    )?;
    Ok(angle)
}

pub fn validate_longitude(angle: Angle) -> SkyResult<Angle> {
    check_finite("validate_longitude", &angle)?;
    check_range(
        "validate_longitude",
        "longitude",
        angle.degrees(),
        -180.0..=180.0,
        "°",
    )?;
    Ok(angle)
}

pub fn validate_altitude(angle: Angle) -> SkyResult<Angle> {
    check_finite("validate_altitude", &angle)?;
    check_range(
        "validate_altitude",
        "altitude",
        angle.degrees(),
        -90.0..=90.0,
        "°",
    )?;
    Ok(angle)
}

/// Azimuth must lie in [0°, 360°]; both ends are accepted.
pub fn validate_azimuth(angle: Angle) -> SkyResult<Angle> {
    check_finite("validate_azimuth", &angle)?;
    check_range(
        "validate_azimuth",
        "azimuth",
        angle.degrees(),
        0.0..=360.0,
        "°",
    )?;
    Ok(angle)
}

/// Rejects subdivision magnitudes below zero, for inputs whose sign is
/// supplied separately (e.g. a compass direction).
pub fn validate_magnitudes(
    operation: &str,
    major: i32,
    minor: i32,
    seconds: f64,
) -> SkyResult<()> {
    if major < 0 || minor < 0 || seconds < 0.0 {
        return Err(SkyError::invalid_input(
            operation,
            InvalidInputKind::NegativeMagnitude,
            &format!(
                "magnitudes should not be negative: {}, {}, {}",
                major, minor, seconds
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_right_ascension() {
        assert!(validate_right_ascension(Angle::from_hours(0.0)).is_ok());
        assert!(validate_right_ascension(Angle::from_hours(24.0)).is_ok());

        let err = validate_right_ascension(Angle::from_hours(24.0001)).unwrap_err();
        assert_eq!(err.kind(), InvalidInputKind::OutOfRange);
        assert!(validate_right_ascension(Angle::from_hours(-0.0001)).is_err());
    }

    #[test]
    fn test_validate_declination() {
        assert!(validate_declination(Angle::from_degrees(-90.0)).is_ok());
        assert!(validate_declination(Angle::from_degrees(90.0)).is_ok());
        assert!(validate_declination(Angle::from_degrees(90.0001)).is_err());
    }

    #[test]
    fn test_validate_not_finite() {
        let err = validate_declination(Angle::from_degrees(f64::NAN)).unwrap_err();
        assert_eq!(err.kind(), InvalidInputKind::NotFinite);
        let err = validate_azimuth(Angle::from_degrees(f64::INFINITY)).unwrap_err();
        assert_eq!(err.kind(), InvalidInputKind::NotFinite);
    }

    #[test]
    fn test_validate_latitude_and_longitude() {
        assert!(validate_latitude(Angle::from_degrees(-90.0)).is_ok());
        assert!(validate_latitude(Angle::from_degrees(-90.5)).is_err());
        assert!(validate_longitude(Angle::from_degrees(-180.0)).is_ok());
        assert!(validate_longitude(Angle::from_degrees(180.0001)).is_err());
    }

    #[test]
    fn test_validate_altitude_and_azimuth() {
        assert!(validate_altitude(Angle::from_degrees(90.0)).is_ok());
        assert!(validate_altitude(Angle::from_degrees(-90.0001)).is_err());
        assert!(validate_azimuth(Angle::from_degrees(0.0)).is_ok());
        assert!(validate_azimuth(Angle::from_degrees(360.0)).is_ok());
        assert!(validate_azimuth(Angle::from_degrees(-0.0001)).is_err());
    }

    #[test]
    fn test_validate_magnitudes() {
        assert!(validate_magnitudes("geo", 0, 0, 0.0).is_ok());
        let err = validate_magnitudes("geo", 1, -1, 0.0).unwrap_err();
        assert_eq!(err.kind(), InvalidInputKind::NegativeMagnitude);
        assert!(validate_magnitudes("geo", 1, 1, -0.5).is_err());
    }

    #[test]
    fn test_error_message_names_range() {
        let err = validate_altitude(Angle::from_degrees(91.0)).unwrap_err();
        assert!(err.to_string().contains("altitude 91.000000° outside [-90°, 90°]"));
    }
}
