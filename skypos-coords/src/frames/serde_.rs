use super::{EquatorialCoordinate, GeographicCoordinate, HorizontalCoordinate};
use serde::de::Error;
use serde::{Deserialize, Deserializer};
use skypos_core::Angle;

// Field names match the derived `Serialize` output. Every record goes back
// through `from_angles`, so out-of-range input fails to deserialize.

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct EquatorialRecord {
    right_ascension: Angle,
    declination: Angle,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct GeographicRecord {
    latitude: Angle,
    longitude: Angle,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct HorizontalRecord {
    altitude: Angle,
    azimuth: Angle,
}

impl<'de> Deserialize<'de> for EquatorialCoordinate {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let r = EquatorialRecord::deserialize(d)?;
        EquatorialCoordinate::from_angles(r.right_ascension, r.declination).map_err(D::Error::custom)
    }
}

impl<'de> Deserialize<'de> for GeographicCoordinate {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let r = GeographicRecord::deserialize(d)?;
        GeographicCoordinate::from_angles(r.latitude, r.longitude).map_err(D::Error::custom)
    }
}

impl<'de> Deserialize<'de> for HorizontalCoordinate {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let r = HorizontalRecord::deserialize(d)?;
        HorizontalCoordinate::from_angles(r.altitude, r.azimuth).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geographic_round_trip() {
        let nyc = GeographicCoordinate::from_degrees(40.711389, -74.008056).unwrap();
        let json = serde_json::to_string(&nyc).unwrap();
        let back: GeographicCoordinate = serde_json::from_str(&json).unwrap();
        assert_eq!(back.lat_degrees(), 40.711389);
        assert_eq!(back.long_degrees(), -74.008056);
    }

    #[test]
    fn test_out_of_range_geographic_rejected() {
        let err = serde_json::from_str::<GeographicCoordinate>(
            r#"{"latitude":200.0,"longitude":-999.0}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("latitude"), "{}", err);
        assert!(serde_json::from_str::<GeographicCoordinate>(
            r#"{"latitude":10.0,"longitude":180.5}"#
        )
        .is_err());
    }

    #[test]
    fn test_out_of_range_horizontal_rejected() {
        let err = serde_json::from_str::<HorizontalCoordinate>(
            r#"{"altitude":500.0,"azimuth":-20.0}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("altitude"), "{}", err);
        assert!(serde_json::from_str::<HorizontalCoordinate>(
            r#"{"altitude":45.0,"azimuth":-20.0}"#
        )
        .is_err());
        assert!(serde_json::from_str::<HorizontalCoordinate>(
            r#"{"altitude":45.0,"azimuth":360.0}"#
        )
        .is_ok());
    }

    #[test]
    fn test_out_of_range_equatorial_rejected() {
        // 720° is 48h of right ascension.
        let err = serde_json::from_str::<EquatorialCoordinate>(
            r#"{"right_ascension":720.0,"declination":135.0}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("right ascension"), "{}", err);
        assert!(serde_json::from_str::<EquatorialCoordinate>(
            r#"{"right_ascension":90.0,"declination":-90.5}"#
        )
        .is_err());
    }

    #[test]
    fn test_missing_and_unknown_fields_rejected() {
        assert!(serde_json::from_str::<HorizontalCoordinate>(r#"{"altitude":10.0}"#).is_err());
        assert!(serde_json::from_str::<HorizontalCoordinate>(
            r#"{"altitude":10.0,"azimuth":20.0,"distance":1.0}"#
        )
        .is_err());
    }
}
