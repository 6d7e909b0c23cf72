use super::{Angle, Subdivisions};
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// Angles travel as plain decimal degrees. Subdivisions are re-derived on the
// way back in.
impl Serialize for Angle {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(self.degrees())
    }
}

impl<'de> Deserialize<'de> for Angle {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let deg = f64::deserialize(d)?;
        Ok(Angle::from_degrees(deg))
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SubdivisionsRecord {
    major: i32,
    minor: i32,
    seconds: f64,
}

// Mixed-sign triples are rejected here the same way `Subdivisions::new` does.
impl<'de> Deserialize<'de> for Subdivisions {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let r = SubdivisionsRecord::deserialize(d)?;
        Subdivisions::new(r.major, r.minor, r.seconds).map_err(D::Error::custom)
    }
}
