//! Serde support: sexagesimal triples travel as their catalog text.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::parse::parse_coordinate;
use super::Sexagesimal;

impl Serialize for Sexagesimal {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Sexagesimal {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let text = String::deserialize(d)?;
        parse_coordinate(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::SkyPosition;

    #[test]
    fn test_serialize_as_catalog_text() {
        let c = Sexagesimal::new(19, 47, 12.34);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"19 47 12.34\"");
    }

    #[test]
    fn test_deserialize_round_trip() {
        let c = Sexagesimal::new(5, 3, 2.5);
        let json = serde_json::to_string(&c).unwrap();
        let back: Sexagesimal = serde_json::from_str(&json).unwrap();
        assert_eq!(back, c);
    }

    #[test]
    fn test_deserialize_accepts_signed_catalog_text() {
        let c: Sexagesimal = serde_json::from_str("\"+46 24 24.0\"").unwrap();
        assert_eq!((c.whole, c.minutes), (46, 24));
    }

    #[test]
    fn test_deserialize_rejects_garbage() {
        let result: Result<Sexagesimal, _> = serde_json::from_str("\"not a coordinate\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_position_round_trip() {
        let p = SkyPosition::new(Sexagesimal::new(19, 47, 12.34), Sexagesimal::new(46, 24, 24.0));
        let json = serde_json::to_string(&p).unwrap();
        let back: SkyPosition = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
