//! Points of interest shown on the impact map

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::geometry::LngLat;

/// Stable identifier of a point of interest
///
/// The page hands us either numeric ids (city records) or string ids, so both
/// are accepted and kept apart: `1` and `"1"` are different POIs.
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum PoiId {
    Number(i64),
    Text(String),
}

struct PoiIdVisitor;

impl<'de> Visitor<'de> for PoiIdVisitor {
    type Value = PoiId;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an integer or string POI id")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<PoiId, E> {
        Ok(PoiId::Number(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<PoiId, E> {
        i64::try_from(v)
            .map(PoiId::Number)
            .map_err(|_| E::custom(format!("POI id {} out of range", v)))
    }

    // JavaScript numbers arrive as f64; accept the integral ones
    fn visit_f64<E: de::Error>(self, v: f64) -> Result<PoiId, E> {
        if v.fract() == 0.0 && v.abs() <= 9_007_199_254_740_991.0 {
            Ok(PoiId::Number(v as i64))
        } else {
            Err(E::custom(format!("POI id {} is not an integer", v)))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<PoiId, E> {
        Ok(PoiId::Text(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<PoiId, E> {
        Ok(PoiId::Text(v))
    }
}

impl<'de> Deserialize<'de> for PoiId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PoiIdVisitor)
    }
}

impl fmt::Display for PoiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoiId::Number(n) => write!(f, "{}", n),
            PoiId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for PoiId {
    fn from(value: i64) -> Self {
        PoiId::Number(value)
    }
}

impl From<i32> for PoiId {
    fn from(value: i32) -> Self {
        PoiId::Number(i64::from(value))
    }
}

impl From<&str> for PoiId {
    fn from(value: &str) -> Self {
        PoiId::Text(value.to_string())
    }
}

/// A geographic marker with the payload its tooltip displays
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Poi {
    pub id: PoiId,
    pub longitude: f64,
    pub latitude: f64,

    /// Everything else on the incoming object (name, counters, links).
    /// Opaque to the engine and handed back to the page untouched.
    #[serde(flatten)]
    pub display_fields: Map<String, Value>,
}

impl Poi {
    pub fn new(id: impl Into<PoiId>, longitude: f64, latitude: f64) -> Self {
        Self {
            id: id.into(),
            longitude,
            latitude,
            display_fields: Map::new(),
        }
    }

    /// Attach a display field, builder style
    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.display_fields.insert(key.to_string(), value.into());
        self
    }

    pub fn lng_lat(&self) -> LngLat {
        LngLat::new(self.longitude, self.latitude)
    }
}
