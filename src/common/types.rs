use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// A single record as returned by the open-data API.
///
/// The API schema is not owned by us, so the record stays an opaque JSON
/// object; the accessors below only read the handful of fields we derive
/// display values from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(Map<String, Value>);

impl RawRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Reads a field as text. Numbers are rendered as their decimal text,
    /// any other JSON type reads as absent.
    pub fn text(&self, field: &str) -> Option<Cow<'_, str>> {
        match self.0.get(field)? {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            _ => None,
        }
    }

    pub fn code_postal(&self) -> Option<Cow<'_, str>> {
        self.text("code_postal")
    }

    pub fn type_construction(&self) -> Option<Cow<'_, str>> {
        self.text("type_construction")
    }

    pub fn service(&self) -> Option<Cow<'_, str>> {
        self.text("service")
    }

    pub fn budget(&self) -> Option<Cow<'_, str>> {
        self.text("budget")
    }

    /// Both coordinates of `geo_point_2d`, or `None` when either is missing.
    pub fn geo_point(&self) -> Option<GeoPoint> {
        let geo = self.0.get("geo_point_2d")?.as_object()?;
        Some(GeoPoint {
            lat: geo.get("lat")?.as_f64()?,
            lon: geo.get("lon")?.as_f64()?,
        })
    }
}

impl From<Map<String, Value>> for RawRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// One page of the records endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecordsPage {
    #[serde(default)]
    pub results: Option<Vec<RawRecord>>,
    #[serde(default)]
    pub total_count: Option<u64>,
}
