//! GeoJSON geometry helpers.

use serde_json::Value as JsonValue;

/// Spatial reference of every stored geometry (WGS84).
pub const SRID: i32 = 4326;

/// Geometry types stored by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    Point,
    LineString,
    Polygon,
}

impl GeometryKind {
    /// GeoJSON `type` member for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Point => "Point",
            Self::LineString => "LineString",
            Self::Polygon => "Polygon",
        }
    }

    /// Check that a GeoJSON object is of this kind and carries coordinates.
    pub fn matches(&self, geom: &JsonValue) -> bool {
        geom.get("type").and_then(JsonValue::as_str) == Some(self.as_str())
            && geom.get("coordinates").is_some_and(JsonValue::is_array)
    }
}
