//! Station domain models and DTOs.

use sea_orm::FromQueryResult;
use serde::Serialize;
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

/// Monitoring station with its GeoJSON point.
#[derive(Debug, Clone, Serialize, FromQueryResult, ToSchema)]
pub struct Station {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub kind: Option<String>,
    /// GeoJSON Point, null when the station has no stored geometry.
    #[schema(value_type = Option<Object>)]
    pub geom: Option<JsonValue>,
}

/// Response for the station listing endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct StationListResponse {
    #[serde(rename = "estaciones")]
    pub stations: Vec<Station>,
}
