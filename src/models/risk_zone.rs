//! Risk zone DTOs.

use sea_orm::FromQueryResult;
use serde::Serialize;
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

/// Flood risk zone with its GeoJSON polygon.
#[derive(Debug, Clone, Serialize, FromQueryResult, ToSchema)]
pub struct RiskZone {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "categoria")]
    pub category: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub geom: Option<JsonValue>,
}

/// Response for the risk zone listing endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct RiskZoneListResponse {
    #[serde(rename = "zonas_riesgo")]
    pub risk_zones: Vec<RiskZone>,
}
