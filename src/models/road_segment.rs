//! Road network DTOs.

use sea_orm::FromQueryResult;
use serde::Serialize;
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

/// Road segment with its GeoJSON line.
#[derive(Debug, Clone, Serialize, FromQueryResult, ToSchema)]
pub struct RoadSegment {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "tipo")]
    pub kind: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub geom: Option<JsonValue>,
}

/// Response for the road network endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct RoadNetworkResponse {
    #[serde(rename = "red_vial")]
    pub road_network: Vec<RoadSegment>,
}
