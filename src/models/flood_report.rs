//! Flood report domain models and DTOs.

use chrono::{DateTime, Utc};
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Flood report joined with the name of its station.
#[derive(Debug, Clone, Serialize, FromQueryResult, ToSchema)]
pub struct FloodReport {
    pub id: i32,
    #[serde(rename = "estacion_id")]
    pub station_id: i32,
    #[serde(rename = "estacion_nombre")]
    pub station_name: String,
    /// When the report was filed (database time).
    #[serde(rename = "fecha")]
    pub reported_at: DateTime<Utc>,
    #[serde(rename = "descripcion")]
    pub description: Option<String>,
    /// Water level in metres.
    #[serde(rename = "nivel_agua")]
    pub water_level: Option<f64>,
    /// GeoJSON Point copied from the station when the report was created.
    #[schema(value_type = Option<Object>)]
    pub geom: Option<JsonValue>,
}

/// Response for the flood report listing endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct FloodReportListResponse {
    #[serde(rename = "reportes")]
    pub reports: Vec<FloodReport>,
}

/// Parameters for filing a flood report.
///
/// Accepted as a JSON body or as query-string parameters.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateFloodReportRequest {
    #[serde(rename = "estacion_id")]
    pub station_id: i32,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "nivel_agua", default)]
    pub water_level: Option<f64>,
}

/// Validated flood report ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFloodReport {
    pub station_id: i32,
    pub description: String,
    pub water_level: Option<f64>,
}

impl CreateFloodReportRequest {
    /// Validate the request.
    pub fn validate(self) -> AppResult<NewFloodReport> {
        if let Some(level) = self.water_level
            && !level.is_finite()
        {
            return Err(AppError::InvalidInput(
                "nivel_agua must be a finite number".to_string(),
            ));
        }

        Ok(NewFloodReport {
            station_id: self.station_id,
            description: self.description,
            water_level: self.water_level,
        })
    }
}

/// Response after a flood report is created.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateFloodReportResponse {
    pub message: String,
    #[serde(rename = "reporte_id")]
    pub report_id: i32,
}

impl CreateFloodReportResponse {
    pub fn created(report_id: i32) -> Self {
        CreateFloodReportResponse {
            message: "Reporte creado exitosamente".to_string(),
            report_id,
        }
    }
}
