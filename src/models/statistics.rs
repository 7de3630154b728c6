//! System statistics model.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Aggregate counters over stations and reports.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Statistics {
    #[serde(rename = "total_estaciones")]
    pub total_stations: u64,
    #[serde(rename = "total_reportes")]
    pub total_reports: u64,
    /// Timestamp of the most recent report, null when none exist.
    #[serde(rename = "ultimo_reporte")]
    pub latest_report: Option<DateTime<Utc>>,
}
