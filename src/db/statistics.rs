//! Aggregate queries backing the statistics endpoint.

use chrono::{DateTime, Utc};
use sea_orm::{EntityTrait, PaginatorTrait, QueryOrder};

use crate::entity::flood_report::{self, Entity as FloodReportEntity};
use crate::entity::station::Entity as StationEntity;
use crate::error::{AppError, AppResult};

use super::DbPool;

impl DbPool {
    /// Count all stations.
    pub async fn count_stations(&self) -> AppResult<u64> {
        StationEntity::find()
            .count(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to count stations: {}", e)))
    }

    /// Count all flood reports.
    pub async fn count_flood_reports(&self) -> AppResult<u64> {
        FloodReportEntity::find()
            .count(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to count flood reports: {}", e)))
    }

    /// Timestamp of the most recent flood report, `None` when there are none.
    pub async fn latest_report_time(&self) -> AppResult<Option<DateTime<Utc>>> {
        let latest = FloodReportEntity::find()
            .order_by_desc(flood_report::Column::ReportedAt)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get latest report: {}", e)))?;

        Ok(latest.map(|report| report.reported_at))
    }
}
