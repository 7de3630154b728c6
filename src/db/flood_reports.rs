//! Database queries for flood reports.

use sea_orm::sea_query::Expr;
use sea_orm::{
    DatabaseBackend, EntityTrait, FromQueryResult, JoinType, QuerySelect, RelationTrait, Statement,
};
use tracing::debug;

use crate::entity::flood_report::{self, Entity as FloodReportEntity};
use crate::entity::station::{self, Entity as StationEntity};
use crate::error::{AppError, AppResult};
use crate::models::{FloodReport, NewFloodReport};

use super::{DbPool, geojson_expr};

/// Inserts a report whose point is read from the referenced station row, so
/// the stored geometry is the station's geometry at creation time.
const INSERT_REPORT_SQL: &str = r#"
    INSERT INTO reportes_inundacion (estacion_id, fecha, descripcion, nivel_agua, geom)
    SELECT e.id, NOW(), $2, $3, e.geom
    FROM estaciones e
    WHERE e.id = $1
    RETURNING id
"#;

#[derive(Debug, FromQueryResult)]
struct InsertedId {
    id: i32,
}

impl DbPool {
    /// List every flood report together with its station's name.
    ///
    /// Reports are returned in natural table order.
    pub async fn list_flood_reports(&self) -> AppResult<Vec<FloodReport>> {
        FloodReportEntity::find()
            .select_only()
            .column_as(flood_report::Column::Id, "id")
            .column_as(flood_report::Column::StationId, "station_id")
            .column_as(station::Column::Name, "station_name")
            .column_as(flood_report::Column::ReportedAt, "reported_at")
            .column_as(flood_report::Column::Description, "description")
            .column_as(flood_report::Column::WaterLevel, "water_level")
            .column_as(Expr::cust(geojson_expr("reportes_inundacion")), "geom")
            .join(JoinType::InnerJoin, flood_report::Relation::Station.def())
            .into_model::<FloodReport>()
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list flood reports: {}", e)))
    }

    /// Insert a flood report for an existing station.
    ///
    /// Runs the station existence check and the insert in one transaction.
    /// Returns `NotFound` without writing anything when the station is absent.
    pub async fn insert_flood_report(&self, report: &NewFloodReport) -> AppResult<i32> {
        let txn = self.begin().await?;

        let station = StationEntity::find_by_id(report.station_id)
            .one(&txn)
            .await
            .map_err(|e| AppError::Database(format!("Failed to look up station: {}", e)))?;

        if station.is_none() {
            return Err(AppError::NotFound(format!("Station {}", report.station_id)));
        }

        let inserted = InsertedId::find_by_statement(Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            INSERT_REPORT_SQL,
            [
                report.station_id.into(),
                report.description.clone().into(),
                report.water_level.into(),
            ],
        ))
        .one(&txn)
        .await
        .map_err(|e| AppError::Database(format!("Failed to insert flood report: {}", e)))?
        // The station row can disappear between the lookup and the insert.
        .ok_or_else(|| AppError::NotFound(format!("Station {}", report.station_id)))?;

        txn.commit()
            .await
            .map_err(|e| AppError::Database(format!("Failed to commit flood report: {}", e)))?;

        debug!(report_id = inserted.id, "Flood report committed");

        Ok(inserted.id)
    }
}
