//! Database queries for flood risk zones.

use sea_orm::sea_query::Expr;
use sea_orm::{EntityTrait, QuerySelect};

use crate::entity::risk_zone::{self, Entity as RiskZoneEntity};
use crate::error::{AppError, AppResult};
use crate::models::RiskZone;

use super::{DbPool, geojson_expr};

impl DbPool {
    /// List every risk zone with its polygon as GeoJSON.
    pub async fn list_risk_zones(&self) -> AppResult<Vec<RiskZone>> {
        RiskZoneEntity::find()
            .select_only()
            .column_as(risk_zone::Column::Id, "id")
            .column_as(risk_zone::Column::Name, "name")
            .column_as(risk_zone::Column::Category, "category")
            .column_as(Expr::cust(geojson_expr("zonas_riesgo")), "geom")
            .into_model::<RiskZone>()
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list risk zones: {}", e)))
    }
}
