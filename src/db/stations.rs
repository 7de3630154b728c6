//! Database queries for monitoring stations.

use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QuerySelect};

use crate::entity::station::{self, Entity as StationEntity};
use crate::error::{AppError, AppResult};
use crate::models::Station;

use super::{DbPool, geojson_expr};

fn station_select() -> sea_orm::Select<StationEntity> {
    StationEntity::find()
        .select_only()
        .column_as(station::Column::Id, "id")
        .column_as(station::Column::Name, "name")
        .column_as(station::Column::Kind, "kind")
        .column_as(Expr::cust(geojson_expr("estaciones")), "geom")
}

impl DbPool {
    /// List every station with its geometry as GeoJSON.
    pub async fn list_stations(&self) -> AppResult<Vec<Station>> {
        station_select()
            .into_model::<Station>()
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list stations: {}", e)))
    }

    /// Get a station by ID.
    pub async fn get_station_by_id(&self, id: i32) -> AppResult<Option<Station>> {
        station_select()
            .filter(station::Column::Id.eq(id))
            .into_model::<Station>()
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get station: {}", e)))
    }
}
