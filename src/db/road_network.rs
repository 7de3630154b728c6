//! Database queries for the road network.

use sea_orm::sea_query::Expr;
use sea_orm::{EntityTrait, QuerySelect};

use crate::entity::road_segment::{self, Entity as RoadSegmentEntity};
use crate::error::{AppError, AppResult};
use crate::models::RoadSegment;

use super::{DbPool, geojson_expr};

impl DbPool {
    /// List every road segment with its line geometry as GeoJSON.
    pub async fn list_road_segments(&self) -> AppResult<Vec<RoadSegment>> {
        RoadSegmentEntity::find()
            .select_only()
            .column_as(road_segment::Column::Id, "id")
            .column_as(road_segment::Column::Name, "name")
            .column_as(road_segment::Column::Kind, "kind")
            .column_as(Expr::cust(geojson_expr("red_vial")), "geom")
            .into_model::<RoadSegment>()
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list road network: {}", e)))
    }
}
