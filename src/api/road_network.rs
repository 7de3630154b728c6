//! Road network API handlers.

use actix_web::{HttpResponse, web};
use tracing::debug;

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{GeometryKind, RoadNetworkResponse};

use super::check_geometries;

/// List the whole road network.
#[utoipa::path(
    get,
    path = "/red-vial",
    tag = "Road network",
    responses(
        (status = 200, description = "All road segments with GeoJSON lines", body = RoadNetworkResponse),
        (status = 500, description = "Database error", body = crate::error::ErrorResponse),
    )
)]
pub async fn list_road_network(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let road_network = pool.list_road_segments().await?;
    debug!(count = road_network.len(), "Listed road segments");

    check_geometries(
        "red_vial",
        GeometryKind::LineString,
        road_network.iter().map(|r| r.geom.as_ref()),
    );

    Ok(HttpResponse::Ok().json(RoadNetworkResponse { road_network }))
}

/// Configure road network routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/red-vial").route(web::get().to(list_road_network)));
}
