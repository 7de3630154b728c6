//! Monitoring station API handlers.

use actix_web::{HttpResponse, web};
use tracing::debug;

use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{GeometryKind, StationListResponse};

use super::check_geometries;

/// List all monitoring stations.
#[utoipa::path(
    get,
    path = "/estaciones",
    tag = "Stations",
    responses(
        (status = 200, description = "All stations with GeoJSON points", body = StationListResponse),
        (status = 500, description = "Database error", body = crate::error::ErrorResponse),
    )
)]
pub async fn list_stations(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let stations = pool.list_stations().await?;
    debug!(count = stations.len(), "Listed stations");

    check_geometries(
        "estaciones",
        GeometryKind::Point,
        stations.iter().map(|s| s.geom.as_ref()),
    );

    Ok(HttpResponse::Ok().json(StationListResponse { stations }))
}

/// Get a single station by ID.
#[utoipa::path(
    get,
    path = "/estaciones/{estacion_id}",
    tag = "Stations",
    params(
        ("estacion_id" = i32, Path, description = "Station ID")
    ),
    responses(
        (status = 200, description = "Station with GeoJSON point", body = crate::models::Station),
        (status = 404, description = "Station not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_station(
    pool: web::Data<DbPool>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let station_id = path.into_inner();

    let station = pool
        .get_station_by_id(station_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Station {}", station_id)))?;

    Ok(HttpResponse::Ok().json(station))
}

/// Configure station routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/estaciones").route(web::get().to(list_stations)))
        .service(web::resource("/estaciones/{estacion_id}").route(web::get().to(get_station)));
}
