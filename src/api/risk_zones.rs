//! Risk zone API handlers.

use actix_web::{HttpResponse, web};
use tracing::debug;

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{GeometryKind, RiskZoneListResponse};

use super::check_geometries;

/// List all flood risk zones.
#[utoipa::path(
    get,
    path = "/zonas-riesgo",
    tag = "Risk zones",
    responses(
        (status = 200, description = "All risk zones with GeoJSON polygons", body = RiskZoneListResponse),
        (status = 500, description = "Database error", body = crate::error::ErrorResponse),
    )
)]
pub async fn list_risk_zones(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let risk_zones = pool.list_risk_zones().await?;
    debug!(count = risk_zones.len(), "Listed risk zones");

    check_geometries(
        "zonas_riesgo",
        GeometryKind::Polygon,
        risk_zones.iter().map(|z| z.geom.as_ref()),
    );

    Ok(HttpResponse::Ok().json(RiskZoneListResponse { risk_zones }))
}

/// Configure risk zone routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/zonas-riesgo").route(web::get().to(list_risk_zones)));
}
