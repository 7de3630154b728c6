//! Flood report API handlers.

use actix_web::{Either, HttpResponse, web};
use tracing::{debug, info};

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::{
    CreateFloodReportRequest, CreateFloodReportResponse, FloodReportListResponse, GeometryKind,
};

use super::check_geometries;

/// List all flood reports with their station names.
#[utoipa::path(
    get,
    path = "/reportes",
    tag = "Flood reports",
    responses(
        (status = 200, description = "All flood reports", body = FloodReportListResponse),
        (status = 500, description = "Database error", body = crate::error::ErrorResponse),
    )
)]
pub async fn list_flood_reports(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let reports = pool.list_flood_reports().await?;
    debug!(count = reports.len(), "Listed flood reports");

    check_geometries(
        "reportes_inundacion",
        GeometryKind::Point,
        reports.iter().map(|r| r.geom.as_ref()),
    );

    Ok(HttpResponse::Ok().json(FloodReportListResponse { reports }))
}

/// File a new flood report for a station.
///
/// The report takes the station's location and the current database time.
/// Parameters are read from the query string, or from a JSON body when the
/// query string does not carry them.
#[utoipa::path(
    post,
    path = "/reportes",
    tag = "Flood reports",
    params(
        ("estacion_id" = Option<i32>, Query, description = "Station the report belongs to (when not sent as JSON)"),
        ("descripcion" = Option<String>, Query, description = "Free-text description (when not sent as JSON)"),
        ("nivel_agua" = Option<f64>, Query, description = "Water level in metres")
    ),
    request_body(content = CreateFloodReportRequest, description = "Report parameters as JSON"),
    responses(
        (status = 200, description = "Report created", body = CreateFloodReportResponse),
        (status = 400, description = "Invalid parameters", body = crate::error::ErrorResponse),
        (status = 404, description = "Station not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_flood_report(
    pool: web::Data<DbPool>,
    params: Either<web::Query<CreateFloodReportRequest>, web::Json<CreateFloodReportRequest>>,
) -> AppResult<HttpResponse> {
    let request = match params {
        Either::Left(query) => query.into_inner(),
        Either::Right(body) => body.into_inner(),
    };
    let report = request.validate()?;

    let report_id = pool.insert_flood_report(&report).await?;

    info!(
        "Flood report created: id={}, station_id={}, water_level={:?}",
        report_id, report.station_id, report.water_level
    );

    Ok(HttpResponse::Ok().json(CreateFloodReportResponse::created(report_id)))
}

/// Configure flood report routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/reportes")
            .route(web::get().to(list_flood_reports))
            .route(web::post().to(create_flood_report)),
    );
}
