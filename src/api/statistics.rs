//! Statistics API handler.

use actix_web::{HttpResponse, web};

use crate::db::DbPool;
use crate::error::AppResult;
use crate::models::Statistics;

/// Station and report counters plus the time of the latest report.
#[utoipa::path(
    get,
    path = "/estadisticas",
    tag = "Statistics",
    responses(
        (status = 200, description = "System statistics", body = Statistics),
        (status = 500, description = "Database error", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_statistics(pool: web::Data<DbPool>) -> AppResult<HttpResponse> {
    let total_stations = pool.count_stations().await?;
    let total_reports = pool.count_flood_reports().await?;
    let latest_report = pool.latest_report_time().await?;

    Ok(HttpResponse::Ok().json(Statistics {
        total_stations,
        total_reports,
        latest_report,
    }))
}

/// Configure statistics routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/estadisticas").route(web::get().to(get_statistics)));
}
