//! API endpoint modules.

pub mod flood_reports;
pub mod health;
pub mod openapi;
pub mod risk_zones;
pub mod road_network;
pub mod stations;
pub mod statistics;

use actix_web::web;
use serde_json::Value as JsonValue;
use tracing::warn;

use crate::models::GeometryKind;

pub use flood_reports::configure_routes as configure_flood_report_routes;
pub use health::configure_health_routes;
pub use openapi::ApiDoc;
pub use risk_zones::configure_routes as configure_risk_zone_routes;
pub use road_network::configure_routes as configure_road_network_routes;
pub use stations::configure_routes as configure_station_routes;
pub use statistics::configure_routes as configure_statistics_routes;

/// Register every API route.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_health_routes)
        .configure(configure_station_routes)
        .configure(configure_flood_report_routes)
        .configure(configure_road_network_routes)
        .configure(configure_risk_zone_routes)
        .configure(configure_statistics_routes);
}

/// Log rows whose stored geometry is not of the table's declared type.
pub(crate) fn check_geometries<'a>(
    table: &str,
    kind: GeometryKind,
    geoms: impl Iterator<Item = Option<&'a JsonValue>>,
) {
    let mismatched = geoms.flatten().filter(|geom| !kind.matches(geom)).count();
    if mismatched > 0 {
        warn!(
            table = %table,
            expected = kind.as_str(),
            mismatched,
            "Rows with unexpected geometry type"
        );
    }
}
