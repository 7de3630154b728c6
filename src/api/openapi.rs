//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::{api, error, models};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sistema de Monitoreo de Inundaciones",
        version = "1.0.0",
        description = "API para el monitoreo y reporte de inundaciones con capacidades GIS"
    ),
    servers(
        (url = "/", description = "Local server")
    ),
    paths(
        // Health endpoints
        api::health::root,
        api::health::health,
        api::health::ready,
        // Station endpoints
        api::stations::list_stations,
        api::stations::get_station,
        // Flood report endpoints
        api::flood_reports::list_flood_reports,
        api::flood_reports::create_flood_report,
        // GIS layers
        api::road_network::list_road_network,
        api::risk_zones::list_risk_zones,
        // Statistics
        api::statistics::get_statistics,
    ),
    components(
        schemas(
            // Common
            error::ErrorResponse,
            // Health
            api::health::RootResponse,
            api::health::HealthResponse,
            api::health::ReadyResponse,
            // Stations
            models::Station,
            models::StationListResponse,
            // Flood reports
            models::FloodReport,
            models::FloodReportListResponse,
            models::CreateFloodReportRequest,
            models::CreateFloodReportResponse,
            // GIS layers
            models::RoadSegment,
            models::RoadNetworkResponse,
            models::RiskZone,
            models::RiskZoneListResponse,
            // Statistics
            models::Statistics,
        )
    ),
    tags(
        (name = "Health", description = "Service banner and health checks"),
        (name = "Stations", description = "Rain gauge and river level stations"),
        (name = "Flood reports", description = "Flood reports filed against stations"),
        (name = "Road network", description = "Road segments"),
        (name = "Risk zones", description = "Flood risk polygons"),
        (name = "Statistics", description = "Aggregate counters"),
    )
)]
pub struct ApiDoc;
