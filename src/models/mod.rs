//! Domain models for the flood monitoring API.

pub mod flood_report;
pub mod geometry;
pub mod risk_zone;
pub mod road_segment;
pub mod station;
pub mod statistics;

// Re-export commonly used types
pub use flood_report::{
    CreateFloodReportRequest, CreateFloodReportResponse, FloodReport, FloodReportListResponse,
    NewFloodReport,
};
pub use geometry::{GeometryKind, SRID};
pub use risk_zone::{RiskZone, RiskZoneListResponse};
pub use road_segment::{RoadNetworkResponse, RoadSegment};
pub use station::{Station, StationListResponse};
pub use statistics::Statistics;
