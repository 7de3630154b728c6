//! SeaORM entity definitions for the PostGIS database.
//!
//! Geometry columns are left out of the models; every table stores its
//! shape in a `geom` column with SRID 4326.

pub mod flood_report;
pub mod risk_zone;
pub mod road_segment;
pub mod station;
