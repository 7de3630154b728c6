//! Flood monitoring server library.
//!
//! Exposes monitoring stations, flood reports, the road network and flood
//! risk zones stored in PostGIS as a JSON API with GeoJSON geometries.

pub mod api;
pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod middleware;
pub mod migration;
pub mod models;
