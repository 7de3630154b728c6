//! End-to-end API test suite.
//!
//! Exercises every endpoint against a real PostgreSQL database with PostGIS.
//! Requires `RUST_ENV` and `DATABASE_URL` to point at a disposable database.
//!
//! Run with: cargo test --test api_e2e -- --ignored

mod test_helpers;

mod test_flood_reports;
mod test_layers;
mod test_stations;
