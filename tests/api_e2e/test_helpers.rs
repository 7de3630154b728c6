//! Shared helpers for end-to-end tests.

use actix_web::{App, dev::ServiceResponse, test, web};
use flood_monitor_lib::config::Config;
use flood_monitor_lib::db::DbPool;
use flood_monitor_lib::models::SRID;
use sea_orm::{DatabaseBackend, FromQueryResult, Statement, Value};
use serde_json::Value as JsonValue;
use std::sync::OnceLock;
use tokio::sync::{Mutex, MutexGuard};

static MIGRATIONS_RUN: OnceLock<()> = OnceLock::new();
static DB_LOCK: Mutex<()> = Mutex::const_new(());

/// Serialize tests; several assert on whole-table counts.
pub async fn lock_db() -> MutexGuard<'static, ()> {
    DB_LOCK.lock().await
}

/// Create a fresh DB pool. Migrations run only once.
pub async fn create_test_pool() -> DbPool {
    let mut config = Config::from_env().expect(
        "Failed to load config. Ensure RUST_ENV and DATABASE_URL are set, \
         and that PostgreSQL with PostGIS is running.",
    );
    config.database.max_connections = 2;
    config.database.min_connections = 1;
    config.database.log_sql = false;

    let pool = DbPool::new(&config)
        .await
        .expect("Failed to connect to database");

    if MIGRATIONS_RUN.get().is_none() {
        pool.run_migrations()
            .await
            .expect("Failed to run migrations");
        let _ = MIGRATIONS_RUN.set(());
    }

    pool
}

/// Create a test app with every API route mounted.
pub async fn create_test_app(
    pool: &DbPool,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = ServiceResponse,
    Error = actix_web::Error,
> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .configure(flood_monitor_lib::api::configure_routes),
    )
    .await
}

/// GET a path and return status plus JSON body.
pub async fn get_json<S>(app: &S, uri: &str) -> (u16, JsonValue)
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(app, req).await;
    let status = resp.status().as_u16();
    let body: JsonValue = test::read_body_json(resp).await;
    (status, body)
}

#[derive(Debug, FromQueryResult)]
struct IdRow {
    id: i32,
}

#[derive(Debug, FromQueryResult)]
pub struct CountRow {
    pub total: i64,
}

async fn insert_returning_id(pool: &DbPool, sql: &str, values: Vec<Value>) -> i32 {
    IdRow::find_by_statement(Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        sql,
        values,
    ))
    .one(pool.connection())
    .await
    .expect("Fixture insert failed")
    .expect("Fixture insert returned no id")
    .id
}

/// Insert a station at the given longitude/latitude.
pub async fn insert_station(pool: &DbPool, name: &str, lon: f64, lat: f64) -> i32 {
    let sql = format!(
        "INSERT INTO estaciones (nombre, tipo, geom) \
         VALUES ($1, 'pluviométrica', ST_SetSRID(ST_MakePoint($2, $3), {})) RETURNING id",
        SRID
    );
    insert_returning_id(pool, &sql, vec![name.into(), lon.into(), lat.into()]).await
}

/// Insert a road segment from WKT.
pub async fn insert_road(pool: &DbPool, name: &str, wkt: &str) -> i32 {
    let sql = format!(
        "INSERT INTO red_vial (nombre, tipo, geom) \
         VALUES ($1, 'arterial', ST_GeomFromText($2, {})) RETURNING id",
        SRID
    );
    insert_returning_id(pool, &sql, vec![name.into(), wkt.into()]).await
}

/// Insert a risk zone from WKT.
pub async fn insert_risk_zone(pool: &DbPool, name: &str, wkt: &str) -> i32 {
    let sql = format!(
        "INSERT INTO zonas_riesgo (nombre, categoria, geom) \
         VALUES ($1, 'alta', ST_GeomFromText($2, {})) RETURNING id",
        SRID
    );
    insert_returning_id(pool, &sql, vec![name.into(), wkt.into()]).await
}

/// Run a `SELECT ... AS total` query.
pub async fn count(pool: &DbPool, sql: &str, values: Vec<Value>) -> i64 {
    CountRow::find_by_statement(Statement::from_sql_and_values(
        DatabaseBackend::Postgres,
        sql,
        values,
    ))
    .one(pool.connection())
    .await
    .expect("Count query failed")
    .expect("Count query returned no row")
    .total
}

/// Unique suffix for fixture names.
pub fn unique_name(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or_default();
    format!("{}-{}", prefix, nanos)
}
