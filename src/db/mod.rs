//! Database module providing connection management, migrations, and queries.
//!
//! Query methods are grouped per table as `impl DbPool` blocks.

pub mod flood_reports;
pub mod risk_zones;
pub mod road_network;
pub mod stations;
pub mod statistics;

use sea_orm::{
    ConnectOptions, Database, DatabaseConnection, DatabaseTransaction, TransactionTrait,
};
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::migration::Migrator;

/// SQL fragment converting a geometry column to a GeoJSON object.
pub(crate) fn geojson_expr(table: &str) -> String {
    format!(r#"ST_AsGeoJSON("{}"."geom")::json"#, table)
}

/// Database connection pool wrapper.
///
/// Each statement checks a connection out of the pool and returns it when the
/// statement completes, so a request never holds a connection across awaits
/// unless it opens a transaction with [`DbPool::begin`].
#[derive(Clone)]
pub struct DbPool {
    conn: DatabaseConnection,
    migration_url: Option<String>,
}

impl DbPool {
    /// Create a new database pool from configuration.
    pub async fn new(config: &Config) -> AppResult<Self> {
        let settings = &config.database;

        let mut options = ConnectOptions::new(settings.url.clone());
        options
            .max_connections(settings.max_connections)
            .min_connections(settings.min_connections)
            .connect_timeout(settings.connect_timeout())
            .sqlx_logging(settings.log_sql);

        let conn = Database::connect(options)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to database: {}", e)))?;

        Ok(DbPool {
            conn,
            migration_url: settings.migration_url.clone(),
        })
    }

    /// Wrap an existing connection (used with SeaORM's mock backend in tests).
    pub fn from_connection(conn: DatabaseConnection) -> Self {
        DbPool {
            conn,
            migration_url: None,
        }
    }

    /// Get access to the pooled connection for executing queries.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Start a unit of work.
    ///
    /// The transaction is rolled back when dropped without `commit()`, which
    /// covers every early return and error path of the caller.
    pub async fn begin(&self) -> AppResult<DatabaseTransaction> {
        self.conn
            .begin()
            .await
            .map_err(|e| AppError::Database(format!("Failed to start transaction: {}", e)))
    }

    /// Verify the database answers queries.
    pub async fn ping(&self) -> AppResult<()> {
        self.conn
            .ping()
            .await
            .map_err(|e| AppError::Database(format!("Database ping failed: {}", e)))
    }

    /// Apply pending schema migrations.
    ///
    /// Uses the dedicated migration URL when one is configured, otherwise the
    /// request pool.
    pub async fn run_migrations(&self) -> AppResult<()> {
        match self.migration_url {
            Some(ref url) => {
                info!("Running migrations over dedicated migration connection");
                let conn = Database::connect(url.as_str()).await.map_err(|e| {
                    AppError::Database(format!("Failed to connect for migrations: {}", e))
                })?;
                Migrator::up(&conn, None)
                    .await
                    .map_err(|e| AppError::Database(format!("Migration failed: {}", e)))?;
                conn.close()
                    .await
                    .map_err(|e| AppError::Database(format!("Failed to close connection: {}", e)))
            }
            None => Migrator::up(&self.conn, None)
                .await
                .map_err(|e| AppError::Database(format!("Migration failed: {}", e))),
        }
    }
}
