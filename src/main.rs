//! Flood monitoring server - Main entry point.
//!
//! Starts the Actix-web server with configured routes and middleware.

use actix_cors::Cors;
use actix_web::{App, HttpServer, http::header, web};
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use flood_monitor_lib::api::{self, ApiDoc};
use flood_monitor_lib::config::{Config, defaults};
use flood_monitor_lib::db::DbPool;
use flood_monitor_lib::middleware::RequestLogger;

/// Perform health check (for Docker healthcheck).
fn health_check() -> bool {
    Config::from_env().is_ok()
}

fn build_cors(is_development: bool, extra_origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600);

    if is_development {
        for origin in defaults::DEV_CORS_ORIGINS {
            cors = cors.allowed_origin(origin);
        }
    }
    for origin in extra_origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Check for --health-check flag (used by Docker HEALTHCHECK)
    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(if health_check() { 0 } else { 1 });
    }

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        std::process::exit(1);
    }

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            error!("");
            error!("Please check your environment variables:");
            error!("  - RUST_ENV must be set to 'development' or 'production'");
            error!("  - In production, DATABASE_URL must be set");
            error!("  - In production, values must not match development defaults");
            std::process::exit(1);
        }
    };

    info!("========================================");
    info!("  Sistema de Monitoreo de Inundaciones");
    info!("  Environment: {}", config.environment);
    info!("========================================");

    if config.is_development() {
        warn!("Running in DEVELOPMENT mode - do not use in production!");
    }

    let pool = match DbPool::new(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Failed to initialize database: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        "Database connection established (pool {}..{})",
        config.database.min_connections, config.database.max_connections
    );

    if let Err(e) = pool.run_migrations().await {
        error!("Failed to run migrations: {}", e);
        std::process::exit(1);
    }
    info!("Database migrations complete");

    let bind_address = config.bind_address();
    let is_development = config.is_development();
    let cors_origins = config.cors_origins.clone();

    let worker_count = if is_development {
        4
    } else {
        num_cpus::get()
    };
    info!(
        "Starting server at http://{} ({} workers)",
        bind_address, worker_count
    );
    info!("API docs at http://{}/swagger-ui/", bind_address);

    HttpServer::new(move || {
        App::new()
            // CORS must wrap before other middleware
            .wrap(build_cors(is_development, &cors_origins))
            .wrap(RequestLogger)
            .app_data(web::Data::new(pool.clone()))
            .configure(api::configure_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .workers(worker_count)
    .bind(&bind_address)?
    .run()
    .await
}
