//! # Quill API Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::io;

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use quill_infra::DbPool;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!("Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    let pool = DbPool::connect(&config.database).await.map_err(|e| {
        tracing::error!("Failed to connect to database: {}", e);
        io::Error::other(e)
    })?;

    let state = AppState::new(pool.clone());

    tracing::info!(
        "Starting Quill API Server on {}:{}",
        config.host,
        config.port
    );

    // Start HTTP server; actix handles SIGINT/SIGTERM and drains workers.
    let result = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(state.clone()))
            .app_data(handlers::json_config())
            .app_data(handlers::query_config())
            .configure(handlers::configure_routes)
            .default_service(web::to(handlers::not_found))
    })
    .shutdown_timeout(30)
    .bind((config.host.as_str(), config.port))?
    .run()
    .await;

    if let Err(e) = pool.close().await {
        tracing::error!("Failed to close database pool: {}", e);
    }
    tracing::info!("Server stopped");

    result
}
