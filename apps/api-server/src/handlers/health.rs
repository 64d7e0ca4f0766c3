//! Liveness and health endpoints.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
    pub timestamp: String,
}

/// GET /
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("API is running")
}

/// Health check endpoint - returns server and database status.
///
/// GET /health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let database = if state.db.is_healthy().await {
        "up"
    } else {
        "down"
    };

    let response = HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        database,
        timestamp: chrono::Utc::now().to_rfc3339(),
    };

    HttpResponse::Ok().json(response)
}
