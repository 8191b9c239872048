//! Liveness check.
//!
//! GET /health - Always 200 while the process is serving; never calls the backend.

use axum::routing::get;
use axum::{Json, Router};

use crate::models::HealthResponse;

/// Build the health router.
pub fn router() -> Router {
    Router::new().route("/health", get(health))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
