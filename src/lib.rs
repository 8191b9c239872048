//! # Console Gateway Library
//!
//! Exposes the Axum router and modules so integration tests can create
//! an in-process gateway without requiring `cargo run` in another terminal.

pub mod config;
pub mod error;
pub mod models;
pub mod path;
pub mod proxy;
pub mod routes;

use axum::{Extension, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::proxy::SharedForwarder;

/// Build the Axum router with all route modules and middleware.
///
/// The caller chooses the forwarder; production uses
/// [`proxy::HttpForwarder`]. This function does NOT bind a listener.
pub fn create_app(forwarder: SharedForwarder) -> Router {
    Router::new()
        .merge(routes::projects::router())
        .merge(routes::sources::router())
        .merge(routes::conversations::router())
        .merge(routes::redirects::router())
        .merge(routes::health::router())
        .layer(Extension(forwarder))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
