//! HTTP API application wiring (Axum router + service wiring).
//!
//! This folder is structured like:
//! - `services.rs`: store wiring shared by all handlers
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request parsing and JSON response helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(services: Arc<AppServices>) -> Router {
    Router::new()
        .route("/", get(routes::system::docs))
        .route("/openapi.json", get(routes::system::openapi))
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        // Applies to the routes registered above, so it must follow them.
        .method_not_allowed_fallback(routes::system::method_not_allowed)
        .fallback(routes::system::no_route)
        .layer(Extension(services))
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_log_middleware))
                .layer(axum::middleware::from_fn(middleware::cors_middleware)),
        )
}
