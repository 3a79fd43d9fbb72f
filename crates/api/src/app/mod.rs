//! HTTP API application wiring (Axum router + service wiring).
//!
//! Folder layout:
//! - `services.rs`: shared state (catalog, country selection, chat client, analytics)
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses
//! - `content.rs`: label translation tables served through the locale resolver

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use crate::config::ApiConfig;

pub mod content;
pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(config: &ApiConfig) -> Router {
    let services = Arc::new(services::build_services(config));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(ServiceBuilder::new().layer(Extension(services)))
}
