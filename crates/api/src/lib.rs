//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - The currency conversion endpoint
//! - Supported currency listing
//! - Health check

pub mod routes;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use cambio_core::Converter;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Converter over the process-wide rate table.
    pub converter: Converter,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
