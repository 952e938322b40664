//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes, one module per role view
//! - Shared application state (store handle, advisory pacing)
//! - JSON error envelopes

pub mod routes;

use axum::Router;
use sisrc_store::SchoolStore;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// School record collection.
    pub store: Arc<SchoolStore>,
    /// Artificial delay before advisory responses, in milliseconds.
    pub advisory_delay_ms: u64,
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
