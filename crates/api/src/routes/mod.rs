//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod architecture;
pub mod health;
pub mod holder;
pub mod monitor;
pub mod oversight;
pub mod schools;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(schools::routes())
        .merge(monitor::routes())
        .merge(oversight::routes())
        .merge(holder::routes())
        .merge(architecture::routes())
}
