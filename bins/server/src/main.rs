//! SISRC API Server
//!
//! Main entry point for the SISRC backend service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sisrc_api::{AppState, create_router};
use sisrc_shared::AppConfig;
use sisrc_store::SchoolStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sisrc=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Build the school collection, preferring a snapshot file when configured
    let store = match &config.data.snapshot_path {
        Some(path) => SchoolStore::from_snapshot(path)?,
        None => {
            info!("No snapshot configured, using embedded demo seed");
            SchoolStore::from_seed()
        }
    };

    // Create application state
    let state = AppState {
        store: Arc::new(store),
        advisory_delay_ms: config.advisory.delay_ms,
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
