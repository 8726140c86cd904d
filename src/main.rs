//! CargoTrack - air cargo shipment tracking API.
//!
//! Resolves an air waybill (AWB) number to the tracking state of a
//! shipment, including every flight leg of the itinerary.

use std::sync::Arc;

use tokio::net::TcpListener;

mod api;
mod config;
mod domain;
mod error;
mod logging;
mod storage;

use crate::api::build_router;
use crate::config::Config;
use crate::storage::{FixtureShipmentRepository, ShipmentRepository};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shipment lookup repository.
    pub repository: Arc<dyn ShipmentRepository>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if present)
    // This is optional and won't fail if .env doesn't exist
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Note: No .env file loaded ({e})");
    }

    // Initialize logging
    logging::init();

    tracing::info!("Starting CargoTrack v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::load().map_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    tracing::info!(
        host = %config.server.host,
        port = %config.server.port,
        "Configuration loaded"
    );

    // Build the shipment repository. The bundled fixture data stands in
    // for a live airline tracking feed behind the same trait.
    let repository: Arc<dyn ShipmentRepository> = Arc::new(FixtureShipmentRepository::new());

    tracing::info!(shipments = repository.count(), "Shipment repository loaded");

    // Build application state
    let state = AppState { repository };

    // Build router
    let app = build_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!(address = %addr, "Server listening");
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
