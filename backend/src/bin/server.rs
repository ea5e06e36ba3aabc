//! Flight delays HTTP server binary.
//!
//! Loads the flight table once, then serves the dashboard API.
//!
//! # Usage
//!
//! ```bash
//! # Fetch the default dataset over HTTP
//! cargo run --bin flight-delays-server
//!
//! # Serve a local copy on another port
//! FLIGHT_DATA_SOURCE=data/flights.csv PORT=9000 cargo run --bin flight-delays-server
//! ```
//!
//! # Environment Variables
//!
//! - `FLIGHT_DELAYS_CONFIG`: Path to a TOML config file
//! - `FLIGHT_DATA_SOURCE`: CSV path or http(s) URL
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log filter (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use flight_delays::config::AppConfig;
use flight_delays::http::{create_router, AppState};
use flight_delays::store::RecordStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting flight delays server");

    let config = AppConfig::load().context("Failed to load configuration")?;
    let source = config.data.data_source()?;

    // A dataset that cannot be loaded is fatal; there is nothing to serve.
    let store = RecordStore::load(
        &source,
        config.data.airline_directory(),
        config.data.fetch_timeout(),
    )
    .await
    .with_context(|| format!("Failed to load flight data from {}", source))?;
    info!(
        "Record store ready: {} flights, checksum {}",
        store.len(),
        store.info().checksum
    );

    let state = AppState::new(Arc::new(store), config.aggregation.clone())
        .with_session_idle_ttl(config.server.session_idle_ttl());
    let app = create_router(state);

    let addr: SocketAddr = config.bind_addr().parse()?;
    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
