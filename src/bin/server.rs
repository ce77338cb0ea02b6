//! Air-Crash Dashboard HTTP Server Binary
//!
//! Loads the crashes CSV into an immutable snapshot, then serves the
//! dashboard query API over HTTP.
//!
//! # Usage
//!
//! ```bash
//! DATA_PATH=data/processed/cleaned_aircrashes_with_geo.csv \
//!   cargo run --bin aircrash-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8050)
//! - `DATA_PATH`: Path to the crashes CSV (default: data/processed/cleaned_aircrashes_with_geo.csv)
//! - `RUST_LOG`: Log filter (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use aircrash_rust::http::{create_router, AppState};
use aircrash_rust::store::SnapshotStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("Starting air-crash dashboard server");

    // Build the snapshot once at startup. An unreadable source is fatal:
    // no partial snapshot is ever served.
    let data_path = env::var("DATA_PATH")
        .unwrap_or_else(|_| "data/processed/cleaned_aircrashes_with_geo.csv".to_string());
    let store = Arc::new(
        SnapshotStore::open(&data_path)
            .with_context(|| format!("failed to build snapshot from '{}'", data_path))?,
    );
    let snapshot = store.snapshot();
    info!(
        records = snapshot.len(),
        checksum = snapshot.checksum(),
        "snapshot built"
    );

    let state = AppState::new(store);
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8050);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
