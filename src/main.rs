// SPDX-License-Identifier: MIT
// Copyright 2026 Reel-Vault Contributors

//! Reel-Vault API Server
//!
//! Movie catalog backend: accounts with favorites, a local movie
//! collection, and proxied TMDB/iTunes lookups, serving the bundled static
//! client for everything that is not an API route.

use reel_vault::{
    config::Config,
    db::FirestoreDb,
    services::{ItunesClient, TmdbClient},
    AppState,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    // Load configuration from environment
    let config = Config::from_env().expect("Failed to load configuration");
    tracing::info!(port = config.port, "Starting Reel-Vault API");

    // Initialize Firestore database. A failed connection exits nonzero.
    let db = FirestoreDb::new(&config.gcp_project_id)
        .await
        .expect("Failed to connect to Firestore");

    let tmdb = TmdbClient::new(config.tmdb_api_key.clone());
    let itunes = ItunesClient::new();

    // Build shared state
    let state = Arc::new(AppState {
        config: config.clone(),
        db,
        tmdb,
        itunes,
    });

    // Build router
    let app = reel_vault::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("reel_vault=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .with(format)
        .init();
}
