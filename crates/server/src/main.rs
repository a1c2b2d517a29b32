//! Greengrocer order backend.
//!
//! This binary serves the JSON order API:
//!
//! - Axum web framework over an in-memory document store
//! - Static product catalog loaded once at startup (built-in or from
//!   `CATALOG_PATH`)
//! - `tracing` for structured request and failure logs

#![cfg_attr(not(test), forbid(unsafe_code))]

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use greengrocer_server::catalog::Catalog;
use greengrocer_server::config::ServerConfig;
use greengrocer_server::routes;
use greengrocer_server::state::AppState;

#[tokio::main]
async fn main() {
    // Load .env if present, then configuration from environment
    let _ = dotenvy::dotenv();
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "greengrocer_server=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load the static catalog once at startup
    let catalog = match &config.catalog_path {
        Some(path) => {
            Catalog::from_json_file(path, config.product_match).expect("Failed to load catalog")
        }
        None => Catalog::builtin(config.product_match),
    };
    tracing::info!(policy = ?config.product_match, "Catalog loaded");

    let addr = config.socket_addr();
    let app = routes::router(AppState::in_memory(config, catalog));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    tracing::info!(%addr, "Greengrocer order backend listening");

    axum::serve(listener, app).await.expect("Server error");
}
