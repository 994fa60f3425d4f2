//! # decoupage-api — Binary Entry Point
//!
//! Loads the territorial dataset (bundled, or the file named by
//! `DECOUPAGE_DATASET`), builds the router, and serves on the configured
//! port (default 3000).

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use decoupage_api::state::{AppConfig, AppState};
use decoupage_core::loader;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    let decoupage = match &config.dataset_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading dataset override");
            loader::from_path(path)?
        }
        None => loader::bundled()?,
    };

    let stats = decoupage.stats();
    tracing::info!(
        departements = stats.departements,
        communes = stats.communes,
        arrondissements = stats.arrondissements,
        quartiers = stats.quartiers,
        "territorial dataset loaded"
    );

    let port = config.port;
    let state = AppState::with_config(Arc::new(decoupage), config);
    let app = decoupage_api::app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("decoupage-api listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
