//! Gists Server - JSON relay for a GitHub user's public gists.
//!
//! Serves `GET /` (health) and `GET /{username}` (projected gist list).
//! Configuration comes from `GITHUB_API_BASE_URL` and `PORT`; log level from
//! `RUST_LOG`.

mod handler;
mod server;

use anyhow::Result;
use gists_core::ServerSettings;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    // Set up logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    info!("Starting Gists Server");

    let settings = ServerSettings::from_env()?;

    let addr = server::start_server(&settings).await?;
    info!("Gists relay running on {}", addr);

    // Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received, exiting");

    Ok(())
}
