//! HTTP server implementation using Axum.

use crate::handler::{handle_gists, handle_health, handle_unknown_route};
use axum::{routing::get, Router};
use gists_core::{GistsClient, ServerSettings};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Application state shared across handlers.
pub struct AppState {
    /// Upstream GitHub gists client
    pub client: GistsClient,
}

/// Build the relay router around an upstream client.
pub fn build_router(client: GistsClient) -> Router {
    let state = Arc::new(AppState { client });

    Router::new()
        .route("/", get(handle_health))
        .route("/:username", get(handle_gists))
        .fallback(handle_unknown_route)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the relay HTTP server.
///
/// Returns the actual address the server is bound to (useful when port=0).
pub async fn start_server(settings: &ServerSettings) -> anyhow::Result<SocketAddr> {
    let client = GistsClient::new(&settings.github_api_base_url)?;
    let app = build_router(client);

    let addr: SocketAddr = format!("{}:{}", settings.host, settings.port).parse()?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    info!(
        "Server listening on {} (upstream {})",
        actual_addr, settings.github_api_base_url
    );

    // Spawn the server in the background
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!("Server error: {}", e);
        }
    });

    Ok(actual_addr)
}
