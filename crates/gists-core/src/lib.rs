//! Gists Core - headless client for a GitHub user's public gists.
//!
//! This crate fetches `GET /users/{username}/gists` from the GitHub REST API
//! and projects each gist into a [`GistSummary`]. It has no HTTP-server layer;
//! see the `gists-server` crate for the JSON relay built on top of it.
//!
//! # Example
//!
//! ```rust,ignore
//! use gists_core::GistsClient;
//!
//! #[tokio::main]
//! async fn main() -> gists_core::Result<()> {
//!     let client = GistsClient::new("https://api.github.com")?;
//!
//!     let gists = client.fetch_gists("octocat").await?;
//!     println!("octocat has {} public gists", gists.len());
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod network;

// Re-export commonly used types
pub use config::{NetworkConfig, ServerConfig, ServerSettings};
pub use error::{GistsError, Result};
pub use models::{ErrorResponse, GistSummary, GistsResponse, HealthResponse};
pub use network::GistsClient;
