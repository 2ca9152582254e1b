//! Centralized configuration for the gists relay.
//!
//! Constants for talking to GitHub plus the small set of settings read from
//! the environment once at startup.

use crate::{GistsError, Result};
use std::time::Duration;

/// Network-related configuration.
pub struct NetworkConfig;

impl NetworkConfig {
    pub const GITHUB_API_BASE: &'static str = "https://api.github.com";
    pub const GITHUB_ACCEPT: &'static str = "application/vnd.github+json";
    pub const GITHUB_API_VERSION_HEADER: &'static str = "x-github-api-version";
    pub const GITHUB_API_VERSION: &'static str = "2022-11-28";
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
    pub const USER_AGENT: &'static str = concat!("gists-relay/", env!("CARGO_PKG_VERSION"));
}

/// HTTP server defaults and environment keys.
pub struct ServerConfig;

impl ServerConfig {
    pub const DEFAULT_HOST: &'static str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 8080;
    pub const ENV_BASE_URL: &'static str = "GITHUB_API_BASE_URL";
    pub const ENV_PORT: &'static str = "PORT";
}

/// Settings resolved at process start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// GitHub API base URL, without a trailing slash.
    pub github_api_base_url: String,
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            github_api_base_url: NetworkConfig::GITHUB_API_BASE.to_string(),
            host: ServerConfig::DEFAULT_HOST.to_string(),
            port: ServerConfig::DEFAULT_PORT,
        }
    }
}

impl ServerSettings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut settings = Self::default();

        if let Some(base_url) = get(ServerConfig::ENV_BASE_URL) {
            settings.github_api_base_url = base_url.trim().trim_end_matches('/').to_string();
        }

        if let Some(port) = get(ServerConfig::ENV_PORT) {
            settings.port = port.trim().parse().map_err(|e| GistsError::Config {
                message: format!("invalid {} value '{}': {}", ServerConfig::ENV_PORT, port, e),
            })?;
        }

        Ok(settings)
    }
}
