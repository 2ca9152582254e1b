//! GitHub gists API client.
//!
//! One `GET {base_url}/users/{username}/gists` per call, no retries and no
//! caching. The outcome is either the projected gist list, `NotFound` for an
//! upstream 404, or `Upstream` for everything else.

use crate::config::NetworkConfig;
use crate::models::{GistSummary, GitHubGist};
use crate::{GistsError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info};

/// Longest slice of an upstream error body echoed into an error message.
const MAX_ERROR_BODY_CHARS: usize = 200;

/// HTTP client for the GitHub gists endpoint.
///
/// Cheap to share: the inner `reqwest::Client` pools connections and holds no
/// per-request state.
#[derive(Debug, Clone)]
pub struct GistsClient {
    base_url: String,
    client: Client,
}

impl GistsClient {
    /// Create a client for the given API base URL with the standard timeout.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, NetworkConfig::REQUEST_TIMEOUT)
    }

    /// Create a client with a custom total request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(NetworkConfig::GITHUB_ACCEPT));
        headers.insert(
            NetworkConfig::GITHUB_API_VERSION_HEADER,
            HeaderValue::from_static(NetworkConfig::GITHUB_API_VERSION),
        );

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(NetworkConfig::USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| GistsError::Upstream {
                message: format!("Failed to create HTTP client: {}", e),
                source: Some(e),
            })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Fetch and project the public gists of `username`.
    pub async fn fetch_gists(&self, username: &str) -> Result<Vec<GistSummary>> {
        let url = self.gists_url(username);
        debug!("Fetching gists from {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(GistsError::NotFound {
                username: username.to_string(),
            });
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GistsError::upstream(status_message(status, &body)));
        }

        let gists: Vec<GitHubGist> = response.json().await?;
        let summaries: Vec<GistSummary> = gists.into_iter().map(GistSummary::from).collect();

        info!("Fetched {} gists for {}", summaries.len(), username);
        Ok(summaries)
    }

    fn gists_url(&self, username: &str) -> String {
        format!(
            "{}/users/{}/gists",
            self.base_url,
            urlencoding::encode(username)
        )
    }
}

fn status_message(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        format!("GitHub API returned {}", status)
    } else {
        let snippet: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
        format!("GitHub API returned {}: {}", status, snippet)
    }
}
