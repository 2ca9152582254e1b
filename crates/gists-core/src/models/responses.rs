//! JSON envelopes returned by the relay endpoints.

use super::GistSummary;
use serde::{Deserialize, Serialize};

/// Body of a successful `GET /{username}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GistsResponse {
    pub username: String,
    pub gist_count: usize,
    pub gists: Vec<GistSummary>,
}

impl GistsResponse {
    pub fn new(username: impl Into<String>, gists: Vec<GistSummary>) -> Self {
        Self {
            username: username.into(),
            gist_count: gists.len(),
            gists,
        }
    }
}

/// Body of any failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            message: "GitHub Gists API is running. Use /<username> to fetch gists.".to_string(),
        }
    }
}
