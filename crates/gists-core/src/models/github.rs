//! GitHub gist types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A gist as returned by `GET /users/{username}/gists`.
///
/// Only the fields the relay projects are read; every one of them may be
/// missing or `null` upstream. Scalar fields are kept as raw JSON so whatever
/// GitHub sends passes through untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubGist {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub description: Option<Value>,
    #[serde(default)]
    pub public: Option<Value>,
    #[serde(default)]
    pub html_url: Option<Value>,
    #[serde(default)]
    pub created_at: Option<Value>,
    #[serde(default)]
    pub updated_at: Option<Value>,
    /// Filename -> file object, in upstream document order.
    #[serde(default)]
    pub files: Option<Map<String, Value>>,
}

/// Projection of a gist returned to relay clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GistSummary {
    pub id: Option<Value>,
    pub description: Option<Value>,
    pub public: Option<Value>,
    pub html_url: Option<Value>,
    pub created_at: Option<Value>,
    pub updated_at: Option<Value>,
    pub files: Vec<String>,
}

impl From<GitHubGist> for GistSummary {
    fn from(gist: GitHubGist) -> Self {
        Self {
            id: gist.id,
            description: gist.description,
            public: gist.public,
            html_url: gist.html_url,
            created_at: gist.created_at,
            updated_at: gist.updated_at,
            files: gist
                .files
                .map(|files| files.into_iter().map(|(name, _)| name).collect())
                .unwrap_or_default(),
        }
    }
}
