//! Error types for the gists relay.
//!
//! Every failure of an upstream fetch lands in one of two kinds: the user does
//! not exist ([`GistsError::NotFound`]) or anything else went wrong on the way
//! to GitHub and back ([`GistsError::Upstream`]).

use thiserror::Error;

/// Main error type for the gists relay.
#[derive(Debug, Error)]
pub enum GistsError {
    /// Upstream answered 404 for the user's gist list.
    #[error("User '{username}' not found")]
    NotFound { username: String },

    /// Transport failure, timeout, non-2xx status, or malformed body.
    #[error("Error fetching gists: {message}")]
    Upstream {
        message: String,
        #[source]
        source: Option<reqwest::Error>,
    },

    // Startup errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Result type alias for gists operations.
pub type Result<T> = std::result::Result<T, GistsError>;

impl From<reqwest::Error> for GistsError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            format!("request timed out: {}", error_chain(&err))
        } else if err.is_decode() {
            format!("malformed response body: {}", error_chain(&err))
        } else {
            error_chain(&err)
        };
        GistsError::Upstream {
            message,
            source: Some(err),
        }
    }
}

impl GistsError {
    /// Create an upstream error with no underlying transport error.
    pub fn upstream(message: impl Into<String>) -> Self {
        GistsError::Upstream {
            message: message.into(),
            source: None,
        }
    }

    /// HTTP status code the relay answers with for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            GistsError::NotFound { .. } => 404,
            GistsError::Upstream { .. } | GistsError::Config { .. } => 500,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, GistsError::NotFound { .. })
    }
}

/// Join an error and its sources, so "error sending request" carries the
/// actual cause (connection refused, dns failure, ...).
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
