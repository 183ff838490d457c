//! GitHub API error type.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors from the GitHub API layer
#[derive(Error, Debug)]
pub enum GitHubError {
    /// Transport-level failure: connect, deadline, TLS, or body decode
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from the API, with the body's message when present
    #[error("{status}: {message}")]
    Api {
        /// HTTP status returned by the backend
        status: StatusCode,
        /// Human-readable detail extracted from the response body
        message: String,
    },

    /// An endpoint base URL (default or override) did not parse
    #[error("invalid endpoint URL {url:?}: {source}")]
    BadEndpoint {
        /// The offending URL text
        url: String,
        /// Parse failure detail
        #[source]
        source: url::ParseError,
    },

    /// An endpoint base URL parses but is not an http(s) URL
    #[error("endpoint URL {url:?} is not http or https")]
    NonHttpEndpoint {
        /// The offending URL text
        url: String,
    },

    /// The bearer token cannot be carried in an Authorization header
    #[error("token contains characters not allowed in an Authorization header")]
    InvalidToken,
}

impl GitHubError {
    /// Whether this error is the backend saying "no such record"
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            GitHubError::Api {
                status: StatusCode::NOT_FOUND,
                ..
            }
        )
    }
}
