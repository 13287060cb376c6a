//! Typed errors for the people-search client.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can
//! distinguish transport failures from upstream rejections.

use thiserror::Error;

/// Errors that can occur while talking to the people-search API.
#[derive(Debug, Error)]
pub enum PeopleSearchError {
    /// Required configuration is missing or malformed
    #[error("missing configuration: {0}")]
    Config(String),

    /// Transport-level failure (DNS, TLS, timeout, malformed body)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The configured host is not a valid base URL
    #[error("invalid host URL: {0}")]
    InvalidHost(#[from] url::ParseError),
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, PeopleSearchError>;
