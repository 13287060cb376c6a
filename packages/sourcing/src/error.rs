//! Typed errors for the discovery pipeline.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can tell a
//! slow upstream apart from a broken one and message users accordingly.

use thiserror::Error;

/// Errors that can occur during candidate discovery.
///
/// All variants are terminal for the search that raised them; nothing here
/// is retried internally. Per-profile transforms never produce errors —
/// malformed records degrade their own output instead of failing the batch.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// Required configuration absent; raised before any network call
    #[error("missing configuration: {0}")]
    ConfigurationMissing(String),

    /// The upstream rejected the initiate call with a non-success status
    #[error("search initiation rejected ({status}): {message}")]
    InitiateRejected { status: u16, message: String },

    /// The result fetch failed after the upstream reported completion.
    /// Never retried: completion was already confirmed, so a failure here
    /// is a different problem worth surfacing rather than masking.
    #[error("result fetch failed ({status}): {message}")]
    FetchFailed { status: u16, message: String },

    /// The polled status itself reported `error`; carries the upstream's
    /// message verbatim
    #[error("upstream search failed: {message}")]
    Upstream { message: String },

    /// Attempt budget exhausted while the search was still in progress.
    /// Distinct from [`DiscoveryError::Upstream`] so callers can suggest
    /// "try again, it may just be slow" rather than "something is broken".
    #[error("search timed out after {attempts} status checks")]
    TimedOut { attempts: u32 },

    /// Transport-level failure (DNS, TLS, timeout, malformed body)
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The caller cancelled the operation
    #[error("operation cancelled")]
    Cancelled,
}

/// Result type alias for discovery operations.
pub type Result<T> = std::result::Result<T, DiscoveryError>;
