//! Candidate discovery pipeline.
//!
//! [`Discovery`] ties the poller to the per-profile transforms: one search
//! is driven to a terminal state, then every raw profile is resolved to an
//! identity, a canonical link, a tenure figure, and a compact candidate
//! record. Ranking is a separate, optional step because it needs the full
//! normalized set to compute relative tie-breaks.

pub mod experience;
pub mod identity;
pub mod link;
pub mod normalize;
pub mod rank;

use tokio_util::sync::CancellationToken;

use crate::error::{DiscoveryError, Result};
use crate::poller::SearchPoller;
use crate::traits::Upstream;
use crate::types::{NormalizedCandidate, SearchRequest};

pub use normalize::normalize;
pub use rank::rank;

/// The pipeline facade: discover candidates for one search request.
///
/// Holds no state between invocations; each `discover` call is an
/// independent search.
pub struct Discovery<U> {
    poller: SearchPoller<U>,
}

impl<U: Upstream> Discovery<U> {
    pub fn new(upstream: U) -> Self {
        Self {
            poller: SearchPoller::new(upstream),
        }
    }

    /// Use a pre-configured poller (custom cadence or attempt budget).
    pub fn with_poller(poller: SearchPoller<U>) -> Self {
        Self { poller }
    }

    /// Run one search to completion and normalize every returned profile.
    ///
    /// The per-profile transforms are total, so one malformed upstream
    /// record can never block the valid ones in the same batch.
    pub async fn discover(&self, request: &SearchRequest) -> Result<Vec<NormalizedCandidate>> {
        let results = self.poller.run(request).await?;
        let candidates: Vec<NormalizedCandidate> =
            results.data.iter().map(normalize::normalize).collect();

        tracing::info!(
            count = candidates.len(),
            total = results.total_count,
            "Normalized discovered candidates"
        );
        Ok(candidates)
    }

    /// Discover with cancellation support.
    ///
    /// Aborts promptly (dropping the in-flight request and the poll loop)
    /// when the caller's token fires, rather than polling on after the
    /// caller has given up.
    pub async fn discover_with_cancel(
        &self,
        request: &SearchRequest,
        cancel: CancellationToken,
    ) -> Result<Vec<NormalizedCandidate>> {
        tokio::select! {
            _ = cancel.cancelled() => Err(DiscoveryError::Cancelled),
            result = self.discover(request) => result,
        }
    }
}

/// Borrow a field's content when it is present and non-blank.
pub(crate) fn non_empty(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
}

/// Owned variant of [`non_empty`], preserving the original (untrimmed) text.
pub(crate) fn owned_non_empty(field: &Option<String>) -> Option<String> {
    field
        .as_ref()
        .filter(|text| !text.trim().is_empty())
        .cloned()
}
