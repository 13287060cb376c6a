//! Initiate → poll → fetch state machine over the upstream protocol.

use std::time::Duration;

use crate::error::{DiscoveryError, Result};
use crate::traits::Upstream;
use crate::types::{SearchRequest, SearchResults, SearchState};

/// Default cadence between status checks.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Default status-check budget (~60s worst case at the default cadence).
pub const DEFAULT_MAX_ATTEMPTS: u32 = 30;

/// Drives one search through the upstream's three-step protocol.
///
/// The cadence is fixed rather than exponential: the upstream's own scraping
/// time dominates latency, and a fixed cadence keeps worst-case wall-clock
/// time predictable for callers with their own timeouts. The attempt budget
/// is the authoritative upper bound on total wall-clock time.
///
/// No partial results are ever returned before the upstream reports done;
/// the running scraped-so-far count is progress telemetry only.
pub struct SearchPoller<U> {
    upstream: U,
    poll_interval: Duration,
    max_attempts: u32,
}

impl<U: Upstream> SearchPoller<U> {
    pub fn new(upstream: U) -> Self {
        Self {
            upstream,
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Set the interval between status checks.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Set the status-check budget.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Run one search to a terminal state.
    ///
    /// Terminal outcomes:
    /// - upstream reports `done` → exactly one `fetch_results` call; a
    ///   failure there surfaces as [`DiscoveryError::FetchFailed`] and is
    ///   not retried
    /// - upstream reports `error` → [`DiscoveryError::Upstream`] with the
    ///   upstream's message, zero fetch calls
    /// - budget exhausted while still pending/processing →
    ///   [`DiscoveryError::TimedOut`], zero fetch calls
    pub async fn run(&self, request: &SearchRequest) -> Result<SearchResults> {
        let handle = self.upstream.initiate(request).await?;
        tracing::info!(
            request_id = %handle,
            keywords = %request.keywords,
            limit = request.limit,
            "Search initiated, polling for completion"
        );

        for attempt in 1..=self.max_attempts {
            let status = self.upstream.check_status(&handle).await?;

            match status.status {
                SearchState::Done => {
                    tracing::info!(
                        request_id = %handle,
                        scraped = status.employees_scraped_so_far,
                        "Search completed, fetching results"
                    );
                    let results = self.upstream.fetch_results(&handle).await?;
                    tracing::info!(
                        request_id = %handle,
                        count = results.data.len(),
                        total = results.total_count,
                        "Fetched search results"
                    );
                    return Ok(results);
                }
                SearchState::Error => {
                    let message = status.message.unwrap_or_default();
                    tracing::warn!(request_id = %handle, %message, "Upstream reported search error");
                    return Err(DiscoveryError::Upstream { message });
                }
                SearchState::Pending | SearchState::Processing => {
                    tracing::debug!(
                        request_id = %handle,
                        attempt,
                        scraped = status.employees_scraped_so_far,
                        "Search still in progress"
                    );
                }
            }

            if attempt < self.max_attempts {
                tokio::time::sleep(self.poll_interval).await;
            }
        }

        tracing::warn!(
            request_id = %handle,
            attempts = self.max_attempts,
            "Search did not complete within the attempt budget"
        );
        Err(DiscoveryError::TimedOut {
            attempts: self.max_attempts,
        })
    }
}
