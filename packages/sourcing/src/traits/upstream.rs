//! Upstream trait for the asynchronous people-search protocol.
//!
//! The seam that lets [`SearchPoller`] run against a mock in tests. The real
//! implementation is [`PeopleSearchClient`] (see `client.rs`); the test
//! implementation is [`MockUpstream`] in `testing.rs`.
//!
//! [`SearchPoller`]: crate::poller::SearchPoller
//! [`PeopleSearchClient`]: peoplesearch_client::PeopleSearchClient
//! [`MockUpstream`]: crate::testing::MockUpstream

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{SearchHandle, SearchRequest, SearchResults, SearchStatus};

/// The three operations of the upstream search protocol.
///
/// State transitions between the statuses reported by `check_status` are
/// owned entirely by the upstream service; implementors only observe them.
#[async_trait]
pub trait Upstream: Send + Sync {
    /// Start a search. Returns the opaque handle the other calls consume.
    async fn initiate(&self, request: &SearchRequest) -> Result<SearchHandle>;

    /// Observe the current status of an initiated search.
    async fn check_status(&self, handle: &SearchHandle) -> Result<SearchStatus>;

    /// Fetch the result set of a search the upstream has reported done.
    async fn fetch_results(&self, handle: &SearchHandle) -> Result<SearchResults>;
}
