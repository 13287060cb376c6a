//! [`Upstream`] adapter for the real people-search client.
//!
//! Keeps `peoplesearch-client` free of pipeline error types: the client's
//! errors are mapped here, per operation, into the discovery taxonomy.

use async_trait::async_trait;
use peoplesearch_client::{PeopleSearchClient, PeopleSearchError};

use crate::error::{DiscoveryError, Result};
use crate::traits::Upstream;
use crate::types::{SearchHandle, SearchRequest, SearchResults, SearchStatus};

/// Map an initiate-call failure. A non-success HTTP status means the
/// upstream rejected the search.
fn initiate_error(err: PeopleSearchError) -> DiscoveryError {
    match err {
        PeopleSearchError::Config(message) => DiscoveryError::ConfigurationMissing(message),
        PeopleSearchError::Api { status, message } => {
            DiscoveryError::InitiateRejected { status, message }
        }
        other => DiscoveryError::Transport(Box::new(other)),
    }
}

/// Map a fetch-call failure. Completion was already confirmed, so any
/// failure here is surfaced as [`DiscoveryError::FetchFailed`].
fn fetch_error(err: PeopleSearchError) -> DiscoveryError {
    match err {
        PeopleSearchError::Api { status, message } => {
            DiscoveryError::FetchFailed { status, message }
        }
        other => DiscoveryError::Transport(Box::new(other)),
    }
}

fn transport_error(err: PeopleSearchError) -> DiscoveryError {
    DiscoveryError::Transport(Box::new(err))
}

#[async_trait]
impl Upstream for PeopleSearchClient {
    async fn initiate(&self, request: &SearchRequest) -> Result<SearchHandle> {
        let initiated = self
            .initiate_search(&request.to_wire())
            .await
            .map_err(initiate_error)?;
        Ok(SearchHandle::new(initiated.request_id))
    }

    async fn check_status(&self, handle: &SearchHandle) -> Result<SearchStatus> {
        PeopleSearchClient::check_status(self, handle.as_str())
            .await
            .map_err(transport_error)
    }

    async fn fetch_results(&self, handle: &SearchHandle) -> Result<SearchResults> {
        PeopleSearchClient::fetch_results(self, handle.as_str())
            .await
            .map_err(fetch_error)
    }
}
