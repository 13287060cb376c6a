//! Testing utilities including a mock upstream.
//!
//! Useful for testing the poller and pipeline without a network. The mock
//! plays back a scripted status sequence and records every call for
//! assertions.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::{DiscoveryError, Result};
use crate::traits::Upstream;
use crate::types::{
    RawProfile, SearchHandle, SearchRequest, SearchResults, SearchState, SearchStatus,
};

const MOCK_REQUEST_ID: &str = "mock-request-1";

/// Record of a call made to the mock upstream.
#[derive(Debug, Clone)]
pub enum UpstreamCall {
    Initiate { keywords: String },
    CheckStatus { request_id: String },
    FetchResults { request_id: String },
}

/// A mock [`Upstream`] with scripted behavior.
///
/// Status checks consume the configured sequence; once exhausted, the last
/// status repeats forever (so a single `Pending` simulates an upstream that
/// never finishes). Clones share state, which lets a test keep a handle for
/// assertions after moving the mock into a poller.
#[derive(Clone, Default)]
pub struct MockUpstream {
    statuses: Arc<Mutex<VecDeque<SearchState>>>,
    error_message: Arc<Mutex<Option<String>>>,
    profiles: Arc<Mutex<Vec<RawProfile>>>,
    fail_initiate: Arc<Mutex<bool>>,
    fail_fetch: Arc<Mutex<bool>>,
    calls: Arc<Mutex<Vec<UpstreamCall>>>,
}

impl MockUpstream {
    /// Create a mock that reports `done` immediately and returns no
    /// profiles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the status sequence returned by successive status checks.
    pub fn with_statuses(self, states: impl IntoIterator<Item = SearchState>) -> Self {
        *self.statuses.lock().unwrap() = states.into_iter().collect();
        self
    }

    /// Set the message carried by an `error` status.
    pub fn with_error_message(self, message: impl Into<String>) -> Self {
        *self.error_message.lock().unwrap() = Some(message.into());
        self
    }

    /// Set the profiles returned by a successful fetch.
    pub fn with_profiles(self, profiles: Vec<RawProfile>) -> Self {
        *self.profiles.lock().unwrap() = profiles;
        self
    }

    /// Make the initiate call fail with a 500 rejection.
    pub fn failing_initiate(self) -> Self {
        *self.fail_initiate.lock().unwrap() = true;
        self
    }

    /// Make the fetch call fail with a 500.
    pub fn failing_fetch(self) -> Self {
        *self.fail_fetch.lock().unwrap() = true;
        self
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<UpstreamCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of status checks made so far.
    pub fn status_calls(&self) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| matches!(call, UpstreamCall::CheckStatus { .. }))
            .count()
    }

    /// Number of result fetches made so far.
    pub fn fetch_calls(&self) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| matches!(call, UpstreamCall::FetchResults { .. }))
            .count()
    }

    fn record(&self, call: UpstreamCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn next_state(&self) -> SearchState {
        let mut statuses = self.statuses.lock().unwrap();
        match statuses.len() {
            0 => SearchState::Done,
            1 => statuses[0],
            _ => statuses.pop_front().unwrap_or(SearchState::Done),
        }
    }
}

#[async_trait]
impl Upstream for MockUpstream {
    async fn initiate(&self, request: &SearchRequest) -> Result<SearchHandle> {
        self.record(UpstreamCall::Initiate {
            keywords: request.keywords.clone(),
        });

        if *self.fail_initiate.lock().unwrap() {
            return Err(DiscoveryError::InitiateRejected {
                status: 500,
                message: "mock initiate failure".into(),
            });
        }
        Ok(SearchHandle::new(MOCK_REQUEST_ID))
    }

    async fn check_status(&self, handle: &SearchHandle) -> Result<SearchStatus> {
        self.record(UpstreamCall::CheckStatus {
            request_id: handle.as_str().to_string(),
        });

        let state = self.next_state();
        let message = if state == SearchState::Error {
            self.error_message.lock().unwrap().clone()
        } else {
            None
        };
        let scraped = self.profiles.lock().unwrap().len() as u64;

        Ok(SearchStatus {
            status: state,
            employees_scraped_so_far: scraped,
            message,
        })
    }

    async fn fetch_results(&self, handle: &SearchHandle) -> Result<SearchResults> {
        self.record(UpstreamCall::FetchResults {
            request_id: handle.as_str().to_string(),
        });

        if *self.fail_fetch.lock().unwrap() {
            return Err(DiscoveryError::FetchFailed {
                status: 500,
                message: "mock fetch failure".into(),
            });
        }

        let data = self.profiles.lock().unwrap().clone();
        let total_count = data.len() as u64;
        Ok(SearchResults {
            data,
            total_count,
            message: None,
        })
    }
}
