//! Pure people-search REST API client.
//!
//! A minimal client for the upstream people-search service. The upstream is
//! asynchronous: a search is initiated, scraped out-of-band, and polled for
//! completion before results can be fetched. This crate only wraps the three
//! HTTP calls; polling cadence and terminal-state handling belong to the
//! caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use peoplesearch_client::{PeopleSearchClient, SearchEmployeesRequest};
//!
//! let client = PeopleSearchClient::from_env()?;
//!
//! let initiated = client.initiate_search(&request).await?;
//! let status = client.check_status(&initiated.request_id).await?;
//! let results = client.fetch_results(&initiated.request_id).await?;
//! ```

pub mod error;
pub mod types;

pub use error::{PeopleSearchError, Result};
pub use types::{
    RawEducation, RawEmployment, RawProfile, SearchEmployeesRequest, SearchInitiated,
    SearchResults, SearchState, SearchStatus,
};

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

/// Header carrying the static API key.
const API_KEY_HEADER: &str = "x-api-key";

/// Per-call transport timeout. The caller's poll budget bounds total
/// wall-clock time; this only guards a single hung request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable naming the upstream host.
pub const HOST_ENV: &str = "PEOPLESEARCH_HOST";
/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "PEOPLESEARCH_API_KEY";

pub struct PeopleSearchClient {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl PeopleSearchClient {
    /// Create a client for the given host (e.g. `https://api.example.com`).
    pub fn new(host: impl AsRef<str>, api_key: impl Into<String>) -> Result<Self> {
        let base_url = Url::parse(host.as_ref())?;
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.into(),
        })
    }

    /// Create from `PEOPLESEARCH_HOST` and `PEOPLESEARCH_API_KEY`.
    ///
    /// Fails fast before any network call when either variable is absent, so
    /// misconfiguration surfaces as a configuration error rather than a
    /// runtime network failure.
    pub fn from_env() -> Result<Self> {
        let host = std::env::var(HOST_ENV)
            .map_err(|_| PeopleSearchError::Config(format!("{HOST_ENV} is not set")))?;
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| PeopleSearchError::Config(format!("{API_KEY_ENV} is not set")))?;
        Self::new(host, api_key)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }

    async fn read_json<R: DeserializeOwned>(resp: reqwest::Response) -> Result<R> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(PeopleSearchError::Api {
                status: status.as_u16(),
                message: body,
            });
        }
        Ok(resp.json().await?)
    }

    /// Start a search. Returns immediately with the opaque request id used
    /// by the status and results calls.
    pub async fn initiate_search(
        &self,
        request: &SearchEmployeesRequest,
    ) -> Result<SearchInitiated> {
        let url = self.endpoint("/search-employees")?;
        tracing::debug!(keywords = %request.keywords, limit = request.limit, "Initiating search");

        let resp = self
            .client
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(request)
            .send()
            .await?;

        let initiated: SearchInitiated = Self::read_json(resp).await?;
        tracing::debug!(request_id = %initiated.request_id, "Search initiated");
        Ok(initiated)
    }

    /// Check the status of a previously initiated search.
    pub async fn check_status(&self, request_id: &str) -> Result<SearchStatus> {
        let mut url = self.endpoint("/check-search-status")?;
        url.query_pairs_mut().append_pair("request_id", request_id);

        let resp = self
            .client
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        Self::read_json(resp).await
    }

    /// Fetch the result set of a search the upstream has reported `done`.
    pub async fn fetch_results(&self, request_id: &str) -> Result<SearchResults> {
        let mut url = self.endpoint("/get-search-results")?;
        url.query_pairs_mut().append_pair("request_id", request_id);

        let resp = self
            .client
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        let results: SearchResults = Self::read_json(resp).await?;
        tracing::debug!(
            request_id,
            count = results.data.len(),
            total = results.total_count,
            "Fetched search results"
        );
        Ok(results)
    }
}
