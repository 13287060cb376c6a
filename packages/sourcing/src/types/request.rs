//! Search request parameters and the opaque upstream handle.

use peoplesearch_client::SearchEmployeesRequest;
use serde::{Deserialize, Serialize};

/// Default number of candidates requested from the upstream.
pub const DEFAULT_RESULT_LIMIT: u32 = 25;

/// Parameters for one candidate search.
///
/// Immutable value, consumed once per search. Only `keywords` is required;
/// every filter list may be empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free-text search keywords.
    pub keywords: String,

    /// Keywords that must appear in the candidate's title.
    #[serde(default)]
    pub title_keywords: Vec<String>,

    /// Current employer name filters.
    #[serde(default)]
    pub current_employers: Vec<String>,

    /// Past employer name filters.
    #[serde(default)]
    pub past_employers: Vec<String>,

    /// Geographic region codes.
    #[serde(default)]
    pub regions: Vec<String>,

    /// Maximum number of results to request.
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_limit() -> u32 {
    DEFAULT_RESULT_LIMIT
}

impl SearchRequest {
    /// Create a request with the given keywords and default limit.
    pub fn new(keywords: impl Into<String>) -> Self {
        Self {
            keywords: keywords.into(),
            title_keywords: vec![],
            current_employers: vec![],
            past_employers: vec![],
            regions: vec![],
            limit: DEFAULT_RESULT_LIMIT,
        }
    }

    /// Set title keyword filters.
    pub fn with_title_keywords(mut self, keywords: Vec<String>) -> Self {
        self.title_keywords = keywords;
        self
    }

    /// Set current employer filters.
    pub fn with_current_employers(mut self, employers: Vec<String>) -> Self {
        self.current_employers = employers;
        self
    }

    /// Set past employer filters.
    pub fn with_past_employers(mut self, employers: Vec<String>) -> Self {
        self.past_employers = employers;
        self
    }

    /// Set geographic region codes.
    pub fn with_regions(mut self, regions: Vec<String>) -> Self {
        self.regions = regions;
        self
    }

    /// Set the result-count limit.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Convert to the upstream wire shape.
    pub fn to_wire(&self) -> SearchEmployeesRequest {
        SearchEmployeesRequest {
            keywords: self.keywords.clone(),
            title_keywords: self.title_keywords.clone(),
            current_employers: self.current_employers.clone(),
            past_employers: self.past_employers.clone(),
            regions: self.regions.clone(),
            limit: self.limit,
        }
    }
}

/// Opaque identifier the upstream returns on initiate.
///
/// Created by the poller, used for the subsequent status and results calls,
/// discarded once a terminal state is reached. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHandle(String);

impl SearchHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SearchHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
