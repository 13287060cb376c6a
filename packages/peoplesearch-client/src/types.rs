use serde::{Deserialize, Serialize};

/// Body for the `POST /search-employees` call.
///
/// Empty optional lists are omitted entirely; the upstream treats a missing
/// filter and an empty filter differently on some deployments.
#[derive(Debug, Clone, Serialize)]
pub struct SearchEmployeesRequest {
    pub keywords: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub title_keywords: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub current_employers: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub past_employers: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub regions: Vec<String>,
    pub limit: u32,
}

/// Response from `POST /search-employees`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchInitiated {
    pub request_id: String,
}

/// The closed set of states the upstream reports for a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchState {
    Pending,
    Processing,
    Done,
    Error,
}

impl SearchState {
    /// Whether the upstream will make further progress from this state.
    pub fn is_terminal(self) -> bool {
        matches!(self, SearchState::Done | SearchState::Error)
    }
}

/// Response from `GET /check-search-status`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchStatus {
    pub status: SearchState,
    /// Progress counter for UI only; never a usable result set.
    #[serde(default)]
    pub employees_scraped_so_far: u64,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response from `GET /get-search-results`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub data: Vec<RawProfile>,
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub message: Option<String>,
}

/// One candidate record in the upstream's native shape.
///
/// The upstream is scraped data: any field may be absent, present-but-empty,
/// or inconsistent between records in the same batch. Nothing downstream may
/// assume presence of any field here.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawProfile {
    pub public_identifier: Option<String>,
    /// Internal numeric id, meaningless outside the upstream.
    pub profile_id: Option<i64>,
    pub profile_url: Option<String>,
    pub full_name: Option<String>,
    pub headline: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub company_logo: Option<String>,
    pub location: Option<String>,
    pub about: Option<String>,
    #[serde(default)]
    pub education: Vec<RawEducation>,
    #[serde(default)]
    pub experience: Vec<RawEmployment>,
}

/// One education entry on a raw profile.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawEducation {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub start_year: Option<i32>,
    pub end_year: Option<i32>,
}

/// One employment entry on a raw profile.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawEmployment {
    pub title: Option<String>,
    pub company: Option<String>,
    pub start_year: Option<i32>,
    /// 1-based month; January when absent.
    pub start_month: Option<u32>,
    pub end_year: Option<i32>,
    pub end_month: Option<u32>,
    #[serde(default)]
    pub is_current: bool,
}
