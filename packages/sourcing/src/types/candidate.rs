//! The consumer-facing candidate record.

use serde::{Deserialize, Serialize};

/// A compact, display-ready candidate assembled from one [`RawProfile`].
///
/// Every optional field that has no data is absent from the serialized form,
/// not present-as-empty. Downstream consumers are token-budgeted and must
/// not pay for empty fields.
///
/// [`RawProfile`]: peoplesearch_client::RawProfile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedCandidate {
    /// Stable identity derived from the raw record; the dedup/addressing
    /// key for everything downstream.
    pub id: String,

    /// Display name. Falls back to the identity when the upstream record
    /// carries no name.
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Total professional tenure in years, one decimal place. Absent when
    /// the raw record listed no employment at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub years_experience: Option<f64>,

    /// Up to 2 education summaries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub education: Vec<String>,

    /// Up to 3 most recent role summaries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recent_roles: Vec<String>,

    /// Canonical outbound link; always present (degrades to a search-engine
    /// query when the raw record has no direct link).
    pub profile_url: String,

    /// Free-text narrative, passed through in full. Never truncated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
}
