//! Canonical outbound link resolution with graceful degradation.

use url::form_urlencoded;

use crate::pipeline::non_empty;
use crate::types::RawProfile;

/// Search engine used for the degraded fallback link.
const SEARCH_BASE: &str = "https://www.google.com/search";

/// Literal term appended to every fallback query to bias the search toward
/// the platform the profiles come from.
const PLATFORM_TERM: &str = "LinkedIn";

/// Resolve the best available link for one raw profile.
///
/// A direct profile link is used verbatim when present — never reconstructed
/// from the identity, since a reconstructed link may point at a nonexistent
/// or wrong profile. Otherwise the result is a search-engine query built
/// from whatever subset of name/title/company/location exists.
///
/// Total: returns a syntactically valid, non-empty URL for any input.
pub fn resolve_url(profile: &RawProfile) -> String {
    if let Some(direct) = non_empty(&profile.profile_url) {
        return direct.to_string();
    }

    let terms: Vec<&str> = [
        non_empty(&profile.full_name),
        non_empty(&profile.title),
        non_empty(&profile.company),
        non_empty(&profile.location),
    ]
    .into_iter()
    .flatten()
    .chain(std::iter::once(PLATFORM_TERM))
    .collect();

    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("q", &terms.join(" "))
        .finish();

    format!("{SEARCH_BASE}?{query}")
}
