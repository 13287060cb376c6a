//! Stable candidate identity derivation.
//!
//! The upstream frequently omits the fields that would normally serve as an
//! identifier, so identity is resolved through an ordered fallback chain
//! that always produces a non-empty key. The final name+employer fallback
//! can in principle collide for two distinct people sharing both; that risk
//! is accepted rather than papered over with extra fields the upstream is
//! even less likely to carry.

use crate::pipeline::non_empty;
use crate::types::RawProfile;

/// Identity used when a record carries no name at all.
const UNKNOWN_SLUG: &str = "unknown";

/// Derive the stable identity for one raw profile.
///
/// Priority order, first non-empty wins:
/// 1. the upstream's public identifier, verbatim
/// 2. the slug extracted from the profile link's `/in/{slug}` segment —
///    preferred over the numeric id because the slug is human-stable and
///    matches what a UI would display
/// 3. the upstream's internal numeric profile id
/// 4. slugified name, suffixed with `-at-{employer}` when one is known
///
/// Total: returns a non-empty string for any input.
pub fn resolve_identity(profile: &RawProfile) -> String {
    if let Some(public_id) = non_empty(&profile.public_identifier) {
        return public_id.to_string();
    }

    if let Some(slug) = profile
        .profile_url
        .as_deref()
        .and_then(extract_profile_slug)
    {
        return slug;
    }

    if let Some(profile_id) = profile.profile_id {
        return profile_id.to_string();
    }

    let name_slug = non_empty(&profile.full_name)
        .map(slugify)
        .filter(|slug| !slug.is_empty())
        .unwrap_or_else(|| UNKNOWN_SLUG.to_string());

    match non_empty(&profile.company).map(slugify).filter(|s| !s.is_empty()) {
        Some(company_slug) => format!("{name_slug}-at-{company_slug}"),
        None => name_slug,
    }
}

/// Extract the `{slug}` from a `.../in/{slug}` profile link.
fn extract_profile_slug(url: &str) -> Option<String> {
    let start = url.find("/in/")? + "/in/".len();
    let rest = &url[start..];
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let slug = rest[..end].trim();
    if slug.is_empty() {
        None
    } else {
        Some(slug.to_string())
    }
}

/// Lower-case and collapse every non-alphanumeric run into a single `-`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for ch in text.chars().flat_map(char::to_lowercase) {
        if ch.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch);
        } else {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_identifier_wins_over_link() {
        let profile = RawProfile {
            public_identifier: Some("jane-doe-123".into()),
            profile_url: Some("https://www.linkedin.com/in/other-slug".into()),
            ..Default::default()
        };
        assert_eq!(resolve_identity(&profile), "jane-doe-123");
    }

    #[test]
    fn test_link_slug_wins_over_numeric_id() {
        let profile = RawProfile {
            profile_url: Some("https://www.linkedin.com/in/jane-doe/details".into()),
            profile_id: Some(48291),
            ..Default::default()
        };
        assert_eq!(resolve_identity(&profile), "jane-doe");
    }

    #[test]
    fn test_numeric_id_as_last_real_identifier() {
        let profile = RawProfile {
            profile_id: Some(48291),
            ..Default::default()
        };
        assert_eq!(resolve_identity(&profile), "48291");
    }

    #[test]
    fn test_name_and_employer_fallback() {
        let profile = RawProfile {
            full_name: Some("Jane Q. Doe".into()),
            company: Some("Acme Corp".into()),
            ..Default::default()
        };
        assert_eq!(resolve_identity(&profile), "jane-q-doe-at-acme-corp");
    }

    #[test]
    fn test_name_only_fallback() {
        let profile = RawProfile {
            full_name: Some("Jane Doe".into()),
            ..Default::default()
        };
        assert_eq!(resolve_identity(&profile), "jane-doe");
    }

    #[test]
    fn test_empty_strings_are_treated_as_absent() {
        let profile = RawProfile {
            public_identifier: Some("   ".into()),
            profile_url: Some("https://example.com/profile".into()),
            full_name: Some("Jane Doe".into()),
            ..Default::default()
        };
        // No /in/ segment in the link, so the name fallback applies.
        assert_eq!(resolve_identity(&profile), "jane-doe");
    }

    #[test]
    fn test_totally_empty_profile_still_has_identity() {
        let identity = resolve_identity(&RawProfile::default());
        assert_eq!(identity, "unknown");
    }

    #[test]
    fn test_query_string_excluded_from_slug() {
        assert_eq!(
            extract_profile_slug("https://linkedin.com/in/jane-doe?trk=feed"),
            Some("jane-doe".to_string())
        );
    }

    #[test]
    fn test_slugify_collapses_punctuation_runs() {
        assert_eq!(slugify("Jane  Q.  Doe!"), "jane-q-doe");
        assert_eq!(slugify("  ---  "), "");
        assert_eq!(slugify("Åsa Öberg"), "åsa-öberg");
    }
}
