//! RawProfile → NormalizedCandidate assembly with empty-field elision.

use crate::pipeline::{experience, identity, link, non_empty, owned_non_empty};
use crate::types::{NormalizedCandidate, RawEducation, RawEmployment, RawProfile};

/// At most this many education summaries are kept.
const MAX_EDUCATION_ENTRIES: usize = 2;

/// At most this many role summaries are kept.
const MAX_ROLE_ENTRIES: usize = 3;

/// Build the consumer-facing record for one raw profile.
///
/// Total over any raw shape: missing data degrades the output (absent
/// fields, fallback identity and link) rather than failing. Structured
/// fields are bounded by selection only; the `about` narrative is passed
/// through in full, never truncated.
pub fn normalize(profile: &RawProfile) -> NormalizedCandidate {
    let id = identity::resolve_identity(profile);
    let profile_url = link::resolve_url(profile);

    let name = non_empty(&profile.full_name)
        .map(str::to_string)
        .unwrap_or_else(|| id.clone());

    let years_experience = if profile.experience.is_empty() {
        None
    } else {
        Some(experience::total_years(&profile.experience))
    };

    let education: Vec<String> = profile
        .education
        .iter()
        .filter_map(education_summary)
        .take(MAX_EDUCATION_ENTRIES)
        .collect();

    let recent_roles: Vec<String> = most_recent_first(&profile.experience)
        .into_iter()
        .filter_map(role_summary)
        .take(MAX_ROLE_ENTRIES)
        .collect();

    NormalizedCandidate {
        id,
        name,
        headline: owned_non_empty(&profile.headline),
        title: owned_non_empty(&profile.title),
        company: owned_non_empty(&profile.company),
        company_logo: owned_non_empty(&profile.company_logo),
        location: owned_non_empty(&profile.location),
        years_experience,
        education,
        recent_roles,
        profile_url,
        about: owned_non_empty(&profile.about),
    }
}

/// Summarize one education entry, or `None` when every sub-field is empty.
fn education_summary(entry: &RawEducation) -> Option<String> {
    let mut parts: Vec<String> = [&entry.degree, &entry.field, &entry.school]
        .into_iter()
        .filter_map(|field| non_empty(field).map(str::to_string))
        .collect();

    if let Some(years) = year_range(entry.start_year, entry.end_year) {
        if parts.is_empty() {
            parts.push(years);
        } else {
            let last = parts.len() - 1;
            parts[last] = format!("{} ({years})", parts[last]);
        }
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

/// Summarize one employment entry, or `None` when it carries no text.
fn role_summary(entry: &RawEmployment) -> Option<String> {
    let title = non_empty(&entry.title);
    let company = non_empty(&entry.company);

    let mut summary = match (title, company) {
        (Some(title), Some(company)) => format!("{title} at {company}"),
        (Some(title), None) => title.to_string(),
        (None, Some(company)) => company.to_string(),
        (None, None) => return None,
    };

    let span = match (entry.start_year, entry.is_current) {
        (Some(start), true) => Some(format!("{start}–present")),
        (Some(start), false) => match entry.end_year {
            Some(end) if end != start => Some(format!("{start}–{end}")),
            Some(end) => Some(end.to_string()),
            None => Some(start.to_string()),
        },
        (None, _) => None,
    };

    if let Some(span) = span {
        summary = format!("{summary} ({span})");
    }
    Some(summary)
}

fn year_range(start: Option<i32>, end: Option<i32>) -> Option<String> {
    match (start, end) {
        (Some(start), Some(end)) if start != end => Some(format!("{start}–{end}")),
        (Some(_), Some(end)) => Some(end.to_string()),
        (Some(start), None) => Some(start.to_string()),
        (None, Some(end)) => Some(end.to_string()),
        (None, None) => None,
    }
}

/// Order employment entries most-recent first: current roles ahead of ended
/// ones, then by end date, then by start date.
fn most_recent_first(entries: &[RawEmployment]) -> Vec<&RawEmployment> {
    let mut ordered: Vec<&RawEmployment> = entries.iter().collect();
    ordered.sort_by_key(|entry| std::cmp::Reverse(recency_key(entry)));
    ordered
}

fn recency_key(entry: &RawEmployment) -> (i64, i64) {
    let start = entry.start_year.map_or(i64::MIN, |year| {
        i64::from(year) * 12 + i64::from(entry.start_month.unwrap_or(1))
    });
    if entry.is_current {
        return (i64::MAX, start);
    }
    let end = entry.end_year.map_or(i64::MIN, |year| {
        i64::from(year) * 12 + i64::from(entry.end_month.unwrap_or(12))
    });
    (end, start)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> RawProfile {
        RawProfile {
            public_identifier: Some("jane-doe".into()),
            full_name: Some("Jane Doe".into()),
            headline: Some("Builds search infrastructure".into()),
            title: Some("Staff Engineer".into()),
            company: Some("Acme".into()),
            location: Some("Minneapolis, MN".into()),
            about: Some("Twenty years of making computers behave.".into()),
            education: vec![RawEducation {
                school: Some("MIT".into()),
                degree: Some("BS".into()),
                field: Some("Computer Science".into()),
                start_year: Some(2010),
                end_year: Some(2014),
            }],
            experience: vec![
                RawEmployment {
                    title: Some("Engineer".into()),
                    company: Some("Initech".into()),
                    start_year: Some(2014),
                    end_year: Some(2019),
                    ..Default::default()
                },
                RawEmployment {
                    title: Some("Staff Engineer".into()),
                    company: Some("Acme".into()),
                    start_year: Some(2019),
                    is_current: true,
                    ..Default::default()
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_full_profile_normalizes() {
        let candidate = normalize(&profile());
        assert_eq!(candidate.id, "jane-doe");
        assert_eq!(candidate.name, "Jane Doe");
        assert_eq!(
            candidate.education,
            vec!["BS, Computer Science, MIT (2010–2014)".to_string()]
        );
        assert_eq!(candidate.recent_roles[0], "Staff Engineer at Acme (2019–present)");
        assert_eq!(candidate.recent_roles[1], "Engineer at Initech (2014–2019)");
        assert!(candidate.years_experience.is_some());
    }

    #[test]
    fn test_empty_education_entry_is_dropped_entirely() {
        let raw = RawProfile {
            full_name: Some("Jane Doe".into()),
            education: vec![RawEducation {
                school: Some("".into()),
                degree: Some("   ".into()),
                ..Default::default()
            }],
            ..Default::default()
        };

        let candidate = normalize(&raw);
        assert!(candidate.education.is_empty());

        let json = serde_json::to_value(&candidate).unwrap();
        assert!(json.get("education").is_none());
    }

    #[test]
    fn test_about_is_never_truncated() {
        let long_about = "x".repeat(5_000);
        let raw = RawProfile {
            full_name: Some("Jane Doe".into()),
            about: Some(long_about.clone()),
            ..Default::default()
        };

        let candidate = normalize(&raw);
        assert_eq!(candidate.about.as_deref(), Some(long_about.as_str()));
    }

    #[test]
    fn test_education_and_roles_are_bounded() {
        let mut raw = profile();
        raw.education = (0..5)
            .map(|i| RawEducation {
                school: Some(format!("School {i}")),
                ..Default::default()
            })
            .collect();
        raw.experience = (0..6)
            .map(|i| RawEmployment {
                title: Some(format!("Role {i}")),
                start_year: Some(2010 + i),
                end_year: Some(2011 + i),
                ..Default::default()
            })
            .collect();

        let candidate = normalize(&raw);
        assert_eq!(candidate.education.len(), 2);
        assert_eq!(candidate.recent_roles.len(), 3);
        // Most recent ended role comes first.
        assert_eq!(candidate.recent_roles[0], "Role 5 (2015–2016)");
    }

    #[test]
    fn test_no_employment_means_absent_experience() {
        let raw = RawProfile {
            full_name: Some("Jane Doe".into()),
            ..Default::default()
        };
        let candidate = normalize(&raw);
        assert!(candidate.years_experience.is_none());

        let json = serde_json::to_value(&candidate).unwrap();
        assert!(json.get("years_experience").is_none());
    }

    #[test]
    fn test_nameless_profile_displays_its_identity() {
        let raw = RawProfile {
            profile_id: Some(77),
            ..Default::default()
        };
        let candidate = normalize(&raw);
        assert_eq!(candidate.id, "77");
        assert_eq!(candidate.name, "77");
        assert!(!candidate.profile_url.is_empty());
    }
}
