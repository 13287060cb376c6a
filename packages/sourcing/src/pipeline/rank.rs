//! Presentation ordering for normalized candidates.
//!
//! Not a relevance score: the upstream provides none, so this orders
//! "most informative / most clearly relevant" first. Mention in the
//! narrative dominates everything; profile richness only breaks ties.
//!
//! The weights are empirically tuned magic numbers. Treat them as
//! configuration constants: tune freely, but keep the comparator's shape.

use crate::types::NormalizedCandidate;

/// Flat score for any candidate named in the narrative. Large enough that
/// no combination of richness scores can outrank a mention.
const MENTION_BONUS: f64 = 1000.0;

/// Extra score for early mentions, scaled by how far into the narrative the
/// first mention occurs.
const MENTION_POSITION_BONUS: f64 = 100.0;

const ABOUT_LONG_LEN: usize = 400;
const ABOUT_LONG_SCORE: f64 = 20.0;
const ABOUT_SHORT_LEN: usize = 150;
const ABOUT_SHORT_SCORE: f64 = 10.0;

const EDUCATION_SCORE: f64 = 15.0;
const COMPANY_LOGO_SCORE: f64 = 10.0;

const TITLE_LONG_LEN: usize = 30;
const TITLE_LONG_SCORE: f64 = 10.0;
const TITLE_SHORT_LEN: usize = 10;
const TITLE_SHORT_SCORE: f64 = 5.0;

const LOCATION_LONG_LEN: usize = 20;
const LOCATION_LONG_SCORE: f64 = 6.0;
const LOCATION_SHORT_LEN: usize = 5;
const LOCATION_SHORT_SCORE: f64 = 3.0;

/// Company names shorter than this are noise ("-", "x"), not data.
const COMPANY_MIN_LEN: usize = 2;
const COMPANY_SCORE: f64 = 8.0;

/// Order candidates for presentation, best first.
///
/// When a narrative is supplied, any candidate whose display name or
/// identity appears in it outranks every unmentioned candidate; among
/// mentioned candidates, earlier first mentions score higher. Richness
/// breaks the remaining ties. The sort is stable, so equal-scoring
/// candidates keep their incoming (upstream) order.
pub fn rank(
    mut candidates: Vec<NormalizedCandidate>,
    narrative: Option<&str>,
) -> Vec<NormalizedCandidate> {
    let narrative_lower = narrative.map(str::to_lowercase);

    let mut scored: Vec<(f64, NormalizedCandidate)> = candidates
        .drain(..)
        .map(|candidate| {
            let score = mention_score(&candidate, narrative_lower.as_deref())
                + richness_score(&candidate);
            (score, candidate)
        })
        .collect();

    scored.sort_by(|(a, _), (b, _)| b.total_cmp(a));
    scored.into_iter().map(|(_, candidate)| candidate).collect()
}

fn mention_score(candidate: &NormalizedCandidate, narrative_lower: Option<&str>) -> f64 {
    let Some(text) = narrative_lower else {
        return 0.0;
    };
    let Some(offset) = first_mention(candidate, text) else {
        return 0.0;
    };

    let position = if text.is_empty() {
        0.0
    } else {
        offset as f64 / text.len() as f64
    };
    MENTION_BONUS + MENTION_POSITION_BONUS * (1.0 - position)
}

/// Byte offset of the first mention of the candidate's name or identity in
/// the lower-cased narrative, if any.
fn first_mention(candidate: &NormalizedCandidate, text: &str) -> Option<usize> {
    let name = candidate.name.trim().to_lowercase();
    let by_name = (!name.is_empty())
        .then(|| text.find(&name))
        .flatten();

    let id = candidate.id.trim().to_lowercase();
    let by_id = (!id.is_empty()).then(|| text.find(&id)).flatten();

    match (by_name, by_id) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

fn richness_score(candidate: &NormalizedCandidate) -> f64 {
    let mut score = 0.0;

    score += tiered(
        candidate.about.as_deref(),
        ABOUT_LONG_LEN,
        ABOUT_LONG_SCORE,
        ABOUT_SHORT_LEN,
        ABOUT_SHORT_SCORE,
    );

    if !candidate.education.is_empty() {
        score += EDUCATION_SCORE;
    }
    if candidate.company_logo.is_some() {
        score += COMPANY_LOGO_SCORE;
    }

    score += tiered(
        candidate.title.as_deref(),
        TITLE_LONG_LEN,
        TITLE_LONG_SCORE,
        TITLE_SHORT_LEN,
        TITLE_SHORT_SCORE,
    );
    score += tiered(
        candidate.location.as_deref(),
        LOCATION_LONG_LEN,
        LOCATION_LONG_SCORE,
        LOCATION_SHORT_LEN,
        LOCATION_SHORT_SCORE,
    );

    if candidate
        .company
        .as_deref()
        .is_some_and(|company| company.trim().len() >= COMPANY_MIN_LEN)
    {
        score += COMPANY_SCORE;
    }

    score
}

/// Two-tier length score: full score past the long threshold, partial score
/// past the short one, nothing otherwise.
fn tiered(
    field: Option<&str>,
    long_len: usize,
    long_score: f64,
    short_len: usize,
    short_score: f64,
) -> f64 {
    match field {
        Some(text) if text.len() >= long_len => long_score,
        Some(text) if text.len() >= short_len => short_score,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str, name: &str) -> NormalizedCandidate {
        NormalizedCandidate {
            id: id.into(),
            name: name.into(),
            headline: None,
            title: None,
            company: None,
            company_logo: None,
            location: None,
            years_experience: None,
            education: vec![],
            recent_roles: vec![],
            profile_url: format!("https://example.com/in/{id}"),
            about: None,
        }
    }

    fn rich(mut c: NormalizedCandidate) -> NormalizedCandidate {
        c.about = Some("a".repeat(500));
        c.education = vec!["BS, MIT".into()];
        c.company_logo = Some("https://cdn.example.com/logo.png".into());
        c.title = Some("Principal Distinguished Staff Engineer".into());
        c.location = Some("Minneapolis, Minnesota, US".into());
        c.company = Some("Acme".into());
        c
    }

    #[test]
    fn test_mention_dominates_richness() {
        let mentioned = candidate("jane-doe", "Jane Doe");
        let unmentioned = rich(candidate("ada-smith", "Ada Smith"));

        let ranked = rank(
            vec![unmentioned, mentioned],
            Some("Jane Doe stood out for protocol work."),
        );
        assert_eq!(ranked[0].id, "jane-doe");
    }

    #[test]
    fn test_earlier_mention_ranks_higher() {
        let first = candidate("jane-doe", "Jane Doe");
        let second = candidate("ada-smith", "Ada Smith");

        let narrative = "Jane Doe has the strongest background; Ada Smith is promising too.";
        let ranked = rank(vec![second, first], Some(narrative));
        assert_eq!(ranked[0].id, "jane-doe");
        assert_eq!(ranked[1].id, "ada-smith");
    }

    #[test]
    fn test_mention_matches_identity_too() {
        let by_id = candidate("jqd-4821", "Jane Doe");
        let other = candidate("ada-smith", "Ada Smith");

        let ranked = rank(vec![other, by_id], Some("See profile jqd-4821 for details."));
        assert_eq!(ranked[0].id, "jqd-4821");
    }

    #[test]
    fn test_mention_is_case_insensitive() {
        let mentioned = candidate("jane-doe", "Jane Doe");
        let other = candidate("ada-smith", "Ada Smith");

        let ranked = rank(vec![other, mentioned], Some("JANE DOE leads the list."));
        assert_eq!(ranked[0].id, "jane-doe");
    }

    #[test]
    fn test_richness_orders_without_narrative() {
        let sparse = candidate("ada-smith", "Ada Smith");
        let detailed = rich(candidate("jane-doe", "Jane Doe"));

        let ranked = rank(vec![sparse, detailed], None);
        assert_eq!(ranked[0].id, "jane-doe");
    }

    #[test]
    fn test_equal_scores_keep_upstream_order() {
        let a = candidate("a", "A A");
        let b = candidate("b", "B B");

        let ranked = rank(vec![a, b], None);
        assert_eq!(ranked[0].id, "a");
        assert_eq!(ranked[1].id, "b");
    }

    #[test]
    fn test_trivial_company_name_scores_nothing() {
        let mut noise = candidate("a", "A A");
        noise.company = Some("-".into());
        let mut real = candidate("b", "B B");
        real.company = Some("Acme".into());

        let ranked = rank(vec![noise, real], None);
        assert_eq!(ranked[0].id, "b");
    }
}
