//! Keyword score: reference keyword density plus category bonuses.

use crate::keywords::{ACTION_VERB_BONUS, KeywordSet, SOFT_SKILL_BONUS, TECHNICAL_BONUS};
use crate::text::NormalizedText;

use super::reports::KeywordBreakdown;

const DENSITY_WEIGHT: f64 = 300.0;
const DENSITY_CAP: f64 = 80.0;
const TECHNICAL_POINTS: u32 = 5;
const SOFT_SKILL_POINTS: u32 = 5;
const ACTION_VERB_POINTS: u32 = 10;

/// Keywords from `set` that occur as substrings of the normalized text, in set order.
///
/// Containment is plain substring search, so "led" also matches inside
/// "skilled" and multi-word terms match across single spaces.
pub fn find_matches(set: &KeywordSet, text: &NormalizedText) -> Vec<String> {
    set.iter()
        .filter(|k| text.contains(&k.term))
        .map(|k| k.term.clone())
        .collect()
}

/// Score keyword coverage.
///
/// `min(density * 300, 80)` truncated to an integer, plus +5 for any
/// technical bonus term, +5 for any soft-skill bonus term, and +10 for any
/// action-verb bonus term, capped at 100.
#[tracing::instrument(skip_all, fields(keywords = set.len()))]
pub fn analyze_keywords(set: &KeywordSet, text: &NormalizedText) -> KeywordBreakdown {
    let matched = find_matches(set, text);
    let breakdown = breakdown(set, matched);
    tracing::debug!(
        matched = breakdown.matched.len(),
        score = breakdown.score,
        "keywords scored"
    );
    breakdown
}

/// Score an already-computed match list against `set`.
///
/// An empty reference set scores 0 density; bonuses still apply.
pub fn score_keywords(set: &KeywordSet, matched: &[String]) -> u32 {
    breakdown(set, matched.to_vec()).score
}

fn breakdown(set: &KeywordSet, matched: Vec<String>) -> KeywordBreakdown {
    let reference_count = set.len();
    let density = if reference_count == 0 {
        0.0
    } else {
        matched.len() as f64 / reference_count as f64
    };

    let any_in = |subset: &[&str]| matched.iter().any(|m| subset.contains(&m.as_str()));
    let technical_bonus = any_in(TECHNICAL_BONUS);
    let soft_skill_bonus = any_in(SOFT_SKILL_BONUS);
    let action_verb_bonus = any_in(ACTION_VERB_BONUS);

    let mut score = (density * DENSITY_WEIGHT).min(DENSITY_CAP) as u32;
    if technical_bonus {
        score += TECHNICAL_POINTS;
    }
    if soft_skill_bonus {
        score += SOFT_SKILL_POINTS;
    }
    if action_verb_bonus {
        score += ACTION_VERB_POINTS;
    }

    KeywordBreakdown {
        matched,
        reference_count,
        density,
        technical_bonus,
        soft_skill_bonus,
        action_verb_bonus,
        score: score.min(100),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KeywordConfig;
    use crate::text::normalize;

    fn expected_score(matched: usize, total: usize, bonuses: u32) -> u32 {
        let base = (matched as f64 / total as f64 * 300.0).min(80.0) as u32;
        (base + bonuses).min(100)
    }

    #[test]
    fn no_text_scores_zero() {
        let report = analyze_keywords(KeywordSet::builtin(), &normalize(""));
        assert!(report.matched.is_empty());
        assert_eq!(report.score, 0);
    }

    #[test]
    fn matches_reported_in_set_order_with_all_bonuses() {
        let set = KeywordSet::builtin();
        let report = analyze_keywords(set, &normalize("achieved leadership python javascript"));
        assert_eq!(
            report.matched,
            vec!["javascript", "python", "leadership", "achieved"]
        );
        assert!(report.technical_bonus && report.soft_skill_bonus && report.action_verb_bonus);
        assert_eq!(report.score, expected_score(4, set.len(), 20));
    }

    #[test]
    fn multi_word_keywords_match_literally() {
        let report = analyze_keywords(
            KeywordSet::builtin(),
            &normalize("Led project-management and Data Analysis."),
        );
        assert!(report.matched.contains(&"project management".to_string()));
        assert!(report.matched.contains(&"data analysis".to_string()));
    }

    #[test]
    fn hyphenated_keywords_never_match_normalized_text() {
        let report = analyze_keywords(KeywordSet::builtin(), &normalize("problem-solving"));
        assert!(report.matched.is_empty());
        assert!(!report.soft_skill_bonus);
    }

    #[test]
    fn substring_containment_not_word_boundary() {
        let report = analyze_keywords(KeywordSet::builtin(), &normalize("skilled"));
        assert_eq!(report.matched, vec!["led"]);
        assert!(report.action_verb_bonus);
    }

    #[test]
    fn density_base_caps_at_eighty() {
        let set = KeywordSet::builtin();
        let text: Vec<&str> = set.iter().map(|k| k.term.as_str()).collect();
        let report = analyze_keywords(set, &normalize(&text.join(" ")));
        // Everything except the two hyphenated soft skills.
        assert_eq!(report.matched.len(), set.len() - 2);
        assert_eq!(report.score, 100);
    }

    #[test]
    fn empty_set_scores_zero_without_dividing() {
        let config = KeywordConfig {
            technical: Some(Vec::new()),
            soft_skill: Some(Vec::new()),
            business: Some(Vec::new()),
            action_verb: Some(Vec::new()),
        };
        let set = KeywordSet::from_config(&config);
        let report = analyze_keywords(&set, &normalize("python leadership"));
        assert_eq!(report.density, 0.0);
        assert_eq!(report.score, 0);
    }

    #[test]
    fn bonus_only_from_reference_subsets() {
        let set = KeywordSet::builtin();
        let report = analyze_keywords(set, &normalize("docker"));
        assert!(!report.technical_bonus);
        assert_eq!(report.score, expected_score(1, set.len(), 0));
    }

    #[test]
    fn score_keywords_agrees_with_breakdown() {
        let set = KeywordSet::builtin();
        let report = analyze_keywords(set, &normalize("Managed SQL migrations with teamwork"));
        assert_eq!(score_keywords(set, &report.matched), report.score);
    }

    #[test]
    fn score_keywords_of_nothing_is_zero() {
        assert_eq!(score_keywords(KeywordSet::builtin(), &[]), 0);
    }
}
