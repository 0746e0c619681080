//! Grammar score from mechanical-error heuristics.
//!
//! No parsing is involved: four regex patterns are counted, and a penalty is
//! applied when sentences are unusually short or long by character count.

use std::sync::LazyLock;

use regex::Regex;

use crate::text;

use super::reports::GrammarBreakdown;

const BASE_SCORE: i64 = 85;
const FLOOR: i64 = 30;
const PENALTY_PER_MATCH: i64 = 2;
const SENTENCE_LENGTH_PENALTY: i64 = 5;
const SENTENCE_LENGTH_RANGE: std::ops::RangeInclusive<f64> = 10.0..=30.0;

/// Lowercase pronoun "i" followed by whitespace.
static LOWERCASE_PRONOUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\b)i\s").expect("valid regex"));

static REPEATED_WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}").expect("valid regex"));

static REPEATED_PUNCTUATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]{2,}").expect("valid regex"));

/// A line whose first non-space character is a lowercase ASCII letter.
static LOWERCASE_LINE_START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*[a-z]").expect("valid regex"));

/// Score raw text for mechanical errors.
///
/// Starts at 85, subtracts 2 per pattern occurrence and 5 when the average
/// sentence length falls outside 10-30 characters, then clamps to 30-100.
/// With no sentences the length penalty is skipped.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn analyze_grammar(text: &str) -> GrammarBreakdown {
    let lowercase_pronoun = LOWERCASE_PRONOUN_RE.find_iter(text).count();
    let repeated_whitespace = REPEATED_WHITESPACE_RE.find_iter(text).count();
    let repeated_punctuation = REPEATED_PUNCTUATION_RE.find_iter(text).count();
    let lowercase_line_starts = LOWERCASE_LINE_START_RE.find_iter(text).count();

    let sentence_count = text::split_sentences(text).len();
    let avg_sentence_length =
        (sentence_count > 0).then(|| text.chars().count() as f64 / sentence_count as f64);

    let matches = lowercase_pronoun + repeated_whitespace + repeated_punctuation + lowercase_line_starts;
    let mut score = BASE_SCORE - PENALTY_PER_MATCH * matches as i64;
    if avg_sentence_length.is_some_and(|avg| !SENTENCE_LENGTH_RANGE.contains(&avg)) {
        score -= SENTENCE_LENGTH_PENALTY;
    }
    let score = score.clamp(FLOOR, 100) as u32;

    tracing::debug!(matches, sentence_count, score, "grammar scored");

    GrammarBreakdown {
        lowercase_pronoun,
        repeated_whitespace,
        repeated_punctuation,
        lowercase_line_starts,
        sentence_count,
        avg_sentence_length,
        score,
    }
}

/// Grammar score only.
pub fn score_grammar(text: &str) -> u32 {
    analyze_grammar(text).score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_keeps_base_score() {
        let report = analyze_grammar("");
        assert_eq!(report.sentence_count, 0);
        assert!(report.avg_sentence_length.is_none());
        assert_eq!(report.score, 85);
    }

    #[test]
    fn clean_sentences_keep_base_score() {
        // 40 chars over 2 sentences = 20 per sentence.
        let text = "Led a team of ten. Shipped the product.";
        let report = analyze_grammar(&format!("{text} "));
        assert_eq!(report.sentence_count, 2);
        assert_eq!(report.score, 85);
    }

    #[test]
    fn short_sentences_penalized() {
        let report = analyze_grammar("Hi. Yo. Ok.");
        assert_eq!(report.sentence_count, 3);
        assert_eq!(report.score, 80);
    }

    #[test]
    fn each_pattern_costs_two_per_match() {
        let report = analyze_grammar("Then i went home and i slept well");
        assert_eq!(report.lowercase_pronoun, 2);
        // One sentence of 33 characters is over the 30-character limit.
        assert_eq!(report.score, 85 - 4 - 5);
    }

    #[test]
    fn pronoun_after_accented_letter_counted() {
        let report = analyze_grammar("éi went");
        assert_eq!(report.lowercase_pronoun, 1);
    }

    #[test]
    fn pronoun_inside_word_not_counted() {
        let report = analyze_grammar("Wiki pi is fine");
        assert_eq!(report.lowercase_pronoun, 0);
    }

    #[test]
    fn repeated_whitespace_and_punctuation() {
        let report = analyze_grammar("Great work!!  Really...");
        assert_eq!(report.repeated_whitespace, 1);
        assert_eq!(report.repeated_punctuation, 2);
    }

    #[test]
    fn lowercase_line_starts_counted_per_line() {
        let report = analyze_grammar("Managed budgets\n  built tools\nwrote docs");
        assert_eq!(report.lowercase_line_starts, 2);
    }

    #[test]
    fn terminators_only_skip_length_penalty() {
        let report = analyze_grammar("...");
        assert_eq!(report.sentence_count, 0);
        assert_eq!(report.repeated_punctuation, 1);
        assert_eq!(report.score, 83);
    }

    #[test]
    fn score_never_drops_below_floor() {
        let text = "i i i i i i i i i i i i i i i i i i i i i i i i i i i i i i ";
        assert_eq!(score_grammar(text), 30);
    }
}
