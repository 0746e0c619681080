//! Readability score from sentence and word length.
//!
//! Not a grade-level formula: the score rewards 10-20 words per sentence,
//! 4-6 characters per word, and the presence of transition words.

use crate::text;

use super::reports::ReadabilityBreakdown;

/// Transition words that earn the readability bonus.
pub const TRANSITION_WORDS: &[&str] = &["however", "therefore", "additionally", "furthermore", "moreover"];

const BASE_SCORE: i64 = 70;
const BALANCED_SENTENCE_BONUS: i64 = 15;
const LONG_SENTENCE_PENALTY: i64 = 10;
const WORD_LENGTH_BONUS: i64 = 10;
const TRANSITION_BONUS: i64 = 5;

/// Score readability.
///
/// `words` is the normalized word list; `text` is the raw input, used for
/// sentence splitting and the transition check.
///
/// Averages between 20 and 25 words per sentence get neither the bonus nor
/// the penalty.
#[tracing::instrument(skip_all, fields(words = words.len(), text_len = text.len()))]
pub fn analyze_readability(words: &[&str], text: &str) -> ReadabilityBreakdown {
    let sentence_count = text::split_sentences(text).len();
    let avg_words_per_sentence = if sentence_count == 0 {
        0.0
    } else {
        words.len() as f64 / sentence_count as f64
    };
    let avg_word_length = if words.is_empty() {
        0.0
    } else {
        words.iter().map(|w| w.chars().count()).sum::<usize>() as f64 / words.len() as f64
    };

    let lower = text.to_lowercase();
    let has_transitions = TRANSITION_WORDS.iter().any(|w| lower.contains(w));

    let mut score = BASE_SCORE;
    if (10.0..=20.0).contains(&avg_words_per_sentence) {
        score += BALANCED_SENTENCE_BONUS;
    } else if avg_words_per_sentence > 25.0 {
        score -= LONG_SENTENCE_PENALTY;
    }
    if (4.0..=6.0).contains(&avg_word_length) {
        score += WORD_LENGTH_BONUS;
    }
    if has_transitions {
        score += TRANSITION_BONUS;
    }
    let score = score.clamp(0, 100) as u32;

    tracing::debug!(sentence_count, score, "readability scored");

    ReadabilityBreakdown {
        sentence_count,
        avg_words_per_sentence,
        avg_word_length,
        has_transitions,
        score,
    }
}
