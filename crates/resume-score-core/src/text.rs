//! Text normalization and sentence splitting.
//!
//! Every scorer works from one of two views of the input: the raw text
//! (case and punctuation preserved) or the [`NormalizedText`] produced here.

/// Lower-cased text with punctuation blanked out.
///
/// Each character that is not an ASCII letter, digit, underscore, or
/// whitespace becomes exactly one space, so character positions line up
/// with the lower-cased input. Runs of spaces are not collapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    text: String,
}

impl NormalizedText {
    /// The normalized text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Tokens separated by runs of whitespace, in order.
    pub fn words(&self) -> Vec<&str> {
        self.text.split_whitespace().collect()
    }

    /// Number of tokens in [`words`](Self::words).
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }

    /// Substring containment test.
    pub fn contains(&self, needle: &str) -> bool {
        self.text.contains(needle)
    }
}

/// Normalize raw text for keyword matching and word counting.
#[tracing::instrument(skip_all, fields(text_len = raw.len()))]
pub fn normalize(raw: &str) -> NormalizedText {
    let text = raw
        .to_lowercase()
        .chars()
        .map(|c| if is_word_char(c) || c.is_whitespace() { c } else { ' ' })
        .collect();
    NormalizedText { text }
}

const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Split text into sentences on runs of `.`, `!`, and `?`.
///
/// Fragments that are empty after trimming are dropped. Returned slices
/// are untrimmed so callers can measure them as written.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(is_sentence_terminator)
        .filter(|s| !s.trim().is_empty())
        .collect()
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_blanks_punctuation_one_for_one() {
        let norm = normalize("Led, Built!");
        assert_eq!(norm.as_str(), "led  built ");
    }

    #[test]
    fn normalize_keeps_underscores_and_digits() {
        let norm = normalize("snake_case 2024");
        assert_eq!(norm.as_str(), "snake_case 2024");
    }

    #[test]
    fn hyphenated_words_split_in_two() {
        let norm = normalize("problem-solving");
        assert_eq!(norm.words(), vec!["problem", "solving"]);
        assert!(!norm.contains("problem-solving"));
    }

    #[test]
    fn non_ascii_letters_are_blanked() {
        let norm = normalize("Café");
        assert_eq!(norm.words(), vec!["caf"]);
    }

    #[test]
    fn empty_and_blank_input_have_no_words() {
        assert_eq!(normalize("").word_count(), 0);
        assert_eq!(normalize(" \n\t ").word_count(), 0);
        assert_eq!(normalize("...!?").word_count(), 0);
    }

    #[test]
    fn sentences_split_on_terminator_runs() {
        let sentences = split_sentences("One. Two!! Three?! Four");
        assert_eq!(sentences, vec!["One", " Two", " Three", " Four"]);
    }

    #[test]
    fn blank_fragments_are_dropped() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("  ...  ").is_empty());
        assert_eq!(split_sentences("Done.  \n").len(), 1);
    }
}
