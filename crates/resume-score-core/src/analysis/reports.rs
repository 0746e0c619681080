//! Report structs for résumé analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in both CLI JSON output and MCP tool responses.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The four component scores, each in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScoreBundle {
    /// Structure signals: section headers, bullets, contact details, dates.
    pub formatting: u32,
    /// Reference keyword coverage plus category bonuses.
    pub keywords: u32,
    /// Heuristic mechanical-error score (floor 30).
    pub grammar: u32,
    /// Sentence and word length balance.
    pub readability: u32,
}

/// Five-tier label derived from the readability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ReadingLevel {
    /// Readability 90 and above.
    Excellent,
    /// Readability 80 to 89.
    VeryGood,
    /// Readability 70 to 79.
    Good,
    /// Readability 60 to 69.
    Fair,
    /// Readability below 60.
    NeedsImprovement,
}

impl ReadingLevel {
    /// Map a readability score to its tier.
    pub const fn from_score(score: u32) -> Self {
        match score {
            90.. => Self::Excellent,
            80..=89 => Self::VeryGood,
            70..=79 => Self::Good,
            60..=69 => Self::Fair,
            _ => Self::NeedsImprovement,
        }
    }

    /// Human-readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::VeryGood => "Very Good",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::NeedsImprovement => "Needs Improvement",
        }
    }
}

impl std::fmt::Display for ReadingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Four-band rating used to colour any 0-100 score for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreTier {
    /// 90 and above.
    Excellent,
    /// 80 to 89.
    Good,
    /// 70 to 79.
    NeedsImprovement,
    /// Below 70.
    Poor,
}

impl ScoreTier {
    /// Map a score to its display band.
    pub const fn from_score(score: u32) -> Self {
        match score {
            90.. => Self::Excellent,
            80..=89 => Self::Good,
            70..=79 => Self::NeedsImprovement,
            _ => Self::Poor,
        }
    }
}

/// Complete analysis of one résumé.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ResumeAnalysis {
    /// Weighted overall score (0-100).
    pub overall_score: u32,
    /// Component scores.
    pub scores: ScoreBundle,
    /// Improvement suggestions in rule order, at most six.
    pub suggestions: Vec<String>,
    /// Reference keywords found, in keyword-set order.
    pub matched_keywords: Vec<String>,
    /// Number of tokens in the normalized text.
    pub word_count: usize,
    /// Tier derived from the readability score.
    pub reading_level: ReadingLevel,
}

/// Which formatting signals fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FormattingBreakdown {
    /// Section header words present, in canonical order.
    pub headers_found: Vec<String>,
    /// A bullet glyph (`•`, `-`, `*`) is present.
    pub has_bullets: bool,
    /// An email address is present.
    pub has_email: bool,
    /// A phone number is present.
    pub has_phone: bool,
    /// A year or month abbreviation is present.
    pub has_dates: bool,
    /// Resulting formatting score.
    pub score: u32,
}

/// Keyword coverage details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct KeywordBreakdown {
    /// Matched keywords in set order.
    pub matched: Vec<String>,
    /// Size of the reference set.
    pub reference_count: usize,
    /// `matched / reference_count`, or 0 for an empty set.
    pub density: f64,
    /// A technical bonus keyword matched.
    pub technical_bonus: bool,
    /// A soft-skill bonus keyword matched.
    pub soft_skill_bonus: bool,
    /// An action-verb bonus keyword matched.
    pub action_verb_bonus: bool,
    /// Resulting keyword score.
    pub score: u32,
}

/// Occurrence counts of each heuristic grammar pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GrammarBreakdown {
    /// Lowercase pronoun `i` followed by whitespace.
    pub lowercase_pronoun: usize,
    /// Runs of two or more whitespace characters.
    pub repeated_whitespace: usize,
    /// Runs of two or more terminal punctuation marks.
    pub repeated_punctuation: usize,
    /// Lines whose first non-space character is a lowercase letter.
    pub lowercase_line_starts: usize,
    /// Number of sentences.
    pub sentence_count: usize,
    /// Characters per sentence; `None` when there are no sentences.
    pub avg_sentence_length: Option<f64>,
    /// Resulting grammar score.
    pub score: u32,
}

/// Inputs to the readability score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityBreakdown {
    /// Number of sentences.
    pub sentence_count: usize,
    /// Words per sentence; 0 when there are no sentences.
    pub avg_words_per_sentence: f64,
    /// Mean word length in characters; 0 when there are no words.
    pub avg_word_length: f64,
    /// A transition word appears.
    pub has_transitions: bool,
    /// Resulting readability score.
    pub score: u32,
}

/// Analysis plus the per-scorer breakdowns that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DetailedAnalysis {
    /// The analysis itself.
    #[serde(flatten)]
    pub analysis: ResumeAnalysis,
    /// Formatting signals.
    pub formatting: FormattingBreakdown,
    /// Keyword coverage.
    pub keywords: KeywordBreakdown,
    /// Grammar pattern counts.
    pub grammar: GrammarBreakdown,
    /// Readability inputs.
    pub readability: ReadabilityBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reading_level_boundaries() {
        assert_eq!(ReadingLevel::from_score(100), ReadingLevel::Excellent);
        assert_eq!(ReadingLevel::from_score(90), ReadingLevel::Excellent);
        assert_eq!(ReadingLevel::from_score(89), ReadingLevel::VeryGood);
        assert_eq!(ReadingLevel::from_score(80), ReadingLevel::VeryGood);
        assert_eq!(ReadingLevel::from_score(79), ReadingLevel::Good);
        assert_eq!(ReadingLevel::from_score(70), ReadingLevel::Good);
        assert_eq!(ReadingLevel::from_score(69), ReadingLevel::Fair);
        assert_eq!(ReadingLevel::from_score(60), ReadingLevel::Fair);
        assert_eq!(ReadingLevel::from_score(59), ReadingLevel::NeedsImprovement);
        assert_eq!(ReadingLevel::from_score(0), ReadingLevel::NeedsImprovement);
    }

    #[test]
    fn reading_level_labels() {
        assert_eq!(ReadingLevel::VeryGood.to_string(), "Very Good");
        assert_eq!(ReadingLevel::NeedsImprovement.label(), "Needs Improvement");
    }

    #[test]
    fn score_tier_boundaries() {
        assert_eq!(ScoreTier::from_score(90), ScoreTier::Excellent);
        assert_eq!(ScoreTier::from_score(89), ScoreTier::Good);
        assert_eq!(ScoreTier::from_score(70), ScoreTier::NeedsImprovement);
        assert_eq!(ScoreTier::from_score(69), ScoreTier::Poor);
    }

    #[test]
    fn reading_level_serializes_as_variant_name() {
        let json = serde_json::to_string(&ReadingLevel::VeryGood).unwrap();
        assert_eq!(json, "\"VeryGood\"");
    }
}
