//! Résumé scoring engine.
//!
//! Decomposes the score into independent pure scorers, orchestrated by
//! [`ResumeAnalyzer::analyze`]:
//!
//! - [`formatting`]: section headers, bullets, contact details, dates
//! - [`keywords`]: reference keyword density and category bonuses
//! - [`grammar`]: mechanical-error patterns
//! - [`readability`]: sentence and word length balance
//! - [`suggestions`]: fixed-order improvement tips
//!
//! The engine is total over all strings: empty or punctuation-only input
//! yields base scores, never an error.
//!
//! ```
//! use resume_score_core::analysis;
//!
//! let result = analysis::analyze("Experience\n- Led a team of five engineers.");
//! assert!(result.overall_score <= 100);
//! assert!(result.matched_keywords.contains(&"led".to_string()));
//! ```

pub mod formatting;
pub mod grammar;
pub mod keywords;
pub mod readability;
pub mod reports;
pub mod suggestions;

pub use reports::{
    DetailedAnalysis, FormattingBreakdown, GrammarBreakdown, KeywordBreakdown,
    ReadabilityBreakdown, ReadingLevel, ResumeAnalysis, ScoreBundle, ScoreTier,
};
pub use suggestions::{MAX_SUGGESTIONS, SuggestionContext, generate_suggestions};

use crate::keywords::KeywordSet;
use crate::text;

const FORMATTING_WEIGHT: f64 = 0.20;
const KEYWORDS_WEIGHT: f64 = 0.30;
const GRAMMAR_WEIGHT: f64 = 0.25;
const READABILITY_WEIGHT: f64 = 0.25;

/// Scores résumé text against a borrowed keyword set.
#[derive(Debug, Clone, Copy)]
pub struct ResumeAnalyzer<'k> {
    keywords: &'k KeywordSet,
}

impl Default for ResumeAnalyzer<'static> {
    fn default() -> Self {
        Self::new(KeywordSet::builtin())
    }
}

impl<'k> ResumeAnalyzer<'k> {
    /// Create an analyzer that matches against `keywords`.
    pub const fn new(keywords: &'k KeywordSet) -> Self {
        Self { keywords }
    }

    /// The keyword set in use.
    pub const fn keywords(&self) -> &'k KeywordSet {
        self.keywords
    }

    /// Analyze résumé text.
    pub fn analyze(&self, text: &str) -> ResumeAnalysis {
        self.analyze_detailed(text).analysis
    }

    /// Analyze résumé text, keeping each scorer's breakdown.
    #[tracing::instrument(skip_all, fields(text_len = text.len()))]
    pub fn analyze_detailed(&self, text: &str) -> DetailedAnalysis {
        let normalized = text::normalize(text);
        let words = normalized.words();
        let word_count = words.len();

        let formatting = formatting::analyze_formatting(text);
        let keywords = keywords::analyze_keywords(self.keywords, &normalized);
        let grammar = grammar::analyze_grammar(text);
        let readability = readability::analyze_readability(&words, text);

        let scores = ScoreBundle {
            formatting: formatting.score,
            keywords: keywords.score,
            grammar: grammar.score,
            readability: readability.score,
        };
        let overall_score = overall_score(&scores);

        let suggestions = generate_suggestions(SuggestionContext {
            formatting: scores.formatting,
            keywords: scores.keywords,
            grammar: scores.grammar,
            readability: scores.readability,
            word_count,
            matched_keywords: keywords.matched.clone(),
        });

        tracing::info!(overall_score, word_count, "resume analyzed");

        DetailedAnalysis {
            analysis: ResumeAnalysis {
                overall_score,
                scores,
                suggestions,
                matched_keywords: keywords.matched.clone(),
                word_count,
                reading_level: ReadingLevel::from_score(scores.readability),
            },
            formatting,
            keywords,
            grammar,
            readability,
        }
    }
}

/// Analyze résumé text against the built-in keyword set.
pub fn analyze(text: &str) -> ResumeAnalysis {
    ResumeAnalyzer::default().analyze(text)
}

/// Weighted overall score, rounded half away from zero and clamped to 0-100.
///
/// Weights: formatting 20%, keywords 30%, grammar 25%, readability 25%.
pub fn overall_score(scores: &ScoreBundle) -> u32 {
    let weighted = f64::from(scores.formatting) * FORMATTING_WEIGHT
        + f64::from(scores.keywords) * KEYWORDS_WEIGHT
        + f64::from(scores.grammar) * GRAMMAR_WEIGHT
        + f64::from(scores.readability) * READABILITY_WEIGHT;
    weighted.round().clamp(0.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KeywordConfig;

    const SAMPLE: &str = "\
Jordan Smith
jordan.smith@example.com | 555-867-5309

Summary
Software engineer with six years of experience building web platforms.

Experience
- Led a team of five engineers and improved deployment speed by half.
- Developed React and Python services, using SQL and Docker daily.
- Managed agile delivery with a focus on communication and teamwork.

Education
B.S. Computer Science, 2016

Skills
JavaScript, Python, React, SQL, Git, AWS
";

    #[test]
    fn empty_input_uses_base_scores() {
        let result = analyze("");
        assert_eq!(result.word_count, 0);
        assert_eq!(
            result.scores,
            ScoreBundle {
                formatting: 60,
                keywords: 0,
                grammar: 85,
                readability: 70,
            }
        );
        assert!(result.matched_keywords.is_empty());
        assert_eq!(result.reading_level, ReadingLevel::Good);
        // 60*0.2 + 0 + 85*0.25 + 70*0.25 = 50.75
        assert_eq!(result.overall_score, 51);
    }

    #[test]
    fn empty_input_suggestions_truncate_to_six() {
        let result = analyze("");
        assert_eq!(result.suggestions.len(), MAX_SUGGESTIONS);
        assert_eq!(
            result.suggestions[0],
            "Add clear section headers like 'Experience', 'Education', and 'Skills'"
        );
        assert_eq!(
            result.suggestions[5],
            "Add specific technologies, tools, or methodologies you've used"
        );
    }

    #[test]
    fn analysis_is_deterministic() {
        assert_eq!(analyze(SAMPLE), analyze(SAMPLE));
    }

    #[test]
    fn sample_resume_scores_consistently() {
        let result = analyze(SAMPLE);
        assert_eq!(result.scores.formatting, 100);
        assert!(result.matched_keywords.len() >= 5);
        assert!(result.matched_keywords.contains(&"javascript".to_string()));
        assert_eq!(result.overall_score, overall_score(&result.scores));
        assert_eq!(
            result.reading_level,
            ReadingLevel::from_score(result.scores.readability)
        );
        assert!(result.suggestions.len() <= MAX_SUGGESTIONS);
    }

    #[test]
    fn keyword_only_text_matches_formula() {
        let result = analyze("javascript python leadership achieved");
        assert_eq!(
            result.matched_keywords,
            vec!["javascript", "python", "leadership", "achieved"]
        );
        let total = KeywordSet::builtin().len() as f64;
        let base = (4.0 / total * 300.0).min(80.0) as u32;
        assert_eq!(result.scores.keywords, base + 5 + 5 + 10);
    }

    #[test]
    fn short_keyword_free_resume_suggests_expanding_and_research() {
        let text = "Summary\nExperience\nEducation\nSkills\nObjective\n\
                    • Contact: sam@example.com, 555.010.2000, since Jan 2020.";
        let result = analyze(text);
        assert!(result.scores.formatting >= 70);
        let expand = result
            .suggestions
            .iter()
            .position(|s| s.starts_with("Expand your resume"));
        let research = result
            .suggestions
            .iter()
            .position(|s| s.starts_with("Research job descriptions"));
        let keyword_tip = result
            .suggestions
            .iter()
            .position(|s| s.starts_with("Include more relevant industry keywords"));
        assert!(keyword_tip.is_some() && expand.is_some() && research.is_some());
        assert!(keyword_tip < expand && expand < research);
    }

    #[test]
    fn custom_keyword_set_changes_matches() {
        let set = KeywordSet::from_config(&KeywordConfig {
            technical: Some(vec!["rust".into()]),
            ..KeywordConfig::default()
        });
        let analyzer = ResumeAnalyzer::new(&set);
        let result = analyzer.analyze("Wrote Rust services");
        assert_eq!(result.matched_keywords, vec!["rust"]);
        // "rust" is not in the reference technical bonus subset.
        let base = (1.0 / set.len() as f64 * 300.0).min(80.0) as u32;
        assert_eq!(result.scores.keywords, base);
    }

    #[test]
    fn detailed_analysis_agrees_with_summary() {
        let detailed = ResumeAnalyzer::default().analyze_detailed(SAMPLE);
        assert_eq!(detailed.analysis, analyze(SAMPLE));
        assert_eq!(detailed.formatting.score, detailed.analysis.scores.formatting);
        assert_eq!(detailed.grammar.score, detailed.analysis.scores.grammar);
        assert_eq!(detailed.keywords.matched, detailed.analysis.matched_keywords);
    }

    #[test]
    fn overall_score_rounds_half_up() {
        // 61*0.2 + 0 + 85*0.25 + 70*0.25 = 50.95
        let scores = ScoreBundle {
            formatting: 61,
            keywords: 0,
            grammar: 85,
            readability: 70,
        };
        assert_eq!(overall_score(&scores), 51);
        let perfect = ScoreBundle {
            formatting: 100,
            keywords: 100,
            grammar: 100,
            readability: 100,
        };
        assert_eq!(overall_score(&perfect), 100);
    }

    #[test]
    fn overall_score_stays_in_range_for_odd_inputs() {
        let long = "word ".repeat(2000);
        for text in ["...", "\n\n\n", "i i i i", "•", long.as_str()] {
            let result = analyze(text);
            assert!(result.overall_score <= 100, "{text:?}");
            assert!(result.scores.grammar >= 30);
        }
    }
}
