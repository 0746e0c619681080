//! Improvement suggestions derived from the component scores.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// At most this many suggestions are returned.
pub const MAX_SUGGESTIONS: usize = 6;

const FORMATTING_THRESHOLD: u32 = 70;
const KEYWORDS_THRESHOLD: u32 = 60;
const GRAMMAR_THRESHOLD: u32 = 80;
const READABILITY_THRESHOLD: u32 = 70;
const MIN_WORDS: usize = 200;
const MAX_WORDS: usize = 800;
const MIN_MATCHED_KEYWORDS: usize = 5;

const FORMATTING_TIPS: [&str; 3] = [
    "Add clear section headers like 'Experience', 'Education', and 'Skills'",
    "Use bullet points to organize your achievements and responsibilities",
    "Include your contact information (email and phone number)",
];

const KEYWORD_TIPS: [&str; 3] = [
    "Include more relevant industry keywords and technical skills",
    "Use action verbs like 'achieved', 'improved', 'developed', 'managed'",
    "Add specific technologies, tools, or methodologies you've used",
];

const GRAMMAR_TIPS: [&str; 3] = [
    "Review for grammar and spelling errors",
    "Ensure proper capitalization and punctuation",
    "Vary your sentence structure and length",
];

const READABILITY_TIPS: [&str; 3] = [
    "Keep sentences concise and clear (10-20 words per sentence)",
    "Use simple, professional language",
    "Break up long paragraphs into shorter, scannable sections",
];

const EXPAND_TIP: &str = "Expand your resume with more detailed descriptions of your experience";
const CONDENSE_TIP: &str =
    "Consider condensing your resume to focus on the most relevant information";
const RESEARCH_TIP: &str = "Research job descriptions in your field and include relevant keywords";

/// Everything the suggestion rules look at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SuggestionContext {
    /// Formatting score.
    pub formatting: u32,
    /// Keyword score.
    pub keywords: u32,
    /// Grammar score.
    pub grammar: u32,
    /// Readability score.
    pub readability: u32,
    /// Normalized word count.
    pub word_count: usize,
    /// Matched reference keywords.
    pub matched_keywords: Vec<String>,
}

/// Generate suggestions in fixed rule order, keeping the first six.
///
/// Rules, each evaluated once:
/// 1. formatting < 70: three formatting tips
/// 2. keywords < 60: three keyword tips
/// 3. grammar < 80: three grammar tips
/// 4. readability < 70: three readability tips
/// 5. fewer than 200 words: expand; otherwise more than 800 words: condense
/// 6. fewer than 5 matched keywords: research job descriptions
pub fn generate_suggestions(ctx: SuggestionContext) -> Vec<String> {
    let mut tips: Vec<&str> = Vec::new();

    if ctx.formatting < FORMATTING_THRESHOLD {
        tips.extend(FORMATTING_TIPS);
    }
    if ctx.keywords < KEYWORDS_THRESHOLD {
        tips.extend(KEYWORD_TIPS);
    }
    if ctx.grammar < GRAMMAR_THRESHOLD {
        tips.extend(GRAMMAR_TIPS);
    }
    if ctx.readability < READABILITY_THRESHOLD {
        tips.extend(READABILITY_TIPS);
    }
    if ctx.word_count < MIN_WORDS {
        tips.push(EXPAND_TIP);
    } else if ctx.word_count > MAX_WORDS {
        tips.push(CONDENSE_TIP);
    }
    if ctx.matched_keywords.len() < MIN_MATCHED_KEYWORDS {
        tips.push(RESEARCH_TIP);
    }

    tips.into_iter()
        .take(MAX_SUGGESTIONS)
        .map(str::to_string)
        .collect()
}
