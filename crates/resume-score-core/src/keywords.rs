//! Reference keyword set for résumé matching.
//!
//! The built-in list is grouped into technical skills, soft skills, business
//! skills, and action verbs. Alternate sets (per industry, per locale) can be
//! built from configuration with [`KeywordSet::from_config`]; the scoring
//! engine only ever borrows a set, it never mutates one.

use std::sync::LazyLock;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::KeywordConfig;

/// Category a keyword belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum KeywordCategory {
    /// Languages, frameworks, and platforms.
    Technical,
    /// Interpersonal skills.
    SoftSkill,
    /// Business and domain skills.
    Business,
    /// Achievement-oriented verbs.
    ActionVerb,
}

impl KeywordCategory {
    /// All categories in display order.
    pub const ALL: [Self; 4] = [
        Self::Technical,
        Self::SoftSkill,
        Self::Business,
        Self::ActionVerb,
    ];

    /// Returns the category as a kebab-case string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Technical => "technical",
            Self::SoftSkill => "soft-skill",
            Self::Business => "business",
            Self::ActionVerb => "action-verb",
        }
    }
}

impl std::fmt::Display for KeywordCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const TECHNICAL: &[&str] = &[
    "javascript",
    "python",
    "react",
    "nodejs",
    "html",
    "css",
    "sql",
    "git",
    "aws",
    "docker",
    "kubernetes",
    "typescript",
    "angular",
    "vue",
    "mongodb",
    "postgresql",
];

const SOFT_SKILL: &[&str] = &[
    "leadership",
    "teamwork",
    "communication",
    "problem-solving",
    "analytical",
    "creative",
    "innovative",
    "collaborative",
    "adaptable",
    "detail-oriented",
];

const BUSINESS: &[&str] = &[
    "project management",
    "agile",
    "scrum",
    "data analysis",
    "strategic planning",
    "customer service",
    "sales",
    "marketing",
    "business development",
    "consulting",
];

const ACTION_VERB: &[&str] = &[
    "achieved",
    "improved",
    "developed",
    "managed",
    "led",
    "created",
    "implemented",
    "optimized",
    "increased",
    "reduced",
    "designed",
    "built",
    "streamlined",
    "collaborated",
    "delivered",
    "executed",
    "organized",
    "supervised",
];

/// Matches in this subset earn the technical bonus.
pub const TECHNICAL_BONUS: &[&str] = &["javascript", "python", "react", "nodejs", "html", "css", "sql"];

/// Matches in this subset earn the soft-skill bonus.
pub const SOFT_SKILL_BONUS: &[&str] = &["leadership", "teamwork", "communication", "problem-solving"];

/// Matches in this subset earn the action-verb bonus.
pub const ACTION_VERB_BONUS: &[&str] = &["achieved", "improved", "developed", "managed", "led"];

static BUILTIN: LazyLock<KeywordSet> = LazyLock::new(KeywordSet::default);

/// A single reference keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Keyword {
    /// Lower-case keyword text; may contain spaces.
    pub term: String,
    /// Category the keyword was listed under.
    pub category: KeywordCategory,
}

/// Ordered, immutable reference keyword set.
///
/// Order matters: matched keywords are reported in set order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct KeywordSet {
    entries: Vec<Keyword>,
}

impl Default for KeywordSet {
    fn default() -> Self {
        let mut set = Self {
            entries: Vec::with_capacity(
                TECHNICAL.len() + SOFT_SKILL.len() + BUSINESS.len() + ACTION_VERB.len(),
            ),
        };
        set.extend(KeywordCategory::Technical, TECHNICAL.iter().copied());
        set.extend(KeywordCategory::SoftSkill, SOFT_SKILL.iter().copied());
        set.extend(KeywordCategory::Business, BUSINESS.iter().copied());
        set.extend(KeywordCategory::ActionVerb, ACTION_VERB.iter().copied());
        set
    }
}

impl KeywordSet {
    /// Shared instance of the built-in reference set.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Build a set from configuration.
    ///
    /// Categories left unset fall back to the built-in list for that
    /// category; an explicitly empty list removes the category. Terms are
    /// trimmed and lower-cased, blanks are skipped, and duplicates keep
    /// their first position.
    pub fn from_config(config: &KeywordConfig) -> Self {
        let mut set = Self {
            entries: Vec::new(),
        };
        for category in KeywordCategory::ALL {
            match config.for_category(category) {
                Some(terms) => set.extend(category, terms.iter().map(String::as_str)),
                None => set.extend(category, builtin_terms(category).iter().copied()),
            }
        }
        tracing::debug!(keywords = set.len(), "keyword set built from configuration");
        set
    }

    fn extend<'a>(&mut self, category: KeywordCategory, terms: impl IntoIterator<Item = &'a str>) {
        for term in terms {
            let term = term.trim().to_lowercase();
            if term.is_empty() || self.entries.iter().any(|k| k.term == term) {
                continue;
            }
            self.entries.push(Keyword { term, category });
        }
    }

    /// Number of keywords in the set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no keywords.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate keywords in set order.
    pub fn iter(&self) -> impl Iterator<Item = &Keyword> {
        self.entries.iter()
    }

    /// Keywords listed under one category, in set order.
    pub fn in_category(&self, category: KeywordCategory) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(move |k| k.category == category)
            .map(|k| k.term.as_str())
    }
}

const fn builtin_terms(category: KeywordCategory) -> &'static [&'static str] {
    match category {
        KeywordCategory::Technical => TECHNICAL,
        KeywordCategory::SoftSkill => SOFT_SKILL,
        KeywordCategory::Business => BUSINESS,
        KeywordCategory::ActionVerb => ACTION_VERB,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_set_keeps_reference_order() {
        let set = KeywordSet::builtin();
        assert_eq!(set.len(), 54);
        let first: Vec<_> = set.iter().take(3).map(|k| k.term.as_str()).collect();
        assert_eq!(first, vec!["javascript", "python", "react"]);
        assert_eq!(set.iter().last().map(|k| k.term.as_str()), Some("supervised"));
    }

    #[test]
    fn builtin_categories_partition_the_set() {
        let set = KeywordSet::builtin();
        let total: usize = KeywordCategory::ALL
            .iter()
            .map(|c| set.in_category(*c).count())
            .sum();
        assert_eq!(total, set.len());
        assert_eq!(set.in_category(KeywordCategory::Business).count(), 10);
    }

    #[test]
    fn bonus_subsets_are_in_builtin_set() {
        let set = KeywordSet::builtin();
        for term in TECHNICAL_BONUS
            .iter()
            .chain(SOFT_SKILL_BONUS)
            .chain(ACTION_VERB_BONUS)
        {
            assert!(set.iter().any(|k| k.term == *term), "missing {term}");
        }
    }

    #[test]
    fn config_replaces_only_listed_categories() {
        let config = KeywordConfig {
            technical: Some(vec!["Rust".into(), " tokio ".into(), "rust".into(), "".into()]),
            business: Some(Vec::new()),
            ..KeywordConfig::default()
        };
        let set = KeywordSet::from_config(&config);
        let technical: Vec<_> = set.in_category(KeywordCategory::Technical).collect();
        assert_eq!(technical, vec!["rust", "tokio"]);
        assert_eq!(set.in_category(KeywordCategory::Business).count(), 0);
        assert_eq!(set.in_category(KeywordCategory::SoftSkill).count(), 10);
        assert_eq!(set.in_category(KeywordCategory::ActionVerb).count(), 18);
    }

    #[test]
    fn duplicate_across_categories_keeps_first() {
        let config = KeywordConfig {
            technical: Some(vec!["led".into()]),
            ..KeywordConfig::default()
        };
        let set = KeywordSet::from_config(&config);
        let led: Vec<_> = set.iter().filter(|k| k.term == "led").collect();
        assert_eq!(led.len(), 1);
        assert_eq!(led[0].category, KeywordCategory::Technical);
    }
}
