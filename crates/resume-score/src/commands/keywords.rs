//! Keywords command: list the active reference keyword set.

use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use resume_score_core::keywords::{KeywordCategory, KeywordSet};

/// Arguments for the `keywords` subcommand.
#[derive(Args, Debug, Default)]
pub struct KeywordsArgs {
    /// Only list one category.
    #[arg(long, value_enum)]
    pub category: Option<KeywordCategory>,
}

#[derive(Serialize)]
struct CategoryListing<'a> {
    category: KeywordCategory,
    keywords: Vec<&'a str>,
}

fn listings(set: &KeywordSet, only: Option<KeywordCategory>) -> Vec<CategoryListing<'_>> {
    KeywordCategory::ALL
        .into_iter()
        .filter(|c| only.is_none_or(|o| o == *c))
        .map(|category| CategoryListing {
            category,
            keywords: set.in_category(category).collect(),
        })
        .collect()
}

/// Print the keyword set grouped by category.
#[instrument(name = "cmd_keywords", skip_all, fields(category = ?args.category))]
pub fn cmd_keywords(
    args: KeywordsArgs,
    global_json: bool,
    keywords: &KeywordSet,
) -> anyhow::Result<()> {
    debug!(total = keywords.len(), "executing keywords command");

    let groups = listings(keywords, args.category);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }

    for group in &groups {
        println!(
            "{} ({})",
            group.category.to_string().bold(),
            group.keywords.len()
        );
        if group.keywords.is_empty() {
            println!("  {}", "(disabled)".dimmed());
        } else {
            println!("  {}", group.keywords.join(", "));
        }
    }
    if args.category.is_none() {
        println!("\n{}: {}", "Total".dimmed(), keywords.len());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_categories_cover_the_set() {
        let set = KeywordSet::builtin();
        let groups = listings(set, None);
        assert_eq!(groups.len(), 4);
        let total: usize = groups.iter().map(|g| g.keywords.len()).sum();
        assert_eq!(total, set.len());
    }

    #[test]
    fn single_category_filter() {
        let groups = listings(KeywordSet::builtin(), Some(KeywordCategory::ActionVerb));
        assert_eq!(groups.len(), 1);
        assert!(groups[0].keywords.contains(&"achieved"));
    }

    #[test]
    fn cmd_keywords_succeeds() {
        assert!(cmd_keywords(KeywordsArgs::default(), false, KeywordSet::builtin()).is_ok());
        assert!(cmd_keywords(KeywordsArgs::default(), true, KeywordSet::builtin()).is_ok());
    }
}
