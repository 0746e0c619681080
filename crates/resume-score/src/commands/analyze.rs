//! Analyze command: score a résumé and print suggestions.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use resume_score_core::analysis::{DetailedAnalysis, ResumeAnalyzer, ScoreTier};
use resume_score_core::keywords::KeywordSet;

use super::{input_label, read_document};

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// Document to score (.pdf, .docx, .txt). Reads plain text from stdin when omitted or `-`.
    pub file: Option<Utf8PathBuf>,

    /// Minimum acceptable overall score (0-100).
    #[arg(long)]
    pub min_score: Option<u32>,

    /// Include per-scorer breakdowns.
    #[arg(long)]
    pub details: bool,
}

/// Score a résumé and optionally gate on the overall score.
#[instrument(name = "cmd_analyze", skip_all, fields(file = ?args.file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    config_min_score: Option<u32>,
    keywords: &KeywordSet,
    max_input_bytes: u64,
) -> anyhow::Result<()> {
    debug!(file = ?args.file, min_score = ?args.min_score, "executing analyze command");

    let label = input_label(args.file.as_deref()).to_string();
    let content = read_document(args.file.as_deref(), max_input_bytes)?;
    let min_score = args.min_score.or(config_min_score);

    let report = ResumeAnalyzer::new(keywords).analyze_detailed(&content);
    let overall = report.analysis.overall_score;

    if global_json {
        if args.details {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&report.analysis)?);
        }
    } else {
        print_report(&label, &report, args.details);
    }

    if let Some(min) = min_score
        && overall < min
    {
        bail!("{label} scores {overall} (min: {min}). Work through the suggestions above.");
    }

    Ok(())
}

fn print_report(label: &str, report: &DetailedAnalysis, details: bool) {
    let analysis = &report.analysis;
    println!("{}", label.bold());
    println!(
        "\n  {} {}/100  {} {}",
        "Overall:".cyan(),
        tiered(analysis.overall_score),
        "Reading level:".dimmed(),
        analysis.reading_level,
    );

    let scores = &analysis.scores;
    println!(
        "  {} formatting {}, keywords {}, grammar {}, readability {}",
        "Scores:".cyan(),
        tiered(scores.formatting),
        tiered(scores.keywords),
        tiered(scores.grammar),
        tiered(scores.readability),
    );
    println!("  {} {}", "Words:".cyan(), analysis.word_count);

    if analysis.matched_keywords.is_empty() {
        println!("  {} {}", "Keywords:".cyan(), "none found".yellow());
    } else {
        println!(
            "  {} {}",
            "Keywords:".cyan(),
            analysis.matched_keywords.join(", ")
        );
    }

    if details {
        print_details(report);
    }

    if !analysis.suggestions.is_empty() {
        println!("\n{}", "Suggestions".bold().underline());
        for (i, tip) in analysis.suggestions.iter().enumerate() {
            println!("  {}. {tip}", i + 1);
        }
    }
}

fn print_details(report: &DetailedAnalysis) {
    let f = &report.formatting;
    let headers = if f.headers_found.is_empty() {
        "none".to_string()
    } else {
        f.headers_found.join(", ")
    };
    println!(
        "\n  {} headers [{headers}], bullets {}, email {}, phone {}, dates {}",
        "Formatting:".cyan(),
        yes_no(f.has_bullets),
        yes_no(f.has_email),
        yes_no(f.has_phone),
        yes_no(f.has_dates),
    );

    let k = &report.keywords;
    println!(
        "  {} {}/{} matched ({:.1}%), bonuses: technical {}, soft skill {}, action verb {}",
        "Keywords:".cyan(),
        k.matched.len(),
        k.reference_count,
        k.density * 100.0,
        yes_no(k.technical_bonus),
        yes_no(k.soft_skill_bonus),
        yes_no(k.action_verb_bonus),
    );

    let g = &report.grammar;
    let avg = g
        .avg_sentence_length
        .map_or_else(|| "n/a".to_string(), |len| format!("{len:.1} chars"));
    println!(
        "  {} {} sentences (avg {avg}); lowercase \"i\" {}, extra spaces {}, repeated punctuation {}, lowercase line starts {}",
        "Grammar:".cyan(),
        g.sentence_count,
        g.lowercase_pronoun,
        g.repeated_whitespace,
        g.repeated_punctuation,
        g.lowercase_line_starts,
    );

    let r = &report.readability;
    println!(
        "  {} {:.1} words/sentence, {:.1} chars/word, transitions {}",
        "Readability:".cyan(),
        r.avg_words_per_sentence,
        r.avg_word_length,
        yes_no(r.has_transitions),
    );
}

/// Render a score in its tier colour.
fn tiered(score: u32) -> String {
    match ScoreTier::from_score(score) {
        ScoreTier::Excellent => score.green().to_string(),
        ScoreTier::Good => score.blue().to_string(),
        ScoreTier::NeedsImprovement => score.yellow().to_string(),
        ScoreTier::Poor => score.red().to_string(),
    }
}

const fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
