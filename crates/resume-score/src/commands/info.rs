//! Info command implementation

use clap::Args;
use owo_colors::OwoColorize;
use resume_score_core::config::{Config, ConfigSources};
use resume_score_core::keywords::KeywordCategory;
use serde::Serialize;
use tracing::{debug, instrument};

/// Arguments for the `info` subcommand.
#[derive(Args, Debug, Default)]
pub struct InfoArgs {
    // No subcommand-specific arguments; uses global --json flag
}

#[derive(Serialize)]
struct PackageInfo {
    name: &'static str,
    version: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    description: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    license: &'static str,
}

impl PackageInfo {
    const fn new() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            description: env!("CARGO_PKG_DESCRIPTION"),
            license: env!("CARGO_PKG_LICENSE"),
        }
    }
}

#[derive(Serialize)]
struct ConfigInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    config_file: Option<String>,
    log_level: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    log_dir: Option<String>,
    max_input_bytes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_score: Option<u32>,
    keyword_source: &'static str,
    keyword_count: usize,
    /// Categories overridden by configuration.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    custom_categories: Vec<KeywordCategory>,
}

impl ConfigInfo {
    fn from_config(config: &Config, sources: &ConfigSources) -> Self {
        let custom_categories = config
            .keywords
            .as_ref()
            .map(|k| {
                KeywordCategory::ALL
                    .into_iter()
                    .filter(|c| k.for_category(*c).is_some())
                    .collect()
            })
            .unwrap_or_default();
        Self {
            config_file: sources.primary_file().map(|p| p.to_string()),
            log_level: config.log_level.as_str().to_string(),
            log_dir: config.log_dir.as_ref().map(|p| p.to_string()),
            max_input_bytes: config
                .max_input_bytes
                .unwrap_or(resume_score_core::DEFAULT_MAX_INPUT_BYTES),
            min_score: config.min_score,
            keyword_source: if config.keywords.is_some() {
                "config"
            } else {
                "built-in"
            },
            keyword_count: config.keyword_set().len(),
            custom_categories,
        }
    }
}

#[derive(Serialize)]
struct FullInfo {
    #[serde(flatten)]
    package: PackageInfo,
    config: ConfigInfo,
}

/// Print package information
///
/// # Arguments
/// * `global_json` - Global `--json` flag from CLI
/// * `config` - Loaded configuration
/// * `sources` - Config source metadata from loading
#[instrument(name = "cmd_info", skip_all, fields(json_output))]
pub fn cmd_info(
    _args: InfoArgs,
    global_json: bool,
    config: &Config,
    sources: &ConfigSources,
) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing info command");

    let full_info = FullInfo {
        package: PackageInfo::new(),
        config: ConfigInfo::from_config(config, sources),
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&full_info)?);
        return Ok(());
    }

    let package = &full_info.package;
    println!("{} {}", package.name.bold(), package.version.green());
    if !package.description.is_empty() {
        println!("{}", package.description);
    }
    if !package.license.is_empty() {
        println!("{}: {}", "License".dimmed(), package.license);
    }

    let cfg = &full_info.config;
    println!();
    println!("{}", "Configuration".bold().underline());
    match cfg.config_file {
        Some(ref path) => println!("{}: {}", "Config file".dimmed(), path.cyan()),
        None => println!("{}: {}", "Config file".dimmed(), "none loaded".yellow()),
    }
    println!("{}: {}", "Log level".dimmed(), cfg.log_level);
    if let Some(ref dir) = cfg.log_dir {
        println!("{}: {}", "Log directory".dimmed(), dir);
    }
    println!("{}: {} bytes", "Max input".dimmed(), cfg.max_input_bytes);

    println!();
    println!("{}", "Scoring".bold().underline());
    print_opt("Min score", cfg.min_score.as_ref());
    println!(
        "{}: {} ({} keywords)",
        "Keyword set".dimmed(),
        cfg.keyword_source,
        cfg.keyword_count
    );
    if !cfg.custom_categories.is_empty() {
        let names: Vec<&str> = cfg.custom_categories.iter().map(|c| c.as_str()).collect();
        println!("{}: {}", "Custom categories".dimmed(), names.join(", "));
    }

    Ok(())
}

/// Print an optional value or "(not set)".
fn print_opt<T: std::fmt::Display>(label: &str, value: Option<&T>) {
    match value {
        Some(v) => println!("{}: {}", label.dimmed(), v),
        None => println!("{}: {}", label.dimmed(), "(not set)".dimmed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resume_score_core::config::KeywordConfig;

    fn test_config() -> Config {
        Config::default()
    }

    fn test_sources() -> ConfigSources {
        ConfigSources::default()
    }

    #[test]
    fn test_cmd_info_text_succeeds() {
        assert!(cmd_info(InfoArgs::default(), false, &test_config(), &test_sources()).is_ok());
    }

    #[test]
    fn test_cmd_info_json_via_global() {
        assert!(cmd_info(InfoArgs::default(), true, &test_config(), &test_sources()).is_ok());
    }

    #[test]
    fn test_config_info_no_file() {
        let info = ConfigInfo::from_config(&test_config(), &test_sources());
        assert!(info.config_file.is_none());
        assert_eq!(info.log_level, "info");
        assert_eq!(info.keyword_source, "built-in");
        assert_eq!(info.max_input_bytes, resume_score_core::DEFAULT_MAX_INPUT_BYTES);
        assert!(info.custom_categories.is_empty());
    }

    #[test]
    fn test_config_info_reports_custom_keywords() {
        let config = Config {
            keywords: Some(KeywordConfig {
                technical: Some(vec!["rust".into(), "tokio".into()]),
                ..Default::default()
            }),
            ..Default::default()
        };
        let info = ConfigInfo::from_config(&config, &test_sources());
        assert_eq!(info.keyword_source, "config");
        assert_eq!(info.custom_categories, vec![KeywordCategory::Technical]);
        assert_eq!(info.keyword_count, config.keyword_set().len());
    }
}
