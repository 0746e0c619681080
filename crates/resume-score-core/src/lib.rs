//! Core library for resume-score.
//!
//! This crate provides the scoring engine, document text extraction, and
//! configuration used by the `resume-score` CLI and any downstream consumers.
//!
//! # Modules
//!
//! - [`analysis`] - Deterministic résumé scoring engine
//! - [`extract`] - PDF, Word, and plain-text extraction
//! - [`keywords`] - Reference keyword sets
//! - [`text`] - Normalization and sentence splitting
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use resume_score_core::{KeywordSet, ResumeAnalyzer};
//!
//! let analyzer = ResumeAnalyzer::new(KeywordSet::builtin());
//! let result = analyzer.analyze("Summary\nDeveloped Python tooling since 2019.");
//!
//! println!("{} ({})", result.overall_score, result.reading_level);
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod extract;
pub mod keywords;
pub mod text;

pub use analysis::{ReadingLevel, ResumeAnalysis, ResumeAnalyzer, ScoreBundle, analyze};
pub use config::{Config, ConfigLoader, ConfigSources, KeywordConfig, LogLevel};
pub use error::{ConfigError, ConfigResult, ExtractError, ExtractResult};
pub use extract::{DocumentKind, MAX_UPLOAD_BYTES};
pub use keywords::{KeywordCategory, KeywordSet};

/// Default maximum input size in bytes for CLI and MCP inputs.
pub const DEFAULT_MAX_INPUT_BYTES: u64 = MAX_UPLOAD_BYTES;
