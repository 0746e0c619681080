//! Error types for resume-score-core.

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::extract::DocumentKind;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while turning an uploaded document into plain text.
///
/// The scoring engine never fails; every failure mode of the pipeline lives here.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// The MIME type or file extension is not one of the supported document kinds.
    #[error("unsupported file type: {mime}. Upload a PDF, Word document, or text file")]
    UnsupportedFileType {
        /// The MIME type (or extension) that was rejected.
        mime: String,
    },

    /// The document exceeds the upload size ceiling.
    #[error("file too large: {size} bytes (limit: {limit} bytes)")]
    FileTooLarge {
        /// Size of the rejected document in bytes.
        size: u64,
        /// Configured ceiling in bytes.
        limit: u64,
    },

    /// The document could not be decoded.
    #[error("failed to extract text from {kind} document: {reason}")]
    ExtractionFailed {
        /// The kind of document being decoded.
        kind: DocumentKind,
        /// Decoder error message.
        reason: String,
    },

    /// The document could not be read from disk.
    #[error("failed to read {path}")]
    Io {
        /// Path that failed to read.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ExtractError {
    pub(crate) fn failed(kind: DocumentKind, reason: impl std::fmt::Display) -> Self {
        Self::ExtractionFailed {
            kind,
            reason: reason.to_string(),
        }
    }
}

/// Result type alias using [`ExtractError`].
pub type ExtractResult<T> = Result<T, ExtractError>;
