//! Document text extraction.
//!
//! Turns an uploaded PDF, Word (OOXML), or plain-text document into the
//! plain UTF-8 string the scoring engine consumes. Validation happens
//! before decoding: size first, then type.
//!
//! ```no_run
//! use camino::Utf8Path;
//! use resume_score_core::{analysis, extract};
//!
//! let text = extract::extract_file(Utf8Path::new("resume.pdf"), extract::MAX_UPLOAD_BYTES)?;
//! let result = analysis::analyze(&text);
//! println!("{}", result.overall_score);
//! # Ok::<(), resume_score_core::ExtractError>(())
//! ```

mod docx;

use camino::Utf8Path;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{ExtractError, ExtractResult};

/// Largest document accepted for extraction (10 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

const MIME_PDF: &str = "application/pdf";
const MIME_DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const MIME_DOC: &str = "application/msword";
const MIME_TEXT: &str = "text/plain";

/// Supported document kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    /// Portable Document Format.
    Pdf,
    /// Microsoft Word.
    Word,
    /// UTF-8 plain text.
    PlainText,
}

impl DocumentKind {
    /// Resolve a MIME type. Parameters such as `; charset=utf-8` are ignored.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or_default().trim();
        if essence.eq_ignore_ascii_case(MIME_PDF) {
            Some(Self::Pdf)
        } else if essence.eq_ignore_ascii_case(MIME_DOCX) || essence.eq_ignore_ascii_case(MIME_DOC)
        {
            Some(Self::Word)
        } else if essence.eq_ignore_ascii_case(MIME_TEXT) {
            Some(Self::PlainText)
        } else {
            None
        }
    }

    /// Resolve a file path by extension.
    pub fn from_path(path: &Utf8Path) -> Option<Self> {
        let ext = path.extension()?.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" | "doc" => Some(Self::Word),
            "txt" | "text" => Some(Self::PlainText),
            _ => None,
        }
    }

    /// Returns the kind as a kebab-case string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Word => "word",
            Self::PlainText => "plain-text",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check an upload's size and MIME type before decoding it.
pub fn validate(size: u64, mime: &str, limit: u64) -> ExtractResult<DocumentKind> {
    if size > limit {
        return Err(ExtractError::FileTooLarge { size, limit });
    }
    DocumentKind::from_mime(mime).ok_or_else(|| ExtractError::UnsupportedFileType {
        mime: mime.to_string(),
    })
}

/// Extract trimmed plain text from document bytes.
///
/// `limit` bounds the decompressed size of container formats; the caller
/// is expected to have checked `bytes` itself against it.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn extract_text(bytes: &[u8], kind: DocumentKind, limit: u64) -> ExtractResult<String> {
    let text = match kind {
        DocumentKind::Pdf => decode_pdf(bytes)?,
        DocumentKind::Word => docx::extract(bytes, limit)?,
        DocumentKind::PlainText => decode_plain_text(bytes)?,
    };
    let text = text.trim().to_string();
    tracing::debug!(bytes = text.len(), "text extracted");
    Ok(text)
}

/// Validate and extract an in-memory upload identified by MIME type.
pub fn extract_upload(bytes: &[u8], mime: &str, limit: u64) -> ExtractResult<String> {
    let kind = validate(bytes.len() as u64, mime, limit)?;
    extract_text(bytes, kind, limit)
}

/// Read, validate, and extract a document from disk, typed by extension.
#[tracing::instrument(skip_all, fields(path = %path, limit))]
pub fn extract_file(path: &Utf8Path, limit: u64) -> ExtractResult<String> {
    let io_err = |source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    };
    // Preflight the size before reading into memory.
    let size = std::fs::metadata(path.as_std_path()).map_err(io_err)?.len();
    if size > limit {
        return Err(ExtractError::FileTooLarge { size, limit });
    }
    let kind = DocumentKind::from_path(path).ok_or_else(|| ExtractError::UnsupportedFileType {
        mime: path.extension().unwrap_or_default().to_string(),
    })?;
    let bytes = std::fs::read(path.as_std_path()).map_err(io_err)?;
    extract_text(&bytes, kind, limit)
}

/// The PDF decoder panics on some malformed documents (missing fonts or
/// media boxes, non-string text operands); those surface as extraction
/// failures instead of aborting the caller.
fn decode_pdf(bytes: &[u8]) -> ExtractResult<String> {
    let failed = |reason: &dyn std::fmt::Display| ExtractError::failed(DocumentKind::Pdf, reason);
    match std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes)) {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(failed(&e)),
        Err(payload) => {
            let reason = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "PDF decoder panicked".to_string());
            tracing::warn!(%reason, "PDF decoder panicked");
            Err(failed(&format!("malformed document ({reason})")))
        }
    }
}

fn decode_plain_text(bytes: &[u8]) -> ExtractResult<String> {
    let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
    String::from_utf8(bytes.to_vec()).map_err(|e| ExtractError::failed(DocumentKind::PlainText, e))
}
