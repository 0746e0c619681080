//! Command implementations.

use std::io::Read;
use std::time::Duration;

use anyhow::Context;
use camino::Utf8Path;
use indicatif::{ProgressBar, ProgressStyle};

use resume_score_core::extract::{DocumentKind, extract_file, extract_text};

pub mod analyze;
pub mod extract;
pub mod info;
pub mod keywords;
#[cfg(feature = "mcp")]
pub mod serve;

/// Label used in output when the document came from stdin.
pub const STDIN_LABEL: &str = "<stdin>";

/// Load a document as plain text, from a file or from stdin.
///
/// Files go through the extractor, so PDF and Word documents are accepted
/// by extension. Stdin (no path, or `-`) is read as UTF-8 plain text. Both
/// paths enforce `max_bytes` before decoding.
pub fn read_document(path: Option<&Utf8Path>, max_bytes: u64) -> anyhow::Result<String> {
    match path {
        Some(path) if path.as_str() != "-" => {
            let spinner = spinner(format!("extracting {path}"));
            let text = extract_file(path, max_bytes);
            spinner.finish_and_clear();
            text.with_context(|| format!("failed to extract text from {path}"))
        }
        _ => read_stdin(max_bytes),
    }
}

/// Stderr spinner for slow extraction; hidden when stderr is not a terminal.
fn spinner(message: String) -> ProgressBar {
    let bar = ProgressBar::new_spinner().with_message(message);
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        bar.set_style(style);
    }
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

fn read_stdin(max_bytes: u64) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    // Read one byte past the limit so oversize input is detectable.
    std::io::stdin()
        .lock()
        .take(max_bytes.saturating_add(1))
        .read_to_end(&mut buf)
        .context("failed to read stdin")?;
    if buf.len() as u64 > max_bytes {
        anyhow::bail!("input too large: stdin exceeds {max_bytes} bytes");
    }
    extract_text(&buf, DocumentKind::PlainText, max_bytes)
        .context("failed to decode stdin as UTF-8 text")
}

/// Display label for an optional input path.
pub fn input_label(path: Option<&Utf8Path>) -> &str {
    match path {
        Some(path) if path.as_str() != "-" => path.as_str(),
        _ => STDIN_LABEL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    #[test]
    fn reads_text_file_through_extractor() {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("cv.txt")).unwrap();
        std::fs::write(&path, "\n Skills: SQL \n").unwrap();
        assert_eq!(read_document(Some(&path), 1024).unwrap(), "Skills: SQL");
    }

    #[test]
    fn oversize_file_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("cv.txt")).unwrap();
        std::fs::write(&path, "x".repeat(64)).unwrap();
        let err = read_document(Some(&path), 16).unwrap_err();
        assert!(format!("{err:#}").contains("too large"));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = Utf8PathBuf::try_from(tmp.path().join("cv.png")).unwrap();
        std::fs::write(&path, "x").unwrap();
        let err = read_document(Some(&path), 1024).unwrap_err();
        assert!(format!("{err:#}").contains("unsupported"));
    }

    #[test]
    fn labels() {
        assert_eq!(input_label(None), STDIN_LABEL);
        assert_eq!(input_label(Some(Utf8Path::new("-"))), STDIN_LABEL);
        assert_eq!(input_label(Some(Utf8Path::new("cv.pdf"))), "cv.pdf");
    }
}
