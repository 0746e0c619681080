//! Extract command: print the plain text the scorer would see.

use camino::Utf8PathBuf;
use clap::Args;
use serde::Serialize;
use tracing::{debug, instrument};

use resume_score_core::extract::DocumentKind;

use super::read_document;

/// Arguments for the `extract` subcommand.
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Document to extract (.pdf, .docx, .txt).
    pub file: Utf8PathBuf,
}

#[derive(Serialize)]
struct Extracted<'a> {
    file: &'a str,
    kind: Option<DocumentKind>,
    chars: usize,
    text: &'a str,
}

/// Extract and print a document's text.
#[instrument(name = "cmd_extract", skip_all, fields(file = %args.file))]
pub fn cmd_extract(args: ExtractArgs, global_json: bool, max_input_bytes: u64) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing extract command");

    let text = read_document(Some(&args.file), max_input_bytes)?;

    if global_json {
        let out = Extracted {
            file: args.file.as_str(),
            kind: DocumentKind::from_path(&args.file),
            chars: text.chars().count(),
            text: &text,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{text}");
    }

    Ok(())
}
