//! Word (OOXML) text extraction.
//!
//! A `.docx` file is a zip container; the body lives in `word/document.xml`.
//! Text runs (`w:t`) are concatenated, tabs and breaks are preserved, and
//! each paragraph (`w:p`) ends a line. Legacy binary `.doc` files are not
//! zip containers and fail here.

use std::io::{Cursor, Read};

use quick_xml::Reader;
use quick_xml::events::Event;

use super::DocumentKind;
use crate::error::{ExtractError, ExtractResult};

const DOCUMENT_PART: &str = "word/document.xml";

/// Extract the body text. The inflated document part may not exceed `limit`
/// bytes, whatever size its zip entry declares.
pub(super) fn extract(bytes: &[u8], limit: u64) -> ExtractResult<String> {
    let failed = |e: &dyn std::fmt::Display| ExtractError::failed(DocumentKind::Word, e);

    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| failed(&e))?;
    let part = archive.by_name(DOCUMENT_PART).map_err(|e| failed(&e))?;
    if part.size() > limit {
        return Err(ExtractError::FileTooLarge {
            size: part.size(),
            limit,
        });
    }
    let mut xml = Vec::new();
    // Read one byte past the limit so a lying size header is detectable.
    part.take(limit.saturating_add(1))
        .read_to_end(&mut xml)
        .map_err(|e| failed(&e))?;
    if xml.len() as u64 > limit {
        return Err(ExtractError::FileTooLarge {
            size: xml.len() as u64,
            limit,
        });
    }
    let xml = String::from_utf8(xml).map_err(|e| failed(&e))?;

    document_text(&xml).map_err(|e| failed(&e))
}

fn document_text(xml: &str) -> Result<String, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut out = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event()? {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => out.push('\n'),
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:tab" => out.push('\t'),
                b"w:br" | b"w:cr" | b"w:p" => out.push('\n'),
                _ => {}
            },
            Event::Text(t) if in_text_run => out.push_str(&t.unescape()?),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(out)
}
