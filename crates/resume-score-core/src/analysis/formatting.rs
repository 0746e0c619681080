//! Formatting score: section headers, bullets, contact details, and dates.

use std::sync::LazyLock;

use regex::Regex;

use super::reports::FormattingBreakdown;

/// Canonical résumé section header words.
pub const SECTION_HEADERS: &[&str] = &["experience", "education", "skills", "summary", "objective"];

const BULLET_GLYPHS: &[char] = &['•', '-', '*'];

const BASE_SCORE: u32 = 60;
const HEADER_BONUS: u32 = 8;
const BULLET_BONUS: u32 = 10;
const EMAIL_BONUS: u32 = 5;
const PHONE_BONUS: u32 = 5;
const DATE_BONUS: u32 = 10;

// Word boundaries are ASCII-only: an accented letter next to a match does
// not suppress it.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}(?-u:\b)")
        .expect("valid regex")
});

/// Three digits, three digits, four digits, with optional `-` or `.` between groups.
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u:\b)[0-9]{3}[-.]?[0-9]{3}[-.]?[0-9]{4}(?-u:\b)").expect("valid regex")
});

static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u:\b)(?:19|20)[0-9]{2}(?-u:\b)").expect("valid regex"));

/// Only the leading boundary is anchored, so "March" and "Mar" both count.
static MONTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?-u:\b)(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)")
        .expect("valid regex")
});

/// Score the structure of raw (case-preserved) résumé text.
///
/// Starts at 60 and adds independent bonuses, capped at 100:
/// - +8 per section header word present (max +40)
/// - +10 for any bullet glyph
/// - +5 for an email address
/// - +5 for a phone number
/// - +10 for a 19xx/20xx year or a month abbreviation
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn analyze_formatting(text: &str) -> FormattingBreakdown {
    let lower = text.to_lowercase();
    let headers_found: Vec<String> = SECTION_HEADERS
        .iter()
        .filter(|header| lower.contains(*header))
        .map(|header| (*header).to_string())
        .collect();

    let has_bullets = text.contains(BULLET_GLYPHS);
    let has_email = EMAIL_RE.is_match(text);
    let has_phone = PHONE_RE.is_match(text);
    let has_dates = YEAR_RE.is_match(text) || MONTH_RE.is_match(text);

    let mut score = BASE_SCORE + HEADER_BONUS * headers_found.len() as u32;
    if has_bullets {
        score += BULLET_BONUS;
    }
    if has_email {
        score += EMAIL_BONUS;
    }
    if has_phone {
        score += PHONE_BONUS;
    }
    if has_dates {
        score += DATE_BONUS;
    }
    let score = score.min(100);

    tracing::debug!(headers = headers_found.len(), score, "formatting scored");

    FormattingBreakdown {
        headers_found,
        has_bullets,
        has_email,
        has_phone,
        has_dates,
        score,
    }
}

/// Formatting score only.
pub fn score_formatting(text: &str) -> u32 {
    analyze_formatting(text).score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_gets_base_score() {
        let report = analyze_formatting("");
        assert_eq!(report.score, 60);
        assert!(report.headers_found.is_empty());
        assert!(!report.has_bullets);
    }

    #[test]
    fn headers_are_case_insensitive() {
        let report = analyze_formatting("EXPERIENCE\nEducation\nskills");
        assert_eq!(report.headers_found, vec!["experience", "education", "skills"]);
        assert_eq!(report.score, 60 + 24);
    }

    #[test]
    fn all_headers_add_forty() {
        let plain = "Worked on things";
        let with_headers = "Worked on things experience education skills summary objective";
        assert_eq!(score_formatting(with_headers), score_formatting(plain) + 40);
    }

    #[test]
    fn bullet_counted_once() {
        assert_eq!(score_formatting("• one\n• two\n- three * four"), 70);
    }

    #[test]
    fn contact_details_detected() {
        let report = analyze_formatting("alex.doe@example.com 555-123-4567");
        assert!(report.has_email);
        assert!(report.has_phone);
        // The hyphens in the phone number also count as bullets.
        assert_eq!(report.score, 60 + 10 + 5 + 5);
    }

    #[test]
    fn phone_without_separators() {
        assert!(analyze_formatting("call 5551234567").has_phone);
        assert!(!analyze_formatting("call 555123456").has_phone);
    }

    #[test]
    fn email_needs_two_letter_tld() {
        assert!(!analyze_formatting("me@host.c").has_email);
        assert!(analyze_formatting("me@host.io").has_email);
    }

    #[test]
    fn years_and_months_count_as_dates() {
        assert!(analyze_formatting("Graduated 2019").has_dates);
        assert!(analyze_formatting("since 1998").has_dates);
        assert!(analyze_formatting("started in SEPTEMBER").has_dates);
        assert!(!analyze_formatting("in 2150 or 1850").has_dates);
        assert!(!analyze_formatting("a 12019 id").has_dates);
    }

    #[test]
    fn accented_letters_do_not_block_matches() {
        assert!(analyze_formatting("Diplômé2019").has_dates);
        assert!(analyze_formatting("éjanvier").has_dates);
        assert!(analyze_formatting("tél5551234567").has_phone);
        assert!(analyze_formatting("éalex@example.com").has_email);
    }

    #[test]
    fn score_capped_at_one_hundred() {
        let text = "Summary Objective Experience Education Skills\n\
                    • jane@example.com 555.123.4567 Jan 2020";
        assert_eq!(score_formatting(text), 100);
    }
}
