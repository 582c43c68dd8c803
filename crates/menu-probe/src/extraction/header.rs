//! First `<header>...</header>` block of a page.
//!
//! Pages are assumed to carry a single site header, so only the first block is
//! returned. Output is capped at `max_header_length` characters and cut
//! silently.

use crate::acquisition::document::Document;
use regex::Regex;
use std::sync::OnceLock;

pub const DEFAULT_MAX_HEADER_LENGTH: usize = 20_000;

/// A matched header block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderExtract {
    /// The block text, cut to the length limit.
    pub html: String,
    /// Length of the whole match in characters.
    pub full_length: usize,
    pub truncated: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct HeaderExtractor {
    pub max_header_length: usize,
}

impl Default for HeaderExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HEADER_LENGTH)
    }
}

impl HeaderExtractor {
    pub fn new(max_header_length: usize) -> Self {
        Self { max_header_length }
    }

    pub fn extract(&self, doc: &Document) -> Option<HeaderExtract> {
        extract_header(doc.text(), self.max_header_length)
    }
}

/// Find the first header block in `html`, cut to `max_len` characters.
///
/// The opening tag may carry attributes; the match is non-greedy and spans
/// newlines, so it ends at the first `</header>` after the opening tag.
pub fn extract_header(html: &str, max_len: usize) -> Option<HeaderExtract> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"(?i)<header[\s\S]*?</header>").expect("header regex is valid")
    });

    let block = re.find(html)?.as_str();
    let (html, truncated) = match block.char_indices().nth(max_len) {
        Some((cut, _)) => (&block[..cut], true),
        None => (block, false),
    };

    Some(HeaderExtract {
        html: html.to_string(),
        full_length: block.chars().count(),
        truncated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_header() {
        assert!(extract_header("<html><body>no header here</body></html>", 20_000).is_none());
    }

    #[test]
    fn test_unclosed_header() {
        assert!(extract_header("<header><nav>", 20_000).is_none());
    }

    #[test]
    fn test_header_with_attributes_and_newlines() {
        let html = "<body>\n<HEADER class=\"site\">\n  <button aria-label=\"Menü\">\n  </button>\n</Header>\n<main></main></body>";
        let header = extract_header(html, 20_000).unwrap();

        assert_eq!(
            header.html,
            "<HEADER class=\"site\">\n  <button aria-label=\"Menü\">\n  </button>\n</Header>"
        );
        assert!(!header.truncated);
        assert_eq!(header.full_length, header.html.chars().count());
    }

    #[test]
    fn test_returns_first_header_only() {
        let html = "<header>one</header><article><header>two</header></article>";
        let header = extract_header(html, 20_000).unwrap();
        assert_eq!(header.html, "<header>one</header>");
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let doc = Document::from_text("u", "<p><header><a>x</a></header></p>");
        let extractor = HeaderExtractor::default();
        assert_eq!(extractor.extract(&doc), extractor.extract(&doc));
    }

    #[test]
    fn test_truncates_at_exact_length() {
        let block = format!("<header>{}</header>", "x".repeat(25_000));
        let doc = Document::from_text("u", block.clone());
        let header = HeaderExtractor::default().extract(&doc).unwrap();

        assert!(header.truncated);
        assert_eq!(header.html.chars().count(), 20_000);
        assert_eq!(header.html, &block[..20_000]);
        assert_eq!(header.full_length, block.len());
    }

    #[test]
    fn test_block_at_limit_is_not_truncated() {
        let block = format!("<header>{}</header>", "y".repeat(10));
        let header = extract_header(&block, block.len()).unwrap();
        assert!(!header.truncated);
        assert_eq!(header.html, block);
    }

    #[test]
    fn test_truncation_counts_characters() {
        let html = "<header>ğğğğ</header>";
        let header = extract_header(html, 10).unwrap();
        assert_eq!(header.html, "<header>ğğ");
        assert!(header.truncated);
    }
}
