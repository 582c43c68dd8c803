//! Marker counting, anchor context windows, and `aria-label` extraction.
//!
//! Everything here is a read-only pass over one [`Document`]:
//!
//! 1. **Marker counts**: non-overlapping occurrences of each marker in the
//!    lowercased text, in configuration order.
//! 2. **Anchor contexts**: every case-insensitive match of the anchor, with a
//!    window of original-case text around the first few. The window leans
//!    backwards because icon markup sits inside the button that carries the
//!    label.
//! 3. **ARIA labels**: every `aria-label="..."` attribute, filtered by
//!    keyword.

use crate::acquisition::document::Document;
use regex::{Regex, RegexBuilder};
use tracing::debug;

/// Markers counted by default: the Lucide menu icon in both its class and
/// data-attribute forms, and the label texts the header's menu buttons use.
pub const DEFAULT_MARKERS: &[&str] = &[
    "lucide-menu",
    "data-lucide=\"menu\"",
    "aria-label=\"menü\"",
    "aria-label=\"menu\"",
    "aria-label=\"kategoriler menüsünü aç/kapat\"",
    "aria-label=\"kategoriler\"",
];

pub const DEFAULT_ANCHOR: &str = "lucide-menu";

/// Label keywords: the Turkish stem and the English word.
pub const DEFAULT_ARIA_KEYWORDS: &[&str] = &["men", "menu"];

/// What to look for and how much to report.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub markers: Vec<String>,
    pub anchor: String,
    pub aria_keywords: Vec<String>,
    /// Context windows are extracted for this many anchor matches.
    pub max_contexts: usize,
    /// Characters of context before the anchor match.
    pub context_before: usize,
    /// Characters of context after the start of the anchor match.
    pub context_after: usize,
    /// Filtered labels listed in the report.
    pub max_aria_hits: usize,
    /// Longest label value the attribute regex accepts.
    pub max_aria_value_len: usize,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            markers: DEFAULT_MARKERS.iter().map(|m| m.to_string()).collect(),
            anchor: DEFAULT_ANCHOR.to_string(),
            aria_keywords: DEFAULT_ARIA_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            max_contexts: 5,
            context_before: 1200,
            context_after: 450,
            max_aria_hits: 50,
            max_aria_value_len: 200,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerCount {
    pub marker: String,
    pub count: usize,
}

/// One anchor match and the text around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    /// 1-based position among the anchor matches.
    pub ordinal: usize,
    /// Character offset of the match.
    pub offset: usize,
    /// Window start, in characters.
    pub start: usize,
    /// Window end (exclusive), in characters.
    pub end: usize,
    /// Original-case text of the window.
    pub window: String,
}

/// One `aria-label="..."` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeMatch {
    /// The attribute exactly as written, quotes included.
    pub raw: String,
    /// The text between the quotes.
    pub value: String,
}

/// Everything one scan found.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Document length in characters.
    pub length: usize,
    pub counts: Vec<MarkerCount>,
    pub anchor: String,
    /// Number of anchor matches, including those without a context window.
    pub anchor_total: usize,
    pub contexts: Vec<Occurrence>,
    /// Every `aria-label` attribute, before keyword filtering.
    pub aria_total: usize,
    /// Labels that passed the keyword filter.
    pub aria_hits: usize,
    /// The first `max_aria_hits` filtered labels.
    pub aria_matches: Vec<AttributeMatch>,
}

impl ScanReport {
    /// Count recorded for `marker`, if it was configured.
    pub fn count_of(&self, marker: &str) -> Option<usize> {
        self.counts
            .iter()
            .find(|c| c.marker == marker)
            .map(|c| c.count)
    }
}

/// A scanner with its patterns compiled once.
#[derive(Debug, Clone)]
pub struct MarkerScanner {
    config: ScanConfig,
    anchor_re: Option<Regex>,
    aria_re: Regex,
}

impl MarkerScanner {
    pub fn new(config: ScanConfig) -> Result<Self, regex::Error> {
        let anchor_re = if config.anchor.is_empty() {
            None
        } else {
            Some(
                RegexBuilder::new(&regex::escape(&config.anchor))
                    .case_insensitive(true)
                    .build()?,
            )
        };
        let aria_re = Regex::new(&format!(
            r#"(?i)aria-label="([^"]{{0,{}}})""#,
            config.max_aria_value_len
        ))?;

        Ok(Self {
            config,
            anchor_re,
            aria_re,
        })
    }

    /// Run all three passes over `doc`.
    pub fn scan(&self, doc: &Document) -> ScanReport {
        let counts = self
            .config
            .markers
            .iter()
            .map(|marker| MarkerCount {
                marker: marker.clone(),
                count: count_occurrences(doc.lower(), &marker.to_lowercase()),
            })
            .collect();

        let (anchor_total, contexts) = self.anchor_contexts(doc);
        let labels = self.aria_labels(doc.text());
        let aria_total = labels.len();
        let hits: Vec<AttributeMatch> = labels
            .into_iter()
            .filter(|label| self.is_keyword_hit(&label.value))
            .collect();
        let aria_hits = hits.len();
        let aria_matches = hits.into_iter().take(self.config.max_aria_hits).collect();

        debug!(
            length = doc.char_len(),
            anchor_total, aria_total, aria_hits, "scan complete"
        );

        ScanReport {
            length: doc.char_len(),
            counts,
            anchor: self.config.anchor.clone(),
            anchor_total,
            contexts,
            aria_total,
            aria_hits,
            aria_matches,
        }
    }

    /// Count anchor matches and cut windows for the first `max_contexts`.
    fn anchor_contexts(&self, doc: &Document) -> (usize, Vec<Occurrence>) {
        let Some(re) = &self.anchor_re else {
            return (0, Vec::new());
        };
        let text = doc.text();

        let mut total = 0;
        let mut contexts = Vec::new();
        // Running byte -> char conversion; matches arrive in order.
        let mut last_byte = 0;
        let mut last_char = 0;

        for m in re.find_iter(text) {
            total += 1;
            if contexts.len() >= self.config.max_contexts {
                continue;
            }

            let offset = last_char + text[last_byte..m.start()].chars().count();
            last_byte = m.start();
            last_char = offset;

            let start = offset.saturating_sub(self.config.context_before);
            let end = (offset + self.config.context_after).min(doc.char_len());
            contexts.push(Occurrence {
                ordinal: total,
                offset,
                start,
                end,
                window: doc.slice_chars(start, end).to_string(),
            });
        }

        (total, contexts)
    }

    fn aria_labels(&self, text: &str) -> Vec<AttributeMatch> {
        self.aria_re
            .captures_iter(text)
            .map(|caps| AttributeMatch {
                raw: caps.get(0).map_or("", |m| m.as_str()).to_string(),
                value: caps.get(1).map_or("", |m| m.as_str()).to_string(),
            })
            .collect()
    }

    fn is_keyword_hit(&self, value: &str) -> bool {
        let lower = value.to_lowercase();
        self.config
            .aria_keywords
            .iter()
            .filter(|k| !k.is_empty())
            .any(|k| lower.contains(&k.to_lowercase()))
    }
}

/// Non-overlapping occurrences of `needle` in `haystack`. An empty needle
/// counts zero.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}
