//! Plain-text rendering of scan and header results.

use crate::cli::output::Styled;
use crate::extraction::header::HeaderExtract;
use crate::extraction::markers::ScanReport;
use std::fmt::Write;

/// Printed when a page has no header block.
pub const NO_HEADER: &str = "NO_HEADER";

/// Render a marker scan. Length, counts and the anchor total come first,
/// then the context windows, then the `aria-label` summary.
pub fn render_scan(url: &str, report: &ScanReport, s: &Styled) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "url: {url}");
    let _ = writeln!(out, "len: {}", report.length);
    for c in &report.counts {
        let _ = writeln!(out, "count[{}]: {}", c.marker, c.count);
    }

    let _ = writeln!(out, "anchor matches: {}", report.anchor_total);

    for occ in &report.contexts {
        let heading = format!("--- {} context #{} ---", report.anchor, occ.ordinal);
        let _ = writeln!(out, "\n{}", s.cyan(&heading));
        let _ = writeln!(out, "{}", occ.window);
    }

    let _ = writeln!(out, "\naria-label total: {}", report.aria_total);
    let _ = writeln!(out, "aria-label hits: {}", report.aria_hits);
    for m in &report.aria_matches {
        let _ = writeln!(out, "{}", m.raw);
    }

    out
}

/// Render a header extraction: the block verbatim, or the sentinel.
pub fn render_header(header: Option<&HeaderExtract>) -> String {
    match header {
        Some(h) => format!("{}\n", h.html),
        None => format!("{NO_HEADER}\n"),
    }
}
