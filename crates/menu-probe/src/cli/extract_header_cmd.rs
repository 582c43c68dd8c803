//! `extract-header-html [URL]`: dump the first `<header>` block.

use crate::acquisition::fetcher::{fetch, FetchConfig};
use crate::cli::{report, EXIT_NOT_FOUND};
use crate::extraction::header::HeaderExtractor;
use anyhow::Result;
use std::process::ExitCode;
use tracing::debug;

/// Print the header block, or `NO_HEADER` and exit 1 when there is none.
pub async fn run(url: &str) -> Result<ExitCode> {
    let doc = fetch(url, &FetchConfig::default()).await?;

    let header = HeaderExtractor::default().extract(&doc);
    print!("{}", report::render_header(header.as_ref()));

    match header {
        Some(h) => {
            if h.truncated {
                debug!(full_length = h.full_length, "header block truncated");
            }
            Ok(ExitCode::SUCCESS)
        }
        None => Ok(ExitCode::from(EXIT_NOT_FOUND)),
    }
}
