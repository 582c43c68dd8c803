//! `check-home-html [URL]`: marker counts, anchor contexts and aria-labels.

use crate::acquisition::fetcher::{fetch, FetchConfig};
use crate::cli::output::Styled;
use crate::cli::report;
use crate::extraction::markers::{MarkerScanner, ScanConfig};
use anyhow::{Context, Result};
use std::process::ExitCode;

/// Run the scan. A fetch failure returns an error before anything is printed.
pub async fn run(url: &str) -> Result<ExitCode> {
    let scanner = MarkerScanner::new(ScanConfig::default()).context("invalid scan patterns")?;
    let doc = fetch(url, &FetchConfig::default()).await?;

    let report = scanner.scan(&doc);
    print!("{}", report::render_scan(url, &report, &Styled::new()));

    Ok(ExitCode::SUCCESS)
}
