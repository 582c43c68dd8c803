//! Command-line surface shared by the `check-home-html` and
//! `extract-header-html` binaries.

pub mod check_home_cmd;
pub mod extract_header_cmd;
pub mod output;
pub mod report;

use crate::acquisition::fetcher::DEFAULT_URL;
use clap::Parser;
use std::process::ExitCode;

/// Exit status when no header block was found.
pub const EXIT_NOT_FOUND: u8 = 1;

/// Exit status when the page could not be fetched.
pub const EXIT_FETCH_FAILED: u8 = 2;

/// Count menu markers and aria-labels in a served page.
#[derive(Parser, Debug)]
#[command(name = "check-home-html", version, about)]
pub struct CheckHomeArgs {
    /// Page to fetch.
    #[arg(default_value = DEFAULT_URL)]
    pub url: String,
}

/// Print the first <header> block of a served page.
#[derive(Parser, Debug)]
#[command(name = "extract-header-html", version, about)]
pub struct ExtractHeaderArgs {
    /// Page to fetch.
    #[arg(default_value = DEFAULT_URL)]
    pub url: String,
}

/// Initialize tracing to stderr. `RUST_LOG` overrides the default level.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("menu_probe=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Map a command outcome to the process exit status.
pub fn finish(result: anyhow::Result<ExitCode>) -> ExitCode {
    match result {
        Ok(code) => code,
        Err(err) => {
            output::print_error(&err);
            ExitCode::from(EXIT_FETCH_FAILED)
        }
    }
}
