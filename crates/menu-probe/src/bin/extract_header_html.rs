use clap::Parser;
use menu_probe::cli::{self, extract_header_cmd, ExtractHeaderArgs};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = ExtractHeaderArgs::parse();
    cli::init_tracing();
    cli::finish(extract_header_cmd::run(&args.url).await)
}
