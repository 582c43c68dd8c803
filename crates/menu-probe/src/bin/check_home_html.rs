use clap::Parser;
use menu_probe::cli::{self, check_home_cmd, CheckHomeArgs};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = CheckHomeArgs::parse();
    cli::init_tracing();
    cli::finish(check_home_cmd::run(&args.url).await)
}
