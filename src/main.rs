// Allow common clippy pedantic lints
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]

//! aws-cmdlets CLI
//!
//! Command-line interface for the paginated AWS commands

use aws_cmdlets::cli::{Cli, Runner};
use aws_cmdlets::LogLevel;
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays machine-readable
    let level = tracing::Level::from(if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Info
    });
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let runner = Runner::new(cli);

    if let Err(e) = runner.run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
