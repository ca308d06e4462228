use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use figsearch::cli::{Cli, LOG_ENV, RunOptions};
use figsearch::operations;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let options = RunOptions::from(&cli);
    init_tracing(&options);

    let file = cli.command.file();
    let outcome = match cli.command.shape() {
        None => operations::check(file),
        Some(kind) => operations::search(file, kind),
    }
    .with_context(|| format!("Failed to process {}", file.display()))?;

    let report = outcome
        .render(options.format)
        .context("Failed to render report")?;

    if outcome.writes_to_stderr(options.format) {
        eprintln!("{}", report);
    } else {
        println!("{}", report);
    }

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn init_tracing(options: &RunOptions) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(options.log_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
