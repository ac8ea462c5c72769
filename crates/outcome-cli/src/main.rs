#![forbid(unsafe_code)]

//! Outcome CLI
//!
//! Runs each input through the outcome pipeline and prints one line per input.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use outcome_cli::cli::Args;
use outcome_cli::config::{Config, Settings};
use outcome_cli::report;

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Initialize tracing
    let level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(args.config.as_deref()).context("loading configuration")?;
    let settings = Settings::resolve(&args, &config).context("resolving settings")?;
    tracing::debug!(?settings, inputs = args.inputs.len(), "Starting run");

    let (reports, total) = outcome_cli::process(&args.inputs, &settings, args.sum);
    for line in &reports {
        println!("{line}");
    }
    let total_failed = total.as_ref().is_some_and(|t| t.is_failure());
    if let Some(total) = total {
        println!("{}", report::total_line(total));
    }

    let failed = reports.iter().filter(|r| !r.is_acceptable()).count();
    if failed > 0 || total_failed {
        tracing::info!(
            failed,
            total_failed,
            inputs = reports.len(),
            "Run did not fully succeed"
        );
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
