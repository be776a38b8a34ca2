//! # FPAT - command line entry point
//!
//! 1. Parse the command line
//! 2. Install tracing (`FPAT_LOG` overrides the level, logs go to stderr)
//! 3. Load configuration
//! 4. Dispatch the command, writing example output to stdout

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use fpat_core::RailwayExt;
use tracing::error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use fpat::cli::Cli;
use fpat::commands::execute_command;
use fpat::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = Config::load(cli.config.as_deref())
        .tap_err(|e| error!("Configuration failed: {e}"))
        .context("Failed to load configuration")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute_command(&cli.command, &config, &mut out).context("Command failed")?;
    out.flush().context("Failed to flush output")?;

    Ok(())
}

/// Initialize tracing subscriber with environment filter.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env("FPAT_LOG").unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
