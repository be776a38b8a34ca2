//! CLI command definitions using clap.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// FPAT - Functional patterns in Rust
#[derive(Parser, Debug)]
#[command(name = "fpat")]
#[command(version)]
#[command(about = "Runnable examples of functional patterns in Rust")]
#[command(
    long_about = "FPAT runs small, self-contained examples of Maybe, Outcome (railway-oriented programming), memoization, validator combinators, partial application and lazy sequences."
)]
pub struct Cli {
    /// Config file (defaults to ./fpat.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List the available examples
    List,

    /// Run one example, or all of them
    Run {
        /// Example name (see `fpat list`)
        #[arg(required_unless_present = "all")]
        name: Option<String>,

        /// Run every example in catalogue order
        #[arg(long, conflicts_with = "name", default_value_t = false)]
        all: bool,
    },

    /// Print the effective configuration as TOML
    Config,
}
