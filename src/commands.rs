//! CLI command handlers.
//!
//! All commands follow functional patterns:
//! - Zero unwraps, zero panics
//! - Result<T, Error> for all operations
//! - Output goes to the writer passed in, so handlers are testable

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::io::Write;

use fpat_core::Result;
use tracing::info;

use crate::cli::Commands;
use crate::config::Config;
use crate::demos;

/// Execute a CLI command.
///
/// This is the main command dispatcher that routes to the appropriate handler.
///
/// # Errors
///
/// Returns error if the example is unknown or output cannot be written.
pub fn execute_command(command: &Commands, config: &Config, out: &mut dyn Write) -> Result<()> {
    match command {
        Commands::List => cmd_list(out),
        Commands::Run { name, all } => cmd_run(name.as_deref(), *all, config, out),
        Commands::Config => cmd_config(config, out),
    }
}

/// Print every example with its summary.
fn cmd_list(out: &mut dyn Write) -> Result<()> {
    let catalogue = demos::catalogue();
    let width = catalogue
        .iter()
        .map(|demo| demo.name().len())
        .max()
        .unwrap_or_default();

    catalogue.iter().try_for_each(|demo| {
        writeln!(out, "{:<width$}  {}", demo.name(), demo.summary())?;
        Ok(())
    })
}

/// Run one example by name, or all of them.
fn cmd_run(name: Option<&str>, all: bool, config: &Config, out: &mut dyn Write) -> Result<()> {
    match (name, all) {
        (Some(name), false) => {
            let demo = demos::find(name)?;
            demos::run_demo(demo.as_ref(), config, out)
        }
        _ => {
            info!("Running every example");
            demos::run_all(config, out)
        }
    }
}

/// Print the effective configuration.
fn cmd_config(config: &Config, out: &mut dyn Write) -> Result<()> {
    write!(out, "{}", config.to_toml()?)?;
    Ok(())
}
