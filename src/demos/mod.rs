//! Runnable examples, one per pattern.
//!
//! Each example writes a few informational lines to the writer it is given.
//! The text is illustrative rather than a stable format; tests only look for
//! literal substrings.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::io::Write;

use fpat_core::{Error, Result};
use tracing::info;

use crate::config::Config;

mod composition;
mod memoization;
mod option;
mod partial;
mod railway;
mod sequences;
mod validation;

pub use composition::Composition;
pub use memoization::Memoization;
pub use option::OptionDemo;
pub use partial::PartialApplication;
pub use railway::Railway;
pub use sequences::LazySequences;
pub use validation::ValidationDemo;

/// A runnable example.
pub trait Demo {
    /// Name used on the command line.
    fn name(&self) -> &'static str;

    /// One-line description shown by `fpat list`.
    fn summary(&self) -> &'static str;

    /// Write the example's output.
    ///
    /// # Errors
    ///
    /// Returns error if writing to `out` fails.
    fn run(&self, config: &Config, out: &mut dyn Write) -> Result<()>;
}

/// Every example, in presentation order.
#[must_use]
pub fn catalogue() -> Vec<Box<dyn Demo>> {
    vec![
        Box::new(Composition),
        Box::new(Memoization),
        Box::new(OptionDemo),
        Box::new(PartialApplication),
        Box::new(Railway),
        Box::new(ValidationDemo),
        Box::new(LazySequences),
    ]
}

/// Look up an example by name.
///
/// # Errors
///
/// Returns [`Error::UnknownExample`] if no example has that name.
pub fn find(name: &str) -> Result<Box<dyn Demo>> {
    catalogue()
        .into_iter()
        .find(|demo| demo.name() == name)
        .ok_or_else(|| Error::unknown_example(name))
}

/// Run one example under a heading.
///
/// # Errors
///
/// Returns error if writing the output fails.
pub fn run_demo(demo: &dyn Demo, config: &Config, out: &mut dyn Write) -> Result<()> {
    info!(example = demo.name(), "Running example");
    writeln!(out, "=== {} ===", demo.summary())?;
    demo.run(config, out)?;
    writeln!(out)?;
    Ok(())
}

/// Run every example in catalogue order, stopping at the first failure.
///
/// # Errors
///
/// Returns error if writing any example's output fails.
pub fn run_all(config: &Config, out: &mut dyn Write) -> Result<()> {
    catalogue()
        .iter()
        .try_for_each(|demo| run_demo(demo.as_ref(), config, out))
}
