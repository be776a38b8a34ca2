//! Lazy sequences: infinite on paper, bounded by the consumer.

use std::io::Write;

use fpat_core::Result;
use fpat_core::sequence::{first_n, naturals, standard_sequences};
use itertools::Itertools;

use super::Demo;
use crate::config::Config;

#[derive(Debug, Clone, Copy, Default)]
pub struct LazySequences;

impl Demo for LazySequences {
    fn name(&self) -> &'static str {
        "lazy-sequences"
    }

    fn summary(&self) -> &'static str {
        "Lazy sequences"
    }

    fn run(&self, config: &Config, out: &mut dyn Write) -> Result<()> {
        let take = config.sequences.take;
        for sequence in standard_sequences() {
            let shown = sequence.take(take).iter().join(", ");
            writeln!(out, "{} (first {take}): [{shown}]", sequence.name())?;
        }

        // Calling the generator again starts over.
        writeln!(out, "naturals restarted (first 5): {:?}", first_n(naturals(), 5))?;
        Ok(())
    }
}
