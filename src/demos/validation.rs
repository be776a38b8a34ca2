//! Validator combinators: report every problem at once.

use std::io::Write;

use fpat_core::Result;
use fpat_core::validation::{combine, min_length, not_empty};

use super::Demo;
use crate::config::Config;

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationDemo;

impl Demo for ValidationDemo {
    fn name(&self) -> &'static str {
        "validation"
    }

    fn summary(&self) -> &'static str {
        "Validation"
    }

    fn run(&self, config: &Config, out: &mut dyn Write) -> Result<()> {
        let min = config.validation.min_length;
        writeln!(out, "rules: not_empty, min_length({min})")?;

        let check = combine::<str>(vec![not_empty(), min_length(min)]);
        for sample in &config.validation.samples {
            let verdict = check(sample.as_str()).match_with(
                |()| "valid".to_string(),
                |errors| format!("invalid: {errors}"),
            );
            writeln!(out, "{sample:?} -> {verdict}")?;
        }
        Ok(())
    }
}
