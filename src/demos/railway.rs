//! Railway-oriented programming: once on the failure track, stay there.

use std::io::Write;

use fpat_core::compose::partial;
use fpat_core::{Outcome, RailwayExt, Result};

use super::Demo;
use crate::config::Config;

#[derive(Debug, Clone, Copy, Default)]
pub struct Railway;

/// Division that reports a zero divisor or an overflowing quotient as a failure.
pub fn divide(divisor: i64, dividend: i64) -> Outcome<i64, String> {
    if divisor == 0 {
        return Outcome::Failure("Division by zero".to_string());
    }
    dividend.checked_div(divisor).map_or_else(
        || Outcome::Failure(format!("Overflow dividing {dividend} by {divisor}")),
        Outcome::Success,
    )
}

fn parse(text: &str) -> Outcome<i64, String> {
    text.parse::<i64>().map_err(|e| e.to_string()).into_outcome()
}

fn report(out: &mut dyn Write, label: &str, outcome: Outcome<i64, String>) -> Result<()> {
    let line = outcome.match_with(
        |value| format!("Result: {value}"),
        |error| format!("Error: {error}"),
    );
    writeln!(out, "{label} -> {line}")?;
    Ok(())
}

impl Demo for Railway {
    fn name(&self) -> &'static str {
        "railway"
    }

    fn summary(&self) -> &'static str {
        "Railway-oriented programming"
    }

    fn run(&self, _config: &Config, out: &mut dyn Write) -> Result<()> {
        let halve = partial(divide, 2);
        let fifth = partial(divide, 5);
        let by_zero = partial(divide, 0);

        report(out, "100 / 2 / 5", Outcome::success(100).bind(&halve).bind(&fifth))?;
        report(out, "10 / 0", Outcome::success(10).bind(&by_zero))?;

        let mut steps_after_failure = 0_u32;
        let after_zero = Outcome::success(10).bind(&by_zero).bind(|x| {
            steps_after_failure = steps_after_failure.saturating_add(1);
            halve(x)
        });
        report(out, "10 / 0 / 2", after_zero)?;
        writeln!(out, "steps run after the failure: {steps_after_failure}")?;

        report(out, "parse \"250\" / 5", parse("250").bind(&fifth))?;
        report(out, "parse \"abc\" / 5", parse("abc").bind(&fifth))?;
        Ok(())
    }
}
