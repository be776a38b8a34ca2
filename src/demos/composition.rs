//! Function composition: build new functions by chaining existing ones.

use std::io::Write;

use fpat_core::compose::{compose, compose_all, compose_result};
use fpat_core::{Outcome, Result};
use tap::Pipe;

use super::Demo;
use crate::config::Config;

#[derive(Debug, Clone, Copy, Default)]
pub struct Composition;

fn parse_number(text: &str) -> Outcome<i64, String> {
    text.trim()
        .parse::<i64>()
        .map_err(|e| format!("'{text}' is not a number: {e}"))
        .into()
}

fn require_positive(n: i64) -> Outcome<i64, String> {
    if n > 0 {
        Outcome::Success(n)
    } else {
        Outcome::Failure(format!("{n} is not positive"))
    }
}

const fn add_one(x: i64) -> i64 {
    x.saturating_add(1)
}

const fn double(x: i64) -> i64 {
    x.saturating_mul(2)
}

const fn square(x: i64) -> i64 {
    x.saturating_mul(x)
}

impl Demo for Composition {
    fn name(&self) -> &'static str {
        "composition"
    }

    fn summary(&self) -> &'static str {
        "Function composition"
    }

    fn run(&self, _config: &Config, out: &mut dyn Write) -> Result<()> {
        let shout = compose(|s: &str| s.trim().to_string(), |s: String| s.to_uppercase());
        writeln!(
            out,
            "compose(trim, to_uppercase)(\"  functional rust  \") = {:?}",
            shout("  functional rust  ")
        )?;

        let add_then_double = compose(add_one, double);
        writeln!(out, "compose(add_one, double)(4) = {}", add_then_double(4))?;

        let parse_positive = compose_result(parse_number, require_positive);
        for input in ["42", "-7", "seven"] {
            writeln!(
                out,
                "compose_result(parse, positive)({input:?}) = {}",
                parse_positive(input)
            )?;
        }

        let steps: Vec<Box<dyn Fn(i64) -> i64>> =
            vec![Box::new(add_one), Box::new(double), Box::new(square)];
        let pipeline = compose_all(steps);
        writeln!(out, "compose_all([add_one, double, square])(3) = {}", pipeline(3))?;

        let piped = 3_i64.pipe(add_one).pipe(double).pipe(square);
        writeln!(out, "3 |> add_one |> double |> square = {piped}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_output() {
        let mut out = Vec::new();
        Composition.run(&Config::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("= \"FUNCTIONAL RUST\""));
        assert!(text.contains("compose(add_one, double)(4) = 10"));
        assert!(text.contains("(\"42\") = Success(42)"));
        assert!(text.contains("(\"-7\") = Failure(-7 is not positive)"));
        assert!(text.contains("compose_all([add_one, double, square])(3) = 64"));
        assert!(text.contains("3 |> add_one |> double |> square = 64"));
    }
}
