//! Partial application and currying.

use std::io::Write;

use fpat_core::Result;
use fpat_core::compose::{curry, partial, partial3};

use super::Demo;
use crate::config::Config;

#[derive(Debug, Clone, Copy, Default)]
pub struct PartialApplication;

const fn add(a: i64, b: i64) -> i64 {
    a.saturating_add(b)
}

fn greet(greeting: &str, name: &str) -> String {
    format!("{greeting}, {name}!")
}

fn price_with_tax(rate_percent: u32, net_cents: u32, quantity: u32) -> u64 {
    let net = u64::from(net_cents).saturating_mul(u64::from(quantity));
    net.saturating_mul(u64::from(rate_percent).saturating_add(100)) / 100
}

impl Demo for PartialApplication {
    fn name(&self) -> &'static str {
        "partial-application"
    }

    fn summary(&self) -> &'static str {
        "Partial application"
    }

    fn run(&self, _config: &Config, out: &mut dyn Write) -> Result<()> {
        let add_five = partial(add, 5);
        writeln!(out, "add_five(10) = {}", add_five(10))?;

        let hello = partial(greet, "Hello");
        writeln!(out, "hello(\"Ada\") = {}", hello("Ada"))?;

        let with_vat = partial3(price_with_tax, 20);
        writeln!(out, "with_vat(250 cents, 4 items) = {} cents", with_vat(250, 4))?;

        let multiply = curry(|a: i64, b: i64| a.saturating_mul(b));
        let triple = multiply(3);
        writeln!(out, "curry(multiply)(3)(7) = {}", triple(7))?;
        Ok(())
    }
}
