//! Memoization: compute a pure function once per input.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};

use fpat_core::{Result, SyncMemoized, memoize};

use super::Demo;
use crate::config::Config;

#[derive(Debug, Clone, Copy, Default)]
pub struct Memoization;

/// Sum of squares `0² + 1² + ... + n²`, computed the slow way.
fn sum_of_squares(n: u64) -> u64 {
    (0..=n).fold(0_u64, |acc, i| acc.saturating_add(i.saturating_mul(i)))
}

impl Demo for Memoization {
    fn name(&self) -> &'static str {
        "memoization"
    }

    fn summary(&self) -> &'static str {
        "Memoization"
    }

    fn run(&self, config: &Config, out: &mut dyn Write) -> Result<()> {
        let key = config.memoize.demo_key;

        let calls = AtomicUsize::new(0);
        let mut slow = memoize(|n: u64| {
            calls.fetch_add(1, Ordering::Relaxed);
            sum_of_squares(n)
        });

        let first = slow.call(key);
        writeln!(out, "first call:  sum_of_squares({key}) = {first}")?;
        let second = slow.call(key);
        writeln!(out, "second call: sum_of_squares({key}) = {second}")?;
        writeln!(
            out,
            "sum_of_squares was invoked {} time(s) for 2 calls",
            calls.load(Ordering::Relaxed)
        )?;
        writeln!(out, "cache: {}", slow.stats())?;

        let threads = config.memoize.threads;
        let shared_calls = AtomicUsize::new(0);
        let shared = SyncMemoized::new(|n: u64| {
            shared_calls.fetch_add(1, Ordering::Relaxed);
            sum_of_squares(n)
        });
        std::thread::scope(|scope| {
            for _ in 0..threads {
                scope.spawn(|| shared.call(key));
            }
        });
        writeln!(
            out,
            "shared cache across {threads} threads computed {} time(s)",
            shared_calls.load(Ordering::Relaxed)
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_sum_of_squares() {
        assert_eq!(sum_of_squares(0), 0);
        assert_eq!(sum_of_squares(3), 14);
        assert_eq!(sum_of_squares(40), 22_140);
    }

    #[test]
    fn test_output_reports_single_invocation() {
        let mut out = Vec::new();
        Memoization.run(&Config::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("first call:  sum_of_squares(40) = 22140"));
        assert!(text.contains("second call: sum_of_squares(40) = 22140"));
        assert!(text.contains("invoked 1 time(s) for 2 calls"));
        assert!(text.contains("cache: 1 hits, 1 misses, 1 cached entries"));
        assert!(text.contains("shared cache across 4 threads computed 1 time(s)"));
    }
}
