//! Lazy, pull-based integer sequences.
//!
//! Every generator returns a fresh iterator, so a sequence restarts simply
//! by calling its function again. The sequences are conceptually infinite:
//! callers must bound consumption with `take` or [`first_n`]. Arithmetic is
//! checked, so a sequence ends at the first element that no longer fits in
//! a `u64` rather than wrapping around.

use std::fmt;
use std::iter::{FusedIterator, successors};

/// 0, 1, 2, 3, ...
pub fn naturals() -> impl Iterator<Item = u64> + Clone {
    successors(Some(0_u64), |n| n.checked_add(1))
}

/// `start`, `start + step`, `start + 2 * step`, ...
pub fn arithmetic(start: u64, step: u64) -> impl Iterator<Item = u64> + Clone {
    successors(Some(start), move |n| n.checked_add(step))
}

/// 0, 1, 4, 9, ...
pub fn squares() -> impl Iterator<Item = u64> + Clone {
    naturals().map_while(|n| n.checked_mul(n))
}

/// 2, 3, 5, 7, ... by filtering the naturals.
pub fn primes() -> impl Iterator<Item = u64> + Clone {
    naturals().filter(|n| is_prime(*n))
}

/// 0, 1, 1, 2, 3, 5, 8, ...
#[must_use]
pub const fn fibonacci() -> Fibonacci {
    Fibonacci::new()
}

/// Collect the first `n` elements of a sequence.
pub fn first_n<I: IntoIterator>(sequence: I, n: usize) -> Vec<I::Item> {
    sequence.into_iter().take(n).collect()
}

/// Trial-division primality test.
#[must_use]
pub fn is_prime(n: u64) -> bool {
    n >= 2
        && (2_u64..)
            .take_while(|d| d.checked_mul(*d).is_some_and(|square| square <= n))
            .all(|d| n.checked_rem(d) != Some(0))
}

/// Fibonacci numbers, ending after the largest one representable as `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fibonacci {
    current: Option<u64>,
    next: Option<u64>,
}

impl Fibonacci {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: Some(0),
            next: Some(1),
        }
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let value = self.current?;
        self.current = self.next;
        self.next = self.next.and_then(|following| following.checked_add(value));
        Some(value)
    }
}

impl FusedIterator for Fibonacci {}

/// A named, restartable sequence.
pub struct LazySequence {
    name: &'static str,
    make: Box<dyn Fn() -> Box<dyn Iterator<Item = u64>>>,
}

impl LazySequence {
    pub fn new<I>(name: &'static str, make: impl Fn() -> I + 'static) -> Self
    where
        I: Iterator<Item = u64> + 'static,
    {
        Self {
            name,
            make: Box::new(move || Box::new(make())),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// A fresh iterator starting from the first element.
    #[must_use]
    pub fn iter(&self) -> Box<dyn Iterator<Item = u64>> {
        (self.make)()
    }

    #[must_use]
    pub fn take(&self, n: usize) -> Vec<u64> {
        first_n(self.iter(), n)
    }
}

impl fmt::Debug for LazySequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazySequence")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// The built-in sequences, in display order.
#[must_use]
pub fn standard_sequences() -> Vec<LazySequence> {
    vec![
        LazySequence::new("naturals", naturals),
        LazySequence::new("fibonacci", fibonacci),
        LazySequence::new("evens", || arithmetic(0, 2)),
        LazySequence::new("squares", squares),
        LazySequence::new("primes", primes),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fibonacci_first_eight() {
        assert_eq!(first_n(fibonacci(), 8), vec![0, 1, 1, 2, 3, 5, 8, 13]);
    }

    #[test]
    fn test_naturals_first_five() {
        assert_eq!(first_n(naturals(), 5), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_sequences_restart_when_called_again() {
        let first: Vec<u64> = fibonacci().skip(10).take(3).collect();
        let again: Vec<u64> = fibonacci().take(3).collect();
        assert_eq!(first, vec![55, 89, 144]);
        assert_eq!(again, vec![0, 1, 1]);
    }

    #[test]
    fn test_fibonacci_stops_before_overflow() {
        let all: Vec<u64> = fibonacci().collect();
        assert_eq!(all.len(), 94);
        assert_eq!(all.last().copied(), Some(12_200_160_415_121_876_738));
    }

    #[test]
    fn test_arithmetic_progression() {
        assert_eq!(first_n(arithmetic(3, 4), 4), vec![3, 7, 11, 15]);
        assert_eq!(first_n(arithmetic(u64::MAX - 1, 1), 5), vec![u64::MAX - 1, u64::MAX]);
    }

    #[test]
    fn test_primes_via_filter() {
        assert_eq!(first_n(primes(), 10), vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
        assert!(is_prime(7919));
        assert!(!is_prime(1));
        assert!(!is_prime(7917));
    }

    #[test]
    fn test_squares() {
        assert_eq!(first_n(squares(), 5), vec![0, 1, 4, 9, 16]);
    }

    #[test]
    fn test_lazy_sequence_take_is_restartable() {
        let sequences = standard_sequences();
        let fib = sequences
            .iter()
            .find(|s| s.name() == "fibonacci")
            .map(|s| (s.take(5), s.take(5)));
        assert_eq!(fib, Some((vec![0, 1, 1, 2, 3], vec![0, 1, 1, 2, 3])));
        assert_eq!(sequences.len(), 5);
    }
}
