//! Memoization of pure functions.
//!
//! The wrapped function must be pure: same input, same output, no observable
//! side effects. Memoizing an impure function is not detected and silently
//! replays the first answer.
//!
//! Caches grow for the lifetime of the memoizer; nothing is evicted.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};

use moka::sync::Cache;
use tracing::debug;

/// Hit/miss counters reported by a memoizer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: u64,
}

impl fmt::Display for MemoStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} hits, {} misses, {} cached entries",
            self.hits, self.misses, self.entries
        )
    }
}

/// Single-threaded memoizer.
///
/// `A` is the argument type, `K` the cache key extracted from it. For
/// hashable inputs use [`memoize`], which caches by the input itself; for
/// anything else supply a key function through [`Memoized::with_key`].
pub struct Memoized<A, K, V, F, G> {
    func: F,
    key_of: G,
    cache: HashMap<K, V>,
    hits: u64,
    misses: u64,
    _arg: std::marker::PhantomData<fn(A)>,
}

/// Wrap `f` so each distinct input is computed at most once.
///
/// # Examples
///
/// ```
/// use fpat_core::memoize;
///
/// let mut calls = 0;
/// let mut square = memoize(|x: u64| {
///     calls += 1;
///     x * x
/// });
/// assert_eq!(square.call(12), 144);
/// assert_eq!(square.call(12), 144);
/// drop(square);
/// assert_eq!(calls, 1);
/// ```
pub fn memoize<K, V, F>(f: F) -> Memoized<K, K, V, F, fn(&K) -> K>
where
    K: Hash + Eq + Clone,
    V: Clone,
    F: FnMut(K) -> V,
{
    Memoized::with_key(f, <K as Clone>::clone as fn(&K) -> K)
}

/// Like [`memoize`] but hands back a plain closure.
pub fn memoize_fn<K, V, F>(f: F) -> impl FnMut(K) -> V
where
    K: Hash + Eq + Clone,
    V: Clone,
    F: FnMut(K) -> V,
{
    let mut memo = memoize(f);
    move |key| memo.call(key)
}

impl<A, K, V, F, G> Memoized<A, K, V, F, G>
where
    K: Hash + Eq,
    V: Clone,
    F: FnMut(A) -> V,
    G: Fn(&A) -> K,
{
    /// Memoize `func`, caching results under `key_of(input)`.
    ///
    /// Two inputs with the same key are treated as the same input.
    pub fn with_key(func: F, key_of: G) -> Self {
        Self {
            func,
            key_of,
            cache: HashMap::new(),
            hits: 0,
            misses: 0,
            _arg: std::marker::PhantomData,
        }
    }

    /// Return the cached value for `input`, computing it on first use.
    pub fn call(&mut self, input: A) -> V {
        let key = (self.key_of)(&input);
        if let Some(value) = self.cache.get(&key) {
            self.hits = self.hits.saturating_add(1);
            debug!(entries = self.cache.len(), "Memo cache hit");
            return value.clone();
        }

        self.misses = self.misses.saturating_add(1);
        debug!(entries = self.cache.len(), "Memo cache miss, computing");
        let value = (self.func)(input);
        self.cache.insert(key, value.clone());
        value
    }

    /// Whether a result for `key` is already cached.
    #[must_use]
    pub fn is_cached(&self, key: &K) -> bool {
        self.cache.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> MemoStats {
        MemoStats {
            hits: self.hits,
            misses: self.misses,
            entries: u64::try_from(self.cache.len()).unwrap_or(u64::MAX),
        }
    }

    /// Drop every cached result. Counters are kept.
    pub fn clear(&mut self) {
        self.cache.clear();
        debug!("Memo cache cleared");
    }
}

impl<A, K, V, F, G> fmt::Debug for Memoized<A, K, V, F, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoized")
            .field("entries", &self.cache.len())
            .field("hits", &self.hits)
            .field("misses", &self.misses)
            .finish_non_exhaustive()
    }
}

/// Thread-safe memoizer backed by a concurrent map.
///
/// Concurrent first calls for the same unseen key are coalesced: `func`
/// runs once and every caller receives that value.
pub struct SyncMemoized<K, V, F> {
    func: F,
    cache: Cache<K, V>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<K, V, F> SyncMemoized<K, V, F>
where
    K: Hash + Eq + Clone + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
    F: Fn(K) -> V + Send + Sync,
{
    #[must_use]
    pub fn new(func: F) -> Self {
        Self {
            func,
            // No max capacity: the cache only grows.
            cache: Cache::builder().build(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Return the cached value for `key`, computing it on first use.
    pub fn call(&self, key: K) -> V {
        let input = key.clone();
        let mut computed = false;
        let value = self.cache.get_with(key, || {
            computed = true;
            (self.func)(input)
        });

        if computed {
            self.misses.fetch_add(1, Ordering::Relaxed);
            debug!("Sync memo cache miss, computed");
        } else {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!("Sync memo cache hit");
        }
        value
    }

    #[must_use]
    pub fn stats(&self) -> MemoStats {
        self.cache.run_pending_tasks();
        MemoStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.cache.entry_count(),
        }
    }
}

impl<K, V, F> fmt::Debug for SyncMemoized<K, V, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncMemoized")
            .field("hits", &self.hits.load(Ordering::Relaxed))
            .field("misses", &self.misses.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use super::*;
    use std::cell::Cell;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_same_key_invokes_function_once() {
        let calls = Cell::new(0);
        let mut double = memoize(|x: i32| {
            calls.set(calls.get() + 1);
            x * 2
        });

        assert_eq!(double.call(21), 42);
        assert_eq!(double.call(21), 42);
        assert_eq!(calls.get(), 1);
        assert_eq!(
            double.stats(),
            MemoStats {
                hits: 1,
                misses: 1,
                entries: 1
            }
        );
    }

    #[test]
    fn test_distinct_keys_are_computed_separately() {
        let calls = Cell::new(0);
        let mut len = memoize(|s: String| {
            calls.set(calls.get() + 1);
            s.len()
        });

        assert_eq!(len.call("abc".to_string()), 3);
        assert_eq!(len.call("hello".to_string()), 5);
        assert_eq!(len.call("abc".to_string()), 3);
        assert_eq!(calls.get(), 2);
        assert_eq!(len.len(), 2);
        assert!(len.is_cached(&"hello".to_string()));
    }

    #[test]
    fn test_with_key_caches_unhashable_inputs() {
        #[derive(Clone)]
        struct Point {
            x: f64,
            y: f64,
        }

        let calls = Cell::new(0);
        let mut norm = Memoized::with_key(
            |p: Point| {
                calls.set(calls.get() + 1);
                p.x.hypot(p.y)
            },
            |p: &Point| (p.x.to_bits(), p.y.to_bits()),
        );

        let first = norm.call(Point { x: 3.0, y: 4.0 });
        let second = norm.call(Point { x: 3.0, y: 4.0 });
        assert!((first - 5.0).abs() < f64::EPSILON);
        assert!((second - 5.0).abs() < f64::EPSILON);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_clear_forces_recompute() {
        let calls = Cell::new(0);
        let mut square = memoize(|x: u32| {
            calls.set(calls.get() + 1);
            x * x
        });
        square.call(4);
        square.clear();
        assert!(square.is_empty());
        square.call(4);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_memoize_fn_closure() {
        let calls = Cell::new(0);
        let mut negate = memoize_fn(|x: i64| {
            calls.set(calls.get() + 1);
            -x
        });
        assert_eq!(negate(5), -5);
        assert_eq!(negate(5), -5);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_sync_memoized_computes_once_across_threads() {
        let calls = AtomicUsize::new(0);
        let memo = SyncMemoized::new(|x: u64| {
            calls.fetch_add(1, Ordering::SeqCst);
            std::thread::sleep(std::time::Duration::from_millis(20));
            x + 1
        });

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| assert_eq!(memo.call(7), 8));
            }
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        let stats = memo.stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 7);
        assert_eq!(stats.entries, 1);
    }

    #[test]
    fn test_stats_display() {
        let stats = MemoStats {
            hits: 3,
            misses: 1,
            entries: 1,
        };
        assert_eq!(stats.to_string(), "3 hits, 1 misses, 1 cached entries");
    }
}
