//! Prelude module - common imports for FPAT
//!
//! ```rust
//! use fpat_core::prelude::*;
//! ```

// Re-export functional utilities
pub use itertools::Itertools;
pub use tap::{Pipe, Tap};

// Re-export error types
pub use crate::error::Error;
pub use crate::result::{OptionExt, RailwayExt};

// Re-export domain types
pub use crate::compose::{compose, compose_result, curry, partial, partial3, pipe};
pub use crate::maybe::Maybe;
pub use crate::memoize::{MemoStats, Memoized, SyncMemoized, memoize, memoize_fn};
pub use crate::outcome::Outcome;
pub use crate::sequence::{LazySequence, fibonacci, first_n, naturals, primes};
pub use crate::validation::{Rule, ValidationErrors, Validator, combine};
