//! Result type definition and extension traits bridging std types onto the railway.
//!
//! Provides combinators that move `std::result::Result` and `Option` values into
//! [`Outcome`] and [`Maybe`] without unwrap/expect/panic.

use crate::error::Error;
use crate::maybe::Maybe;
use crate::outcome::Outcome;

/// The standard Result type for FPAT operations.
///
/// All fallible ambient operations (config loading, writing example output)
/// return this type. Use the `?` operator, `match`, or combinator methods to
/// handle results.
pub type Result<T> = std::result::Result<T, Error>;

/// Generic extension trait for any std Result.
pub trait RailwayExt<T, E> {
    /// Move onto the two-track [`Outcome`] type.
    fn into_outcome(self) -> Outcome<T, E>;

    /// Perform a side effect on the Err value without consuming the Result.
    fn tap_err<F: FnOnce(&E)>(self, f: F) -> Self;
}

impl<T, E> RailwayExt<T, E> for std::result::Result<T, E> {
    fn into_outcome(self) -> Outcome<T, E> {
        self.into()
    }

    fn tap_err<F: FnOnce(&E)>(self, f: F) -> Self {
        if let Err(ref e) = self {
            f(e);
        }
        self
    }
}

/// Extension trait for std `Option`.
pub trait OptionExt<T> {
    /// Convert into [`Maybe`].
    fn into_maybe(self) -> Maybe<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn into_maybe(self) -> Maybe<T> {
        self.into()
    }
}
