//! `Outcome<S, E>`: the two-track type for Railway-Oriented Programming.
//!
//! Once a value is on the failure track every further [`Outcome::bind`] is a
//! no-op that only carries the existing error forward.

use std::fmt;

use crate::maybe::Maybe;

/// Either a success value or a failure value, never both.
///
/// # Examples
///
/// ```
/// use fpat_core::Outcome;
///
/// fn halve(x: i32) -> Outcome<i32, String> {
///     if x % 2 == 0 {
///         Outcome::success(x / 2)
///     } else {
///         Outcome::failure(format!("{x} is odd"))
///     }
/// }
///
/// assert_eq!(Outcome::success(8).bind(halve).bind(halve), Outcome::Success(2));
/// assert_eq!(
///     Outcome::success(6).bind(halve).bind(halve),
///     Outcome::Failure("3 is odd".to_string())
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub enum Outcome<S, E> {
    Success(S),
    Failure(E),
}

impl<S, E> Outcome<S, E> {
    pub const fn success(value: S) -> Self {
        Self::Success(value)
    }

    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Continue down the success track with `next`.
    ///
    /// `next` is never invoked on a failure; the error is re-wrapped
    /// unchanged.
    pub fn bind<T>(self, next: impl FnOnce(S) -> Outcome<T, E>) -> Outcome<T, E> {
        match self {
            Self::Success(value) => next(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Apply exactly one branch and return its result.
    pub fn match_with<U>(
        self,
        on_success: impl FnOnce(S) -> U,
        on_failure: impl FnOnce(E) -> U,
    ) -> U {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    /// Transform the success value.
    pub fn map<T>(self, f: impl FnOnce(S) -> T) -> Outcome<T, E> {
        self.bind(|value| Outcome::Success(f(value)))
    }

    /// Transform the failure value.
    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> Outcome<S, F> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Observe the success value without consuming the outcome.
    pub fn tap(self, f: impl FnOnce(&S)) -> Self {
        if let Self::Success(ref value) = self {
            f(value);
        }
        self
    }

    /// The success payload, if any.
    pub fn success_value(self) -> Maybe<S> {
        self.match_with(Maybe::Some, |_| Maybe::None)
    }

    /// The failure payload, if any.
    pub fn failure_value(self) -> Maybe<E> {
        self.match_with(|_| Maybe::None, Maybe::Some)
    }

    /// Convert into the standard library result so `?` can be used.
    ///
    /// # Errors
    ///
    /// Returns `Err` with the failure payload when on the failure track.
    pub fn into_result(self) -> Result<S, E> {
        self.into()
    }
}

impl<S, E> From<Result<S, E>> for Outcome<S, E> {
    fn from(result: Result<S, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<S, E> From<Outcome<S, E>> for Result<S, E> {
    fn from(outcome: Outcome<S, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

impl<S: fmt::Display, E: fmt::Display> fmt::Display for Outcome<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => write!(f, "Success({value})"),
            Self::Failure(error) => write!(f, "Failure({error})"),
        }
    }
}
