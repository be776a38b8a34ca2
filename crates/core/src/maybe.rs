//! `Maybe<T>`: presence or absence of a value.
//!
//! Absence is a state, not an error. Nothing here fails; use
//! [`Maybe::ok_or`] to move onto the railway when absence should become a
//! failure.

use std::fmt;

use crate::outcome::Outcome;

/// A value that may or may not be present.
///
/// A `Some` always carries a value and a `None` never does, so there is no
/// flag to get out of sync with the payload.
///
/// # Examples
///
/// ```
/// use fpat_core::Maybe;
///
/// let greeting = Maybe::some("world").map(|name| format!("hello, {name}"));
/// assert_eq!(greeting.value_or_else(String::new), "hello, world");
///
/// let missing: Maybe<&str> = Maybe::none();
/// assert_eq!(missing.match_with(str::len, || 0), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    Some(T),
    None,
}

impl<T> Maybe<T> {
    /// Wrap a present value.
    #[must_use]
    pub const fn some(value: T) -> Self {
        Self::Some(value)
    }

    /// The empty value.
    #[must_use]
    pub const fn none() -> Self {
        Self::None
    }

    #[must_use]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Apply exactly one branch: `on_some` with the value, or `on_none`.
    pub fn match_with<U>(self, on_some: impl FnOnce(T) -> U, on_none: impl FnOnce() -> U) -> U {
        match self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
    }

    /// Transform the value if present. `f` is never called on `None`.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
        match self {
            Self::Some(value) => Maybe::Some(f(value)),
            Self::None => Maybe::None,
        }
    }

    /// Chain a step that may itself produce nothing.
    pub fn bind<U>(self, f: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
        match self {
            Self::Some(value) => f(value),
            Self::None => Maybe::None,
        }
    }

    /// Keep the value only if it satisfies `predicate`.
    #[must_use]
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        match self {
            Self::Some(value) if predicate(&value) => Self::Some(value),
            _ => Self::None,
        }
    }

    /// The value, or `default` when absent.
    pub fn value_or(self, default: T) -> T {
        self.match_with(|value| value, || default)
    }

    /// The value, or a lazily computed default when absent.
    pub fn value_or_else(self, default: impl FnOnce() -> T) -> T {
        self.match_with(|value| value, default)
    }

    /// Borrow the payload.
    #[must_use]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    /// Turn absence into a failure carrying `error`.
    pub fn ok_or<E>(self, error: E) -> Outcome<T, E> {
        self.match_with(Outcome::Success, || Outcome::Failure(error))
    }

    /// Convert into the standard library option.
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::None, Self::Some)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(f, "Some({value})"),
            Self::None => write!(f, "None"),
        }
    }
}
