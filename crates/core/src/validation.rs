//! Validator combinators that accumulate every failure.
//!
//! Unlike [`Outcome::bind`], which stops at the first failure for control
//! flow, a combined rule runs every rule and reports all messages so a user
//! can fix everything in one pass.

use itertools::Itertools;
use thiserror::Error;

use crate::outcome::Outcome;

/// A single validation rule: pass, or fail with a message.
pub type Rule<T> = Box<dyn Fn(&T) -> Outcome<(), String>>;

/// Every failure message collected from a combined rule, in rule order.
///
/// Never empty: a run with no failures is a success instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .0.iter().join("; "))]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.0
    }

    /// Whether any message contains `needle`.
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.0.iter().any(|message| message.contains(needle))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

/// Run every rule against `value` and collect the failures.
fn check_all<T: ?Sized>(rules: &[Rule<T>], value: &T) -> Outcome<(), ValidationErrors> {
    let failures: Vec<String> = rules
        .iter()
        .filter_map(|rule| rule(value).failure_value().into_option())
        .collect();

    if failures.is_empty() {
        Outcome::Success(())
    } else {
        Outcome::Failure(ValidationErrors(failures))
    }
}

/// Combine rules into one that runs all of them.
///
/// # Examples
///
/// ```
/// use fpat_core::validation::{combine, min_length, not_empty};
///
/// let check = combine(vec![not_empty(), min_length(3)]);
/// assert!(check("abcd").is_success());
///
/// let errors = check("ab").failure_value().into_option().unwrap_or_else(|| unreachable!());
/// assert_eq!(errors.to_string(), "Minimum length is 3");
/// ```
pub fn combine<T: ?Sized>(rules: Vec<Rule<T>>) -> impl Fn(&T) -> Outcome<(), ValidationErrors> {
    move |value: &T| check_all(&rules, value)
}

/// Builder-style collection of rules.
pub struct Validator<T: ?Sized> {
    rules: Vec<Rule<T>>,
}

impl<T: ?Sized> Default for Validator<T> {
    fn default() -> Self {
        Self { rules: Vec::new() }
    }
}

impl<T: ?Sized> Validator<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule.
    #[must_use]
    pub fn rule(mut self, rule: Rule<T>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Add an ad-hoc predicate rule.
    #[must_use]
    pub fn check(self, predicate: impl Fn(&T) -> bool + 'static, message: impl Into<String>) -> Self
    where
        T: 'static,
    {
        self.rule(predicate_rule(predicate, message))
    }

    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Run every rule, returning the value itself on success so it can
    /// continue down a railway chain.
    pub fn validate<'v>(&self, value: &'v T) -> Outcome<&'v T, ValidationErrors> {
        check_all(&self.rules, value).map(|()| value)
    }
}

impl<T: ?Sized> std::fmt::Debug for Validator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator")
            .field("rules", &self.rules.len())
            .finish()
    }
}

/// Build a rule from a predicate and the message reported when it fails.
pub fn predicate_rule<T: ?Sized + 'static>(
    predicate: impl Fn(&T) -> bool + 'static,
    message: impl Into<String>,
) -> Rule<T> {
    let message = message.into();
    Box::new(move |value: &T| {
        if predicate(value) {
            Outcome::Success(())
        } else {
            Outcome::Failure(message.clone())
        }
    })
}

/// Fails on empty text.
#[must_use]
pub fn not_empty<T: AsRef<str> + ?Sized + 'static>() -> Rule<T> {
    predicate_rule(|value: &T| !value.as_ref().is_empty(), "Value cannot be empty")
}

/// Fails when text has fewer than `min` characters.
#[must_use]
pub fn min_length<T: AsRef<str> + ?Sized + 'static>(min: usize) -> Rule<T> {
    predicate_rule(
        move |value: &T| value.as_ref().chars().count() >= min,
        format!("Minimum length is {min}"),
    )
}

/// Fails when text has more than `max` characters.
#[must_use]
pub fn max_length<T: AsRef<str> + ?Sized + 'static>(max: usize) -> Rule<T> {
    predicate_rule(
        move |value: &T| value.as_ref().chars().count() <= max,
        format!("Maximum length is {max}"),
    )
}
