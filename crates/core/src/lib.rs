//! # FPAT Core
//!
//! Functional building blocks, written without unwrap/expect/panic.
//!
//! - [`Maybe`]: presence or absence of a value
//! - [`Outcome`]: success or failure with short-circuiting [`Outcome::bind`]
//! - [`memoize`]: cache a pure function's results by input
//! - [`validation`]: rules that accumulate every failure
//! - [`compose`]: composition and partial application
//! - [`sequence`]: lazy, restartable integer sequences
//!
//! Absence ([`Maybe::None`]) and expected failure ([`Outcome::Failure`]) are
//! kept as separate idioms. Ambient failures such as a broken config file use
//! [`Error`] and [`Result`].

pub mod compose;
mod error;
mod maybe;
pub mod memoize;
mod outcome;
pub mod prelude;
mod result;
pub mod sequence;
pub mod validation;

pub use error::Error;
pub use maybe::Maybe;
pub use memoize::{MemoStats, Memoized, SyncMemoized, memoize, memoize_fn};
pub use outcome::Outcome;
pub use result::{OptionExt, RailwayExt, Result};
