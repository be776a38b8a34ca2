#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # FPAT
//!
//! A runnable catalogue of functional patterns in Rust.
//!
//! The building blocks live in [`fpat_core`]; this crate adds the examples
//! that exercise them, their configuration, and the `fpat` command line.

// Re-export the core crate
pub use fpat_core;

pub mod cli;
pub mod commands;
pub mod config;
pub mod demos;
