//! Integration tests for the example catalogue.
//!
//! These tests verify that:
//! - Every example runs with the default configuration
//! - The printed text carries the expected results
//! - Configuration files change what the examples print

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::io::Write;
use std::path::Path;

use fpat::cli::Commands;
use fpat::commands::execute_command;
use fpat::config::Config;
use fpat::demos;

/// Run one example by name and capture what it prints.
fn capture(name: &str, config: &Config) -> String {
    let mut out = Vec::new();
    let command = Commands::Run {
        name: Some(name.to_string()),
        all: false,
    };
    execute_command(&command, config, &mut out).expect("example should run");
    String::from_utf8(out).expect("output should be UTF-8")
}

/// # GIVEN
/// The default configuration
///
/// # WHEN
/// Every example is run
///
/// # THEN
/// Each one succeeds and prints its heading
#[test]
fn test_every_example_runs() {
    let config = Config::default();
    for demo in demos::catalogue() {
        let text = capture(demo.name(), &config);
        assert!(
            text.contains(&format!("=== {} ===", demo.summary())),
            "heading missing for {}",
            demo.name()
        );
    }
}

/// # GIVEN
/// The default configuration
///
/// # WHEN
/// `run --all` is executed
///
/// # THEN
/// Every example heading appears, in catalogue order
#[test]
fn test_run_all_prints_every_heading_in_order() {
    let mut out = Vec::new();
    let command = Commands::Run {
        name: None,
        all: true,
    };
    execute_command(&command, &Config::default(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    let positions: Vec<usize> = demos::catalogue()
        .iter()
        .map(|demo| text.find(&format!("=== {} ===", demo.summary())).unwrap())
        .collect();
    assert!(positions.is_sorted());
}

/// # GIVEN
/// A chain of divisions, one of them by zero
///
/// # WHEN
/// The railway example runs
///
/// # THEN
/// The good chain prints its result and the bad one prints the failure
#[test]
fn test_railway_example() {
    let text = capture("railway", &Config::default());
    assert!(text.contains("Result: 10"));
    assert!(text.contains("Error: Division by zero"));
}

/// # GIVEN
/// Sample inputs of increasing length
///
/// # WHEN
/// The validation example runs
///
/// # THEN
/// Every failing rule is reported and the long input is valid
#[test]
fn test_validation_example() {
    let text = capture("validation", &Config::default());
    assert!(text.contains("Value cannot be empty"));
    assert!(text.contains("Minimum length is 3"));
    assert!(text.contains("\"abcd\" -> valid"));
}

/// # GIVEN
/// The default take of 8
///
/// # WHEN
/// The lazy sequences example runs
///
/// # THEN
/// Fibonacci is cut at eight elements and naturals restart from zero
#[test]
fn test_lazy_sequences_example() {
    let text = capture("lazy-sequences", &Config::default());
    assert!(text.contains("[0, 1, 1, 2, 3, 5, 8, 13]"));
    assert!(text.contains("[0, 1, 2, 3, 4]"));
}

/// # GIVEN
/// A memoized function called twice with the same input
///
/// # WHEN
/// The memoization example runs
///
/// # THEN
/// The underlying function runs once
#[test]
fn test_memoization_example() {
    let text = capture("memoization", &Config::default());
    assert!(text.contains("invoked 1 time(s) for 2 calls"));
}

/// # GIVEN
/// One user with an email and one without
///
/// # WHEN
/// The option example runs
///
/// # THEN
/// The known user is greeted by name and the other falls back to guest
#[test]
fn test_option_example() {
    let text = capture("option", &Config::default());
    assert!(text.contains("Hello, Ada"));
    assert!(text.contains("Hello, guest"));
}

/// # GIVEN
/// A config file overriding every section
///
/// # WHEN
/// The affected examples run with it loaded
///
/// # THEN
/// Their output reflects the overridden values
#[test]
fn test_config_file_changes_output() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[sequences]\ntake = 3\n\n[memoize]\ndemo_key = 3\n\n[validation]\nmin_length = 2\nsamples = [\"x\"]"
    )
    .unwrap();
    let config = Config::load(Some(file.path())).unwrap();

    let sequences = capture("lazy-sequences", &config);
    assert!(sequences.contains("fibonacci (first 3): [0, 1, 1]"));

    let memo = capture("memoization", &config);
    assert!(memo.contains("sum_of_squares(3) = 14"));

    let validation = capture("validation", &config);
    assert!(validation.contains("\"x\" -> invalid: Minimum length is 2"));
}

/// # GIVEN
/// A name that is not in the catalogue
///
/// # WHEN
/// `run` is executed with it
///
/// # THEN
/// An unknown-example error is returned and nothing is printed
#[test]
fn test_unknown_example_is_reported() {
    let mut out = Vec::new();
    let command = Commands::Run {
        name: Some("functor".to_string()),
        all: false,
    };
    let err = execute_command(&command, &Config::default(), &mut out).unwrap_err();
    assert_eq!(err.to_string(), "unknown example 'functor' (try `fpat list`)");
    assert!(out.is_empty());
}

/// # GIVEN
/// A config file with zero threads
///
/// # WHEN
/// It is parsed
///
/// # THEN
/// Validation names the offending key
#[test]
fn test_invalid_config_file_is_rejected() {
    let err = Config::from_toml_str("[memoize]\nthreads = 0\n", Path::new("bad.toml")).unwrap_err();
    assert!(err.to_string().contains("memoize.threads"));
}

/// # GIVEN
/// A config file whose memoize key would make the example run for hours
///
/// # WHEN
/// It is loaded
///
/// # THEN
/// Loading fails with an invalid-config error
#[test]
fn test_oversized_config_is_rejected_before_any_example_runs() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[memoize]\ndemo_key = 18446744073709551615\nthreads = 1").unwrap();

    let err = Config::load(Some(file.path())).unwrap_err();
    assert!(matches!(err, fpat_core::Error::InvalidConfig { .. }));
    assert!(err.to_string().contains("memoize.demo_key"));
}
