//! Configuration for the example catalogue.
//!
//! # Hierarchy
//!
//! 1. Built-in defaults
//! 2. `./fpat.toml` when present, or the file passed with `--config`
//!
//! # Example Config
//!
//! ```toml
//! [sequences]
//! take = 8
//!
//! [memoize]
//! demo_key = 40
//! threads = 4
//!
//! [validation]
//! min_length = 3
//! samples = ["", "ab", "abcd"]
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

use std::path::Path;

use fpat_core::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "fpat.toml";

/// Largest `sequences.take`; primes are found by trial division.
pub const MAX_TAKE: usize = 10_000;

/// Largest `memoize.demo_key`; the memoized function is linear in its input.
pub const MAX_DEMO_KEY: u64 = 1_000_000;

/// Largest `memoize.threads`; each one is a real OS thread.
pub const MAX_THREADS: usize = 64;

/// Configuration for the example catalogue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sequences: SequenceConfig,

    #[serde(default)]
    pub memoize: MemoizeConfig,

    #[serde(default)]
    pub validation: ValidationConfig,
}

/// Lazy sequence example settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceConfig {
    /// Elements printed per sequence.
    #[serde(default = "default_take")]
    pub take: usize,
}

/// Memoization example settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoizeConfig {
    /// Input passed to the memoized function.
    #[serde(default = "default_demo_key")]
    pub demo_key: u64,

    /// Threads sharing the thread-safe memoizer.
    #[serde(default = "default_threads")]
    pub threads: usize,
}

/// Validation example settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[serde(default = "default_min_length")]
    pub min_length: usize,

    /// Inputs checked by the validation example.
    #[serde(default = "default_samples")]
    pub samples: Vec<String>,
}

const fn default_take() -> usize {
    8
}

const fn default_demo_key() -> u64 {
    40
}

const fn default_threads() -> usize {
    4
}

const fn default_min_length() -> usize {
    3
}

fn default_samples() -> Vec<String> {
    vec![String::new(), "ab".to_string(), "abcd".to_string()]
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            take: default_take(),
        }
    }
}

impl Default for MemoizeConfig {
    fn default() -> Self {
        Self {
            demo_key: default_demo_key(),
            threads: default_threads(),
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            samples: default_samples(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, `./fpat.toml` is used
    /// when present and built-in defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, is not valid TOML, or fails
    /// [`Config::validate`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::from_file(default_path)
                } else {
                    debug!("No {DEFAULT_CONFIG_FILE} found, using built-in defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Read and validate a config file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed, or is invalid.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| Error::config_read_failed(path, e))?;
        let config = Self::from_toml_str(&contents, path)?;
        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parse and validate TOML text; `origin` is only used in error messages.
    ///
    /// # Errors
    ///
    /// Returns error if the text is not valid TOML or the values are invalid.
    pub fn from_toml_str(contents: &str, origin: &Path) -> Result<Self> {
        toml::from_str::<Self>(contents)
            .map_err(|e| Error::config_parse_failed(origin, e))
            .and_then(Self::validate)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns error if any count that must be positive is zero, or if a
    /// value exceeds its upper bound ([`MAX_TAKE`], [`MAX_DEMO_KEY`],
    /// [`MAX_THREADS`]).
    pub fn validate(self) -> Result<Self> {
        if self.sequences.take == 0 {
            return Err(Error::invalid_config("sequences.take must be greater than 0"));
        }

        if self.sequences.take > MAX_TAKE {
            return Err(Error::invalid_config(format!(
                "sequences.take must be at most {MAX_TAKE}"
            )));
        }

        if self.memoize.demo_key > MAX_DEMO_KEY {
            return Err(Error::invalid_config(format!(
                "memoize.demo_key must be at most {MAX_DEMO_KEY}"
            )));
        }

        if self.memoize.threads == 0 {
            return Err(Error::invalid_config("memoize.threads must be greater than 0"));
        }

        if self.memoize.threads > MAX_THREADS {
            return Err(Error::invalid_config(format!(
                "memoize.threads must be at most {MAX_THREADS}"
            )));
        }

        if self.validation.min_length == 0 {
            return Err(Error::invalid_config(
                "validation.min_length must be greater than 0",
            ));
        }

        Ok(self)
    }

    /// Render as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Unknown(e.to_string()))
    }
}
