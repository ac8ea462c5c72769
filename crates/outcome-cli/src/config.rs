//! Configuration loading.
//!
//! Settings come from an optional TOML file and are overridden by
//! command-line flags.

use std::path::Path;

use serde::Deserialize;

use crate::cli::Args;
use crate::error::{Error, Result};

/// Divisor used when neither the file nor the flags set one.
pub const DEFAULT_DIVISOR: i64 = 1;

/// Contents of the TOML config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Divisor applied by the last pipeline step
    pub divisor: Option<i64>,
    /// Value reported for failed inputs
    pub default: Option<i64>,
}

impl Config {
    /// Loads the config file at `path`, or an empty config when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), ?config, "Loaded config file");
        Ok(config)
    }
}

/// Resolved run settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Divisor for the last pipeline step, never zero
    pub divisor: i64,
    /// Value reported for failed inputs, if any
    pub default: Option<i64>,
}

impl Settings {
    /// Merges flags over file values and validates the result.
    pub fn resolve(args: &Args, config: &Config) -> Result<Self> {
        let divisor = args
            .divisor
            .or(config.divisor)
            .unwrap_or(DEFAULT_DIVISOR);
        if divisor == 0 {
            return Err(Error::ZeroDivisor);
        }

        Ok(Self {
            divisor,
            default: args.default.or(config.default),
        })
    }
}
