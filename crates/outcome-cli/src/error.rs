//! Error types for outcome-cli

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for outcome-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in outcome-cli.
///
/// Configuration variants abort the run. Pipeline variants are carried as
/// the failure payload of a single input and reported per line;
/// [`Error::SumOverflow`] is the failure payload of the total.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The config file could not be read.
    #[error("Failed to read config {}: {source}", .path.display())]
    ConfigRead {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for [`Config`](crate::config::Config).
    #[error("Failed to parse config {}: {source}", .path.display())]
    ConfigParse {
        /// Path that was parsed
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// The divisor is zero, so no input can pass the division step.
    #[error("Divisor must not be zero")]
    ZeroDivisor,

    /// An input is not an integer.
    #[error("Invalid integer {input:?}: {source}")]
    ParseInput {
        /// The raw argument
        input: String,
        /// Underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// An input parsed but is below zero.
    #[error("Negative value: {0}")]
    Negative(i64),

    /// An input does not divide exactly.
    #[error("{value} is not divisible by {divisor}")]
    Inexact {
        /// Value being divided
        value: i64,
        /// Configured divisor
        divisor: i64,
    },

    /// The `--sum` total does not fit in an `i64`.
    #[error("Sum overflows i64")]
    SumOverflow,
}
