//! Rendering pipeline outcomes as output lines.

use std::fmt;

use outcome_core::pipe::with_default;
use outcome_core::{Handlers, Outcome};

use crate::error::Error;

/// What happened to a single input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// The pipeline succeeded with this value.
    Ok(i64),
    /// The pipeline failed and the configured default was used instead.
    Default(i64),
    /// The pipeline failed with this reason and no default was configured.
    Failed(String),
}

/// One line of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// The raw input as given on the command line
    pub input: String,
    /// How the input fared
    pub status: Status,
}

impl Report {
    /// Builds the report for `input` from its pipeline outcome.
    pub fn new(input: &str, outcome: Outcome<i64, Error>, default: Option<i64>) -> Self {
        let status = outcome.match_with(Handlers::new(Status::Ok, |error: Error| {
            match default {
                Some(value) => {
                    tracing::warn!(input, %error, value, "Input failed, using default");
                    Status::Default(value)
                }
                None => Status::Failed(error.to_string()),
            }
        }));

        Self {
            input: input.to_string(),
            status,
        }
    }

    /// Returns `true` unless the input failed without a default.
    pub fn is_acceptable(&self) -> bool {
        !matches!(self.status, Status::Failed(_))
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            Status::Ok(value) => write!(f, "{}: ok {value}", self.input),
            Status::Default(value) => write!(f, "{}: default {value}", self.input),
            Status::Failed(reason) => write!(f, "{}: failed ({reason})", self.input),
        }
    }
}

/// Sums the values of `outcomes`, counting each failure as `default`.
///
/// Fails with [`Error::SumOverflow`] once the running total leaves `i64`.
pub fn total<E, I>(outcomes: I, default: i64) -> Outcome<i64, Error>
where
    I: IntoIterator<Item = Outcome<i64, E>>,
{
    outcomes
        .into_iter()
        .map(with_default(default))
        .fold(Outcome::Success(0), |sum, value| {
            sum.and_then(|sum: i64| {
                Outcome::from_option(sum.checked_add(value), Error::SumOverflow)
            })
        })
}

/// Renders the `--sum` line.
pub fn total_line(total: Outcome<i64, Error>) -> String {
    total.match_with(Handlers::new(
        |value| format!("total: {value}"),
        |error| format!("total: failed ({error})"),
    ))
}
