//! # outcome-cli
//!
//! Command-line front end for `outcome-core`.
//!
//! Each input runs through [`pipeline::run`] and is rendered as a
//! [`report::Report`]. Configuration is read by [`config::Config::load`] and
//! merged with flags by [`config::Settings::resolve`].

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;

pub use error::{Error, Result};

use config::Settings;
use report::Report;

/// Processes every input and returns the reports plus the optional total.
pub fn process(
    inputs: &[String],
    settings: &Settings,
    sum: bool,
) -> (Vec<Report>, Option<outcome_core::Outcome<i64, Error>>) {
    let outcomes: Vec<_> = inputs
        .iter()
        .map(|input| pipeline::run(input, settings))
        .collect();

    let total = sum.then(|| {
        report::total(
            outcomes.iter().map(|outcome| outcome.as_ref().map(|value| *value)),
            settings.default.unwrap_or(0),
        )
    });

    let reports = inputs
        .iter()
        .zip(outcomes)
        .map(|(input, outcome)| Report::new(input, outcome, settings.default))
        .collect();

    (reports, total)
}
