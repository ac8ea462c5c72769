//! The per-input pipeline: parse, require non-negative, divide exactly.
//!
//! Each step returns an [`Outcome`] and the steps are chained with
//! [`and_then`], so the first failing step decides the reported error and
//! later steps never run.

use outcome_core::pipe::{Pipe, and_then};
use outcome_core::Outcome;

use crate::config::Settings;
use crate::error::Error;

/// Parses a raw argument as an `i64`.
pub fn parse(input: &str) -> Outcome<i64, Error> {
    Outcome::from(input.trim().parse::<i64>()).map_err(|source| Error::ParseInput {
        input: input.to_string(),
        source,
    })
}

/// Rejects values below zero.
pub fn non_negative(value: i64) -> Outcome<i64, Error> {
    if value < 0 {
        Outcome::Failure(Error::Negative(value))
    } else {
        Outcome::Success(value)
    }
}

/// Returns a step dividing by `divisor`, failing when the division leaves a remainder.
///
/// `divisor` must be non-zero; [`Settings::resolve`] guarantees this.
pub fn divide_by(divisor: i64) -> impl Fn(i64) -> Outcome<i64, Error> {
    move |value| {
        if divisor != 0 && value % divisor == 0 {
            Outcome::Success(value / divisor)
        } else {
            Outcome::Failure(Error::Inexact { value, divisor })
        }
    }
}

/// Runs one input through the full pipeline.
pub fn run(input: &str, settings: &Settings) -> Outcome<i64, Error> {
    let outcome = parse(input)
        .pipe(and_then(non_negative))
        .pipe(and_then(divide_by(settings.divisor)));

    tracing::debug!(input, variant = %outcome.variant(), "Pipeline finished");
    outcome
}
