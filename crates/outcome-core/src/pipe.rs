//! Curried, argument-last versions of the [`Outcome`] operations.
//!
//! Each combinator here takes its transformation first and returns a closure
//! that accepts the outcome last. Together with [`Pipe`] this allows
//! point-free pipelines that read left to right:
//!
//! ```
//! use outcome_core::pipe::{Pipe, and_then, failure, map, map_err, success, with_default};
//! use outcome_core::Outcome;
//!
//! let checked = |n: i32| if n > 0 { success(n) } else { failure("not positive") };
//!
//! let total = success::<i32, &str>(4)
//!     .pipe(map(|n: i32| n * 10))
//!     .pipe(and_then(checked))
//!     .pipe(with_default(0));
//! assert_eq!(total, 40);
//!
//! let described: Outcome<i32, String> = failure::<i32, &str>("bad input")
//!     .pipe(map(|n: i32| n + 1))
//!     .pipe(map_err(|m: &str| format!("stage 1: {m}")));
//! assert_eq!(described, Outcome::Failure("stage 1: bad input".to_string()));
//! ```
//!
//! The returned closures are `FnMut` so that stateful transformations can be
//! reused across many outcomes.

use std::fmt::Debug;

use crate::types::{Handlers, Outcome};

/// Left-to-right function application.
///
/// `x.pipe(f)` is `f(x)`. Implemented for every sized type.
pub trait Pipe: Sized {
    /// Passes `self` to `f` and returns the result.
    fn pipe<R, F>(self, f: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        f(self)
    }
}

impl<T> Pipe for T {}

/// Wraps `value` as a success.
pub fn success<T, E>(value: T) -> Outcome<T, E> {
    Outcome::Success(value)
}

/// Wraps `error` as a failure.
pub fn failure<T, E>(error: E) -> Outcome<T, E> {
    Outcome::Failure(error)
}

/// Returns `true` if `outcome` is a success.
pub fn is_success<T, E>(outcome: &Outcome<T, E>) -> bool {
    outcome.is_success()
}

/// Returns `true` if `outcome` is a failure.
pub fn is_failure<T, E>(outcome: &Outcome<T, E>) -> bool {
    outcome.is_failure()
}

/// Curried [`Outcome::map`].
pub fn map<T, U, E, F>(mut f: F) -> impl FnMut(Outcome<T, E>) -> Outcome<U, E>
where
    F: FnMut(T) -> U,
{
    move |outcome| outcome.map(&mut f)
}

/// Curried [`Outcome::map_err`].
pub fn map_err<T, E, F, O>(mut op: O) -> impl FnMut(Outcome<T, E>) -> Outcome<T, F>
where
    O: FnMut(E) -> F,
{
    move |outcome| outcome.map_err(&mut op)
}

/// Curried [`Outcome::and_then`].
pub fn and_then<T, U, E, F>(mut f: F) -> impl FnMut(Outcome<T, E>) -> Outcome<U, E>
where
    F: FnMut(T) -> Outcome<U, E>,
{
    move |outcome| outcome.and_then(&mut f)
}

/// Curried [`Outcome::with_default`].
///
/// The default is cloned only when a failure is seen.
pub fn with_default<T, E>(default: T) -> impl Fn(Outcome<T, E>) -> T
where
    T: Clone,
{
    move |outcome| match outcome {
        Outcome::Success(value) => value,
        Outcome::Failure(_) => default.clone(),
    }
}

/// Curried [`Outcome::match_with`].
///
/// ```
/// use outcome_core::pipe::{failure, matching, success};
/// use outcome_core::Handlers;
///
/// let mut describe = matching(Handlers::new(
///     |n: i32| format!("The number is {n}"),
///     |m: &str| format!("An error occurred: {m}"),
/// ));
///
/// assert_eq!(describe(success(5)), "The number is 5");
/// assert_eq!(describe(failure("oh dear")), "An error occurred: oh dear");
/// ```
pub fn matching<T, E, R, S, F>(mut handlers: Handlers<S, F>) -> impl FnMut(Outcome<T, E>) -> R
where
    S: FnMut(T) -> R,
    F: FnMut(E) -> R,
{
    move |outcome| match outcome {
        Outcome::Success(value) => (handlers.on_success)(value),
        Outcome::Failure(error) => (handlers.on_failure)(error),
    }
}

/// Free-function form of [`Outcome::value`].
///
/// # Panics
///
/// Panics if `outcome` is a failure.
#[track_caller]
pub fn value<T, E: Debug>(outcome: Outcome<T, E>) -> T {
    outcome.value()
}

/// Free-function form of [`Outcome::message`].
///
/// # Panics
///
/// Panics if `outcome` is a success.
#[track_caller]
pub fn message<T: Debug, E>(outcome: Outcome<T, E>) -> E {
    outcome.message()
}
