//! The two-variant success/failure type.

use std::fmt::Debug;

use super::{Handlers, Variant};
use crate::error::{Error, Result};

/// The outcome of a computation that may fail.
///
/// An `Outcome` is always exactly one of [`Success`](Outcome::Success) or
/// [`Failure`](Outcome::Failure). Failures are ordinary data: combinators
/// skip over them instead of unwinding, so the first failure in a chain rides
/// through to the end untouched unless [`map_err`](Outcome::map_err) or
/// [`match_with`](Outcome::match_with) looks at it.
///
/// Every combinator takes `self` by value and returns a new `Outcome`.
///
/// # Examples
///
/// ```
/// use outcome_core::Outcome;
///
/// let parsed: Outcome<i32, String> = Outcome::Success(21);
/// let doubled = parsed.map(|n| n * 2);
/// assert_eq!(doubled, Outcome::Success(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[must_use = "this `Outcome` may be a `Failure`, which should be handled"]
pub enum Outcome<T, E> {
    /// The computation overcame its point of possible failure.
    Success(T),

    /// The computation failed.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Returns `true` if the outcome is `Success`.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` if the outcome is `Failure`.
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the variant tag.
    pub fn variant(&self) -> Variant {
        match self {
            Outcome::Success(_) => Variant::Success,
            Outcome::Failure(_) => Variant::Failure,
        }
    }

    /// Borrows both payloads, producing an `Outcome<&T, &E>`.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Maps an `Outcome<T, E>` to `Outcome<U, E>` by applying a function to
    /// the success payload.
    ///
    /// A `Failure` is returned unchanged and `f` is not called.
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Maps an `Outcome<T, E>` to `Outcome<T, F>` by applying a function to
    /// the failure payload.
    ///
    /// A `Success` is returned unchanged and `f` is not called.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_core::Outcome;
    ///
    /// let failed: Outcome<(), Vec<&str>> = Outcome::Failure(vec!["error1"]);
    /// let appended = failed.map_err(|mut m| {
    ///     m.push("error2");
    ///     m
    /// });
    /// assert_eq!(appended, Outcome::Failure(vec!["error1", "error2"]));
    /// ```
    pub fn map_err<F, O>(self, op: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(op(error)),
        }
    }

    /// Chains a fallible step onto a successful outcome.
    ///
    /// On `Success(v)` this returns `f(v)` as is; `f` alone decides whether
    /// the chain keeps succeeding. On `Failure` it short-circuits and `f` is
    /// not called.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_core::Outcome;
    ///
    /// fn half(n: u32) -> Outcome<u32, String> {
    ///     if n % 2 == 0 {
    ///         Outcome::Success(n / 2)
    ///     } else {
    ///         Outcome::Failure(format!("{n} is odd"))
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::Success(8).and_then(half).and_then(half), Outcome::Success(2));
    /// assert_eq!(
    ///     Outcome::Success(6).and_then(half).and_then(half),
    ///     Outcome::Failure("3 is odd".to_string())
    /// );
    /// ```
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Returns the success payload, or `default` if this is a `Failure`.
    pub fn with_default(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    /// Dispatches to exactly one handler and returns what it produces.
    ///
    /// This is the total alternative to [`value`](Outcome::value) and
    /// [`message`](Outcome::message): the caller never has to check the
    /// variant first.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_core::{Handlers, Outcome};
    ///
    /// let describe = |o: Outcome<i32, &str>| {
    ///     o.match_with(Handlers::new(
    ///         |n| format!("The number is {n}"),
    ///         |m| format!("An error occurred: {m}"),
    ///     ))
    /// };
    ///
    /// assert_eq!(describe(Outcome::Success(5)), "The number is 5");
    /// assert_eq!(describe(Outcome::Failure("oh dear")), "An error occurred: oh dear");
    /// ```
    pub fn match_with<R, S, F>(self, handlers: Handlers<S, F>) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Outcome::Success(value) => (handlers.on_success)(value),
            Outcome::Failure(error) => (handlers.on_failure)(error),
        }
    }

    /// Extracts the success payload, or reports which variant was found.
    pub fn try_value(self) -> Result<T> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(_) => Err(Error::wrong_variant(Variant::Success)),
        }
    }

    /// Extracts the failure payload, or reports which variant was found.
    pub fn try_message(self) -> Result<E> {
        match self {
            Outcome::Success(_) => Err(Error::wrong_variant(Variant::Failure)),
            Outcome::Failure(error) => Ok(error),
        }
    }

    /// Converts to an `Option`, discarding any failure payload.
    pub fn to_option(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Converts to an `Option` of the failure payload, discarding any success.
    pub fn failure_option(self) -> Option<E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Builds an outcome from an `Option`, using `error` when it is `None`.
    pub fn from_option(option: Option<T>, error: E) -> Self {
        match option {
            Some(value) => Outcome::Success(value),
            None => Outcome::Failure(error),
        }
    }

    /// Combines two outcomes with `f` when both succeed.
    ///
    /// Fails fast: the first `Failure` in argument order is returned and `f`
    /// is not called. Failures are never combined.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_core::Outcome;
    ///
    /// let a: Outcome<i32, &str> = Outcome::Success(2);
    /// let b: Outcome<i32, &str> = Outcome::Failure("b");
    /// let c: Outcome<i32, &str> = Outcome::Failure("c");
    ///
    /// assert_eq!(Outcome::map2(a, Outcome::Success(3), |x, y| x + y), Outcome::Success(5));
    /// assert_eq!(Outcome::map2(b, c, |x, y| x + y), Outcome::Failure("b"));
    /// ```
    pub fn map2<A, B, F>(first: Outcome<A, E>, second: Outcome<B, E>, f: F) -> Self
    where
        F: FnOnce(A, B) -> T,
    {
        match (first, second) {
            (Outcome::Success(a), Outcome::Success(b)) => Outcome::Success(f(a, b)),
            (Outcome::Failure(error), _) | (_, Outcome::Failure(error)) => {
                Outcome::Failure(error)
            }
        }
    }

    /// Converts into a standard library `Result`.
    pub fn into_result(self) -> std::result::Result<T, E> {
        self.into()
    }
}

impl<T, E: Debug> Outcome<T, E> {
    /// Extracts the success payload, panicking if this is a `Failure`.
    ///
    /// Callers are expected to have established the variant already, through
    /// [`is_success`](Outcome::is_success) or by construction. Prefer
    /// [`match_with`](Outcome::match_with), [`with_default`](Outcome::with_default)
    /// or [`try_value`](Outcome::try_value) when that is not the case.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is `Failure`, with the failure payload in the
    /// message.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_core::Outcome;
    ///
    /// let outcome: Outcome<&str, ()> = Outcome::Success("value");
    /// assert_eq!(outcome.value(), "value");
    /// ```
    #[allow(clippy::panic)]
    #[track_caller]
    pub fn value(self) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => {
                panic!("called `Outcome::value()` on a `Failure` value: {error:?}")
            }
        }
    }
}

impl<T: Debug, E> Outcome<T, E> {
    /// Extracts the failure payload, panicking if this is a `Success`.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is `Success`, with the success payload in the
    /// message.
    #[allow(clippy::panic)]
    #[track_caller]
    pub fn message(self) -> E {
        match self {
            Outcome::Success(value) => {
                panic!("called `Outcome::message()` on a `Success` value: {value:?}")
            }
            Outcome::Failure(error) => error,
        }
    }
}

impl<T, E> From<std::result::Result<T, E>> for Outcome<T, E> {
    fn from(result: std::result::Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for std::result::Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}
