//! Error types for outcome-core.

use crate::types::Variant;

/// Errors that can occur when inspecting an [`Outcome`](crate::Outcome).
///
/// Domain failures are never reported through this type; they live in
/// [`Outcome::Failure`](crate::Outcome::Failure). This enum only covers
/// misuse of the extraction API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A payload was requested from the wrong variant.
    #[error("Wrong variant: expected {expected}, found {found}")]
    WrongVariant {
        /// Variant the caller asked for
        expected: Variant,
        /// Variant the outcome actually holds
        found: Variant,
    },
}

/// Convenience `Result` type alias for outcome-core operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a wrong-variant error for a request of `expected`.
    ///
    /// The found variant is always the other one, since the set is closed.
    pub fn wrong_variant(expected: Variant) -> Self {
        Error::WrongVariant {
            expected,
            found: expected.other(),
        }
    }
}
