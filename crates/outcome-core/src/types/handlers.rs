//! Handler pairs for pattern dispatch.

/// One handler per variant, consumed by [`Outcome::match_with`] and
/// [`pipe::matching`](crate::pipe::matching).
///
/// Both handlers must produce the same result type. Exactly one of them is
/// invoked per dispatch.
///
/// [`Outcome::match_with`]: crate::Outcome::match_with
#[derive(Debug, Clone, Copy)]
pub struct Handlers<S, F> {
    /// Called with the success payload.
    pub on_success: S,
    /// Called with the failure payload.
    pub on_failure: F,
}

impl<S, F> Handlers<S, F> {
    /// Groups a success handler and a failure handler.
    pub fn new(on_success: S, on_failure: F) -> Self {
        Self {
            on_success,
            on_failure,
        }
    }
}
