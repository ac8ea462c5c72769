//! Variant tags.

use std::fmt;

/// The tag of an [`Outcome`](crate::Outcome), without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Variant {
    /// Tag of [`Outcome::Success`](crate::Outcome::Success).
    Success,
    /// Tag of [`Outcome::Failure`](crate::Outcome::Failure).
    Failure,
}

impl Variant {
    /// Returns the other member of the closed variant set.
    pub fn other(self) -> Self {
        match self {
            Variant::Success => Variant::Failure,
            Variant::Failure => Variant::Success,
        }
    }

    /// Returns the variant name as a static string.
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Success => "Success",
            Variant::Failure => "Failure",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
