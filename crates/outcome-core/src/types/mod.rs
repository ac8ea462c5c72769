//! Core types: the outcome itself, its variant tag and handler pairs.

mod handlers;
mod outcome;
mod proptests;
mod variant;

pub use handlers::Handlers;
pub use outcome::Outcome;
pub use variant::Variant;
