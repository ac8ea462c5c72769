#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Outcome Core Library
//!
//! A closed success/failure sum type with combinators for composing fallible
//! computations without unwinding.

pub mod error;
pub mod pipe;
pub mod types;

// Re-exports for convenience
pub use error::{Error, Result};
pub use pipe::Pipe;
pub use types::{Handlers, Outcome, Variant};
