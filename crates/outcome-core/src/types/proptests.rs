//! Property-based tests for the outcome laws.
