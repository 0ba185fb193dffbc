//! Shared test infrastructure.

/// Fluent builders for raw instruction words.
pub mod builder;
