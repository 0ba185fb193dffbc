//! Common utilities and types shared by the decoder and the formatter.
//!
//! This module provides the fundamental building blocks used across the crate. It includes:
//! 1. **Constants:** Instruction sizes and the length-discriminator masks.
//! 2. **Error Handling:** The `Partial` / `Undefined` decode diagnostics.
//! 3. **Text Output:** A bounded writer that truncates instead of overflowing.

/// Common constants used throughout the decoder.
pub mod constants;

/// Decode diagnostic definitions.
pub mod error;

/// Bounded, truncating text sink.
pub mod writer;

pub use constants::{INSTRUCTION_SIZE_16, INSTRUCTION_SIZE_32};
pub use error::DecodeError;
pub use writer::BoundedWriter;
