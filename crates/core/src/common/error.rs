//! Decode Diagnostic definitions.
//!
//! This module defines the diagnostics the decoder reports instead of an instruction. It provides:
//! 1. **Partial:** Too few bytes were supplied to make any determination.
//! 2. **Undefined:** The bytes are complete but match no supported encoding.
//!
//! Both are recoverable by the caller; the decoder itself never retries or skips.

use thiserror::Error;

/// Reasons a byte buffer did not produce an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum DecodeError {
    /// Not enough bytes were available to classify or load the instruction.
    ///
    /// This is not a malformed-input signal: a caller reading from a stream
    /// should supply more bytes and retry.
    #[error("partial instruction: more bytes required")]
    Partial,

    /// The bytes do not correspond to any instruction this decoder recognises.
    ///
    /// Raised for 16-bit compressed forms, forms longer than 32 bits, and
    /// opcode/funct3/funct7 combinations absent from the dispatch tables.
    #[error("undefined instruction encoding")]
    Undefined,
}

impl DecodeError {
    /// Returns `true` when supplying more bytes could change the outcome.
    pub const fn is_partial(self) -> bool {
        matches!(self, Self::Partial)
    }
}
