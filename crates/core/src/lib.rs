//! RISC-V instruction decoder and formatter.
//!
//! This crate turns one 32-bit RV64IMA instruction word at a time into a
//! structured record and renders that record as canonical assembly text:
//! 1. **Decoder:** [`decode`] reads a little-endian word from a byte buffer and
//!    resolves its mnemonic, registers and immediate through constant tables.
//! 2. **Formatter:** [`format`] and [`format_into`] render a record into a
//!    bounded buffer, truncating instead of overflowing.
//!
//! Both are pure functions over caller-owned buffers and are safe to call
//! concurrently.
//!
//! ```
//! use rvdis_core::{decode, format, Mnemonic};
//!
//! let (inst, len) = decode(&[0x93, 0x00, 0x51, 0x00]).unwrap();
//! assert_eq!((inst.mnemonic, len), (Mnemonic::ADDI, 4));
//! assert_eq!(format(&inst, 32), "addi r1 r2 5");
//! ```

/// Common types and constants (sizes, diagnostics, bounded writer).
pub mod common;
/// Instruction set (tables, decode, formatting, records).
pub mod isa;

pub use crate::common::error::DecodeError;
pub use crate::isa::decode::{decode, decode_word, instruction_length};
pub use crate::isa::disasm::{format, format_into};
pub use crate::isa::instruction::{Encoding, Instruction, Register};
pub use crate::isa::mnemonic::Mnemonic;
