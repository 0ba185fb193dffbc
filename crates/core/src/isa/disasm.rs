//! Instruction Formatter.
//!
//! Renders a decoded [`Instruction`] as one line of canonical assembly text:
//! the lowercase mnemonic, then each present register as `r<N>` in
//! `rd rs1 rs2 rs3` order, then the immediate in signed decimal when non-zero,
//! all separated by single spaces.
//!
//! # Usage
//!
//! ```
//! use rvdis_core::isa::decode::decode;
//! use rvdis_core::isa::disasm::format;
//!
//! let (inst, _) = decode(&[0x93, 0x00, 0x51, 0x00]).unwrap();
//! assert_eq!(format(&inst, 64), "addi r1 r2 5");
//! assert_eq!(format(&inst, 6), "addi r");
//! ```

use std::fmt::{self, Write};

use crate::common::writer::BoundedWriter;
use crate::isa::decode::decode_word;
use crate::isa::instruction::Instruction;
use crate::isa::mnemonic::INVALID_MNEMONIC;

/// Upper bound on the length of any formatted line.
///
/// Nine-character mnemonic, four ` r31` operands and ` -2147483648`.
pub const MAX_LINE_LEN: usize = 64;

/// Text produced by [`disassemble`] for words that do not decode.
pub const UNDEFINED_TEXT: &str = "<undefined>";

/// Formats `inst` into `buf`, truncating at `buf.len()` bytes.
///
/// Returns the number of bytes written. Nothing beyond that count is touched,
/// and an empty `buf` is left alone. No terminator is appended.
///
/// # Arguments
///
/// * `inst` - The instruction to render.
/// * `buf` - Destination; its length is the capacity.
pub fn format_into(inst: &Instruction, buf: &mut [u8]) -> usize {
    if buf.is_empty() {
        return 0;
    }
    let mut w = BoundedWriter::new(buf);
    // BoundedWriter drops overflow instead of failing.
    let _ = write_instruction(&mut w, inst);
    w.len()
}

/// Formats `inst` into a new string of at most `capacity` bytes.
///
/// # Arguments
///
/// * `inst` - The instruction to render.
/// * `capacity` - Maximum length of the result in bytes; 0 yields an empty string.
pub fn format(inst: &Instruction, capacity: usize) -> String {
    let mut line = [0u8; MAX_LINE_LEN];
    let cap = capacity.min(MAX_LINE_LEN);
    let len = format_into(inst, &mut line[..cap]);
    String::from_utf8_lossy(&line[..len]).into_owned()
}

/// Decodes and formats a single 32-bit word.
///
/// Returns [`UNDEFINED_TEXT`] for words that do not decode. Intended for
/// tracing and test diagnostics; callers that need the diagnostic should use
/// [`decode_word`] and [`format`] directly.
pub fn disassemble(word: u32) -> String {
    decode_word(word).map_or_else(|_| UNDEFINED_TEXT.to_string(), |inst| inst.to_string())
}

/// Writes the canonical text of `inst` to any `fmt::Write` sink.
fn write_instruction<W: Write>(w: &mut W, inst: &Instruction) -> fmt::Result {
    let Some(name) = inst.mnemonic.name() else {
        return w.write_str(INVALID_MNEMONIC);
    };
    w.write_str(name)?;

    for reg in inst.registers() {
        write!(w, " {reg}")?;
    }

    if inst.imm != 0 {
        write!(w, " {}", inst.imm)?;
    }
    Ok(())
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_instruction(f, self)
    }
}
