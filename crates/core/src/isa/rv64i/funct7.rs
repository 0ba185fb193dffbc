//! RISC-V Base Integer (I) Function Codes (funct7).
//!
//! The `funct7` field (bits 31-25) selects the row of the register-register
//! tables under `OP_REG` and `OP_REG_32`. The M extension claims the value 1
//! (see `rv64m::opcodes`).

/// Base row: ADD, SLL, SLT, SLTU, XOR, SRL, OR, AND and their word forms.
pub const DEFAULT: u32 = 0b0000000;

/// Alternate row: SUB and SRA, plus SUBW and SRAW.
pub const ALT: u32 = 0b0100000;

/// Bit of `funct7` selecting the arithmetic right shift in SRAI/SRAIW.
///
/// Only this bit is tested for shift-immediates; the low bit of `funct7`
/// overlaps the 6-bit shift amount.
pub const ARITHMETIC_SHIFT_BIT: u32 = 0b0100000;
