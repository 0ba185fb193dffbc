//! RISC-V Atomic Extension (A) Function Codes (funct3).
//!
//! Under `OP_AMO` the `funct3` field only carries the access width. Every
//! other value is undefined.

/// Word access; selects the `.w` mnemonics.
pub const WIDTH_32: u32 = 0b010;

/// Doubleword access; selects the `.d` mnemonics.
pub const WIDTH_64: u32 = 0b011;
