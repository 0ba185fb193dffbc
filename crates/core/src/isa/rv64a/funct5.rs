//! RISC-V Atomic Extension (A) Function Codes (funct5).
//!
//! The `funct5` field (bits 31-27) specifies the atomic operation to perform.
//! It is the top five bits of `funct7`; the remaining two bits are aq/rl.

/// Shift from `funct7` down to `funct5`.
pub const FUNCT7_SHIFT: u32 = 2;

/// Atomic Add.
pub const AMOADD: u32 = 0b00000;

/// Atomic Swap.
pub const AMOSWAP: u32 = 0b00001;

/// Atomic Load-Reserved.
pub const LR: u32 = 0b00010;

/// Atomic Store-Conditional.
pub const SC: u32 = 0b00011;

/// Atomic XOR.
pub const AMOXOR: u32 = 0b00100;

/// Atomic OR.
pub const AMOOR: u32 = 0b01000;

/// Atomic AND.
pub const AMOAND: u32 = 0b01100;

/// Atomic Minimum (Signed).
pub const AMOMIN: u32 = 0b10000;

/// Atomic Maximum (Signed).
pub const AMOMAX: u32 = 0b10100;

/// Atomic Minimum (Unsigned).
pub const AMOMINU: u32 = 0b11000;

/// Atomic Maximum (Unsigned).
pub const AMOMAXU: u32 = 0b11100;

/// Acquire bit in the low two bits of `funct7`, and in the decoded immediate.
pub const AQ: u32 = 1 << 1;

/// Release bit in the low two bits of `funct7`, and in the decoded immediate.
pub const RL: u32 = 1 << 0;
