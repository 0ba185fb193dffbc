//! RISC-V Atomic Extension (A).
//!
//! Defines constants for Atomic Memory Operations (AMO).
//! AMOs perform a read-modify-write operation in a single instruction and carry
//! the aq/rl ordering bits where other formats carry an immediate.

/// Function code 3 definitions for atomic operation widths.
pub mod funct3;

/// Function code 5 definitions for atomic operation variants.
pub mod funct5;

/// Atomic extension opcodes (AMO, LR, SC).
pub mod opcodes;
