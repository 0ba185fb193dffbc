//! RISC-V Atomic Extension (A) Opcodes.

/// Atomic Memory Operation major opcode (bits 6-2 of `0b0101111`).
/// Used for all AMO instructions (LR, SC, AMOADD, etc.).
pub const OP_AMO: u32 = 0b01011;
