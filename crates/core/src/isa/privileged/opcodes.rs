//! RISC-V Privileged Architecture Opcodes.
//!
//! Defines the major opcode and function codes for system instructions,
//! including CSR access and environment calls.

/// System instruction major opcode (bits 6-2 of `0b1110011`).
pub const OP_SYSTEM: u32 = 0b11100;

/// Slot of ECALL. Every `funct3 == 0` word decodes as ECALL; the
/// immediate is kept, so EBREAK and the xRET forms show up as `ecall` with
/// a non-zero immediate.
pub const PRIV: u32 = 0b000;
/// Atomic Read/Write CSR (CSRRW).
pub const CSRRW: u32 = 0b001;
/// Atomic Read and Set Bits in CSR (CSRRS).
pub const CSRRS: u32 = 0b010;
/// Atomic Read and Clear Bits in CSR (CSRRC).
pub const CSRRC: u32 = 0b011;
/// Atomic Read/Write CSR Immediate (CSRRWI).
pub const CSRRWI: u32 = 0b101;
/// Atomic Read and Set Bits in CSR Immediate (CSRRSI).
pub const CSRRSI: u32 = 0b110;
/// Atomic Read and Clear Bits in CSR Immediate (CSRRCI).
pub const CSRRCI: u32 = 0b111;
