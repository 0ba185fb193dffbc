//! RISC-V Base Integer (I) Opcodes.
//!
//! Defines the major opcodes for the base integer instruction set. Values are
//! the 5-bit field at bits 6-2; bits 1-0 are always `0b11` for 32-bit words and
//! are checked separately as the length discriminator.

/// Load instructions (LB, LH, LW, LD, etc.).
pub const OP_LOAD: u32 = 0b00000;

/// Memory ordering instructions (FENCE, FENCE.I).
pub const OP_MISC_MEM: u32 = 0b00011;

/// Immediate arithmetic instructions (ADDI, ANDI, SLLI, etc.).
pub const OP_IMM: u32 = 0b00100;

/// Add Upper Immediate to PC (AUIPC).
pub const OP_AUIPC: u32 = 0b00101;

/// 32-bit Immediate arithmetic (ADDIW, SLLIW, etc.) - RV64 only.
pub const OP_IMM_32: u32 = 0b00110;

/// Store instructions (SB, SH, SW, SD).
pub const OP_STORE: u32 = 0b01000;

/// Register-Register arithmetic (ADD, SUB, SLL, etc.).
pub const OP_REG: u32 = 0b01100;

/// Load Upper Immediate (LUI).
pub const OP_LUI: u32 = 0b01101;

/// 32-bit Register-Register arithmetic (ADDW, SUBW, etc.) - RV64 only.
pub const OP_REG_32: u32 = 0b01110;

/// Conditional Branch instructions (BEQ, BNE, etc.).
pub const OP_BRANCH: u32 = 0b11000;

/// Jump and Link Register (JALR).
pub const OP_JALR: u32 = 0b11001;

/// Jump and Link (JAL).
pub const OP_JAL: u32 = 0b11011;
