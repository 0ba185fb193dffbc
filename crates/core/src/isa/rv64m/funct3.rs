//! RISC-V M-Extension Function Codes (funct3).
//!
//! Identifies the specific multiply or divide operation when `funct7 == 1`
//! under `OP_REG` or `OP_REG_32`. The word forms only exist for MUL, DIV,
//! DIVU, REM and REMU.

/// Multiply, lower XLEN bits of the product (MUL / MULW).
pub const MUL: u32 = 0b000;

/// Multiply High, signed by signed (no word form).
pub const MULH: u32 = 0b001;

/// Multiply High, signed by unsigned (no word form).
pub const MULHSU: u32 = 0b010;

/// Multiply High, unsigned by unsigned (no word form).
pub const MULHU: u32 = 0b011;

/// Divide, signed (DIV / DIVW).
pub const DIV: u32 = 0b100;

/// Divide, unsigned (DIVU / DIVUW).
pub const DIVU: u32 = 0b101;

/// Remainder, signed (REM / REMW).
pub const REM: u32 = 0b110;

/// Remainder, unsigned (REMU / REMUW).
pub const REMU: u32 = 0b111;
