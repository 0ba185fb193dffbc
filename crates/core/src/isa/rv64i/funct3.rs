//! RISC-V Base Integer (I) Function Codes (funct3).
//!
//! The `funct3` field (bits 14-12) selects the slot within the dispatch row of
//! a major opcode. Constants are grouped by the opcode whose row they index.

// OP_LOAD: access width, then signedness.

/// `lb`
pub const LB: u32 = 0b000;
/// `lh`
pub const LH: u32 = 0b001;
/// `lw`
pub const LW: u32 = 0b010;
/// `ld`
pub const LD: u32 = 0b011;
/// `lbu`
pub const LBU: u32 = 0b100;
/// `lhu`
pub const LHU: u32 = 0b101;
/// `lwu`
pub const LWU: u32 = 0b110;

// OP_STORE: slots 4-7 are unassigned.

/// `sb`
pub const SB: u32 = 0b000;
/// `sh`
pub const SH: u32 = 0b001;
/// `sw`
pub const SW: u32 = 0b010;
/// `sd`
pub const SD: u32 = 0b011;

// OP_BRANCH: slots 2 and 3 are unassigned.

/// `beq`
pub const BEQ: u32 = 0b000;
/// `bne`
pub const BNE: u32 = 0b001;
/// `blt` (signed)
pub const BLT: u32 = 0b100;
/// `bge` (signed)
pub const BGE: u32 = 0b101;
/// `bltu`
pub const BLTU: u32 = 0b110;
/// `bgeu`
pub const BGEU: u32 = 0b111;

// OP_IMM, OP_REG and their 32-bit forms share one slot layout.

/// ADD/SUB and the immediate and word forms.
pub const ADD_SUB: u32 = 0b000;
/// Logical left shift.
pub const SLL: u32 = 0b001;
/// Signed set-less-than.
pub const SLT: u32 = 0b010;
/// Unsigned set-less-than.
pub const SLTU: u32 = 0b011;
/// Exclusive or.
pub const XOR: u32 = 0b100;
/// Right shift; `funct7` picks logical or arithmetic.
pub const SRL_SRA: u32 = 0b101;
/// Inclusive or.
pub const OR: u32 = 0b110;
/// And.
pub const AND: u32 = 0b111;

// OP_MISC_MEM

/// `fence`
pub const FENCE: u32 = 0b000;
/// `fencei`
pub const FENCE_I: u32 = 0b001;
