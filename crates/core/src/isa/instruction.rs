//! Instruction encoding and decoded-record types.
//!
//! Provides bit extraction for the fixed fields of a 32-bit instruction word,
//! the encoding shapes that govern operand extraction, and the `Instruction`
//! record exchanged between the decoder and the formatter.

use std::fmt;

use crate::common::constants::NUM_REGISTERS;
use crate::isa::mnemonic::Mnemonic;

/// Bit mask for extracting the 5-bit major opcode field (bits 2-6).
pub const OPCODE_MASK: u32 = 0x1F;
/// Bit mask for extracting the destination register field (bits 7-11).
pub const RD_MASK: u32 = 0x1F;
/// Bit mask for extracting the first source register field (bits 15-19).
pub const RS1_MASK: u32 = 0x1F;
/// Bit mask for extracting the second source register field (bits 20-24).
pub const RS2_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;
/// Bit mask for extracting the shift amount (bits 20-25).
pub const SHAMT_MASK: u32 = 0x3F;
/// Bit mask for extracting the AMO ordering bits aq/rl (bits 25-26).
pub const AMO_ORDERING_MASK: u32 = 0x3;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Field positions are part of the external binary contract and are fixed
/// for every 32-bit word regardless of format.
pub trait InstructionBits {
    /// Extracts the major opcode field (bits 2-6).
    ///
    /// Bits 0-1 hold the length discriminator and are not part of the value.
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    fn rd(&self) -> u8;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> u8;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> u8;

    /// Extracts the funct3 field (bits 12-14).
    ///
    /// Used to distinguish between different operations within the same opcode.
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    ///
    /// Used to distinguish between standard and alternate encodings (ADD vs SUB),
    /// the M extension, and the AMO operation (its top five bits).
    fn funct7(&self) -> u32;

    /// Extracts the unsigned shift amount (bits 20-25).
    fn shamt(&self) -> u32;

    /// Extracts the unsigned AMO ordering bits aq/rl (bits 25-26).
    fn amo_ordering(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> 2) & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> u8 {
        ((self >> 7) & RD_MASK) as u8
    }

    #[inline(always)]
    fn rs1(&self) -> u8 {
        ((self >> 15) & RS1_MASK) as u8
    }

    #[inline(always)]
    fn rs2(&self) -> u8 {
        ((self >> 20) & RS2_MASK) as u8
    }

    /// Shifts right by 12 bits and masks to the 3-bit function code.
    ///
    /// The result is always in `0..8`, so it can index an 8-entry table directly.
    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> 25) & FUNCT7_MASK
    }

    /// Six bits wide so that RV64 shift amounts up to 63 are representable.
    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> 20) & SHAMT_MASK
    }

    #[inline(always)]
    fn amo_ordering(&self) -> u32 {
        (self >> 25) & AMO_ORDERING_MASK
    }
}

/// An integer register index in `0..32`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Register(u8);

impl Register {
    /// Register x0, hardwired to zero.
    pub const ZERO: Self = Self(0);

    /// Creates a register from its index, or `None` if the index is out of range.
    pub const fn new(idx: u8) -> Option<Self> {
        if (idx as usize) < NUM_REGISTERS {
            Some(Self(idx))
        } else {
            None
        }
    }

    /// Creates a register from a 5-bit field; higher bits are discarded.
    #[inline(always)]
    pub(crate) const fn from_field(bits: u8) -> Self {
        Self(bits & 0x1F)
    }

    /// The register index.
    pub const fn index(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}

/// Encoding shape of an instruction.
///
/// Determines which operand fields are present and how the immediate is
/// assembled. Each mnemonic has exactly one shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Register-register: `rd`, `rs1`, `rs2`; no immediate.
    R,
    /// Integer immediate: `rd`, `rs1`, 12-bit signed immediate.
    I,
    /// Shift immediate: `rd`, `rs1`, 6-bit unsigned shift amount.
    IShamt,
    /// Store: `rs1`, `rs2`, split 12-bit signed offset.
    S,
    /// Conditional branch: `rs1`, `rs2`, 13-bit signed even offset.
    B,
    /// Upper immediate: `rd`, 20 bits placed at bits 31-12.
    U,
    /// Jump: `rd`, 21-bit signed even offset.
    J,
    /// Atomic memory operation: `rd`, `rs1`, `rs2`, 2-bit ordering field.
    Amo,
}

impl Encoding {
    /// Whether the shape carries a destination register.
    pub const fn has_rd(self) -> bool {
        !matches!(self, Self::S | Self::B)
    }

    /// Whether the shape carries a first source register.
    pub const fn has_rs1(self) -> bool {
        !matches!(self, Self::U | Self::J)
    }

    /// Whether the shape carries a second source register.
    pub const fn has_rs2(self) -> bool {
        matches!(self, Self::R | Self::S | Self::B | Self::Amo)
    }

    /// Whether the shape carries a third source register (none in this subset).
    pub const fn has_rs3(self) -> bool {
        false
    }

    /// Whether the shape carries any immediate field.
    pub const fn has_imm(self) -> bool {
        !matches!(self, Self::R)
    }
}

/// A decoded instruction.
///
/// Produced fresh by [`decode`](crate::isa::decode::decode) and read by the
/// formatter. Absent operands are `None`, never register 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Instruction {
    /// Operation identifier.
    pub mnemonic: Mnemonic,
    /// Destination register.
    pub rd: Option<Register>,
    /// First source register.
    pub rs1: Option<Register>,
    /// Second source register.
    pub rs2: Option<Register>,
    /// Third source register; always `None` for the supported extensions.
    pub rs3: Option<Register>,
    /// Immediate, interpreted per mnemonic; 0 when the encoding has none.
    pub imm: i32,
}

impl Instruction {
    /// Creates an instruction with no operands and a zero immediate.
    pub const fn new(mnemonic: Mnemonic) -> Self {
        Self {
            mnemonic,
            rd: None,
            rs1: None,
            rs2: None,
            rs3: None,
            imm: 0,
        }
    }

    /// Present registers in `rd`, `rs1`, `rs2`, `rs3` order.
    pub fn registers(&self) -> impl Iterator<Item = Register> + '_ {
        [self.rd, self.rs1, self.rs2, self.rs3].into_iter().flatten()
    }
}
