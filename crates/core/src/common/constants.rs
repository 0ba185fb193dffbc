//! Global Decoder Constants.
//!
//! This module defines the constants shared by the decoder and its callers. It includes:
//! 1. **Length Constants:** Instruction sizes and the minimum bytes needed to classify one.
//! 2. **Length Discriminator:** Masks over the first byte that announce the encoding length.

/// Size of a standard (32-bit) RISC-V instruction in bytes.
pub const INSTRUCTION_SIZE_32: usize = 4;

/// Size of a compressed (16-bit) RISC-V instruction in bytes.
///
/// Compressed forms are recognised only so that callers can step over them;
/// they are never decoded.
pub const INSTRUCTION_SIZE_16: usize = 2;

/// Minimum number of bytes needed to read the length discriminator.
pub const LENGTH_PREFIX_SIZE: usize = 2;

/// Bit mask over byte 0 selecting the compressed-form discriminator (bits 0-1).
pub const COMPRESSED_INSTRUCTION_MASK: u8 = 0x03;

/// Value of the discriminator bits for any non-compressed instruction.
pub const UNCOMPRESSED_INSTRUCTION_VALUE: u8 = 0x03;

/// Bit mask over byte 0 selecting the long-form discriminator (bits 2-4).
pub const LONG_INSTRUCTION_MASK: u8 = 0x1C;

/// Value of bits 2-4 announcing an instruction longer than 32 bits.
pub const LONG_INSTRUCTION_VALUE: u8 = 0x1C;

/// Number of general-purpose integer registers.
pub const NUM_REGISTERS: usize = 32;
