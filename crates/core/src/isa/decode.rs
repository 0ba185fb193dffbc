//! RISC-V Instruction Decoder.
//!
//! This module decodes a single 32-bit RISC-V instruction from a byte buffer
//! into an [`Instruction`]. It checks the length discriminator, resolves the
//! mnemonic and encoding shape through constant dispatch tables keyed by
//! `opcode`, `funct3` and `funct7`, then extracts operands and the
//! sign-extended immediate according to the shape (R, I, shamt, S, B, U, J, AMO).

use tracing::trace;

use crate::common::constants::{
    COMPRESSED_INSTRUCTION_MASK, INSTRUCTION_SIZE_16, INSTRUCTION_SIZE_32, LENGTH_PREFIX_SIZE,
    LONG_INSTRUCTION_MASK, LONG_INSTRUCTION_VALUE, UNCOMPRESSED_INSTRUCTION_VALUE,
};
use crate::common::error::DecodeError;
use crate::isa::instruction::{Encoding, Instruction, InstructionBits, Register};
use crate::isa::mnemonic::Mnemonic as M;
use crate::isa::privileged::opcodes as sys_op;
use crate::isa::rv64a::{funct3 as a_f3, funct5 as a_f5, opcodes as a_op};
use crate::isa::rv64i::{funct3 as i_f3, funct7 as i_f7, opcodes as i_op};
use crate::isa::rv64m::{funct3 as m_f3, opcodes as m_op};

/// Total width of a RISC-V instruction in bits.
const INSTRUCTION_WIDTH: u32 = 32;

/// Bit shift for extracting I-Type immediate field (bits 20-31).
///
/// I-Type format: `imm[11:0] | rs1 | funct3 | rd | opcode`
/// The immediate occupies the upper 12 bits and is sign-extended.
const I_IMM_SHIFT: u32 = 20;

/// Bit shift for extracting S-Type immediate low field (bits 7-11).
///
/// S-Type format: `imm[11:5] | rs2 | rs1 | funct3 | imm[4:0] | opcode`
const S_IMM_LOW_SHIFT: u32 = 7;

/// Bit mask for S-Type immediate low field (5 bits: imm[4:0]).
const S_IMM_LOW_MASK: u32 = 0x1F;

/// Bit shift for extracting S-Type immediate high field (bits 25-31).
const S_IMM_HIGH_SHIFT: u32 = 25;

/// Bit mask for S-Type immediate high field (7 bits: imm[11:5]).
const S_IMM_HIGH_MASK: u32 = 0x7F;

/// Bit shift for combining S-Type immediate fields after extraction.
const S_IMM_COMBINED_SHIFT: u32 = 5;

/// Total number of bits in S-Type immediate (12 bits).
const S_IMM_BITS: u32 = 12;

/// B-Type format: `imm[12] | imm[10:5] | rs2 | rs1 | funct3 | imm[4:1] | imm[11] | opcode`
/// The immediate is a signed offset in multiples of 2.
const B_IMM_11_SHIFT: u32 = 7;
const B_IMM_11_MASK: u32 = 1;
const B_IMM_4_1_SHIFT: u32 = 8;
const B_IMM_4_1_MASK: u32 = 0xF;
const B_IMM_10_5_SHIFT: u32 = 25;
const B_IMM_10_5_MASK: u32 = 0x3F;
const B_IMM_12_SHIFT: u32 = 31;
const B_IMM_12_MASK: u32 = 1;

/// Total number of bits in B-Type immediate (13 bits, sign-extended).
const B_IMM_BITS: u32 = 13;

const B_IMM_12_POS: u32 = 12;
const B_IMM_11_POS: u32 = 11;
const B_IMM_10_5_POS: u32 = 5;
const B_IMM_4_1_POS: u32 = 1;

/// Bit mask for extracting U-Type immediate field (bits 12-31).
///
/// U-Type format: `imm[31:12] | rd | opcode`
/// The field stays in place; the low 12 bits of the result are zero.
const U_IMM_MASK: u32 = 0xFFFF_F000;

/// J-Type format: `imm[20] | imm[10:1] | imm[11] | imm[19:12] | rd | opcode`
/// The immediate is a signed offset in multiples of 2.
const J_IMM_19_12_SHIFT: u32 = 12;
const J_IMM_19_12_MASK: u32 = 0xFF;
const J_IMM_11_SHIFT: u32 = 20;
const J_IMM_11_MASK: u32 = 1;
const J_IMM_10_1_SHIFT: u32 = 21;
const J_IMM_10_1_MASK: u32 = 0x3FF;
const J_IMM_20_SHIFT: u32 = 31;
const J_IMM_20_MASK: u32 = 1;

/// Total number of bits in J-Type immediate (21 bits, sign-extended).
const J_IMM_BITS: u32 = 21;

const J_IMM_20_POS: u32 = 20;
const J_IMM_19_12_POS: u32 = 12;
const J_IMM_11_POS: u32 = 11;
const J_IMM_10_1_POS: u32 = 1;

/// A dispatch table row indexed by `funct3`.
type Funct3Table = [Option<M>; 8];

/// Builds a row from `(funct3, mnemonic)` pairs; unlisted slots stay `None`.
const fn row(entries: &[(u32, M)]) -> Funct3Table {
    let mut table = [None; 8];
    let mut i = 0;
    while i < entries.len() {
        let (f3, m) = entries[i];
        table[f3 as usize] = Some(m);
        i += 1;
    }
    table
}

const LOAD: Funct3Table = row(&[
    (i_f3::LB, M::LB),
    (i_f3::LH, M::LH),
    (i_f3::LW, M::LW),
    (i_f3::LD, M::LD),
    (i_f3::LBU, M::LBU),
    (i_f3::LHU, M::LHU),
    (i_f3::LWU, M::LWU),
]);

const MISC_MEM: Funct3Table = row(&[(i_f3::FENCE, M::FENCE), (i_f3::FENCE_I, M::FENCEI)]);

const STORE: Funct3Table = row(&[
    (i_f3::SB, M::SB),
    (i_f3::SH, M::SH),
    (i_f3::SW, M::SW),
    (i_f3::SD, M::SD),
]);

const BRANCH: Funct3Table = row(&[
    (i_f3::BEQ, M::BEQ),
    (i_f3::BNE, M::BNE),
    (i_f3::BLT, M::BLT),
    (i_f3::BGE, M::BGE),
    (i_f3::BLTU, M::BLTU),
    (i_f3::BGEU, M::BGEU),
]);

const SYSTEM: Funct3Table = row(&[
    (sys_op::PRIV, M::ECALL),
    (sys_op::CSRRW, M::CSRRW),
    (sys_op::CSRRS, M::CSRRS),
    (sys_op::CSRRC, M::CSRRC),
    (sys_op::CSRRWI, M::CSRRWI),
    (sys_op::CSRRSI, M::CSRRSI),
    (sys_op::CSRRCI, M::CSRRCI),
]);

const OP_BASE: Funct3Table = row(&[
    (i_f3::ADD_SUB, M::ADD),
    (i_f3::SLL, M::SLL),
    (i_f3::SLT, M::SLT),
    (i_f3::SLTU, M::SLTU),
    (i_f3::XOR, M::XOR),
    (i_f3::SRL_SRA, M::SRL),
    (i_f3::OR, M::OR),
    (i_f3::AND, M::AND),
]);

const OP_MULDIV: Funct3Table = row(&[
    (m_f3::MUL, M::MUL),
    (m_f3::MULH, M::MULH),
    (m_f3::MULHSU, M::MULHSU),
    (m_f3::MULHU, M::MULHU),
    (m_f3::DIV, M::DIV),
    (m_f3::DIVU, M::DIVU),
    (m_f3::REM, M::REM),
    (m_f3::REMU, M::REMU),
]);

const OP_ALT: Funct3Table = row(&[(i_f3::ADD_SUB, M::SUB), (i_f3::SRL_SRA, M::SRA)]);

const OP_32_BASE: Funct3Table = row(&[
    (i_f3::ADD_SUB, M::ADDW),
    (i_f3::SLL, M::SLLW),
    (i_f3::SRL_SRA, M::SRLW),
]);

const OP_32_MULDIV: Funct3Table = row(&[
    (m_f3::MUL, M::MULW),
    (m_f3::DIV, M::DIVW),
    (m_f3::DIVU, M::DIVUW),
    (m_f3::REM, M::REMW),
    (m_f3::REMU, M::REMUW),
]);

const OP_32_ALT: Funct3Table = row(&[(i_f3::ADD_SUB, M::SUBW), (i_f3::SRL_SRA, M::SRAW)]);

/// Word (`.w`) and doubleword (`.d`) forms of one AMO operation.
const fn amo_row(word: M, double: M) -> Funct3Table {
    row(&[(a_f3::WIDTH_32, word), (a_f3::WIDTH_64, double)])
}

const AMO_ADD: Funct3Table = amo_row(M::AMOADDW, M::AMOADDD);
const AMO_SWAP: Funct3Table = amo_row(M::AMOSWAPW, M::AMOSWAPD);
const AMO_LR: Funct3Table = amo_row(M::LRW, M::LRD);
const AMO_SC: Funct3Table = amo_row(M::SCW, M::SCD);
const AMO_XOR: Funct3Table = amo_row(M::AMOXORW, M::AMOXORD);
const AMO_OR: Funct3Table = amo_row(M::AMOORW, M::AMOORD);
const AMO_AND: Funct3Table = amo_row(M::AMOANDW, M::AMOANDD);
const AMO_MIN: Funct3Table = amo_row(M::AMOMINW, M::AMOMIND);
const AMO_MAX: Funct3Table = amo_row(M::AMOMAXW, M::AMOMAXD);
const AMO_MINU: Funct3Table = amo_row(M::AMOMINUW, M::AMOMINUD);
const AMO_MAXU: Funct3Table = amo_row(M::AMOMAXUW, M::AMOMAXUD);

/// Reads the length discriminator at the start of `buf`.
///
/// Returns the announced instruction size in bytes: 2 for a compressed form,
/// 4 for a standard word. Forms longer than 32 bits are `Undefined`, and
/// fewer than two bytes are `Partial`. Only the first byte is inspected.
///
/// # Arguments
///
/// * `buf` - Bytes starting at the instruction.
pub fn instruction_length(buf: &[u8]) -> Result<usize, DecodeError> {
    if buf.len() < LENGTH_PREFIX_SIZE {
        return Err(DecodeError::Partial);
    }
    length_from_first_byte(buf[0])
}

fn length_from_first_byte(b0: u8) -> Result<usize, DecodeError> {
    if b0 & COMPRESSED_INSTRUCTION_MASK != UNCOMPRESSED_INSTRUCTION_VALUE {
        Ok(INSTRUCTION_SIZE_16)
    } else if b0 & LONG_INSTRUCTION_MASK == LONG_INSTRUCTION_VALUE {
        Err(DecodeError::Undefined)
    } else {
        Ok(INSTRUCTION_SIZE_32)
    }
}

/// Decodes one instruction from the start of `buf`.
///
/// On success returns the instruction and the number of bytes it occupies,
/// which is always 4. Compressed and over-length forms are `Undefined`
/// without reading past the first byte; a standard word cut short is `Partial`.
///
/// # Arguments
///
/// * `buf` - Bytes starting at the instruction; extra trailing bytes are ignored.
pub fn decode(buf: &[u8]) -> Result<(Instruction, usize), DecodeError> {
    if instruction_length(buf)? != INSTRUCTION_SIZE_32 {
        return Err(DecodeError::Undefined);
    }

    let bytes: [u8; INSTRUCTION_SIZE_32] = buf
        .get(..INSTRUCTION_SIZE_32)
        .and_then(|b| b.try_into().ok())
        .ok_or(DecodeError::Partial)?;

    let inst = decode_word(u32::from_le_bytes(bytes))?;
    Ok((inst, INSTRUCTION_SIZE_32))
}

/// Decodes an already-loaded 32-bit instruction word.
///
/// Applies the same length-discriminator checks as [`decode`] to the low byte,
/// so a word whose low bits announce a compressed or longer form is `Undefined`.
/// Never returns `Partial`.
///
/// # Arguments
///
/// * `word` - The instruction in host order (bytes 0-3 little-endian).
pub fn decode_word(word: u32) -> Result<Instruction, DecodeError> {
    if length_from_first_byte(word as u8)? != INSTRUCTION_SIZE_32 {
        return Err(DecodeError::Undefined);
    }

    let Some((mnemonic, encoding)) = lookup(word) else {
        trace!(
            word,
            opcode = word.opcode(),
            funct3 = word.funct3(),
            funct7 = word.funct7(),
            "undefined instruction encoding"
        );
        return Err(DecodeError::Undefined);
    };

    Ok(Instruction {
        mnemonic,
        rd: encoding
            .has_rd()
            .then(|| Register::from_field(word.rd())),
        rs1: encoding
            .has_rs1()
            .then(|| Register::from_field(word.rs1())),
        rs2: encoding
            .has_rs2()
            .then(|| Register::from_field(word.rs2())),
        rs3: None,
        imm: decode_imm(word, encoding),
    })
}

/// Resolves the mnemonic and encoding shape of a word.
///
/// `None` means the opcode/funct3/funct7 combination is not in the tables.
/// JALR accepts any `funct3`, like AUIPC, LUI and JAL.
fn lookup(word: u32) -> Option<(M, Encoding)> {
    let f3 = word.funct3() as usize;
    let f7 = word.funct7();

    let resolved = match word.opcode() {
        i_op::OP_LOAD => (LOAD[f3]?, Encoding::I),
        i_op::OP_MISC_MEM => (MISC_MEM[f3]?, Encoding::I),
        i_op::OP_IMM => op_imm(f3 as u32, f7),
        i_op::OP_AUIPC => (M::AUIPC, Encoding::U),
        i_op::OP_IMM_32 => op_imm_32(f3 as u32, f7)?,
        i_op::OP_STORE => (STORE[f3]?, Encoding::S),
        a_op::OP_AMO => {
            let row = match f7 >> a_f5::FUNCT7_SHIFT {
                a_f5::AMOADD => &AMO_ADD,
                a_f5::AMOSWAP => &AMO_SWAP,
                a_f5::LR => &AMO_LR,
                a_f5::SC => &AMO_SC,
                a_f5::AMOXOR => &AMO_XOR,
                a_f5::AMOOR => &AMO_OR,
                a_f5::AMOAND => &AMO_AND,
                a_f5::AMOMIN => &AMO_MIN,
                a_f5::AMOMAX => &AMO_MAX,
                a_f5::AMOMINU => &AMO_MINU,
                a_f5::AMOMAXU => &AMO_MAXU,
                _ => return None,
            };
            (row[f3]?, Encoding::Amo)
        }
        i_op::OP_REG => {
            let row = match f7 {
                i_f7::DEFAULT => &OP_BASE,
                m_op::M_EXTENSION => &OP_MULDIV,
                i_f7::ALT => &OP_ALT,
                _ => return None,
            };
            (row[f3]?, Encoding::R)
        }
        i_op::OP_LUI => (M::LUI, Encoding::U),
        i_op::OP_REG_32 => {
            let row = match f7 {
                i_f7::DEFAULT => &OP_32_BASE,
                m_op::M_EXTENSION => &OP_32_MULDIV,
                i_f7::ALT => &OP_32_ALT,
                _ => return None,
            };
            (row[f3]?, Encoding::R)
        }
        i_op::OP_BRANCH => (BRANCH[f3]?, Encoding::B),
        i_op::OP_JALR => (M::JALR, Encoding::I),
        i_op::OP_JAL => (M::JAL, Encoding::J),
        sys_op::OP_SYSTEM => (SYSTEM[f3]?, Encoding::I),
        _ => return None,
    };
    Some(resolved)
}

/// OP-IMM: every `funct3` is defined; shifts use the shift-amount shape.
const fn op_imm(f3: u32, f7: u32) -> (M, Encoding) {
    match f3 {
        i_f3::ADD_SUB => (M::ADDI, Encoding::I),
        i_f3::SLL => (M::SLLI, Encoding::IShamt),
        i_f3::SLT => (M::SLTI, Encoding::I),
        i_f3::SLTU => (M::SLTIU, Encoding::I),
        i_f3::XOR => (M::XORI, Encoding::I),
        i_f3::SRL_SRA if f7 & i_f7::ARITHMETIC_SHIFT_BIT != 0 => (M::SRAI, Encoding::IShamt),
        i_f3::SRL_SRA => (M::SRLI, Encoding::IShamt),
        i_f3::OR => (M::ORI, Encoding::I),
        _ => (M::ANDI, Encoding::I),
    }
}

/// OP-IMM-32: only ADDIW, SLLIW and SRLIW/SRAIW exist.
const fn op_imm_32(f3: u32, f7: u32) -> Option<(M, Encoding)> {
    match f3 {
        i_f3::ADD_SUB => Some((M::ADDIW, Encoding::I)),
        i_f3::SLL => Some((M::SLLIW, Encoding::IShamt)),
        i_f3::SRL_SRA if f7 & i_f7::ARITHMETIC_SHIFT_BIT != 0 => {
            Some((M::SRAIW, Encoding::IShamt))
        }
        i_f3::SRL_SRA => Some((M::SRLIW, Encoding::IShamt)),
        _ => None,
    }
}

/// Extracts the immediate for an encoding shape; 0 for shapes without one.
fn decode_imm(word: u32, encoding: Encoding) -> i32 {
    match encoding {
        Encoding::R => 0,
        Encoding::I => decode_i_type_imm(word),
        Encoding::IShamt => word.shamt() as i32,
        Encoding::S => decode_s_type_imm(word),
        Encoding::B => decode_b_type_imm(word),
        Encoding::U => decode_u_type_imm(word),
        Encoding::J => decode_j_type_imm(word),
        Encoding::Amo => word.amo_ordering() as i32,
    }
}

/// Decodes the immediate value for I-Type instructions.
///
/// Used for Load, JALR, FENCE, ECALL, CSR and Immediate Arithmetic instructions.
fn decode_i_type_imm(word: u32) -> i32 {
    (word as i32) >> I_IMM_SHIFT
}

/// Decodes the immediate value for S-Type instructions.
fn decode_s_type_imm(word: u32) -> i32 {
    let low = (word >> S_IMM_LOW_SHIFT) & S_IMM_LOW_MASK;
    let high = (word >> S_IMM_HIGH_SHIFT) & S_IMM_HIGH_MASK;
    let combined = (high << S_IMM_COMBINED_SHIFT) | low;
    sign_extend(combined, S_IMM_BITS)
}

/// Decodes the immediate value for B-Type instructions.
///
/// The immediate represents an even offset; bit 0 is never encoded.
fn decode_b_type_imm(word: u32) -> i32 {
    let bit_11 = (word >> B_IMM_11_SHIFT) & B_IMM_11_MASK;
    let bits_4_1 = (word >> B_IMM_4_1_SHIFT) & B_IMM_4_1_MASK;
    let bits_10_5 = (word >> B_IMM_10_5_SHIFT) & B_IMM_10_5_MASK;
    let bit_12 = (word >> B_IMM_12_SHIFT) & B_IMM_12_MASK;

    let combined = (bit_12 << B_IMM_12_POS)
        | (bit_11 << B_IMM_11_POS)
        | (bits_10_5 << B_IMM_10_5_POS)
        | (bits_4_1 << B_IMM_4_1_POS);
    sign_extend(combined, B_IMM_BITS)
}

/// Decodes the immediate value for U-Type instructions.
fn decode_u_type_imm(word: u32) -> i32 {
    (word & U_IMM_MASK) as i32
}

/// Decodes the immediate value for J-Type instructions.
///
/// The immediate represents an even offset; bit 0 is never encoded.
fn decode_j_type_imm(word: u32) -> i32 {
    let bits_19_12 = (word >> J_IMM_19_12_SHIFT) & J_IMM_19_12_MASK;
    let bit_11 = (word >> J_IMM_11_SHIFT) & J_IMM_11_MASK;
    let bits_10_1 = (word >> J_IMM_10_1_SHIFT) & J_IMM_10_1_MASK;
    let bit_20 = (word >> J_IMM_20_SHIFT) & J_IMM_20_MASK;

    let combined = (bit_20 << J_IMM_20_POS)
        | (bits_19_12 << J_IMM_19_12_POS)
        | (bit_11 << J_IMM_11_POS)
        | (bits_10_1 << J_IMM_10_1_POS);
    sign_extend(combined, J_IMM_BITS)
}

/// Sign extends the low `bits` of `val` to a 32-bit signed integer.
const fn sign_extend(val: u32, bits: u32) -> i32 {
    let shift = INSTRUCTION_WIDTH - bits;
    ((val << shift) as i32) >> shift
}
