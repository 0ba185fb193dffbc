//! Dispatch Table Coverage.
//!
//! One case per populated (opcode, funct3, funct7) position in the decoder's
//! tables, checking the resolved mnemonic and that exactly the operand fields
//! of the encoding shape are populated. A second group checks that every
//! empty position is `Undefined`.

use rstest::rstest;
use rvdis_core::isa::privileged::opcodes::OP_SYSTEM;
use rvdis_core::isa::rv64a::{funct3::WIDTH_32, funct3::WIDTH_64, funct5, opcodes::OP_AMO};
use rvdis_core::isa::rv64i::opcodes::*;
use rvdis_core::{DecodeError, Instruction, Mnemonic as M, Register, decode, decode_word};

use crate::common::builder::InstructionBuilder;

fn reg(idx: u8) -> Option<Register> {
    Register::new(idx)
}

fn decode_built(b: InstructionBuilder) -> Instruction {
    let (inst, len) = decode(&b.bytes()).unwrap();
    assert_eq!(len, 4);
    assert_eq!(inst.rs3, None, "rs3 is never populated");
    inst
}

// ──────────────────────────────────────────────────────────
// I-type: rd, rs1, signed 12-bit immediate
// ──────────────────────────────────────────────────────────

#[rstest]
#[case(OP_LOAD, 0, M::LB)]
#[case(OP_LOAD, 1, M::LH)]
#[case(OP_LOAD, 2, M::LW)]
#[case(OP_LOAD, 3, M::LD)]
#[case(OP_LOAD, 4, M::LBU)]
#[case(OP_LOAD, 5, M::LHU)]
#[case(OP_LOAD, 6, M::LWU)]
#[case(OP_MISC_MEM, 0, M::FENCE)]
#[case(OP_MISC_MEM, 1, M::FENCEI)]
#[case(OP_IMM, 0, M::ADDI)]
#[case(OP_IMM, 2, M::SLTI)]
#[case(OP_IMM, 3, M::SLTIU)]
#[case(OP_IMM, 4, M::XORI)]
#[case(OP_IMM, 6, M::ORI)]
#[case(OP_IMM, 7, M::ANDI)]
#[case(OP_IMM_32, 0, M::ADDIW)]
#[case(OP_JALR, 0, M::JALR)]
#[case(OP_SYSTEM, 0, M::ECALL)]
#[case(OP_SYSTEM, 1, M::CSRRW)]
#[case(OP_SYSTEM, 2, M::CSRRS)]
#[case(OP_SYSTEM, 3, M::CSRRC)]
#[case(OP_SYSTEM, 5, M::CSRRWI)]
#[case(OP_SYSTEM, 6, M::CSRRSI)]
#[case(OP_SYSTEM, 7, M::CSRRCI)]
fn i_type_rows(#[case] opcode: u32, #[case] funct3: u32, #[case] expected: M) {
    let b = InstructionBuilder::new()
        .opcode(opcode)
        .funct3(funct3)
        .rd(5)
        .rs1(6)
        .imm(-7);
    let inst = decode_built(b);
    assert_eq!(inst.mnemonic, expected);
    assert_eq!(inst.rd, reg(5));
    assert_eq!(inst.rs1, reg(6));
    assert_eq!(inst.rs2, None);
    assert_eq!(inst.imm, -7);
}

// ──────────────────────────────────────────────────────────
// Shift-immediate: rd, rs1, unsigned 6-bit shamt
// ──────────────────────────────────────────────────────────

#[rstest]
#[case(OP_IMM, 1, 0b0000000, 33, M::SLLI)]
#[case(OP_IMM, 5, 0b0000000, 33, M::SRLI)]
#[case(OP_IMM, 5, 0b0100000, 33, M::SRAI)]
#[case(OP_IMM_32, 1, 0b0000000, 17, M::SLLIW)]
#[case(OP_IMM_32, 5, 0b0000000, 17, M::SRLIW)]
#[case(OP_IMM_32, 5, 0b0100000, 17, M::SRAIW)]
fn shift_rows(
    #[case] opcode: u32,
    #[case] funct3: u32,
    #[case] funct7: u32,
    #[case] shamt: i32,
    #[case] expected: M,
) {
    let b = InstructionBuilder::new()
        .opcode(opcode)
        .funct3(funct3)
        .funct7(funct7)
        .rd(10)
        .rs1(11)
        .imm(shamt);
    let inst = decode_built(b);
    assert_eq!(inst.mnemonic, expected);
    assert_eq!(inst.rd, reg(10));
    assert_eq!(inst.rs1, reg(11));
    assert_eq!(inst.rs2, None);
    assert_eq!(inst.imm, shamt);
}

#[test]
fn arithmetic_shift_tests_only_bit_5_of_funct7() {
    // Any funct7 with bit 5 set selects the arithmetic form.
    let b = InstructionBuilder::new()
        .opcode(OP_IMM)
        .funct3(5)
        .funct7(0b1100000)
        .rd(1)
        .rs1(1)
        .imm(3);
    assert_eq!(decode_built(b).mnemonic, M::SRAI);
}

// ──────────────────────────────────────────────────────────
// R-type: rd, rs1, rs2, no immediate
// ──────────────────────────────────────────────────────────

#[rstest]
#[case(OP_REG, 0, 0x00, M::ADD)]
#[case(OP_REG, 1, 0x00, M::SLL)]
#[case(OP_REG, 2, 0x00, M::SLT)]
#[case(OP_REG, 3, 0x00, M::SLTU)]
#[case(OP_REG, 4, 0x00, M::XOR)]
#[case(OP_REG, 5, 0x00, M::SRL)]
#[case(OP_REG, 6, 0x00, M::OR)]
#[case(OP_REG, 7, 0x00, M::AND)]
#[case(OP_REG, 0, 0x01, M::MUL)]
#[case(OP_REG, 1, 0x01, M::MULH)]
#[case(OP_REG, 2, 0x01, M::MULHSU)]
#[case(OP_REG, 3, 0x01, M::MULHU)]
#[case(OP_REG, 4, 0x01, M::DIV)]
#[case(OP_REG, 5, 0x01, M::DIVU)]
#[case(OP_REG, 6, 0x01, M::REM)]
#[case(OP_REG, 7, 0x01, M::REMU)]
#[case(OP_REG, 0, 0x20, M::SUB)]
#[case(OP_REG, 5, 0x20, M::SRA)]
#[case(OP_REG_32, 0, 0x00, M::ADDW)]
#[case(OP_REG_32, 1, 0x00, M::SLLW)]
#[case(OP_REG_32, 5, 0x00, M::SRLW)]
#[case(OP_REG_32, 0, 0x01, M::MULW)]
#[case(OP_REG_32, 4, 0x01, M::DIVW)]
#[case(OP_REG_32, 5, 0x01, M::DIVUW)]
#[case(OP_REG_32, 6, 0x01, M::REMW)]
#[case(OP_REG_32, 7, 0x01, M::REMUW)]
#[case(OP_REG_32, 0, 0x20, M::SUBW)]
#[case(OP_REG_32, 5, 0x20, M::SRAW)]
fn r_type_rows(
    #[case] opcode: u32,
    #[case] funct3: u32,
    #[case] funct7: u32,
    #[case] expected: M,
) {
    let b = InstructionBuilder::new()
        .opcode(opcode)
        .funct3(funct3)
        .funct7(funct7)
        .rd(31)
        .rs1(0)
        .rs2(17);
    let inst = decode_built(b);
    assert_eq!(inst.mnemonic, expected);
    assert_eq!(inst.rd, reg(31));
    assert_eq!(inst.rs1, Some(Register::ZERO));
    assert_eq!(inst.rs2, reg(17));
    assert_eq!(inst.imm, 0);
}

// ──────────────────────────────────────────────────────────
// S-type and B-type: rs1, rs2, no rd
// ──────────────────────────────────────────────────────────

#[rstest]
#[case(0, M::SB)]
#[case(1, M::SH)]
#[case(2, M::SW)]
#[case(3, M::SD)]
fn store_rows(#[case] funct3: u32, #[case] expected: M) {
    let b = InstructionBuilder::new()
        .opcode(OP_STORE)
        .funct3(funct3)
        .rs1(2)
        .rs2(8)
        .imm(-16);
    let inst = decode_built(b);
    assert_eq!(inst.mnemonic, expected);
    assert_eq!(inst.rd, None);
    assert_eq!(inst.rs1, reg(2));
    assert_eq!(inst.rs2, reg(8));
    assert_eq!(inst.imm, -16);
}

#[rstest]
#[case(0, M::BEQ)]
#[case(1, M::BNE)]
#[case(4, M::BLT)]
#[case(5, M::BGE)]
#[case(6, M::BLTU)]
#[case(7, M::BGEU)]
fn branch_rows(#[case] funct3: u32, #[case] expected: M) {
    let b = InstructionBuilder::new()
        .opcode(OP_BRANCH)
        .funct3(funct3)
        .rs1(12)
        .rs2(13)
        .imm(-8);
    let inst = decode_built(b);
    assert_eq!(inst.mnemonic, expected);
    assert_eq!(inst.rd, None);
    assert_eq!(inst.rs1, reg(12));
    assert_eq!(inst.rs2, reg(13));
    assert_eq!(inst.imm, -8);
}

// ──────────────────────────────────────────────────────────
// U-type and J-type: rd only
// ──────────────────────────────────────────────────────────

#[rstest]
#[case(OP_LUI, M::LUI)]
#[case(OP_AUIPC, M::AUIPC)]
fn upper_rows(#[case] opcode: u32, #[case] expected: M) {
    let inst = decode_built(InstructionBuilder::new().opcode(opcode).rd(3).imm(0x12345 << 12));
    assert_eq!(inst.mnemonic, expected);
    assert_eq!(inst.rd, reg(3));
    assert_eq!(inst.rs1, None);
    assert_eq!(inst.rs2, None);
    assert_eq!(inst.imm, 0x1234_5000);
}

#[test]
fn jal_row() {
    let inst = decode_built(InstructionBuilder::new().jal(1, 2048));
    assert_eq!(inst.mnemonic, M::JAL);
    assert_eq!(inst.rd, reg(1));
    assert_eq!(inst.rs1, None);
    assert_eq!(inst.rs2, None);
    assert_eq!(inst.imm, 2048);
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(7)]
fn jalr_accepts_any_funct3(#[case] funct3: u32) {
    let b = InstructionBuilder::new().jalr(1, 5, 12).funct3(funct3);
    let inst = decode_built(b);
    assert_eq!(inst.mnemonic, M::JALR);
    assert_eq!(inst.imm, 12);
}

// ──────────────────────────────────────────────────────────
// AMO: rd, rs1, rs2, 2-bit ordering
// ──────────────────────────────────────────────────────────

#[rstest]
#[case(funct5::AMOADD, M::AMOADDW, M::AMOADDD)]
#[case(funct5::AMOSWAP, M::AMOSWAPW, M::AMOSWAPD)]
#[case(funct5::LR, M::LRW, M::LRD)]
#[case(funct5::SC, M::SCW, M::SCD)]
#[case(funct5::AMOXOR, M::AMOXORW, M::AMOXORD)]
#[case(funct5::AMOOR, M::AMOORW, M::AMOORD)]
#[case(funct5::AMOAND, M::AMOANDW, M::AMOANDD)]
#[case(funct5::AMOMIN, M::AMOMINW, M::AMOMIND)]
#[case(funct5::AMOMAX, M::AMOMAXW, M::AMOMAXD)]
#[case(funct5::AMOMINU, M::AMOMINUW, M::AMOMINUD)]
#[case(funct5::AMOMAXU, M::AMOMAXUW, M::AMOMAXUD)]
fn amo_rows(#[case] f5: u32, #[case] word: M, #[case] double: M) {
    for (width, expected) in [(WIDTH_32, word), (WIDTH_64, double)] {
        for (aq, rl, ordering) in [
            (false, false, 0),
            (false, true, funct5::RL as i32),
            (true, false, funct5::AQ as i32),
            (true, true, (funct5::AQ | funct5::RL) as i32),
        ] {
            let b = InstructionBuilder::new().amo(f5, width, 4, 5, 6, aq, rl);
            let inst = decode_built(b);
            assert_eq!(inst.mnemonic, expected);
            assert_eq!(inst.rd, reg(4));
            assert_eq!(inst.rs1, reg(5));
            assert_eq!(inst.rs2, reg(6));
            assert_eq!(inst.imm, ordering);
        }
    }
}

// ──────────────────────────────────────────────────────────
// Empty table positions
// ──────────────────────────────────────────────────────────

#[rstest]
#[case::load_f3_7(OP_LOAD, 7, 0)]
#[case::misc_mem_f3_2(OP_MISC_MEM, 2, 0)]
#[case::misc_mem_f3_7(OP_MISC_MEM, 7, 0)]
#[case::store_f3_4(OP_STORE, 4, 0)]
#[case::store_f3_5(OP_STORE, 5, 0)]
#[case::store_f3_6(OP_STORE, 6, 0)]
#[case::store_f3_7(OP_STORE, 7, 0)]
#[case::branch_f3_2(OP_BRANCH, 2, 0)]
#[case::branch_f3_3(OP_BRANCH, 3, 0)]
#[case::system_f3_4(OP_SYSTEM, 4, 0)]
#[case::op_imm_32_f3_2(OP_IMM_32, 2, 0)]
#[case::op_imm_32_f3_3(OP_IMM_32, 3, 0)]
#[case::op_imm_32_f3_4(OP_IMM_32, 4, 0)]
#[case::op_imm_32_f3_6(OP_IMM_32, 6, 0)]
#[case::op_imm_32_f3_7(OP_IMM_32, 7, 0)]
#[case::op_funct7_2(OP_REG, 0, 0x02)]
#[case::op_funct7_40(OP_REG, 0, 0x40)]
#[case::op_alt_f3_1(OP_REG, 1, 0x20)]
#[case::op_alt_f3_7(OP_REG, 7, 0x20)]
#[case::op_32_base_f3_2(OP_REG_32, 2, 0x00)]
#[case::op_32_base_f3_7(OP_REG_32, 7, 0x00)]
#[case::op_32_mul_f3_1(OP_REG_32, 1, 0x01)]
#[case::op_32_mul_f3_3(OP_REG_32, 3, 0x01)]
#[case::op_32_alt_f3_4(OP_REG_32, 4, 0x20)]
#[case::op_32_funct7_21(OP_REG_32, 0, 0x21)]
#[case::amo_width_0(OP_AMO, 0, 0x00)]
#[case::amo_width_4(OP_AMO, 4, 0x00)]
#[case::amo_funct5_5(OP_AMO, 2, 0x05 << 2)]
#[case::amo_funct5_1f(OP_AMO, 3, 0x1F << 2)]
fn empty_positions_are_undefined(#[case] opcode: u32, #[case] funct3: u32, #[case] funct7: u32) {
    let word = InstructionBuilder::new()
        .opcode(opcode)
        .funct3(funct3)
        .funct7(funct7)
        .rd(1)
        .rs1(2)
        .rs2(3)
        .build();
    assert_eq!(decode_word(word), Err(DecodeError::Undefined), "{word:#010x}");
    assert_eq!(decode(&word.to_le_bytes()), Err(DecodeError::Undefined));
}

#[rstest]
#[case(0x01)]
#[case(0x02)]
#[case(0x09)]
#[case(0x0A)]
#[case(0x10)]
#[case(0x11)]
#[case(0x12)]
#[case(0x13)]
#[case(0x14)]
#[case(0x15)]
#[case(0x16)]
#[case(0x1A)]
#[case(0x1D)]
#[case(0x1E)]
fn unassigned_opcodes_are_undefined(#[case] opcode: u32) {
    let word = InstructionBuilder::new().opcode(opcode).rd(1).rs1(2).build();
    assert_eq!(decode_word(word), Err(DecodeError::Undefined));
}

#[test]
fn undefined_decode_is_traced() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing_subscriber::filter::LevelFilter::TRACE)
        .with_test_writer()
        .try_init();
    // sb-family opcode with funct3 = 4
    assert_eq!(decode_word(0x0000_4023), Err(DecodeError::Undefined));
}
