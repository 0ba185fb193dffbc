//! Bounded Formatting Tests.
//!
//! Every capacity up to the natural line length must yield a prefix of the
//! full line, and bytes past the reported length must stay untouched.

use proptest::prelude::*;
use rstest::rstest;
use rvdis_core::isa::disasm::MAX_LINE_LEN;
use rvdis_core::{Instruction, Mnemonic, Register, decode_word, format, format_into};

const FILL: u8 = 0xA5;

fn widest() -> Instruction {
    Instruction {
        mnemonic: Mnemonic::AMOMAXUD,
        rd: Register::new(31),
        rs1: Register::new(30),
        rs2: Register::new(29),
        rs3: None,
        imm: i32::MIN,
    }
}

fn check_prefixes(inst: &Instruction) {
    let full = format(inst, MAX_LINE_LEN);
    for cap in 0..=full.len() {
        let mut buf = [FILL; MAX_LINE_LEN + 8];
        let n = format_into(inst, &mut buf[..cap]);
        assert!(n <= cap);
        assert_eq!(&buf[..n], &full.as_bytes()[..n], "capacity {cap}");
        assert!(buf[n..].iter().all(|&b| b == FILL), "capacity {cap} wrote past length");
        assert_eq!(format(inst, cap), full[..n]);
    }
}

#[test]
fn widest_line_prefixes() {
    check_prefixes(&widest());
}

#[rstest]
#[case(0x0051_0093)]
#[case(0x0000_100F)]
#[case(0xC000_22F3)]
#[case(0x8000_0EEF)]
fn decoded_line_prefixes(#[case] word: u32) {
    check_prefixes(&decode_word(word).unwrap());
}

#[test]
fn exact_capacity_is_not_truncated() {
    let inst = widest();
    let full = format(&inst, MAX_LINE_LEN);
    let mut buf = vec![0u8; full.len()];
    assert_eq!(format_into(&inst, &mut buf), full.len());
    assert_eq!(buf, full.as_bytes());
}

#[test]
fn capacity_above_bound_is_clamped() {
    let inst = widest();
    assert_eq!(format(&inst, usize::MAX), format(&inst, MAX_LINE_LEN));
}

proptest! {
    #[test]
    fn any_decoded_word_fits_bound(word in any::<u32>(), cap in 0usize..=MAX_LINE_LEN) {
        if let Ok(inst) = decode_word(word) {
            let full = format(&inst, MAX_LINE_LEN);
            prop_assert!(full.len() <= MAX_LINE_LEN);
            let cut = format(&inst, cap);
            prop_assert!(cut.len() <= cap);
            prop_assert!(full.starts_with(&cut));
        }
    }
}
