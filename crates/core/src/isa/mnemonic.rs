//! Instruction mnemonics and their canonical text.
//!
//! `Mnemonic` is a small numeric identifier with one associated constant per
//! supported instruction. Codes are dense from zero, which lets the
//! mnemonic-to-text table be a plain constant array indexed by code. Codes
//! outside the table can be constructed with [`Mnemonic::from_raw`]; they
//! never come out of the decoder and format as `<invalid>`.

use std::fmt;

/// Placeholder text for codes outside the mnemonic table.
pub const INVALID_MNEMONIC: &str = "<invalid>";

/// Identifier of a decoded operation.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mnemonic(u16);

/// Defines the mnemonic constants together with the name tables, so code and
/// text can never drift apart.
macro_rules! mnemonics {
    ($($name:ident => $text:literal,)*) => {
        impl Mnemonic {
            mnemonics!(@consts 0u16; $($name => $text,)*);
        }

        /// Canonical lowercase text, indexed by mnemonic code.
        const MNEMONIC_NAMES: &[&str] = &[$($text,)*];

        /// Constant identifiers, indexed by mnemonic code (used by `Debug`).
        const MNEMONIC_IDENTS: &[&str] = &[$(stringify!($name),)*];
    };
    (@consts $code:expr; ) => {};
    (@consts $code:expr; $name:ident => $text:literal, $($rest:ident => $rtext:literal,)*) => {
        #[doc = concat!("The `", $text, "` instruction.")]
        pub const $name: Self = Self($code);
        mnemonics!(@consts $code + 1; $($rest => $rtext,)*);
    };
}

mnemonics! {
    // Loads and stores
    LB => "lb",
    LH => "lh",
    LW => "lw",
    LD => "ld",
    LBU => "lbu",
    LHU => "lhu",
    LWU => "lwu",
    SB => "sb",
    SH => "sh",
    SW => "sw",
    SD => "sd",

    // Integer immediate
    ADDI => "addi",
    SLLI => "slli",
    SLTI => "slti",
    SLTIU => "sltiu",
    XORI => "xori",
    SRAI => "srai",
    SRLI => "srli",
    ORI => "ori",
    ANDI => "andi",

    // Integer register-register
    ADD => "add",
    SLL => "sll",
    SLT => "slt",
    SLTU => "sltu",
    XOR => "xor",
    SRL => "srl",
    OR => "or",
    AND => "and",
    SUB => "sub",
    SRA => "sra",

    // Control flow, fences, upper immediates
    FENCE => "fence",
    FENCEI => "fencei",
    AUIPC => "auipc",
    LUI => "lui",
    JAL => "jal",
    JALR => "jalr",
    BEQ => "beq",
    BNE => "bne",
    BLT => "blt",
    BGE => "bge",
    BLTU => "bltu",
    BGEU => "bgeu",
    ECALL => "ecall",

    // 32-bit word variants
    ADDIW => "addiw",
    SLLIW => "slliw",
    SRAIW => "sraiw",
    SRLIW => "srliw",
    ADDW => "addw",
    SLLW => "sllw",
    SRLW => "srlw",
    SUBW => "subw",
    SRAW => "sraw",

    // Multiply and divide
    MUL => "mul",
    MULH => "mulh",
    MULHSU => "mulhsu",
    MULHU => "mulhu",
    DIV => "div",
    DIVU => "divu",
    REM => "rem",
    REMU => "remu",
    MULW => "mulw",
    DIVW => "divw",
    DIVUW => "divuw",
    REMW => "remw",
    REMUW => "remuw",

    // Atomics
    LRW => "lr.w",
    SCW => "sc.w",
    LRD => "lr.d",
    SCD => "sc.d",
    AMOADDW => "amoadd.w",
    AMOADDD => "amoadd.d",
    AMOSWAPW => "amoswap.w",
    AMOSWAPD => "amoswap.d",
    AMOXORW => "amoxor.w",
    AMOXORD => "amoxor.d",
    AMOORW => "amoor.w",
    AMOORD => "amoor.d",
    AMOANDW => "amoand.w",
    AMOANDD => "amoand.d",
    AMOMINW => "amomin.w",
    AMOMIND => "amomin.d",
    AMOMAXW => "amomax.w",
    AMOMAXD => "amomax.d",
    AMOMINUW => "amominu.w",
    AMOMINUD => "amominu.d",
    AMOMAXUW => "amomaxu.w",
    AMOMAXUD => "amomaxu.d",

    // CSR access
    CSRRW => "csrrw",
    CSRRWI => "csrrwi",
    CSRRS => "csrrs",
    CSRRSI => "csrrsi",
    CSRRC => "csrrc",
    CSRRCI => "csrrci",
}

impl Mnemonic {
    /// Number of mnemonics in the table.
    pub const COUNT: usize = MNEMONIC_NAMES.len();

    /// Wraps a raw code without checking it against the table.
    pub const fn from_raw(code: u16) -> Self {
        Self(code)
    }

    /// The raw code.
    pub const fn code(self) -> u16 {
        self.0
    }

    /// Returns `true` if the code has an entry in the mnemonic table.
    pub const fn is_valid(self) -> bool {
        (self.0 as usize) < Self::COUNT
    }

    /// Canonical lowercase text, or `None` for codes outside the table.
    pub fn name(self) -> Option<&'static str> {
        MNEMONIC_NAMES.get(self.0 as usize).copied()
    }

    /// Reverse lookup of [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        MNEMONIC_NAMES
            .iter()
            .position(|&n| n == name)
            .map(|idx| Self(idx as u16))
    }

    /// Every mnemonic in the table, in code order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::COUNT as u16).map(Self)
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or(INVALID_MNEMONIC))
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match MNEMONIC_IDENTS.get(self.0 as usize) {
            Some(ident) => f.write_str(ident),
            None => write!(f, "Mnemonic({})", self.0),
        }
    }
}
