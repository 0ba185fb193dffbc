//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for opcodes and function codes organised by RISC-V
//! extension, the decoded instruction record, and the decoder and formatter
//! built on them.
//!
//! # Extensions
//!
//! * `rv64i`: Base Integer Instruction Set (64-bit).
//! * `rv64m`: Standard Extension for Integer Multiplication and Division.
//! * `rv64a`: Standard Extension for Atomic Instructions.
//! * `privileged`: SYSTEM opcode (ECALL and CSR access).

/// Instruction decoding from raw bytes.
pub mod decode;

/// Instruction formatter producing canonical assembly text.
pub mod disasm;

/// Instruction field extraction, encoding shapes and the decoded record.
pub mod instruction;

/// Mnemonic identifiers and the mnemonic-to-text table.
pub mod mnemonic;

/// Privileged architecture definitions (SYSTEM opcode, CSR function codes).
pub mod privileged;

/// Atomic memory operations extension (AMO instructions).
pub mod rv64a;

/// Base integer instruction set (64-bit RISC-V core instructions).
pub mod rv64i;

/// Integer multiply/divide extension (MUL, DIV, REM instructions).
pub mod rv64m;
