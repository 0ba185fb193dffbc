//! Privileged Architecture Definitions.
//!
//! Defines the SYSTEM major opcode and the function codes of the instructions
//! this decoder recognises under it: ECALL and the six CSR read/write forms.

/// System instruction opcodes and CSR function codes.
pub mod opcodes;
