//! Instruction word builders.


pub use instruction::InstructionBuilder;
