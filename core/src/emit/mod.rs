//! Instruction emission.
//!
//! The code generator talks to a [`Sink`]; how instructions end up in a
//! class file (descriptors, constant pools, frame computation) is the sink's
//! business. [`Code`] is the sink used by [`CodeGenerator::compile`] and by
//! the tests: it records [`Instruction`]s verbatim.
//!
//! [`CodeGenerator::compile`]: crate::compiler::CodeGenerator::compile

mod code;
mod instruction;
mod sink;

pub use code::Code;
pub use instruction::Instruction;
pub use sink::Sink;
