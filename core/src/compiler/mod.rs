//! Lowering of expression trees to stack-machine instructions.
//!
//! [`CodeGenerator`] walks a method body once, depth first, and emits
//! instructions to a [`Sink`](crate::emit::Sink) as it goes. It never
//! rewrites the tree: a successful visit hands back the node it was given.
//!
//! ## Design
//!
//! - One exhaustive `match` per node kind; adding a kind fails to compile
//!   until the generator handles it.
//! - Assignment targets are classified before anything is emitted for the
//!   assignment.
//! - The only mutable state is the borrowed sink; recursion depth travels
//!   down the call stack.

mod bytecode;
mod error;
mod options;


pub use bytecode::CodeGenerator;
pub use error::CodegenError;
pub use options::GeneratorOptions;
