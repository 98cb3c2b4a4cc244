//! Typed expression trees for method bodies and their lowering to
//! stack-machine instructions.
//!
//! - [`ir`]: immutable, arena-allocated nodes and the builder that creates them.
//! - [`visitor`]: the rewrite protocol with structural sharing.
//! - [`emit`]: the instruction sink contract and a recording sink.
//! - [`compiler`]: the code generator.

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{boxed::Box, format, string::String, string::ToString, vec, vec::Vec};

pub mod compiler;
pub mod emit;
pub mod ir;
pub mod visitor;
