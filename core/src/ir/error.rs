//! Node construction errors.

use crate::String;

/// A node was requested with a shape the tree cannot represent.
///
/// Raised by [`ExprBuilder`](super::ExprBuilder) before anything is
/// allocated; the partially described node never exists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedIrError {
    #[error("block must contain at least one expression")]
    EmptyBlock,

    #[error("array element type must not be void")]
    VoidArrayElement,

    #[error("array literal has {len} elements, more than an array can hold")]
    ArrayTooLarge { len: usize },

    #[error("call to {method} passes {found} argument(s) but the signature declares {expected}")]
    ArityMismatch {
        method: String,
        expected: usize,
        found: usize,
    },

    #[error("{what} must not be empty")]
    EmptyName { what: &'static str },
}
