//! Code generation errors.

use crate::ir::NodeKind;

/// Errors that abort the lowering of a method body.
///
/// Code generation is a deterministic function of the tree, so none of these
/// can be retried; the instructions already handed to the sink for that body
/// must be thrown away.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodegenError {
    /// The left side of an assignment is not a field, array element or local.
    #[error("cannot assign to {kind} expression")]
    InvalidAssignmentTarget { kind: NodeKind },

    /// The node has no lowering in the position where it was found.
    #[error("{kind} expression is not supported {context}")]
    UnsupportedNode {
        kind: NodeKind,
        context: &'static str,
    },

    /// The tree nests deeper than `GeneratorOptions::max_depth`.
    #[error("expression nesting depth {depth} exceeds limit of {max_depth}")]
    NestingTooDeep { depth: usize, max_depth: usize },
}
