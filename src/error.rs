//! Public error type.
//!
//! Core errors are converted at the crate boundary into [`Error`], which
//! carries stable diagnostic codes and help text for rendering.

use exprtree_core::{compiler::CodegenError, ir::MalformedIrError, ir::NodeKind};

/// Public error type for all exprtree operations.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum Error {
    /// A node could not be constructed.
    #[error("malformed expression tree: {0}")]
    #[diagnostic(
        code(exprtree::malformed_ir),
        help("fix the arguments passed to the builder; no node was created")
    )]
    MalformedIr(#[from] MalformedIrError),

    /// Assignment to something that is not a field, array element or local.
    #[error("cannot assign to {kind} expression")]
    #[diagnostic(
        code(exprtree::invalid_assignment_target),
        help("assign to a member access, an array element or a parameter/local")
    )]
    InvalidAssignmentTarget { kind: NodeKind },

    /// A node was found where it has no lowering.
    #[error("{kind} expression is not supported {context}")]
    #[diagnostic(code(exprtree::unsupported_node))]
    UnsupportedNode {
        kind: NodeKind,
        context: &'static str,
    },

    /// The tree is nested deeper than the configured limit.
    #[error("expression nesting depth {depth} exceeds limit of {max_depth}")]
    #[diagnostic(
        code(exprtree::nesting_too_deep),
        help("raise GeneratorOptions::max_depth or split the method body")
    )]
    NestingTooDeep { depth: usize, max_depth: usize },
}

impl From<CodegenError> for Error {
    fn from(err: CodegenError) -> Self {
        match err {
            CodegenError::InvalidAssignmentTarget { kind } => {
                Error::InvalidAssignmentTarget { kind }
            }
            CodegenError::UnsupportedNode { kind, context } => {
                Error::UnsupportedNode { kind, context }
            }
            CodegenError::NestingTooDeep { depth, max_depth } => {
                Error::NestingTooDeep { depth, max_depth }
            }
        }
    }
}
