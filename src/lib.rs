//! exprtree - typed expression trees lowered to stack-machine code
//!
//! # Overview
//!
//! A method body is described as an immutable tree of expressions (field and
//! local assignments, calls, array literals, blocks), built bottom-up in an
//! arena. The code generator then walks the tree once and hands a linear
//! instruction stream to a sink, which is free to turn it into whatever
//! container the target needs.
//!
//! # Quick Start
//!
//! ```
//! use bumpalo::Bump;
//! use exprtree::{ExprBuilder, Instruction, Type};
//!
//! let arena = Bump::new();
//! let b = ExprBuilder::new(&arena);
//!
//! // this.f = v
//! let field = b.member(b.this(), "Obj", "f", Type::Int)?;
//! let body = b.block(&[b.assign(field, b.parameter(1, "v", Type::Int))])?;
//!
//! let code = exprtree::compile(body)?;
//! assert_eq!(code.instructions.last(), Some(&Instruction::ReturnVoid));
//! # Ok::<(), exprtree::Error>(())
//! ```
//!
//! # Rewriting
//!
//! Implement [`ExprVisitor`] to transform trees. Hooks that are not
//! overridden return the original node when nothing below it changed, so a
//! rewrite only allocates along the path to the nodes it actually replaces.

mod error;
pub mod error_renderer;

pub use error::Error;
pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};

pub use exprtree_core::compiler::{CodeGenerator, CodegenError, GeneratorOptions};
pub use exprtree_core::emit::{Code, Instruction, Sink};
pub use exprtree_core::ir::{
    BinaryExpr, BinaryOp, BlockExpr, CallExpr, ConstantExpr, Expr, ExprBuilder, IndexExpr,
    Literal, MalformedIrError, MemberExpr, MethodSignature, NewArrayExpr, NodeKind,
    ParameterExpr, Type,
};
pub use exprtree_core::visitor::{ExprVisitor, VisitResult};

/// Lower a method body with default options.
pub fn compile<'arena>(body: &'arena Expr<'arena>) -> Result<Code<'arena>, Error> {
    compile_with_options(body, GeneratorOptions::default())
}

/// Lower a method body. Nothing is returned for a body that fails to lower.
pub fn compile_with_options<'arena>(
    body: &'arena Expr<'arena>,
    options: GeneratorOptions,
) -> Result<Code<'arena>, Error> {
    Ok(CodeGenerator::compile(body, options)?)
}
