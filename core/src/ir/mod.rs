//! Immutable expression tree for a single method body.
//!
//! The tree is built bottom-up through [`ExprBuilder`]. Every node lives in a
//! `bumpalo` arena and is never mutated after construction: rewriting
//! produces new nodes only where a child changed and hands back the original
//! reference everywhere else.
//!
//! ## Node kinds
//!
//! | Kind           | Payload          | Notes                                      |
//! |----------------|------------------|--------------------------------------------|
//! | `Assign`       | [`BinaryExpr`]   | left must be a field, element or local     |
//! | `Constant`     | [`ConstantExpr`] | opaque [`Literal`]                         |
//! | `Parameter`    | [`ParameterExpr`]| slot 0 without a type is `this`            |
//! | `Call`         | [`CallExpr`]     | no receiver means static dispatch          |
//! | `Block`        | [`BlockExpr`]    | never empty, last expression is the value  |
//! | `ArrayIndex`   | [`IndexExpr`]    | array evaluated before index               |
//! | `NewArrayInit` | [`NewArrayExpr`] | length fixed at construction               |
//! | `MemberAccess` | [`MemberExpr`]   | target evaluated before the member         |

mod builder;
mod display;
mod error;
mod expr;
mod literal;
mod method;
mod types;


pub use builder::ExprBuilder;
pub use error::MalformedIrError;
pub use expr::{
    BinaryExpr, BinaryOp, BlockExpr, CallExpr, ConstantExpr, Expr, IndexExpr, MemberExpr,
    NewArrayExpr, NodeKind, ParameterExpr,
};
pub use literal::Literal;
pub use method::MethodSignature;
pub use types::Type;
