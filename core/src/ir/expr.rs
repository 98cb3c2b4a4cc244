use core::fmt;

use super::{Literal, MethodSignature, Type};

/// Tag identifying the kind of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Assign,
    Constant,
    Parameter,
    Call,
    Block,
    ArrayIndex,
    NewArrayInit,
    MemberAccess,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Assign => "Assign",
            NodeKind::Constant => "Constant",
            NodeKind::Parameter => "Parameter",
            NodeKind::Call => "Call",
            NodeKind::Block => "Block",
            NodeKind::ArrayIndex => "ArrayIndex",
            NodeKind::NewArrayInit => "NewArrayInit",
            NodeKind::MemberAccess => "MemberAccess",
        };
        f.write_str(name)
    }
}

/// Operator of a binary node. Only assignment is modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Assign,
}

impl BinaryOp {
    pub fn kind(self) -> NodeKind {
        match self {
            BinaryOp::Assign => NodeKind::Assign,
        }
    }
}

/// An immutable, arena-allocated expression node.
///
/// Nodes are created through [`ExprBuilder`](super::ExprBuilder) and handed
/// around as `&'arena Expr<'arena>`. Two handles denote the same node iff
/// [`Expr::ptr_eq`] holds; rewriting relies on that to share unchanged
/// subtrees.
#[derive(Debug)]
pub enum Expr<'arena> {
    Binary(BinaryExpr<'arena>),
    Constant(ConstantExpr<'arena>),
    Parameter(ParameterExpr<'arena>),
    Call(CallExpr<'arena>),
    Block(BlockExpr<'arena>),
    Index(IndexExpr<'arena>),
    NewArray(NewArrayExpr<'arena>),
    Member(MemberExpr<'arena>),
}

impl<'arena> Expr<'arena> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Expr::Binary(binary) => binary.op.kind(),
            Expr::Constant(_) => NodeKind::Constant,
            Expr::Parameter(_) => NodeKind::Parameter,
            Expr::Call(_) => NodeKind::Call,
            Expr::Block(_) => NodeKind::Block,
            Expr::Index(_) => NodeKind::ArrayIndex,
            Expr::NewArray(_) => NodeKind::NewArrayInit,
            Expr::Member(_) => NodeKind::MemberAccess,
        }
    }

    pub fn as_ptr(&self) -> *const Self {
        self as *const _
    }

    /// Node identity, as opposed to structural equality.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        core::ptr::eq(a, b)
    }
}

#[derive(Debug)]
pub struct BinaryExpr<'arena> {
    pub(crate) op: BinaryOp,
    pub(crate) left: &'arena Expr<'arena>,
    pub(crate) right: &'arena Expr<'arena>,
}

impl<'arena> BinaryExpr<'arena> {
    pub fn op(&self) -> BinaryOp {
        self.op
    }

    pub fn left(&self) -> &'arena Expr<'arena> {
        self.left
    }

    pub fn right(&self) -> &'arena Expr<'arena> {
        self.right
    }
}

#[derive(Debug)]
pub struct ConstantExpr<'arena> {
    pub(crate) value: Literal<'arena>,
}

impl<'arena> ConstantExpr<'arena> {
    pub fn value(&self) -> Literal<'arena> {
        self.value
    }
}

/// A positional storage slot: method argument or block local.
///
/// The receiver of an instance method is slot 0, named `this`, with no
/// declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParameterExpr<'arena> {
    pub(crate) slot: u16,
    pub(crate) name: &'arena str,
    pub(crate) ty: Option<Type<'arena>>,
}

impl<'arena> ParameterExpr<'arena> {
    pub fn slot(&self) -> u16 {
        self.slot
    }

    pub fn name(&self) -> &'arena str {
        self.name
    }

    pub fn declared_type(&self) -> Option<Type<'arena>> {
        self.ty
    }

    pub fn is_this(&self) -> bool {
        self.slot == 0 && self.ty.is_none()
    }
}

#[derive(Debug)]
pub struct MemberExpr<'arena> {
    pub(crate) target: &'arena Expr<'arena>,
    pub(crate) owner: &'arena str,
    pub(crate) member: &'arena str,
    pub(crate) ty: Type<'arena>,
}

impl<'arena> MemberExpr<'arena> {
    /// Expression producing the object whose member is accessed.
    pub fn target(&self) -> &'arena Expr<'arena> {
        self.target
    }

    pub fn owner(&self) -> &'arena str {
        self.owner
    }

    pub fn member(&self) -> &'arena str {
        self.member
    }

    pub fn member_type(&self) -> Type<'arena> {
        self.ty
    }
}

#[derive(Debug)]
pub struct CallExpr<'arena> {
    pub(crate) receiver: Option<&'arena Expr<'arena>>,
    pub(crate) signature: MethodSignature<'arena>,
    pub(crate) args: &'arena [&'arena Expr<'arena>],
}

impl<'arena> CallExpr<'arena> {
    /// `None` for static dispatch.
    pub fn receiver(&self) -> Option<&'arena Expr<'arena>> {
        self.receiver
    }

    pub fn signature(&self) -> &MethodSignature<'arena> {
        &self.signature
    }

    pub fn args(&self) -> &'arena [&'arena Expr<'arena>] {
        self.args
    }

    pub fn is_static(&self) -> bool {
        self.receiver.is_none()
    }
}

/// A sequence of expressions whose last one is the value of the block.
///
/// Invariant: a block is never empty. Built from a single expression, the
/// statement list is empty and that expression is the result.
#[derive(Debug)]
pub struct BlockExpr<'arena> {
    pub(crate) ty: Type<'arena>,
    pub(crate) locals: &'arena [ParameterExpr<'arena>],
    pub(crate) statements: &'arena [&'arena Expr<'arena>],
    pub(crate) result: &'arena Expr<'arena>,
}

impl<'arena> BlockExpr<'arena> {
    pub fn declared_type(&self) -> Type<'arena> {
        self.ty
    }

    /// Locals declared by the block; not bound to any value yet.
    pub fn locals(&self) -> &'arena [ParameterExpr<'arena>] {
        self.locals
    }

    /// Expressions evaluated for their side effects, in order.
    pub fn statements(&self) -> &'arena [&'arena Expr<'arena>] {
        self.statements
    }

    pub fn result(&self) -> &'arena Expr<'arena> {
        self.result
    }
}

#[derive(Debug)]
pub struct IndexExpr<'arena> {
    pub(crate) array: &'arena Expr<'arena>,
    pub(crate) index: &'arena Expr<'arena>,
}

impl<'arena> IndexExpr<'arena> {
    pub fn array(&self) -> &'arena Expr<'arena> {
        self.array
    }

    pub fn index(&self) -> &'arena Expr<'arena> {
        self.index
    }
}

#[derive(Debug)]
pub struct NewArrayExpr<'arena> {
    pub(crate) element_type: Type<'arena>,
    pub(crate) elements: &'arena [&'arena Expr<'arena>],
}

impl<'arena> NewArrayExpr<'arena> {
    pub fn element_type(&self) -> Type<'arena> {
        self.element_type
    }

    pub fn elements(&self) -> &'arena [&'arena Expr<'arena>] {
        self.elements
    }

    /// Fixed at construction; always fits in an `i32`.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
