//! Rewrite protocol for expression trees.
//!
//! [`ExprVisitor`] is a double-dispatch visitor whose every hook returns a
//! node: the original one when nothing changed, a freshly built one
//! otherwise. Hooks that a visitor does not override inherit identity
//! rewriting with structural sharing:
//!
//! - `Assign` and `MemberAccess` recurse into their children and rebuild only
//!   if a child came back as a different node.
//! - Every other kind is returned as-is. A visitor that overrides one of them
//!   decides itself whether traversal continues into the children.
//!
//! Identity is pointer identity ([`Expr::ptr_eq`]); nodes are immutable, so
//! sharing an unchanged subtree between the old and the new tree is safe.

use crate::ir::{
    BinaryExpr, BlockExpr, CallExpr, ConstantExpr, Expr, ExprBuilder, IndexExpr, MemberExpr,
    NewArrayExpr, ParameterExpr,
};

/// Result of visiting a node.
pub type VisitResult<'arena, E> = Result<&'arena Expr<'arena>, E>;

/// Trait for rewriting expression trees.
///
/// # Example
///
/// ```
/// use bumpalo::Bump;
/// use core::convert::Infallible;
/// use exprtree_core::ir::{Expr, ExprBuilder, ParameterExpr, Type};
/// use exprtree_core::visitor::{ExprVisitor, VisitResult};
///
/// // Shift every typed slot by one, e.g. to make room for a receiver.
/// struct ShiftSlots<'arena> {
///     builder: ExprBuilder<'arena>,
/// }
///
/// impl<'arena> ExprVisitor<'arena> for ShiftSlots<'arena> {
///     type Error = Infallible;
///
///     fn builder(&self) -> ExprBuilder<'arena> {
///         self.builder
///     }
///
///     fn visit_parameter(
///         &mut self,
///         expr: &'arena Expr<'arena>,
///         param: &'arena ParameterExpr<'arena>,
///     ) -> VisitResult<'arena, Infallible> {
///         match param.declared_type() {
///             Some(ty) => Ok(self.builder.parameter(param.slot() + 1, param.name(), ty)),
///             None => Ok(expr),
///         }
///     }
/// }
///
/// let arena = Bump::new();
/// let b = ExprBuilder::new(&arena);
/// let tree = b.assign(b.parameter(1, "x", Type::Int), b.constant(7));
///
/// let rewritten = ShiftSlots { builder: b }.visit(tree).unwrap();
/// assert!(!Expr::ptr_eq(tree, rewritten));
/// ```
pub trait ExprVisitor<'arena> {
    type Error;

    /// Builder used to create replacement nodes.
    fn builder(&self) -> ExprBuilder<'arena>;

    /// Visit a node by dispatching on its kind.
    fn visit(&mut self, expr: &'arena Expr<'arena>) -> VisitResult<'arena, Self::Error> {
        expr.accept(self)
    }

    fn visit_binary(
        &mut self,
        expr: &'arena Expr<'arena>,
        binary: &'arena BinaryExpr<'arena>,
    ) -> VisitResult<'arena, Self::Error> {
        self.super_visit_binary(expr, binary)
    }

    fn visit_member(
        &mut self,
        expr: &'arena Expr<'arena>,
        member: &'arena MemberExpr<'arena>,
    ) -> VisitResult<'arena, Self::Error> {
        self.super_visit_member(expr, member)
    }

    fn visit_parameter(
        &mut self,
        expr: &'arena Expr<'arena>,
        _param: &'arena ParameterExpr<'arena>,
    ) -> VisitResult<'arena, Self::Error> {
        Ok(expr)
    }

    fn visit_constant(
        &mut self,
        expr: &'arena Expr<'arena>,
        _constant: &'arena ConstantExpr<'arena>,
    ) -> VisitResult<'arena, Self::Error> {
        Ok(expr)
    }

    fn visit_call(
        &mut self,
        expr: &'arena Expr<'arena>,
        _call: &'arena CallExpr<'arena>,
    ) -> VisitResult<'arena, Self::Error> {
        Ok(expr)
    }

    fn visit_block(
        &mut self,
        expr: &'arena Expr<'arena>,
        _block: &'arena BlockExpr<'arena>,
    ) -> VisitResult<'arena, Self::Error> {
        Ok(expr)
    }

    fn visit_index(
        &mut self,
        expr: &'arena Expr<'arena>,
        _index: &'arena IndexExpr<'arena>,
    ) -> VisitResult<'arena, Self::Error> {
        Ok(expr)
    }

    fn visit_new_array_init(
        &mut self,
        expr: &'arena Expr<'arena>,
        _array: &'arena NewArrayExpr<'arena>,
    ) -> VisitResult<'arena, Self::Error> {
        Ok(expr)
    }

    /// Default recursion for binary nodes.
    ///
    /// Override `visit_binary` instead of this method.
    fn super_visit_binary(
        &mut self,
        expr: &'arena Expr<'arena>,
        binary: &'arena BinaryExpr<'arena>,
    ) -> VisitResult<'arena, Self::Error> {
        let left = self.visit(binary.left())?;
        let right = self.visit(binary.right())?;

        if Expr::ptr_eq(left, binary.left()) && Expr::ptr_eq(right, binary.right()) {
            return Ok(expr);
        }
        Ok(self.builder().make_binary(binary.op(), left, right))
    }

    /// Default recursion for member accesses.
    ///
    /// Override `visit_member` instead of this method.
    fn super_visit_member(
        &mut self,
        expr: &'arena Expr<'arena>,
        member: &'arena MemberExpr<'arena>,
    ) -> VisitResult<'arena, Self::Error> {
        let target = self.visit(member.target())?;

        if Expr::ptr_eq(target, member.target()) {
            return Ok(expr);
        }
        Ok(self.builder().member_interned(
            target,
            member.owner(),
            member.member(),
            member.member_type(),
        ))
    }
}

impl<'arena> Expr<'arena> {
    /// Call the visitor hook matching this node's kind.
    pub fn accept<V>(&'arena self, visitor: &mut V) -> VisitResult<'arena, V::Error>
    where
        V: ExprVisitor<'arena> + ?Sized,
    {
        match self {
            Expr::Binary(binary) => visitor.visit_binary(self, binary),
            Expr::Member(member) => visitor.visit_member(self, member),
            Expr::Parameter(param) => visitor.visit_parameter(self, param),
            Expr::Constant(constant) => visitor.visit_constant(self, constant),
            Expr::Call(call) => visitor.visit_call(self, call),
            Expr::Block(block) => visitor.visit_block(self, block),
            Expr::Index(index) => visitor.visit_index(self, index),
            Expr::NewArray(array) => visitor.visit_new_array_init(self, array),
        }
    }
}

#[cfg(test)]
mod tests;
