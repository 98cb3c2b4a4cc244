//! Tests for the rewrite protocol: identity defaults and structural sharing.

use super::{ExprVisitor, VisitResult};
use crate::ir::{
    BlockExpr, CallExpr, ConstantExpr, Expr, ExprBuilder, Literal, MethodSignature, Type,
};
use bumpalo::Bump;
use core::convert::Infallible;

const STRING: Type<'static> = Type::Reference("java/lang/String");

/// Visitor that overrides nothing.
struct Identity<'arena> {
    builder: ExprBuilder<'arena>,
}

impl<'arena> ExprVisitor<'arena> for Identity<'arena> {
    type Error = Infallible;

    fn builder(&self) -> ExprBuilder<'arena> {
        self.builder
    }
}

/// Replaces every integer constant `from` with `to`.
struct ReplaceInt<'arena> {
    builder: ExprBuilder<'arena>,
    from: i32,
    to: i32,
}

impl<'arena> ExprVisitor<'arena> for ReplaceInt<'arena> {
    type Error = Infallible;

    fn builder(&self) -> ExprBuilder<'arena> {
        self.builder
    }

    fn visit_constant(
        &mut self,
        expr: &'arena Expr<'arena>,
        constant: &'arena ConstantExpr<'arena>,
    ) -> VisitResult<'arena, Infallible> {
        match constant.value() {
            Literal::Int(i) if i == self.from => Ok(self.builder.constant(self.to)),
            _ => Ok(expr),
        }
    }
}

/// Like `ReplaceInt`, but also walks into blocks.
struct ReplaceIntInBlocks<'arena> {
    inner: ReplaceInt<'arena>,
}

impl<'arena> ExprVisitor<'arena> for ReplaceIntInBlocks<'arena> {
    type Error = Infallible;

    fn builder(&self) -> ExprBuilder<'arena> {
        self.inner.builder
    }

    fn visit_constant(
        &mut self,
        expr: &'arena Expr<'arena>,
        constant: &'arena ConstantExpr<'arena>,
    ) -> VisitResult<'arena, Infallible> {
        self.inner.visit_constant(expr, constant)
    }

    fn visit_block(
        &mut self,
        expr: &'arena Expr<'arena>,
        block: &'arena BlockExpr<'arena>,
    ) -> VisitResult<'arena, Infallible> {
        let mut changed = false;
        let mut exprs = Vec::with_capacity(block.statements().len() + 1);
        for &child in block.statements().iter().chain([block.result()].iter()) {
            let new_child = self.visit(child)?;
            changed |= !Expr::ptr_eq(child, new_child);
            exprs.push(new_child);
        }
        if !changed {
            return Ok(expr);
        }
        Ok(self
            .builder()
            .block_with_locals(block.declared_type(), block.locals(), &exprs)
            .unwrap())
    }
}

/// Fails on any call.
struct RejectCalls<'arena> {
    builder: ExprBuilder<'arena>,
}

impl<'arena> ExprVisitor<'arena> for RejectCalls<'arena> {
    type Error = &'static str;

    fn builder(&self) -> ExprBuilder<'arena> {
        self.builder
    }

    fn visit_call(
        &mut self,
        _expr: &'arena Expr<'arena>,
        _call: &'arena CallExpr<'arena>,
    ) -> VisitResult<'arena, &'static str> {
        Err("calls are not allowed here")
    }
}

fn to_string_sig<'a>(b: ExprBuilder<'a>) -> MethodSignature<'a> {
    b.signature("java/lang/Object", "toString", STRING, &[])
        .unwrap()
}

#[test]
fn test_identity_returns_same_node_for_every_kind() {
    let arena = Bump::new();
    let b = ExprBuilder::new(&arena);

    let this = b.this();
    let field = b.member(this, "User", "name", STRING).unwrap();
    let assign = b.assign(field, b.parameter(1, "name", STRING));
    let index = b.array_access(b.parameter(2, "arr", Type::Int), b.constant(0));
    let array = b.new_array_init(STRING, &[b.string("a")]).unwrap();
    let call = b.call(this, to_string_sig(b), &[]).unwrap();
    let block = b.block(&[assign, call]).unwrap();

    let mut identity = Identity { builder: b };
    for expr in [this, field, assign, index, array, call, block, b.constant(true)] {
        let result = identity.visit(expr).unwrap();
        assert!(
            Expr::ptr_eq(expr, result),
            "identity visitor rebuilt {}",
            expr
        );
    }
}

#[test]
fn test_assign_rebuilt_only_where_child_changed() {
    let arena = Bump::new();
    let b = ExprBuilder::new(&arena);

    let left = b.parameter(1, "x", Type::Int);
    let right = b.constant(1);
    let assign = b.assign(left, right);

    let mut replace = ReplaceInt {
        builder: b,
        from: 1,
        to: 2,
    };
    let result = replace.visit(assign).unwrap();

    assert!(!Expr::ptr_eq(assign, result));
    let Expr::Binary(binary) = result else {
        panic!("expected binary node, got {}", result);
    };
    assert!(Expr::ptr_eq(binary.left(), left), "unchanged left must be shared");
    assert!(matches!(binary.right(), Expr::Constant(c) if c.value() == Literal::Int(2)));
    assert_eq!(result.kind(), assign.kind());
}

#[test]
fn test_assign_unchanged_when_no_child_matches() {
    let arena = Bump::new();
    let b = ExprBuilder::new(&arena);

    let assign = b.assign(b.parameter(1, "x", Type::Int), b.constant(5));
    let mut replace = ReplaceInt {
        builder: b,
        from: 1,
        to: 2,
    };

    assert!(Expr::ptr_eq(assign, replace.visit(assign).unwrap()));
}

#[test]
fn test_member_rebuilt_with_same_metadata() {
    let arena = Bump::new();
    let b = ExprBuilder::new(&arena);

    // Target is a constant only so that the rewrite has something to hit.
    let member = b.member(b.constant(1), "Box", "value", Type::Int).unwrap();
    let mut replace = ReplaceInt {
        builder: b,
        from: 1,
        to: 3,
    };
    let result = replace.visit(member).unwrap();

    let Expr::Member(rebuilt) = result else {
        panic!("expected member node, got {}", result);
    };
    assert!(!Expr::ptr_eq(member, result));
    assert_eq!(rebuilt.owner(), "Box");
    assert_eq!(rebuilt.member(), "value");
    assert_eq!(rebuilt.member_type(), Type::Int);
    assert!(matches!(rebuilt.target(), Expr::Constant(c) if c.value() == Literal::Int(3)));
}

#[test]
fn test_nested_sharing_keeps_untouched_subtree() {
    let arena = Bump::new();
    let b = ExprBuilder::new(&arena);

    let field = b.member(b.this(), "Counter", "count", Type::Int).unwrap();
    let assign = b.assign(field, b.constant(1));

    let mut replace = ReplaceInt {
        builder: b,
        from: 1,
        to: 10,
    };
    let Expr::Binary(binary) = replace.visit(assign).unwrap() else {
        panic!("expected binary node");
    };

    // The member access was visited but nothing under it changed.
    assert!(Expr::ptr_eq(binary.left(), field));
}

#[test]
fn test_block_is_not_recursed_by_default() {
    let arena = Bump::new();
    let b = ExprBuilder::new(&arena);

    let block = b
        .block(&[b.assign(b.parameter(1, "x", Type::Int), b.constant(1))])
        .unwrap();
    let mut replace = ReplaceInt {
        builder: b,
        from: 1,
        to: 2,
    };

    assert!(Expr::ptr_eq(block, replace.visit(block).unwrap()));
}

#[test]
fn test_overriding_block_takes_over_recursion() {
    let arena = Bump::new();
    let b = ExprBuilder::new(&arena);

    let untouched = b.assign(b.parameter(1, "x", Type::Int), b.constant(7));
    let touched = b.assign(b.parameter(2, "y", Type::Int), b.constant(1));
    let block = b.block_typed(Type::Int, &[untouched, touched, b.constant(1)]).unwrap();

    let mut replace = ReplaceIntInBlocks {
        inner: ReplaceInt {
            builder: b,
            from: 1,
            to: 2,
        },
    };
    let result = replace.visit(block).unwrap();

    let Expr::Block(rebuilt) = result else {
        panic!("expected block node, got {}", result);
    };
    assert_eq!(rebuilt.declared_type(), Type::Int);
    assert_eq!(rebuilt.statements().len(), 2);
    assert!(Expr::ptr_eq(rebuilt.statements()[0], untouched));
    assert!(!Expr::ptr_eq(rebuilt.statements()[1], touched));
    assert!(matches!(rebuilt.result(), Expr::Constant(c) if c.value() == Literal::Int(2)));
}

#[test]
fn test_errors_propagate_out_of_nested_visit() {
    let arena = Bump::new();
    let b = ExprBuilder::new(&arena);

    let call = b.call(b.this(), to_string_sig(b), &[]).unwrap();
    let assign = b.assign(b.parameter(1, "s", STRING), call);

    let mut reject = RejectCalls { builder: b };
    assert_eq!(reject.visit(assign).unwrap_err(), "calls are not allowed here");
}
