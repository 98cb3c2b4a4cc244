use bumpalo::Bump;

use super::{
    BinaryExpr, BinaryOp, BlockExpr, CallExpr, ConstantExpr, Expr, IndexExpr, Literal,
    MalformedIrError, MemberExpr, MethodSignature, NewArrayExpr, ParameterExpr, Type,
};
use crate::ToString;

/// Factory for expression nodes.
///
/// Nodes are allocated in a `Bump` arena and live as long as it does. The
/// builder itself is a `Copy` handle, so visitors can keep one around to
/// rebuild nodes during a rewrite.
///
/// # Example
///
/// ```
/// use bumpalo::Bump;
/// use exprtree_core::ir::{ExprBuilder, Type};
///
/// let arena = Bump::new();
/// let b = ExprBuilder::new(&arena);
///
/// let this = b.this();
/// let field = b.member(this, "User", "name", Type::Reference("java/lang/String")).unwrap();
/// let value = b.parameter(1, "name", Type::Reference("java/lang/String"));
/// let body = b.block(&[b.assign(field, value)]).unwrap();
/// assert_eq!(body.kind(), exprtree_core::ir::NodeKind::Block);
/// ```
#[derive(Copy, Clone, Debug)]
pub struct ExprBuilder<'arena> {
    arena: &'arena Bump,
}

// Bump has no PartialEq; two builders are equal if they share the arena.
impl PartialEq for ExprBuilder<'_> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.arena, other.arena)
    }
}

impl Eq for ExprBuilder<'_> {}

impl<'arena> ExprBuilder<'arena> {
    pub fn new(arena: &'arena Bump) -> Self {
        Self { arena }
    }

    pub fn arena(&self) -> &'arena Bump {
        self.arena
    }

    fn alloc(&self, expr: Expr<'arena>) -> &'arena Expr<'arena> {
        self.arena.alloc(expr)
    }

    fn alloc_name(&self, name: &str, what: &'static str) -> Result<&'arena str, MalformedIrError> {
        if name.is_empty() {
            tracing::trace!(what, "Rejected empty name");
            return Err(MalformedIrError::EmptyName { what });
        }
        Ok(self.arena.alloc_str(name))
    }

    // ========================================================================
    // Types and signatures
    // ========================================================================

    pub fn reference_type(&self, name: &str) -> Type<'arena> {
        Type::Reference(self.arena.alloc_str(name))
    }

    pub fn array_type(&self, element: Type<'arena>) -> Type<'arena> {
        Type::Array(self.arena.alloc(element))
    }

    pub fn signature(
        &self,
        owner: &str,
        name: &str,
        return_type: Type<'arena>,
        param_types: &[Type<'arena>],
    ) -> Result<MethodSignature<'arena>, MalformedIrError> {
        Ok(MethodSignature {
            owner: self.alloc_name(owner, "method owner")?,
            name: self.alloc_name(name, "method name")?,
            return_type,
            param_types: self.arena.alloc_slice_copy(param_types),
        })
    }

    // ========================================================================
    // Nodes
    // ========================================================================

    pub fn make_binary(
        &self,
        op: BinaryOp,
        left: &'arena Expr<'arena>,
        right: &'arena Expr<'arena>,
    ) -> &'arena Expr<'arena> {
        self.alloc(Expr::Binary(BinaryExpr { op, left, right }))
    }

    /// `left = right`. Whether `left` is assignable is decided at emission.
    pub fn assign(
        &self,
        left: &'arena Expr<'arena>,
        right: &'arena Expr<'arena>,
    ) -> &'arena Expr<'arena> {
        self.make_binary(BinaryOp::Assign, left, right)
    }

    pub fn constant(&self, value: impl Into<Literal<'arena>>) -> &'arena Expr<'arena> {
        self.alloc(Expr::Constant(ConstantExpr {
            value: value.into(),
        }))
    }

    /// String constant copied into the arena.
    pub fn string(&self, value: &str) -> &'arena Expr<'arena> {
        self.constant(Literal::Str(self.arena.alloc_str(value)))
    }

    pub fn parameter(&self, slot: u16, name: &str, ty: Type<'arena>) -> &'arena Expr<'arena> {
        self.alloc(Expr::Parameter(self.variable(slot, name, ty)))
    }

    /// A parameter description for [`ExprBuilder::block_with_locals`].
    pub fn variable(&self, slot: u16, name: &str, ty: Type<'arena>) -> ParameterExpr<'arena> {
        ParameterExpr {
            slot,
            name: self.arena.alloc_str(name),
            ty: Some(ty),
        }
    }

    /// The receiver of an instance method.
    pub fn this(&self) -> &'arena Expr<'arena> {
        self.alloc(Expr::Parameter(ParameterExpr {
            slot: 0,
            name: "this",
            ty: None,
        }))
    }

    pub fn member(
        &self,
        target: &'arena Expr<'arena>,
        owner: &str,
        member: &str,
        ty: Type<'arena>,
    ) -> Result<&'arena Expr<'arena>, MalformedIrError> {
        let owner = self.alloc_name(owner, "member owner")?;
        let member = self.alloc_name(member, "member name")?;
        Ok(self.member_interned(target, owner, member, ty))
    }

    /// Rebuilds a member access from names that already live in the arena.
    pub(crate) fn member_interned(
        &self,
        target: &'arena Expr<'arena>,
        owner: &'arena str,
        member: &'arena str,
        ty: Type<'arena>,
    ) -> &'arena Expr<'arena> {
        self.alloc(Expr::Member(MemberExpr {
            target,
            owner,
            member,
            ty,
        }))
    }

    /// Instance call on `receiver`.
    pub fn call(
        &self,
        receiver: &'arena Expr<'arena>,
        signature: MethodSignature<'arena>,
        args: &[&'arena Expr<'arena>],
    ) -> Result<&'arena Expr<'arena>, MalformedIrError> {
        self.make_call(Some(receiver), signature, args)
    }

    pub fn call_static(
        &self,
        signature: MethodSignature<'arena>,
        args: &[&'arena Expr<'arena>],
    ) -> Result<&'arena Expr<'arena>, MalformedIrError> {
        self.make_call(None, signature, args)
    }

    pub fn make_call(
        &self,
        receiver: Option<&'arena Expr<'arena>>,
        signature: MethodSignature<'arena>,
        args: &[&'arena Expr<'arena>],
    ) -> Result<&'arena Expr<'arena>, MalformedIrError> {
        let expected = signature.param_types.len();
        if args.len() != expected {
            tracing::trace!(%signature, found = args.len(), "Rejected call arity");
            return Err(MalformedIrError::ArityMismatch {
                method: signature.to_string(),
                expected,
                found: args.len(),
            });
        }

        Ok(self.alloc(Expr::Call(CallExpr {
            receiver,
            signature,
            args: self.arena.alloc_slice_copy(args),
        })))
    }

    /// Void block.
    pub fn block(
        &self,
        exprs: &[&'arena Expr<'arena>],
    ) -> Result<&'arena Expr<'arena>, MalformedIrError> {
        self.block_with_locals(Type::Void, &[], exprs)
    }

    /// Block whose value has type `ty`.
    pub fn block_typed(
        &self,
        ty: Type<'arena>,
        exprs: &[&'arena Expr<'arena>],
    ) -> Result<&'arena Expr<'arena>, MalformedIrError> {
        self.block_with_locals(ty, &[], exprs)
    }

    /// Block declaring `locals`. The last expression is the result, the
    /// others are statements.
    pub fn block_with_locals(
        &self,
        ty: Type<'arena>,
        locals: &[ParameterExpr<'arena>],
        exprs: &[&'arena Expr<'arena>],
    ) -> Result<&'arena Expr<'arena>, MalformedIrError> {
        let Some((&result, statements)) = exprs.split_last() else {
            tracing::trace!("Rejected empty block");
            return Err(MalformedIrError::EmptyBlock);
        };

        Ok(self.alloc(Expr::Block(BlockExpr {
            ty,
            locals: self.arena.alloc_slice_copy(locals),
            statements: self.arena.alloc_slice_copy(statements),
            result,
        })))
    }

    /// `array[index]`.
    pub fn array_access(
        &self,
        array: &'arena Expr<'arena>,
        index: &'arena Expr<'arena>,
    ) -> &'arena Expr<'arena> {
        self.alloc(Expr::Index(IndexExpr { array, index }))
    }

    /// Array of `element_type` initialized with `elements`, in order.
    pub fn new_array_init(
        &self,
        element_type: Type<'arena>,
        elements: &[&'arena Expr<'arena>],
    ) -> Result<&'arena Expr<'arena>, MalformedIrError> {
        if element_type.is_void() {
            tracing::trace!("Rejected void array element type");
            return Err(MalformedIrError::VoidArrayElement);
        }
        if i32::try_from(elements.len()).is_err() {
            return Err(MalformedIrError::ArrayTooLarge {
                len: elements.len(),
            });
        }

        Ok(self.alloc(Expr::NewArray(NewArrayExpr {
            element_type,
            elements: self.arena.alloc_slice_copy(elements),
        })))
    }
}
