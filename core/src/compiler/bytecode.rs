//! Code generator implementation.

use super::{CodegenError, GeneratorOptions};
use crate::{
    emit::{Code, Sink},
    ir::{BinaryExpr, BinaryOp, BlockExpr, CallExpr, Expr, IndexExpr, NewArrayExpr, NodeKind},
};

/// Code generator that lowers an expression tree into a sink.
///
/// The generator borrows the sink for its whole lifetime and neither opens
/// nor finalizes it. Construct one per method body and drop it after a
/// single [`visit`](CodeGenerator::visit).
///
/// # Example
///
/// ```
/// use bumpalo::Bump;
/// use exprtree_core::compiler::CodeGenerator;
/// use exprtree_core::emit::{Code, Instruction};
/// use exprtree_core::ir::{ExprBuilder, Type};
///
/// let arena = Bump::new();
/// let b = ExprBuilder::new(&arena);
/// let field = b.member(b.this(), "Obj", "f", Type::Int).unwrap();
/// let body = b.block(&[b.assign(field, b.parameter(1, "v", Type::Int))]).unwrap();
///
/// let mut code = Code::new();
/// CodeGenerator::new(&mut code).visit(body).unwrap();
/// assert_eq!(code.instructions.last(), Some(&Instruction::ReturnVoid));
/// ```
pub struct CodeGenerator<'s, S: ?Sized> {
    sink: &'s mut S,
    options: GeneratorOptions,
}

impl<'s, S: ?Sized> CodeGenerator<'s, S> {
    pub fn new(sink: &'s mut S) -> Self {
        Self::with_options(sink, GeneratorOptions::default())
    }

    pub fn with_options(sink: &'s mut S, options: GeneratorOptions) -> Self {
        Self { sink, options }
    }
}

impl<'arena> CodeGenerator<'_, Code<'arena>> {
    /// Convenience method to lower a method body in one call.
    ///
    /// The instructions are only returned if the whole body lowered; on
    /// error the partial stream is dropped.
    pub fn compile(
        body: &'arena Expr<'arena>,
        options: GeneratorOptions,
    ) -> Result<Code<'arena>, CodegenError> {
        tracing::debug!(kind = %body.kind(), "Compiling method body");

        let mut code = Code::new();
        CodeGenerator::with_options(&mut code, options).visit(body)?;

        tracing::debug!(
            instructions = code.len(),
            max_stack_size = code.max_stack_size,
            max_locals = code.max_locals,
            "Compiled method body"
        );
        Ok(code)
    }
}

impl<'arena, S> CodeGenerator<'_, S>
where
    S: Sink<'arena> + ?Sized,
{
    /// Emit the instructions for `expr` and return it unchanged.
    pub fn visit(
        &mut self,
        expr: &'arena Expr<'arena>,
    ) -> Result<&'arena Expr<'arena>, CodegenError> {
        self.emit(expr, 0)?;
        Ok(expr)
    }

    fn enter(&self, kind: NodeKind, depth: usize) -> Result<(), CodegenError> {
        if depth > self.options.max_depth {
            tracing::debug!(%kind, depth, "Nesting limit reached");
            return Err(CodegenError::NestingTooDeep {
                depth,
                max_depth: self.options.max_depth,
            });
        }
        tracing::trace!(%kind, depth, "visit");
        Ok(())
    }

    fn emit(&mut self, expr: &'arena Expr<'arena>, depth: usize) -> Result<(), CodegenError> {
        self.enter(expr.kind(), depth)?;

        match expr {
            // === Leaves ===
            Expr::Constant(constant) => {
                self.sink.push_literal(constant.value());
            }

            Expr::Parameter(param) => {
                self.sink.load_local(param.slot());
            }

            // === Field Read ===
            Expr::Member(member) => {
                // Push the owner, then read through it
                self.emit(member.target(), depth + 1)?;
                self.sink
                    .get_field(member.owner(), member.member(), member.member_type());
            }

            // === Element Read ===
            Expr::Index(_) => {
                // Only element stores have a lowering; reading an element
                // would need a load instruction the sink does not offer.
                return Err(CodegenError::UnsupportedNode {
                    kind: NodeKind::ArrayIndex,
                    context: "outside the left side of an assignment",
                });
            }

            Expr::Binary(binary) => match binary.op() {
                BinaryOp::Assign => self.emit_assign(binary, depth)?,
            },

            Expr::Call(call) => self.emit_call(call, depth)?,

            Expr::NewArray(array) => self.emit_new_array(array, depth)?,

            Expr::Block(block) => self.emit_block(block, depth)?,
        }

        Ok(())
    }

    /// Lower `left = right`, choosing the store by the shape of `left`.
    fn emit_assign(
        &mut self,
        binary: &'arena BinaryExpr<'arena>,
        depth: usize,
    ) -> Result<(), CodegenError> {
        let left = binary.left();
        let right = binary.right();

        match left {
            // obj.field = value
            Expr::Member(member) => {
                self.enter(NodeKind::MemberAccess, depth + 1)?;
                self.emit(member.target(), depth + 2)?; // load obj
                self.emit(right, depth + 1)?; // load value
                self.sink
                    .put_field(member.owner(), member.member(), member.member_type());
            }

            // array[index] = value
            Expr::Index(index) => {
                self.emit_element_address(index, depth + 1)?; // load array + index
                self.emit(right, depth + 1)?; // load value
                self.sink.store_array_element();
            }

            // variable = value
            Expr::Parameter(param) => {
                self.emit(right, depth + 1)?;
                self.sink.store_local(param.slot());
            }

            _ => {
                tracing::debug!(kind = %left.kind(), "Rejected assignment target");
                return Err(CodegenError::InvalidAssignmentTarget { kind: left.kind() });
            }
        }

        Ok(())
    }

    /// Leave the array reference and the index on the stack.
    fn emit_element_address(
        &mut self,
        index: &'arena IndexExpr<'arena>,
        depth: usize,
    ) -> Result<(), CodegenError> {
        self.enter(NodeKind::ArrayIndex, depth)?;
        self.emit(index.array(), depth + 1)?;
        self.emit(index.index(), depth + 1)
    }

    fn emit_call(
        &mut self,
        call: &'arena CallExpr<'arena>,
        depth: usize,
    ) -> Result<(), CodegenError> {
        if let Some(receiver) = call.receiver() {
            self.emit(receiver, depth + 1)?;
        }

        for &arg in call.args() {
            self.emit(arg, depth + 1)?;
        }

        // A non-void result stays on the stack for the enclosing expression.
        match call.receiver() {
            Some(_) => self.sink.invoke_virtual(call.signature()),
            None => self.sink.invoke_static(call.signature()),
        }
        Ok(())
    }

    fn emit_new_array(
        &mut self,
        array: &'arena NewArrayExpr<'arena>,
        depth: usize,
    ) -> Result<(), CodegenError> {
        self.sink.push_int(array_index(array.len()));
        self.sink.new_array(array.element_type());

        for (i, &element) in array.elements().iter().enumerate() {
            self.sink.dup_array_ref();
            self.sink.push_int(array_index(i));
            self.emit(element, depth + 1)?;
            self.sink.store_array_element();
        }
        Ok(())
    }

    fn emit_block(
        &mut self,
        block: &'arena BlockExpr<'arena>,
        depth: usize,
    ) -> Result<(), CodegenError> {
        if !block.locals().is_empty() {
            tracing::trace!(locals = block.locals().len(), "Block declares locals");
        }

        // Statements run for their side effects only
        for &statement in block.statements() {
            self.emit(statement, depth + 1)?;
        }

        self.emit(block.result(), depth + 1)?;

        if block.declared_type().is_void() {
            self.sink.return_void();
        } else {
            self.sink.return_value();
        }
        Ok(())
    }
}

/// Array lengths and positions are checked against `i32` when the array
/// node is built.
fn array_index(i: usize) -> i32 {
    i as i32
}
