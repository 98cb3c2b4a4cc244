//! Instructions as recorded by [`Code`](super::Code).
//!
//! One variant per [`Sink`](super::Sink) operation. The operand stack is
//! counted in values: every value occupies one unit regardless of its type.

use core::fmt;

use crate::ir::{Literal, MethodSignature, Type};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instruction<'arena> {
    /// Stack: [...] -> [..., value]
    PushLiteral(Literal<'arena>),

    /// Stack: [...] -> [..., local]
    LoadLocal(u16),

    /// Stack: [..., value] -> [...]
    StoreLocal(u16),

    /// Stack: [..., object] -> [..., value]
    GetField {
        owner: &'arena str,
        member: &'arena str,
        ty: Type<'arena>,
    },

    /// Stack: [..., object, value] -> [...]
    PutField {
        owner: &'arena str,
        member: &'arena str,
        ty: Type<'arena>,
    },

    /// Stack: [..., length] -> [..., array]
    NewArray(Type<'arena>),

    /// Stack: [..., array, index, value] -> [...]
    StoreArrayElement,

    /// Stack: [..., array] -> [..., array, array]
    DupArrayRef,

    /// Stack: [...] -> [..., n]
    PushInt(i32),

    /// Stack: [..., receiver, args...] -> [..., result?]
    InvokeVirtual(MethodSignature<'arena>),

    /// Stack: [..., args...] -> [..., result?]
    InvokeStatic(MethodSignature<'arena>),

    /// Stack: [..., value] -> []
    ReturnValue,

    /// Stack: [...] -> []
    ReturnVoid,
}

impl<'arena> Instruction<'arena> {
    /// Number of values popped and pushed by this instruction.
    ///
    /// Returns leave the method, so they are reported as popping only what
    /// they consume; whatever else is on the stack is discarded.
    pub fn stack_effect(&self) -> (usize, usize) {
        match self {
            Instruction::PushLiteral(_) | Instruction::LoadLocal(_) | Instruction::PushInt(_) => {
                (0, 1)
            }
            Instruction::StoreLocal(_) => (1, 0),
            Instruction::GetField { .. } | Instruction::NewArray(_) => (1, 1),
            Instruction::PutField { .. } => (2, 0),
            Instruction::StoreArrayElement => (3, 0),
            Instruction::DupArrayRef => (0, 1),
            Instruction::InvokeVirtual(sig) => {
                (sig.param_types().len() + 1, sig.returns_value() as usize)
            }
            Instruction::InvokeStatic(sig) => {
                (sig.param_types().len(), sig.returns_value() as usize)
            }
            Instruction::ReturnValue => (1, 0),
            Instruction::ReturnVoid => (0, 0),
        }
    }

    pub fn is_return(&self) -> bool {
        matches!(self, Instruction::ReturnValue | Instruction::ReturnVoid)
    }
}

impl fmt::Display for Instruction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::PushLiteral(value) => write!(f, "push-literal {}", value),
            Instruction::LoadLocal(slot) => write!(f, "load-local {}", slot),
            Instruction::StoreLocal(slot) => write!(f, "store-local {}", slot),
            Instruction::GetField { owner, member, ty } => {
                write!(f, "get-field {}.{}:{}", owner, member, ty)
            }
            Instruction::PutField { owner, member, ty } => {
                write!(f, "put-field {}.{}:{}", owner, member, ty)
            }
            Instruction::NewArray(ty) => write!(f, "new-array {}", ty),
            Instruction::StoreArrayElement => write!(f, "store-array-element"),
            Instruction::DupArrayRef => write!(f, "dup-array-ref"),
            Instruction::PushInt(n) => write!(f, "push-int {}", n),
            Instruction::InvokeVirtual(sig) => write!(f, "invoke-virtual {}", sig),
            Instruction::InvokeStatic(sig) => write!(f, "invoke-static {}", sig),
            Instruction::ReturnValue => write!(f, "return-value"),
            Instruction::ReturnVoid => write!(f, "return-void"),
        }
    }
}
