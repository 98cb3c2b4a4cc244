use core::fmt;

use super::{Instruction, Sink};
use crate::{
    Vec,
    ir::{Literal, MethodSignature, Type},
};

/// Recorded instruction stream for one method body.
///
/// `Code` is the in-memory [`Sink`]: it keeps every instruction in arrival
/// order and tracks the operand stack the way a class-file writer computing
/// max stack would, so callers can size frames without a second pass.
#[derive(Clone, Default, PartialEq)]
pub struct Code<'arena> {
    pub instructions: Vec<Instruction<'arena>>,
    /// Deepest operand stack observed, in values.
    pub max_stack_size: usize,
    /// One past the highest local slot loaded or stored.
    pub max_locals: usize,
    current_stack_depth: usize,
}

impl<'arena> Code<'arena> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Operand stack depth after the last recorded instruction.
    pub fn stack_depth(&self) -> usize {
        self.current_stack_depth
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    fn record(&mut self, instruction: Instruction<'arena>) {
        let (pops, pushes) = instruction.stack_effect();
        if pops > self.current_stack_depth {
            tracing::warn!(
                %instruction,
                depth = self.current_stack_depth,
                "Operand stack underflow"
            );
        }
        self.current_stack_depth = self.current_stack_depth.saturating_sub(pops);
        if instruction.is_return() {
            self.current_stack_depth = 0;
        }
        self.current_stack_depth += pushes;
        self.max_stack_size = self.max_stack_size.max(self.current_stack_depth);
        self.instructions.push(instruction);
    }

    fn touch_local(&mut self, slot: u16) {
        self.max_locals = self.max_locals.max(slot as usize + 1);
    }
}

impl<'arena> Sink<'arena> for Code<'arena> {
    fn push_literal(&mut self, value: Literal<'arena>) {
        self.record(Instruction::PushLiteral(value));
    }

    fn load_local(&mut self, slot: u16) {
        self.touch_local(slot);
        self.record(Instruction::LoadLocal(slot));
    }

    fn store_local(&mut self, slot: u16) {
        self.touch_local(slot);
        self.record(Instruction::StoreLocal(slot));
    }

    fn get_field(&mut self, owner: &'arena str, member: &'arena str, ty: Type<'arena>) {
        self.record(Instruction::GetField { owner, member, ty });
    }

    fn put_field(&mut self, owner: &'arena str, member: &'arena str, ty: Type<'arena>) {
        self.record(Instruction::PutField { owner, member, ty });
    }

    fn new_array(&mut self, element_type: Type<'arena>) {
        self.record(Instruction::NewArray(element_type));
    }

    fn store_array_element(&mut self) {
        self.record(Instruction::StoreArrayElement);
    }

    fn dup_array_ref(&mut self) {
        self.record(Instruction::DupArrayRef);
    }

    fn push_int(&mut self, n: i32) {
        self.record(Instruction::PushInt(n));
    }

    fn invoke_virtual(&mut self, signature: &MethodSignature<'arena>) {
        self.record(Instruction::InvokeVirtual(*signature));
    }

    fn invoke_static(&mut self, signature: &MethodSignature<'arena>) {
        self.record(Instruction::InvokeStatic(*signature));
    }

    fn return_value(&mut self) {
        self.record(Instruction::ReturnValue);
    }

    fn return_void(&mut self) {
        self.record(Instruction::ReturnVoid);
    }
}

impl fmt::Debug for Code<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Code {{")?;
        writeln!(f, "  max_locals: {}", self.max_locals)?;
        writeln!(f, "  max_stack_size: {}", self.max_stack_size)?;
        writeln!(f, "  instructions: [")?;
        for (addr, instruction) in self.instructions.iter().enumerate() {
            writeln!(f, "    {:4}  {}", addr, instruction)?;
        }
        writeln!(f, "  ]")?;
        write!(f, "}}")
    }
}
