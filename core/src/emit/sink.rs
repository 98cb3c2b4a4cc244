use crate::ir::{Literal, MethodSignature, Type};

/// Receiver of the instruction stream produced by the code generator.
///
/// Implementations must keep instructions in the order they are received.
/// The stack notation below is `[before] -> [after]`.
pub trait Sink<'arena> {
    /// `[...] -> [..., value]`
    fn push_literal(&mut self, value: Literal<'arena>);

    /// `[...] -> [..., local]`
    fn load_local(&mut self, slot: u16);

    /// `[..., value] -> [...]`
    fn store_local(&mut self, slot: u16);

    /// `[..., object] -> [..., value]`
    fn get_field(&mut self, owner: &'arena str, member: &'arena str, ty: Type<'arena>);

    /// `[..., object, value] -> [...]`
    fn put_field(&mut self, owner: &'arena str, member: &'arena str, ty: Type<'arena>);

    /// `[..., length] -> [..., array]`
    fn new_array(&mut self, element_type: Type<'arena>);

    /// `[..., array, index, value] -> [...]`
    fn store_array_element(&mut self);

    /// `[..., array] -> [..., array, array]`
    fn dup_array_ref(&mut self);

    /// `[...] -> [..., n]`
    fn push_int(&mut self, n: i32);

    /// `[..., receiver, args...] -> [..., result?]`
    fn invoke_virtual(&mut self, signature: &MethodSignature<'arena>);

    /// `[..., args...] -> [..., result?]`
    fn invoke_static(&mut self, signature: &MethodSignature<'arena>);

    /// `[..., value] -> []`
    fn return_value(&mut self);

    /// `[...] -> []`
    fn return_void(&mut self);
}
