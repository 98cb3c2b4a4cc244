//! Caller-supplied type tags.
//!
//! Types are never inferred from the tree: every node that needs one
//! (parameters, member accesses, blocks, array literals, signatures) receives
//! it from whoever builds the tree. The generator only ever asks whether a
//! type is void, everything else is passed through to the sink untouched.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type<'arena> {
    Void,
    Boolean,
    Int,
    Long,
    Float,
    Double,
    /// A reference type, named by its internal name (e.g. `java/lang/String`).
    Reference(&'arena str),
    Array(&'arena Type<'arena>),
}

impl<'arena> Type<'arena> {
    pub fn is_void(&self) -> bool {
        matches!(self, Type::Void)
    }

    /// Element type if this is an array type.
    pub fn element(&self) -> Option<Type<'arena>> {
        match self {
            Type::Array(elem) => Some(**elem),
            _ => None,
        }
    }
}

impl fmt::Display for Type<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Void => write!(f, "void"),
            Type::Boolean => write!(f, "boolean"),
            Type::Int => write!(f, "int"),
            Type::Long => write!(f, "long"),
            Type::Float => write!(f, "float"),
            Type::Double => write!(f, "double"),
            Type::Reference(name) => write!(f, "{}", name),
            Type::Array(elem) => write!(f, "{}[]", elem),
        }
    }
}
