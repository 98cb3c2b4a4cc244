use core::fmt;

use super::Type;

/// Fully resolved method signature.
///
/// Signatures arrive resolved from the caller; nothing here performs lookup
/// or overload resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MethodSignature<'arena> {
    pub(crate) owner: &'arena str,
    pub(crate) name: &'arena str,
    pub(crate) return_type: Type<'arena>,
    pub(crate) param_types: &'arena [Type<'arena>],
}

impl<'arena> MethodSignature<'arena> {
    pub fn owner(&self) -> &'arena str {
        self.owner
    }

    pub fn name(&self) -> &'arena str {
        self.name
    }

    pub fn return_type(&self) -> Type<'arena> {
        self.return_type
    }

    pub fn param_types(&self) -> &'arena [Type<'arena>] {
        self.param_types
    }

    pub fn returns_value(&self) -> bool {
        !self.return_type.is_void()
    }
}

impl fmt::Display for MethodSignature<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}(", self.owner, self.name)?;
        for (i, ty) in self.param_types.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", ty)?;
        }
        write!(f, ") -> {}", self.return_type)
    }
}
