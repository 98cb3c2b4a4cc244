use core::fmt;

/// Value carried by a constant node.
///
/// The tree never looks inside a literal; only the sink interprets it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Literal<'arena> {
    Null,
    Bool(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Str(&'arena str),
}

impl From<bool> for Literal<'_> {
    fn from(value: bool) -> Self {
        Literal::Bool(value)
    }
}

impl From<i32> for Literal<'_> {
    fn from(value: i32) -> Self {
        Literal::Int(value)
    }
}

impl From<i64> for Literal<'_> {
    fn from(value: i64) -> Self {
        Literal::Long(value)
    }
}

impl From<f32> for Literal<'_> {
    fn from(value: f32) -> Self {
        Literal::Float(value)
    }
}

impl From<f64> for Literal<'_> {
    fn from(value: f64) -> Self {
        Literal::Double(value)
    }
}

impl<'arena> From<&'arena str> for Literal<'arena> {
    fn from(value: &'arena str) -> Self {
        Literal::Str(value)
    }
}

impl fmt::Display for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Null => write!(f, "null"),
            Literal::Bool(b) => write!(f, "{}", b),
            Literal::Int(i) => write!(f, "{}", i),
            Literal::Long(l) => write!(f, "{}L", l),
            Literal::Float(x) => write!(f, "{}f", x),
            Literal::Double(x) => write!(f, "{}", x),
            Literal::Str(s) => write!(f, "{:?}", s),
        }
    }
}
