//! S-expression rendering of expression trees, used in trace logs and
//! assertion messages.

use core::fmt;

use super::{Expr, ParameterExpr};

impl fmt::Display for ParameterExpr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.ty {
            Some(ty) => write!(f, "${}:{}:{}", self.slot, self.name, ty),
            None => write!(f, "${}:{}", self.slot, self.name),
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, exprs: &[&Expr<'_>]) -> fmt::Result {
    for expr in exprs {
        write!(f, " {}", expr)?;
    }
    Ok(())
}

impl fmt::Display for Expr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Binary(binary) => {
                write!(f, "(= {} {})", binary.left, binary.right)
            }
            Expr::Constant(constant) => write!(f, "{}", constant.value),
            Expr::Parameter(param) => write!(f, "{}", param),
            Expr::Member(member) => write!(
                f,
                "(. {} {}.{}:{})",
                member.target, member.owner, member.member, member.ty
            ),
            Expr::Call(call) => {
                write!(f, "(call {}", call.signature)?;
                if let Some(receiver) = call.receiver {
                    write!(f, " on {}", receiver)?;
                }
                write_list(f, call.args)?;
                write!(f, ")")
            }
            Expr::Block(block) => {
                write!(f, "(block:{}", block.ty)?;
                if !block.locals.is_empty() {
                    write!(f, " [")?;
                    for (i, local) in block.locals.iter().enumerate() {
                        if i > 0 {
                            write!(f, " ")?;
                        }
                        write!(f, "{}", local)?;
                    }
                    write!(f, "]")?;
                }
                write_list(f, block.statements)?;
                write!(f, " {})", block.result)
            }
            Expr::Index(index) => write!(f, "([] {} {})", index.array, index.index),
            Expr::NewArray(array) => {
                write!(f, "(new {}[{}]", array.element_type, array.elements.len())?;
                write_list(f, array.elements)?;
                write!(f, ")")
            }
        }
    }
}
