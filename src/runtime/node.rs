use std::fmt;

use super::builtin::{BinaryFn, Definition, NAryFn};

#[derive(Clone, Copy)]
pub enum Apply<'b> {
    Binary(&'b BinaryFn),
    NAry(&'b NAryFn),
}

/// One element of a postfix program. Calls borrow their implementation
/// from the [`Builtins`](super::builtin::Builtins) they were resolved in.
#[derive(Clone, Copy)]
pub enum Node<'b> {
    Literal(f64),
    Call {
        name: &'b str,
        arity: usize,
        apply: Apply<'b>,
    },
}

impl<'b> From<&'b Definition> for Node<'b> {
    fn from(def: &'b Definition) -> Self {
        match def {
            Definition::BinaryOperator { symbol, apply, .. } => Node::Call {
                name: symbol,
                arity: 2,
                apply: Apply::Binary(apply),
            },
            Definition::NAryFunction { name, arity, apply } => Node::Call {
                name,
                arity: *arity,
                apply: Apply::NAry(apply),
            },
        }
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(v) => write!(f, "Literal({v})"),
            Self::Call { name, arity, .. } => write!(f, "Call({name}/{arity})"),
        }
    }
}
