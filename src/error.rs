use thiserror::Error;

/// Broad class of a failure, independent of the offending symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lex,
    UndefinedSymbol,
    Syntax,
    Evaluation,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ErrorKind {
    #[error("unexpected character: `{ch}` at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    #[error("malformed number at offset {offset}: {reason}")]
    MalformedNumber { offset: usize, reason: &'static str },

    #[error("operator not defined: `{0}`")]
    UndefinedOperator(String),

    #[error("function not defined: `{0}`")]
    UndefinedFunction(String),

    #[error("mismatched parens")]
    MismatchedParens,

    #[error("stack underflow: `{name}` takes {arity} operand(s), found {found}")]
    StackUnderflow {
        name: String,
        arity: usize,
        found: usize,
    },

    #[error("malformed expression: expected a single result, found {0} value(s)")]
    MalformedExpression(usize),
}

impl ErrorKind {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnexpectedChar { .. } | Self::MalformedNumber { .. } => ErrorCategory::Lex,
            Self::UndefinedOperator(_) | Self::UndefinedFunction(_) => {
                ErrorCategory::UndefinedSymbol
            }
            Self::MismatchedParens => ErrorCategory::Syntax,
            Self::StackUnderflow { .. } | Self::MalformedExpression(_) => {
                ErrorCategory::Evaluation
            }
        }
    }
}

pub type PResult<T> = Result<T, ErrorKind>;
