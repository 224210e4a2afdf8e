#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token<'src> {
    Number(f64),
    InfixOperator(&'src str),
    FunctionName(&'src str),

    OpenParen,
    CloseParen,

    Comma,
}

impl<'src> Token<'src> {
    pub(crate) fn is_operator_char(c: char) -> bool {
        matches!(c, '%' | '*' | '+' | '-' | '^' | '/')
    }

    pub(crate) fn is_function_char(c: char) -> bool {
        c.is_ascii_alphabetic()
    }

    pub(crate) fn is_whitespace(c: char) -> bool {
        matches!(c, ' ' | '\t' | '\n')
    }
}
