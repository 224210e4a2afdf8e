use crate::{
    error::{ErrorKind, PResult},
    runtime::{Builtins, Definition, Node, Precedence},
    syntax::token::Token,
};

/// Entries waiting on the operator stack.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pending<'src> {
    OpenParen,
    Function(&'src str),
    Operator(&'src str),
}

/// Shunting-yard converter from infix tokens to a postfix program.
pub(crate) struct Parser<'b, 'src> {
    builtins: &'b Builtins,
    output: Vec<Node<'b>>,
    operators: Vec<Pending<'src>>,
}

impl<'b, 'src> Parser<'b, 'src> {
    pub fn new(builtins: &'b Builtins) -> Self {
        Self {
            builtins,
            output: vec![],
            operators: vec![],
        }
    }

    pub fn parse<I>(mut self, tokens: I) -> PResult<Vec<Node<'b>>>
    where
        I: IntoIterator<Item = Token<'src>>,
    {
        for token in tokens {
            self.push_token(token)?;
        }
        self.finish()
    }

    fn push_token(&mut self, token: Token<'src>) -> PResult<()> {
        match token {
            Token::Number(v) => self.output.push(Node::Literal(v)),
            // Resolved lazily, when the call is reduced.
            Token::FunctionName(name) => self.operators.push(Pending::Function(name)),
            Token::InfixOperator(symbol) => self.push_operator(symbol)?,
            Token::OpenParen => self.operators.push(Pending::OpenParen),
            Token::CloseParen => self.close_paren()?,
            Token::Comma => self.flush_argument()?,
        }
        Ok(())
    }

    fn operator_precedence(&self, symbol: &str) -> PResult<Precedence> {
        self.builtins
            .lookup(symbol)
            .and_then(Definition::precedence)
            .ok_or_else(|| ErrorKind::UndefinedOperator(symbol.to_string()))
    }

    fn push_operator(&mut self, symbol: &'src str) -> PResult<()> {
        let precedence = self.operator_precedence(symbol)?;

        // Ties reduce the stacked operator first: left associativity.
        while let Some(&Pending::Operator(top)) = self.operators.last() {
            if self.operator_precedence(top)? < precedence {
                break;
            }
            self.operators.pop();
            self.reduce(Pending::Operator(top))?;
        }

        self.operators.push(Pending::Operator(symbol));
        Ok(())
    }

    fn close_paren(&mut self) -> PResult<()> {
        loop {
            match self.operators.pop() {
                None => return Err(ErrorKind::MismatchedParens),
                Some(Pending::OpenParen) => break,
                Some(pending) => self.reduce(pending)?,
            }
        }

        if let Some(&Pending::Function(name)) = self.operators.last() {
            self.operators.pop();
            self.reduce(Pending::Function(name))?;
        }
        Ok(())
    }

    /// Emits the finished argument, leaving the enclosing call open.
    fn flush_argument(&mut self) -> PResult<()> {
        loop {
            match self.operators.last() {
                None => return Err(ErrorKind::MismatchedParens),
                Some(Pending::OpenParen | Pending::Function(_)) => return Ok(()),
                Some(Pending::Operator(symbol)) => {
                    let symbol = *symbol;
                    self.operators.pop();
                    self.reduce(Pending::Operator(symbol))?;
                }
            }
        }
    }

    fn reduce(&mut self, pending: Pending<'src>) -> PResult<()> {
        let builtins = self.builtins;
        let node = match pending {
            Pending::Operator(symbol) => match builtins.lookup(symbol) {
                Some(def @ Definition::BinaryOperator { .. }) => Node::from(def),
                _ => return Err(ErrorKind::UndefinedOperator(symbol.to_string())),
            },
            Pending::Function(name) => builtins
                .lookup(name)
                .map(Node::from)
                .ok_or_else(|| ErrorKind::UndefinedFunction(name.to_string()))?,
            Pending::OpenParen => return Err(ErrorKind::MismatchedParens),
        };

        log::trace!("emit {node:?}");
        self.output.push(node);
        Ok(())
    }

    fn finish(mut self) -> PResult<Vec<Node<'b>>> {
        while let Some(pending) = self.operators.pop() {
            self.reduce(pending)?;
        }
        log::debug!("postfix: {:?}", self.output);
        Ok(self.output)
    }
}

/// Converts a token sequence into a postfix program, resolving every
/// operator and function against `builtins`.
pub fn parse<'b>(builtins: &'b Builtins, tokens: &[Token<'_>]) -> PResult<Vec<Node<'b>>> {
    Parser::new(builtins).parse(tokens.iter().copied())
}
