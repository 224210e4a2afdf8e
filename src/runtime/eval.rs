use super::{
    builtin::Builtins,
    node::{Apply, Node},
};
use crate::{
    error::{ErrorKind, PResult},
    syntax::{parse, tokenize},
};

/// Runs a postfix program on an operand stack and returns the single
/// value it leaves behind.
pub fn evaluate(nodes: &[Node<'_>]) -> PResult<f64> {
    let mut stack: Vec<f64> = Vec::with_capacity(nodes.len());

    for node in nodes {
        match *node {
            Node::Literal(v) => stack.push(v),
            Node::Call { name, arity, apply } => {
                let underflow = |found: usize| ErrorKind::StackUnderflow {
                    name: name.to_string(),
                    arity,
                    found,
                };
                if stack.len() < arity {
                    return Err(underflow(stack.len()));
                }

                let value = match apply {
                    Apply::Binary(apply) => {
                        // The operand nearer the top is the right-hand side.
                        let found = stack.len();
                        let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                            return Err(underflow(found));
                        };
                        apply(left, right)
                    }
                    Apply::NAry(apply) => {
                        let args = stack.split_off(stack.len() - arity);
                        apply(args.as_slice())
                    }
                };
                log::trace!("{name} => {value}");
                stack.push(value);
            }
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        rest => Err(ErrorKind::MalformedExpression(rest.len())),
    }
}

/// Evaluates expressions against a fixed table of builtins.
#[derive(Debug, Default)]
pub struct Interpreter {
    builtins: Builtins,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an interpreter whose builtins are produced by `configure`
    /// from an empty table.
    ///
    /// ```
    /// use tally::Interpreter;
    ///
    /// let terp = Interpreter::with_builtins(|bs| bs.infix("+", 3, |l, r| l + r));
    /// assert_eq!(terp.interpret("3 + 4"), Ok(7.0));
    /// ```
    pub fn with_builtins<F>(configure: F) -> Self
    where
        F: FnOnce(Builtins) -> Builtins,
    {
        let builtins = configure(Builtins::new());
        log::debug!("interpreter ready with {} builtin(s)", builtins.len());
        Self { builtins }
    }

    pub fn builtins(&self) -> &Builtins {
        &self.builtins
    }

    pub fn interpret(&self, src: &str) -> PResult<f64> {
        let tokens = tokenize(src)?;
        let program = parse(&self.builtins, &tokens)?;
        let value = evaluate(&program)?;
        log::debug!("{src:?} = {value}");
        Ok(value)
    }
}

impl From<Builtins> for Interpreter {
    fn from(builtins: Builtins) -> Self {
        Self { builtins }
    }
}
