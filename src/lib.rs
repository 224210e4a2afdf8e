//! A small embeddable expression language.
//!
//! Source text is tokenized, converted to postfix with a shunting-yard
//! parser, and evaluated on an operand stack. Every operator and function
//! comes from a caller-supplied [`Builtins`] table.
//!
//! ```
//! use tally::Interpreter;
//!
//! let terp = Interpreter::with_builtins(|bs| {
//!     bs.infix("*", 4, |l, r| l * r)
//!         .infix("+", 3, |l, r| l + r)
//!         .define("max", 2, |args| args[0].max(args[1]))
//! });
//!
//! assert_eq!(terp.interpret("max(5, 3 * 3) + 1"), Ok(10.0));
//! assert!(terp.interpret("sin(3.14)").is_err());
//! ```

mod error;
mod runtime;
mod syntax;

pub use error::{ErrorCategory, ErrorKind, PResult};
pub use runtime::{
    evaluate, Apply, BinaryFn, Builtins, Definition, Interpreter, NAryFn, Node, Precedence,
};
pub use syntax::{parse, parse_number, tokenize, Token};
