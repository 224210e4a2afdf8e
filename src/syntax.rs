mod lexer;
mod parser;
mod token;

pub use lexer::{parse_number, tokenize};
pub use parser::parse;
pub use token::Token;
