pub(crate) mod builtin;
pub(crate) mod eval;
pub(crate) mod node;

pub use builtin::{BinaryFn, Builtins, Definition, NAryFn, Precedence};
pub use eval::{evaluate, Interpreter};
pub use node::{Apply, Node};
