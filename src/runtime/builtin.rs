use std::{collections::HashMap, fmt};

/// Binding strength of an infix operator. Higher binds tighter.
pub type Precedence = u8;

pub type BinaryFn = Box<dyn Fn(f64, f64) -> f64 + Send + Sync>;
pub type NAryFn = Box<dyn Fn(&[f64]) -> f64 + Send + Sync>;

pub enum Definition {
    BinaryOperator {
        symbol: String,
        precedence: Precedence,
        apply: BinaryFn,
    },
    NAryFunction {
        name: String,
        arity: usize,
        apply: NAryFn,
    },
}

impl Definition {
    pub fn name(&self) -> &str {
        match self {
            Self::BinaryOperator { symbol, .. } => symbol,
            Self::NAryFunction { name, .. } => name,
        }
    }

    pub fn arity(&self) -> usize {
        match self {
            Self::BinaryOperator { .. } => 2,
            Self::NAryFunction { arity, .. } => *arity,
        }
    }

    /// `None` for functions, which never take part in precedence climbing.
    pub fn precedence(&self) -> Option<Precedence> {
        match self {
            Self::BinaryOperator { precedence, .. } => Some(*precedence),
            Self::NAryFunction { .. } => None,
        }
    }
}

impl fmt::Debug for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BinaryOperator {
                symbol, precedence, ..
            } => f
                .debug_struct("BinaryOperator")
                .field("symbol", symbol)
                .field("precedence", precedence)
                .finish_non_exhaustive(),
            Self::NAryFunction { name, arity, .. } => f
                .debug_struct("NAryFunction")
                .field("name", name)
                .field("arity", arity)
                .finish_non_exhaustive(),
        }
    }
}

/// Table of operators and functions an [`Interpreter`](crate::Interpreter)
/// understands.
///
/// Operators and functions share one namespace. Registering a name twice
/// replaces the earlier definition.
#[derive(Debug, Default)]
pub struct Builtins {
    entries: HashMap<String, Definition>,
}

impl Builtins {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a left-associative infix operator.
    ///
    /// # Panics
    ///
    /// Panics if `precedence` is zero.
    pub fn infix<F>(self, symbol: &str, precedence: Precedence, apply: F) -> Self
    where
        F: Fn(f64, f64) -> f64 + Send + Sync + 'static,
    {
        assert!(
            precedence > 0,
            "precedence of `{symbol}` must be positive, got {precedence}"
        );
        self.insert(Definition::BinaryOperator {
            symbol: symbol.to_string(),
            precedence,
            apply: Box::new(apply),
        })
    }

    /// Registers a function taking exactly `arity` arguments, passed to
    /// `apply` in call order.
    pub fn define<F>(self, name: &str, arity: usize, apply: F) -> Self
    where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
    {
        self.insert(Definition::NAryFunction {
            name: name.to_string(),
            arity,
            apply: Box::new(apply),
        })
    }

    fn insert(mut self, def: Definition) -> Self {
        let name = def.name().to_string();
        log::trace!("registering {def:?}");
        if let Some(old) = self.entries.insert(name, def) {
            log::debug!("`{}` shadows earlier {old:?}", old.name());
        }
        self
    }

    pub fn lookup(&self, name: &str) -> Option<&Definition> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The arithmetic operators and math functions installed by default.
    pub fn standard() -> Self {
        native::install(Self::new())
    }
}

mod native {
    use super::Builtins;
    use std::f64::consts;

    pub(super) fn install(builtins: Builtins) -> Builtins {
        builtins
            .infix("+", 3, |l, r| l + r)
            .infix("-", 3, |l, r| l - r)
            .infix("*", 4, |l, r| l * r)
            .infix("/", 4, |l, r| l / r)
            .infix("%", 4, |l, r| l % r)
            .infix("^", 5, f64::powf)
            .define("abs", 1, |args| args[0].abs())
            .define("sqrt", 1, |args| args[0].sqrt())
            .define("floor", 1, |args| args[0].floor())
            .define("ceil", 1, |args| args[0].ceil())
            .define("round", 1, |args| args[0].round())
            .define("ln", 1, |args| args[0].ln())
            .define("log", 2, |args| args[0].log(args[1]))
            .define("sin", 1, |args| args[0].sin())
            .define("cos", 1, |args| args[0].cos())
            .define("tan", 1, |args| args[0].tan())
            .define("min", 2, |args| args[0].min(args[1]))
            .define("max", 2, |args| args[0].max(args[1]))
            .define("clamp", 3, clamp)
            .define("pi", 0, |_| consts::PI)
            .define("e", 0, |_| consts::E)
    }

    fn clamp(args: &[f64]) -> f64 {
        let (lo, hi, value) = (args[0], args[1], args[2]);
        if value < lo {
            lo
        } else if value > hi {
            hi
        } else {
            value
        }
    }
}
