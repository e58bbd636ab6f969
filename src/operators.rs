use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary operation that consists of a function pointer, a priority, and the symbol
/// used when an expression is rendered.
#[derive(Copy, Clone, Debug)]
pub struct BinOp {
    /// Implementation of the binary operation, e.g., `|a, b| a * b` for multiplication.
    pub apply: fn(f64, f64) -> f64,
    /// Priority of the binary operation. A binary operation with a
    /// higher number will be executed first, i.e., `*` has a higher priority than `+`.
    pub prio: i32,
    pub symbol: &'static str,
}

const ADD: BinOp = BinOp {
    apply: |a, b| a + b,
    prio: 5,
    symbol: "+",
};
const SUBTRACT: BinOp = BinOp {
    apply: |a, b| a - b,
    prio: 5,
    symbol: "-",
};
const MULTIPLY: BinOp = BinOp {
    apply: |a, b| a * b,
    prio: 10,
    symbol: "×",
};
const DIVIDE: BinOp = BinOp {
    apply: |a, b| a / b,
    prio: 10,
    symbol: "/",
};

/// The operations an utterance can contain.
///
/// ```rust
/// use vocalc::Operation;
/// assert_eq!(Operation::Multiply.evaluate(2.0, 3.5), 7.0);
/// assert!(Operation::Divide.priority() > Operation::Subtract.priority());
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Looks up the binary operation backing this variant.
    pub fn bin_op(&self) -> &'static BinOp {
        match self {
            Operation::Add => &ADD,
            Operation::Subtract => &SUBTRACT,
            Operation::Multiply => &MULTIPLY,
            Operation::Divide => &DIVIDE,
        }
    }

    pub fn priority(&self) -> i32 {
        self.bin_op().prio
    }

    pub fn symbol(&self) -> &'static str {
        self.bin_op().symbol
    }

    /// Applies the operation. Division by zero follows IEEE-754 and returns an
    /// infinity or NaN instead of failing.
    pub fn evaluate(&self, left: f64, right: f64) -> f64 {
        (self.bin_op().apply)(left, right)
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
