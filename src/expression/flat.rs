use std::fmt::{self, Display, Formatter};
use std::iter::once;

use tracing::debug;

use crate::expression::flat_details::{self, PairVec};
use crate::format::NumberFormat;
use crate::operators::Operation;
use crate::parser::Token;
use crate::{ExError, ExResult};

/// This is the core data type representing a validated arithmetic statement
/// `n_0 op_1 n_1 ... op_k n_k` with at least one operation. It consists of the leading
/// number and a [`SmallVec`](https://docs.rs/smallvec/) of operation/number pairs in
/// the order they were spoken. Priorities are resolved during evaluation, not while
/// building.
///
/// ```rust
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// #
/// use vocalc::{Expression, Operation, Token};
///
/// let expr = Expression::from_tokens(&[
///     Token::Number(2.0),
///     Token::Operator(Operation::Add),
///     Token::Number(3.0),
///     Token::Operator(Operation::Multiply),
///     Token::Number(4.0),
/// ])?;
/// assert_eq!(expr.eval(), 14.0);
/// assert_eq!(format!("{}", expr), "2+3×4");
/// #
/// #     Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct Expression {
    first: f64,
    pairs: PairVec,
}

impl Expression {
    /// Creates an expression from its leading number and the operation/number pairs
    /// that follow.
    ///
    /// # Errors
    ///
    /// [`NoOperations`](ExError::NoOperations) if `pairs` is empty.
    pub fn new<I>(first: f64, pairs: I) -> ExResult<Self>
    where
        I: IntoIterator<Item = (Operation, f64)>,
    {
        let pairs = pairs.into_iter().collect::<PairVec>();
        if pairs.is_empty() {
            return Err(ExError::NoOperations);
        }
        Ok(Self { first, pairs })
    }

    /// Validates the shape `number (operator number)*` of a token sequence and builds
    /// the expression.
    ///
    /// # Errors
    ///
    /// The checks are run in this order and the first failing one is reported:
    /// * [`NoTokens`](ExError::NoTokens) if `tokens` is empty,
    /// * [`FirstTokenIsNotANumber`](ExError::FirstTokenIsNotANumber),
    /// * [`OddRemainder`](ExError::OddRemainder) if the tokens after the first one
    ///   cannot be split into pairs,
    /// * [`NotOperation`](ExError::NotOperation) or [`NotANumber`](ExError::NotANumber)
    ///   for the first pair that is not an operator followed by a number,
    /// * [`NoOperations`](ExError::NoOperations) if there is only one number.
    pub fn from_tokens(tokens: &[Token]) -> ExResult<Self> {
        let (first, rest) = tokens.split_first().ok_or(ExError::NoTokens)?;
        let first = match first {
            Token::Number(n) => *n,
            Token::Operator(_) => return Err(ExError::FirstTokenIsNotANumber(*first)),
        };
        if rest.len() % 2 != 0 {
            return Err(ExError::OddRemainder);
        }
        let pairs = rest
            .chunks_exact(2)
            .map(|pair| match (pair[0], pair[1]) {
                (Token::Operator(op), Token::Number(n)) => Ok((op, n)),
                (Token::Number(_), _) => Err(ExError::NotOperation(pair[0])),
                (Token::Operator(_), Token::Operator(_)) => Err(ExError::NotANumber(pair[1])),
            })
            .collect::<ExResult<PairVec>>()?;
        let expr = Self::new(first, pairs)?;
        debug!(n_operations = expr.n_operations(), "built expression {}", expr);
        Ok(expr)
    }

    pub fn first(&self) -> f64 {
        self.first
    }

    pub fn pairs(&self) -> &[(Operation, f64)] {
        &self.pairs
    }

    pub fn n_operations(&self) -> usize {
        self.pairs.len()
    }

    /// The token sequence this expression can be rebuilt from.
    pub fn tokens(&self) -> Vec<Token> {
        once(Token::Number(self.first))
            .chain(
                self.pairs
                    .iter()
                    .flat_map(|&(op, n)| [Token::Operator(op), Token::Number(n)]),
            )
            .collect()
    }

    /// Computes the value. Multiplication and division are applied before addition
    /// and subtraction, operations of equal priority from left to right. Division by
    /// zero is not an error but results in an infinity or NaN.
    pub fn eval(&self) -> f64 {
        flat_details::eval_flat(self.first, &self.pairs)
    }

    /// Concatenates all operands and operation symbols in their original order, e.g.,
    /// `21+2×3`. Operands that `format` cannot handle are written as Rust would.
    pub fn render(&self, format: &NumberFormat) -> String {
        let operand = |n: f64| format.format(n).unwrap_or_else(|_| n.to_string());
        let mut res = operand(self.first);
        for &(op, n) in self.pairs.iter() {
            res.push_str(op.symbol());
            res.push_str(&operand(n));
        }
        res
    }
}

/// The expression is displayed as a string created by [`render`](Expression::render)
/// with the default [`NumberFormat`](NumberFormat).
impl Display for Expression {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.render(&NumberFormat::decimal()))
    }
}
