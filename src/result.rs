use crate::parser::Token;
use thiserror::Error;

/// This will be thrown at you if turning an utterance into a number went wrong. Ok,
/// obviously it is not an exception, so thrown needs to be understood figuratively.
///
/// All variants except [`InvalidResultFormatting`](ExError::InvalidResultFormatting)
/// are raised while building an [`Expression`](crate::Expression) from tokens.
/// Evaluation itself never fails.
#[derive(Error, Clone, PartialEq, Debug)]
pub enum ExError {
    #[error("invalid expression: no tokens")]
    NoTokens,
    #[error("the expression should start with a number, found {0}")]
    FirstTokenIsNotANumber(Token),
    /// The tokens after the first one do not form complete operator/number pairs.
    #[error("invalid expression: incomplete operator/number pair")]
    OddRemainder,
    #[error("invalid order: expected an operator, found {0}")]
    NotOperation(Token),
    #[error("invalid order: expected a number, found {0}")]
    NotANumber(Token),
    /// A single number and nothing to apply to it.
    #[error("invalid expression: no operations")]
    NoOperations,
    #[error("cannot format {0}")]
    InvalidResultFormatting(f64),
}

/// Result type of this crate with [`ExError`](ExError) as error type.
pub type ExResult<U> = Result<U, ExError>;
