#![doc(html_root_url = "https://docs.rs/vocalc/0.3.0")]
//! Vocalc turns spoken arithmetic into numbers. The input is the text a speech
//! recognizer produced, e.g., "twenty one plus two times three", the output is `27`.
//!
//! ```rust
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! #
//! let result = vocalc::eval_str("twenty one plus two times three")?;
//! assert_eq!(result, 27.0);
//! #
//! #     Ok(())
//! # }
//! ```
//!
//! The text passes a pipeline of exchangeable stages.
//! 1. A [`Segment`](Segment) implementation splits the lowercased text into tagged spans.
//! 2. A [`ParserChain`](ParserChain) turns each span into a [`Token`](Token) or drops it.
//!    Filler words like "the" or "by" vanish here.
//! 3. A [`ProcessorChain`](ProcessorChain) normalizes the tokens. By default adjacent
//!    numbers are summed since "twenty one" arrives as `20` and `1`.
//! 4. [`Expression::from_tokens`](Expression::from_tokens) checks that tokens have the
//!    shape `number (operator number)*`.
//! 5. [`Expression::eval`](Expression::eval) applies multiplication and division before
//!    addition and subtraction, and operations of equal priority from left to right.
//!
//! A [`Calculator`](Calculator) bundles the stages together with a
//! [`NumberFormat`](NumberFormat) for the result.
//! ```rust
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! #
//! use vocalc::{Calculator, NumberFormat};
//! let calculator = Calculator::default().with_format(NumberFormat::plain());
//! let calculation = calculator.calculate("1,000 divided by 3 minus 10 - 2")?;
//! assert_eq!(calculation.rendered, "1000/3-10-2");
//! assert_eq!(calculation.formatted, "321.333");
//! #
//! #     Ok(())
//! # }
//! ```
//!
//! There are no parentheses, no functions, and no unary minus.
//!
//! ## Custom words
//!
//! Implement [`ParseToken`](ParseToken) and put it into the parser chain. Parsers that
//! are chained first win.
//! ```rust
//! # use std::error::Error;
//! # fn main() -> Result<(), Box<dyn Error>> {
//! #
//! use vocalc::{
//!     Calculator, LexicalClass, NumeralParser, OperatorParser, ParseToken, ParserChain,
//!     Token,
//! };
//! #[derive(Debug)]
//! struct Dozen;
//! impl ParseToken for Dozen {
//!     fn try_tokenize(&self, span: &str, _tag: LexicalClass) -> Option<Token> {
//!         (span == "dozen").then_some(Token::Number(12.0))
//!     }
//! }
//! let parser = ParserChain::new()
//!     .chained(Dozen)
//!     .chained(NumeralParser)
//!     .chained(OperatorParser);
//! let calculator = Calculator::default().with_parser(parser);
//! assert_eq!(calculator.calculate("a dozen times 3")?.value, 36.0);
//! #
//! #     Ok(())
//! # }
//! ```
//!
//! ## Serialization
//!
//! With the feature `serde` enabled, tokens and expressions can be serialized.
//! Expressions are serialized as their token sequence and validated again when they
//! are deserialized.

mod calculator;
mod definitions;
mod expression;
mod format;
mod operators;
mod parser;
mod processor;
mod result;
mod segment;
mod util;

pub use {
    calculator::{Calculation, Calculator},
    expression::Expression,
    format::NumberFormat,
    operators::{BinOp, Operation},
    parser::{
        is_decimal_text, is_spelled_out_text, ConstantParser, NumeralParser, OperatorParser,
        ParseToken, ParserChain, Token,
    },
    processor::{CollapseNumbers, NoProcessing, ProcessTokens, ProcessorChain},
    result::{ExError, ExResult},
    segment::{LexicalClass, Segment, Span, WordSegmenter},
};

/// Parses and evaluates an utterance with the default [`Calculator`](Calculator).
/// In contrast to [`Calculator::calculate`](Calculator::calculate) the result is not
/// formatted, hence division by zero yields an infinity instead of an error.
///
/// # Errors
///
/// See [`Expression::from_tokens`](Expression::from_tokens).
///
pub fn eval_str(text: &str) -> ExResult<f64> {
    Ok(Calculator::default().parse(text)?.eval())
}

#[cfg(test)]
mod tests {
    use crate::{eval_str, util::assert_float_eq_f64, ExError};

    #[test]
    fn test_eval_str() {
        assert_float_eq_f64(eval_str("2 + 3 * 4").unwrap(), 14.0);
        assert_float_eq_f64(eval_str("10 - 3 - 2").unwrap(), 5.0);
        assert_float_eq_f64(eval_str("20 / 5 / 2").unwrap(), 2.0);
        assert_float_eq_f64(eval_str("twenty-one plus two").unwrap(), 23.0);
        assert_eq!(eval_str("5 / 0").unwrap(), f64::INFINITY);
        assert_eq!(eval_str(""), Err(ExError::NoTokens));
    }
}
