use tracing::{debug, warn};

use crate::format::NumberFormat;
use crate::parser::{NumeralParser, OperatorParser, ParseToken, ParserChain, Token};
use crate::processor::{CollapseNumbers, ProcessTokens, ProcessorChain};
use crate::segment::{LexicalClass, Segment, WordSegmenter};
use crate::{ExResult, Expression};

/// Outcome of a successful [`Calculator::calculate`].
#[derive(Clone, PartialEq, Debug)]
pub struct Calculation {
    pub expression: Expression,
    /// The recognized expression, e.g., `21+2×3`, to echo back to the user.
    pub rendered: String,
    pub value: f64,
    /// The value as text, ready for display or speech synthesis.
    pub formatted: String,
}

/// Runs the whole pipeline from an utterance to a number. A calculator is immutable
/// once configured and can be shared between threads.
///
/// ```rust
/// # use std::error::Error;
/// # fn main() -> Result<(), Box<dyn Error>> {
/// #
/// use vocalc::Calculator;
///
/// let calculator = Calculator::default();
/// let calculation = calculator.calculate("Twenty one plus two times three")?;
/// assert_eq!(calculation.rendered, "21+2×3");
/// assert_eq!(calculation.value, 27.0);
/// assert_eq!(calculation.formatted, "27");
/// #
/// #     Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Calculator {
    segmenter: Box<dyn Segment>,
    parser: ParserChain,
    processor: ProcessorChain,
    format: NumberFormat,
}

impl Default for Calculator {
    /// English words and decimal numerals, adjacent numbers collapsed, results in the
    /// en-US decimal style.
    fn default() -> Self {
        Self {
            segmenter: Box::new(WordSegmenter),
            parser: ParserChain::new()
                .chained(NumeralParser)
                .chained(OperatorParser),
            processor: ProcessorChain::new().chained(CollapseNumbers),
            format: NumberFormat::decimal(),
        }
    }
}

impl Calculator {
    pub fn with_segmenter<S: Segment + 'static>(mut self, segmenter: S) -> Self {
        self.segmenter = Box::new(segmenter);
        self
    }

    pub fn with_parser(mut self, parser: ParserChain) -> Self {
        self.parser = parser;
        self
    }

    pub fn with_processor(mut self, processor: ProcessorChain) -> Self {
        self.processor = processor;
        self
    }

    pub fn with_format(mut self, format: NumberFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format(&self) -> &NumberFormat {
        &self.format
    }

    /// Lowercases and segments the utterance, turns the spans into tokens, and runs
    /// the token processors. Spans no parser recognizes are dropped.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let lower = text.to_lowercase();
        let spans = self.segmenter.segment(&lower);
        let tokens = spans
            .iter()
            .filter_map(|span| {
                let token = self.parser.try_tokenize(span.text, span.tag);
                if token.is_none() && span.tag == LexicalClass::Number {
                    warn!(span = span.text, "dropped a numeral no parser recognizes");
                }
                token
            })
            .collect::<Vec<_>>();
        debug!(
            n_spans = spans.len(),
            n_tokens = tokens.len(),
            "tokenized {:?}",
            lower
        );
        self.processor.process(tokens)
    }

    /// # Errors
    ///
    /// See [`Expression::from_tokens`](Expression::from_tokens).
    pub fn parse(&self, text: &str) -> ExResult<Expression> {
        Expression::from_tokens(&self.tokenize(text))
    }

    /// Parses, evaluates, and formats an utterance.
    ///
    /// # Errors
    ///
    /// Besides the errors of [`parse`](Calculator::parse), results that cannot be
    /// formatted such as the infinity of `5 / 0` fail with
    /// [`InvalidResultFormatting`](crate::ExError::InvalidResultFormatting).
    pub fn calculate(&self, text: &str) -> ExResult<Calculation> {
        let expression = self.parse(text)?;
        let rendered = expression.render(&self.format);
        let value = expression.eval();
        let formatted = self.format.format(value)?;
        debug!(%rendered, value, "calculated");
        Ok(Calculation {
            expression,
            rendered,
            value,
            formatted,
        })
    }
}
