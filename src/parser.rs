use crate::definitions::N_NUMBER_WORDS_ON_STACK;
use crate::operators::Operation;
use crate::segment::LexicalClass;
use lazy_static::lazy_static;
use regex::Regex;
use smallvec::SmallVec;
use std::fmt::{self, Debug, Display, Formatter};
use tracing::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Atomic lexical unit extracted from an utterance.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Token {
    Number(f64),
    Operator(Operation),
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Operator(op) => write!(f, "{}", op),
        }
    }
}

/// Implement this trait to teach the pipeline new words. A parser looks at one span
/// of the utterance and either recognizes it as a token or passes.
pub trait ParseToken: Debug + Send + Sync {
    fn try_tokenize(&self, span: &str, tag: LexicalClass) -> Option<Token>;
}

/// Returns the numeric part if `text` is a decimal numeral such as `21`, `.5`, or `1,234.5`.
pub fn is_decimal_text(text: &str) -> Option<f64> {
    lazy_static! {
        static ref RE_DECIMAL: Regex =
            Regex::new(r"^(?:[0-9]{1,3}(?:,[0-9]{3})+|[0-9]+)?(?:\.[0-9]+)?$").unwrap();
    }
    if text.is_empty() || text == "." || !RE_DECIMAL.is_match(text) {
        return None;
    }
    text.replace(',', "").parse::<f64>().ok()
}

fn spelled_out_word(word: &str) -> Option<f64> {
    let n = match word {
        "zero" => 0,
        "one" => 1,
        "two" => 2,
        "three" => 3,
        "four" => 4,
        "five" => 5,
        "six" => 6,
        "seven" => 7,
        "eight" => 8,
        "nine" => 9,
        "ten" => 10,
        "eleven" => 11,
        "twelve" => 12,
        "thirteen" => 13,
        "fourteen" => 14,
        "fifteen" => 15,
        "sixteen" => 16,
        "seventeen" => 17,
        "eighteen" => 18,
        "nineteen" => 19,
        "twenty" => 20,
        "thirty" => 30,
        "forty" => 40,
        "fifty" => 50,
        "sixty" => 60,
        "seventy" => 70,
        "eighty" => 80,
        "ninety" => 90,
        _ => return None,
    };
    Some(f64::from(n))
}

fn scale_word(word: &str) -> Option<f64> {
    match word {
        "hundred" => Some(1e2),
        "thousand" => Some(1e3),
        "million" => Some(1e6),
        "billion" => Some(1e9),
        _ => None,
    }
}

/// Words from zero to ninety-nine, hyphenated or not.
fn spelled_out_compound(word: &str) -> Option<f64> {
    let mut parts = word.split('-');
    let first = spelled_out_word(parts.next()?)?;
    match parts.next() {
        None => Some(first),
        // only tens may be followed by a unit, as in "ninety-nine"
        Some(unit) if first >= 20.0 && first % 10.0 == 0.0 => {
            let unit = spelled_out_word(unit)?;
            if (1.0..10.0).contains(&unit) && parts.next().is_none() {
                Some(first + unit)
            } else {
                None
            }
        }
        Some(_) => None,
    }
}

/// Composes a number phrase with scale words, e.g., `two thousand three hundred and five`.
/// A leading `a` counts as one, `and` is allowed between number words.
fn spelled_out_phrase(words: &[&str]) -> Option<f64> {
    let mut total: f64 = 0.0;
    let mut current: f64 = 0.0;
    for (i, &word) in words.iter().enumerate() {
        match word {
            "a" if i == 0 && words.len() > 1 => current = 1.0,
            "and" if i > 0 && i + 1 < words.len() => (),
            "hundred" => current = current.max(1.0) * 1e2,
            _ => match scale_word(word) {
                Some(scale) => {
                    total += current.max(1.0) * scale;
                    current = 0.0;
                }
                None => current += spelled_out_compound(word)?,
            },
        }
    }
    Some(total + current)
}

/// Returns the value of an English spelled-out number like `seven`, `twenty-one`, or
/// `one hundred and five`.
pub fn is_spelled_out_text(text: &str) -> Option<f64> {
    let lower = text.to_lowercase();
    let words = lower
        .split_whitespace()
        .flat_map(|word| {
            // "two-hundred" is a phrase, "twenty-one" a single number
            let has_scale = word.split('-').any(|part| scale_word(part).is_some());
            word.split(move |c: char| has_scale && c == '-')
        })
        .collect::<SmallVec<[&str; N_NUMBER_WORDS_ON_STACK]>>();
    match words.as_slice() {
        [] => None,
        [word] if scale_word(word).is_none() => spelled_out_compound(word),
        words => spelled_out_phrase(words),
    }
}

/// Recognizes decimal numerals and English spelled-out numbers.
#[derive(Clone, Copy, Default, Eq, PartialEq, Debug)]
pub struct NumeralParser;

impl ParseToken for NumeralParser {
    fn try_tokenize(&self, span: &str, _tag: LexicalClass) -> Option<Token> {
        is_decimal_text(span)
            .or_else(|| is_spelled_out_text(span))
            .map(Token::Number)
    }
}

/// Recognizes operator keywords and symbols, ignoring case.
#[derive(Clone, Copy, Default, Eq, PartialEq, Debug)]
pub struct OperatorParser;

impl ParseToken for OperatorParser {
    fn try_tokenize(&self, span: &str, _tag: LexicalClass) -> Option<Token> {
        let op = match span.to_lowercase().as_str() {
            "+" | "plus" | "add" | "adding" => Operation::Add,
            "-" | "minus" | "subtract" | "subtracting" => Operation::Subtract,
            "*" | "×" | "times" | "multiplied" => Operation::Multiply,
            "/" | "÷" | "divided" | "over" => Operation::Divide,
            _ => return None,
        };
        Some(Token::Operator(op))
    }
}

/// Yields the same token for every span.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ConstantParser(pub Token);

impl ParseToken for ConstantParser {
    fn try_tokenize(&self, _span: &str, _tag: LexicalClass) -> Option<Token> {
        Some(self.0)
    }
}

/// Ordered list of parsers. The first parser that recognizes a span wins, spans nobody
/// recognizes are dropped.
///
/// ```rust
/// use vocalc::{LexicalClass, NumeralParser, OperatorParser, ParseToken, ParserChain, Token};
/// let chain = ParserChain::new()
///     .chained(NumeralParser)
///     .chained(OperatorParser);
/// assert_eq!(chain.try_tokenize("seven", LexicalClass::Word), Some(Token::Number(7.0)));
/// assert_eq!(chain.try_tokenize("the", LexicalClass::Word), None);
/// ```
#[derive(Debug, Default)]
pub struct ParserChain {
    parsers: Vec<Box<dyn ParseToken>>,
}

impl ParserChain {
    pub fn new() -> Self {
        Self {
            parsers: Vec::new(),
        }
    }

    /// Appends a parser with lower precedence than all parsers already in the chain.
    pub fn chained<P: ParseToken + 'static>(mut self, parser: P) -> Self {
        self.parsers.push(Box::new(parser));
        self
    }

    /// Appends all parsers of another chain, keeping their order.
    pub fn extended(mut self, other: ParserChain) -> Self {
        self.parsers.extend(other.parsers);
        self
    }

    pub fn len(&self) -> usize {
        self.parsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsers.is_empty()
    }
}

impl ParseToken for ParserChain {
    fn try_tokenize(&self, span: &str, tag: LexicalClass) -> Option<Token> {
        let token = self
            .parsers
            .iter()
            .find_map(|p| p.try_tokenize(span, tag));
        trace!(span, ?tag, ?token, "tokenized span");
        token
    }
}
