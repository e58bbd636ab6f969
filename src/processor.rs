use crate::parser::Token;
use std::fmt::Debug;
use tracing::trace;

/// A normalization pass over the token sequence that runs before the expression is built.
pub trait ProcessTokens: Debug + Send + Sync {
    fn process(&self, tokens: Vec<Token>) -> Vec<Token>;
}

/// Returns the tokens unchanged.
#[derive(Clone, Copy, Default, Eq, PartialEq, Debug)]
pub struct NoProcessing;

impl ProcessTokens for NoProcessing {
    fn process(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens
    }
}

/// Sums up runs of adjacent numbers. Spelled-out numbers such as "twenty one" arrive
/// as two number tokens that are meant as one.
///
/// ```rust
/// use vocalc::{CollapseNumbers, Operation, ProcessTokens, Token};
/// let tokens = vec![
///     Token::Number(20.0),
///     Token::Number(1.0),
///     Token::Operator(Operation::Add),
///     Token::Number(2.0),
/// ];
/// assert_eq!(
///     CollapseNumbers.process(tokens),
///     vec![Token::Number(21.0), Token::Operator(Operation::Add), Token::Number(2.0)]
/// );
/// ```
#[derive(Clone, Copy, Default, Eq, PartialEq, Debug)]
pub struct CollapseNumbers;

impl ProcessTokens for CollapseNumbers {
    fn process(&self, tokens: Vec<Token>) -> Vec<Token> {
        let mut res = Vec::with_capacity(tokens.len());
        let mut pending: Option<f64> = None;
        for token in tokens {
            match token {
                Token::Number(n) => pending = Some(pending.unwrap_or(0.0) + n),
                Token::Operator(_) => {
                    if let Some(n) = pending.take() {
                        res.push(Token::Number(n));
                    }
                    res.push(token);
                }
            }
        }
        if let Some(n) = pending {
            res.push(Token::Number(n));
        }
        res
    }
}

/// Processors applied one after the other in the order they were chained.
#[derive(Debug, Default)]
pub struct ProcessorChain {
    processors: Vec<Box<dyn ProcessTokens>>,
}

impl ProcessorChain {
    pub fn new() -> Self {
        Self {
            processors: Vec::new(),
        }
    }

    pub fn chained<P: ProcessTokens + 'static>(mut self, processor: P) -> Self {
        self.processors.push(Box::new(processor));
        self
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }
}

impl ProcessTokens for ProcessorChain {
    fn process(&self, tokens: Vec<Token>) -> Vec<Token> {
        self.processors.iter().fold(tokens, |tokens, p| {
            let res = p.process(tokens);
            trace!(processor = ?p, n_tokens = res.len(), "processed tokens");
            res
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operators::Operation;

    const PLUS: Token = Token::Operator(Operation::Add);
    const TIMES: Token = Token::Operator(Operation::Multiply);

    fn num(n: f64) -> Token {
        Token::Number(n)
    }

    #[test]
    fn test_collapse() {
        assert_eq!(
            CollapseNumbers.process(vec![num(20.0), num(1.0), PLUS, num(2.0)]),
            vec![num(21.0), PLUS, num(2.0)]
        );
        assert_eq!(
            CollapseNumbers.process(vec![PLUS, num(1.0), num(2.0), num(3.0), TIMES, TIMES]),
            vec![PLUS, num(6.0), TIMES, TIMES]
        );
        assert!(CollapseNumbers.process(vec![]).is_empty());
        assert_eq!(CollapseNumbers.process(vec![PLUS]), vec![PLUS]);
    }

    #[test]
    fn test_collapse_idempotent() {
        let inputs = vec![
            vec![num(20.0), num(1.0), PLUS, num(2.0), num(0.5)],
            vec![PLUS, PLUS, num(3.0)],
            vec![num(1.0)],
        ];
        for tokens in inputs {
            let once = CollapseNumbers.process(tokens);
            let twice = CollapseNumbers.process(once.clone());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_chain() {
        let tokens = vec![num(1.0), num(2.0), PLUS, num(3.0)];
        assert_eq!(ProcessorChain::new().process(tokens.clone()), tokens);
        assert_eq!(NoProcessing.process(tokens.clone()), tokens);
        let chain = ProcessorChain::new()
            .chained(NoProcessing)
            .chained(CollapseNumbers)
            .chained(CollapseNumbers);
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.process(tokens), vec![num(3.0), PLUS, num(3.0)]);
    }
}
