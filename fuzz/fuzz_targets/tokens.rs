#![no_main]
use libfuzzer_sys::fuzz_target;

use vocalc::{Expression, Operation, Token};

fuzz_target!(|data: &[u8]| {
    let tokens = data
        .iter()
        .map(|b| match b % 8 {
            0..=3 => Token::Operator(Operation::ALL[(b % 4) as usize]),
            _ => Token::Number(f64::from(*b)),
        })
        .collect::<Vec<_>>();
    if let Ok(expr) = Expression::from_tokens(&tokens) {
        let _ = expr.eval();
    }
});
