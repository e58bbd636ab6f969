#![no_main]
use libfuzzer_sys::fuzz_target;

use vocalc::{Calculator, Expression};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let calculator = Calculator::default();
        if let Ok(expr) = calculator.parse(s) {
            let rebuilt = Expression::from_tokens(&expr.tokens()).unwrap();
            assert_eq!(rebuilt, expr);
            let _ = calculator.calculate(s);
        }
    }
});
