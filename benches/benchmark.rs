use criterion::{black_box, criterion_group, criterion_main, Criterion};
use evalexpr::build_operator_tree;
use vocalc::{Calculator, Expression, Operation};

const BENCH_UTTERANCE: &str =
    "twenty one plus two times three minus forty two divided by seven times 3.5 plus ninety-nine";
const BENCH_EXPRESSION_STR: &str = "21.0 + 2.0 * 3.0 - 42.0 / 7.0 * 3.5 + 99.0";
const BENCH_REF_VALUE: f64 = 21.0 + 2.0 * 3.0 - 42.0 / 7.0 * 3.5 + 99.0;

fn assert_float_eq(f1: f64, f2: f64) {
    assert!((f1 - f2).abs() < 1e-12);
}

fn long_expression(n_pairs: usize) -> Expression {
    let pairs = (0..n_pairs).map(|i| (Operation::ALL[i % 4], (i % 9 + 1) as f64));
    Expression::new(1.0, pairs).unwrap()
}

fn vocalc_calculate(c: &mut Criterion) {
    let calculator = Calculator::default();
    c.bench_function("vocalc_calculate", |b| {
        b.iter(|| {
            let calculation = calculator.calculate(black_box(BENCH_UTTERANCE)).unwrap();
            assert_float_eq(calculation.value, BENCH_REF_VALUE);
        })
    });
}

fn vocalc_parse(c: &mut Criterion) {
    let calculator = Calculator::default();
    c.bench_function("vocalc_parse", |b| {
        b.iter(|| calculator.parse(black_box(BENCH_UTTERANCE)).unwrap())
    });
}

fn vocalc_eval(c: &mut Criterion) {
    let expr = Calculator::default().parse(BENCH_UTTERANCE).unwrap();
    c.bench_function("vocalc_eval", |b| {
        b.iter(|| assert_float_eq(black_box(&expr).eval(), BENCH_REF_VALUE))
    });
    let expr = long_expression(1000);
    c.bench_function("vocalc_eval_long", |b| b.iter(|| black_box(&expr).eval()));
}

fn evalexpr_eval(c: &mut Criterion) {
    let tree = build_operator_tree(BENCH_EXPRESSION_STR).unwrap();
    c.bench_function("evalexpr_eval", |b| {
        b.iter(|| {
            assert_float_eq(
                black_box(&tree).eval_number().unwrap(),
                BENCH_REF_VALUE,
            )
        })
    });
}

criterion_group!(
    benches,
    vocalc_calculate,
    vocalc_parse,
    vocalc_eval,
    evalexpr_eval
);
criterion_main!(benches);
