#[cfg(test)]
pub fn assert_float_eq_f64(f1: f64, f2: f64) {
    if (f1 - f2).abs() >= 1e-12 {
        println!("Floats not almost equal.\nf1: {}\nf2: {}\n", f1, f2);
        assert!(false);
    }
}
