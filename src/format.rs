use crate::{ExError, ExResult};

/// Describes how numbers are rendered for display or speech synthesis. The default is
/// the decimal style of the en-US locale, i.e., `1234.5678` becomes `1,234.568`.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub struct NumberFormat {
    pub grouping_separator: Option<char>,
    pub decimal_separator: char,
    /// Values are rounded half away from zero to this many fraction digits and trailing
    /// zeros are dropped.
    pub max_fraction_digits: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::decimal()
    }
}

fn group_digits(digits: &str, sep: char) -> String {
    let mut res = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            res.push(sep);
        }
        res.push(c);
    }
    res
}

impl NumberFormat {
    pub const fn decimal() -> Self {
        Self {
            grouping_separator: Some(','),
            decimal_separator: '.',
            max_fraction_digits: 3,
        }
    }

    /// Like [`decimal`](NumberFormat::decimal) but without grouping of thousands.
    pub const fn plain() -> Self {
        Self {
            grouping_separator: None,
            decimal_separator: '.',
            max_fraction_digits: 3,
        }
    }

    pub fn with_grouping_separator(mut self, sep: Option<char>) -> Self {
        self.grouping_separator = sep;
        self
    }

    pub fn with_decimal_separator(mut self, sep: char) -> Self {
        self.decimal_separator = sep;
        self
    }

    pub fn with_max_fraction_digits(mut self, n: usize) -> Self {
        self.max_fraction_digits = n;
        self
    }

    /// Renders `value`.
    ///
    /// # Errors
    ///
    /// NaN and infinite values cannot be rendered and result in
    /// [`InvalidResultFormatting`](ExError::InvalidResultFormatting).
    pub fn format(&self, value: f64) -> ExResult<String> {
        if !value.is_finite() {
            return Err(ExError::InvalidResultFormatting(value));
        }
        let digits = self.max_fraction_digits.min(15);
        let abs = value.abs();
        let scale = 10f64.powi(digits as i32);
        // beyond 1e15 an f64 has no fraction digits left to round
        let rounded = if abs < 1e15 {
            (abs * scale).round() / scale
        } else {
            abs
        };
        let fixed = format!("{:.*}", digits, rounded);
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, f.trim_end_matches('0')),
            None => (fixed.as_str(), ""),
        };
        let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();

        let mut res = String::new();
        if value < 0.0 && !is_zero {
            res.push('-');
        }
        match self.grouping_separator {
            Some(sep) => res.push_str(&group_digits(int_part, sep)),
            None => res.push_str(int_part),
        }
        if !frac_part.is_empty() {
            res.push(self.decimal_separator);
            res.push_str(frac_part);
        }
        Ok(res)
    }
}

#[cfg(test)]
mod tests {
    use super::NumberFormat;
    use crate::ExError;

    #[test]
    fn test_decimal() {
        let nf = NumberFormat::decimal();
        assert_eq!(nf.format(0.0).unwrap(), "0");
        assert_eq!(nf.format(23.0).unwrap(), "23");
        assert_eq!(nf.format(999.0).unwrap(), "999");
        assert_eq!(nf.format(1000.0).unwrap(), "1,000");
        assert_eq!(nf.format(1234.5678).unwrap(), "1,234.568");
        assert_eq!(nf.format(-1234567.5).unwrap(), "-1,234,567.5");
        assert_eq!(nf.format(0.1 + 0.2).unwrap(), "0.3");
        assert_eq!(nf.format(2.0 / 3.0).unwrap(), "0.667");
        assert_eq!(nf.format(0.0005).unwrap(), "0.001");
        assert_eq!(nf.format(-0.0001).unwrap(), "0");
        assert_eq!(nf.format(-0.0).unwrap(), "0");
    }

    #[test]
    fn test_custom() {
        let nf = NumberFormat::plain();
        assert_eq!(nf.format(1234.5).unwrap(), "1234.5");
        let nf = NumberFormat::decimal()
            .with_grouping_separator(Some('.'))
            .with_decimal_separator(',')
            .with_max_fraction_digits(1);
        assert_eq!(nf.format(1234.56).unwrap(), "1.234,6");
        let nf = NumberFormat::plain().with_max_fraction_digits(0);
        assert_eq!(nf.format(2.5).unwrap(), "3");
        assert_eq!(nf.format(-2.5).unwrap(), "-3");
    }

    #[test]
    fn test_huge() {
        let s = NumberFormat::plain().format(1e300).unwrap();
        assert_eq!(s.len(), 301);
        assert!(s.starts_with('1'));
    }

    #[test]
    fn test_not_finite() {
        let nf = NumberFormat::decimal();
        assert_eq!(
            nf.format(f64::INFINITY),
            Err(ExError::InvalidResultFormatting(f64::INFINITY))
        );
        assert!(matches!(
            nf.format(f64::NAN),
            Err(ExError::InvalidResultFormatting(x)) if x.is_nan()
        ));
    }
}
