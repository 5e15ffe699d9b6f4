use crate::amount::parse_amount;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Display-only currency rendering. Defaults to Indonesian Rupiah:
/// `Rp 1.234.567`, no fractional digits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub thousands_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "Rp".to_string(),
            thousands_separator: '.',
        }
    }
}

impl CurrencyFormat {
    pub fn new(symbol: impl Into<String>, thousands_separator: char) -> Self {
        Self {
            symbol: symbol.into(),
            thousands_separator,
        }
    }

    pub fn format(&self, value: Decimal) -> String {
        let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded < Decimal::ZERO { "-" } else { "" };
        let digits = rounded.abs().trunc().to_string();

        format!(
            "{sign}{} {}",
            self.symbol,
            group_thousands(&digits, self.thousands_separator)
        )
    }

    /// Format a decimal literal as entered by the user
    pub fn format_text(&self, text: &str) -> String {
        self.format(parse_amount(text))
    }
}

pub fn format_idr(value: Decimal) -> String {
    CurrencyFormat::default().format(value)
}

pub fn format_amount_text(text: &str) -> String {
    CurrencyFormat::default().format_text(text)
}

fn group_thousands(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len.saturating_add(len / 3));

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len.saturating_sub(i)) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Decimal::ZERO, "Rp 0")]
    #[case(Decimal::new(999, 0), "Rp 999")]
    #[case(Decimal::new(1000, 0), "Rp 1.000")]
    #[case(Decimal::new(1_234_567, 0), "Rp 1.234.567")]
    #[case(Decimal::new(-50_000, 0), "-Rp 50.000")]
    #[case(Decimal::new(3333, 2), "Rp 33")]
    #[case(Decimal::new(1_999_950, 2), "Rp 20.000")]
    #[case(Decimal::new(-4, 1), "Rp 0")]
    fn formats_rupiah(#[case] value: Decimal, #[case] expected: &str) {
        assert_eq!(format_idr(value), expected);
    }

    #[test]
    fn formats_literals_through_lenient_parse() {
        assert_eq!(format_amount_text("150000"), "Rp 150.000");
        assert_eq!(format_amount_text("not a number"), "Rp 0");
    }

    #[test]
    fn custom_symbol_and_separator() {
        let format = CurrencyFormat::new("IDR", ',');
        assert_eq!(format.format(Decimal::new(2_500_000, 0)), "IDR 2,500,000");
    }
}
