//! Decimal parsing and rounding shared by every derivation.
//!
//! User-entered numbers are never an error: anything that does not parse
//! degrades to zero and the inconsistency shows up in validation instead.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Parse a decimal literal, treating empty or non-numeric input as zero.
///
/// Accepts plain (`"12.50"`) and scientific (`"1.5e3"`) notation after
/// trimming surrounding whitespace. Digit separators (`"1_000"`) are not
/// numbers here even though `Decimal::from_str` would take them.
pub fn parse_amount(text: &str) -> Decimal {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.contains('_') {
        return Decimal::ZERO;
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .unwrap_or(Decimal::ZERO)
}

/// Round half-up (away from zero) to whole cents
pub fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Render a value as a literal with exactly two fractional digits
///
/// Padding is textual, so values too wide to carry a scale of 2 (near
/// `Decimal::MAX`) still get their `.00`.
pub fn cents_literal(value: Decimal) -> String {
    let mut rounded = round_cents(value);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    format!("{rounded:.2}")
}

/// Sum parsed literals; saturates instead of overflowing
pub fn sum_amounts<'a>(literals: impl IntoIterator<Item = &'a String>) -> Decimal {
    literals
        .into_iter()
        .map(String::as_str)
        .map(parse_amount)
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("100", Decimal::new(100, 0))]
    #[case(" 12.50 ", Decimal::new(1250, 2))]
    #[case("-7.25", Decimal::new(-725, 2))]
    #[case("1.5e3", Decimal::new(1500, 0))]
    #[case("", Decimal::ZERO)]
    #[case("   ", Decimal::ZERO)]
    #[case("abc", Decimal::ZERO)]
    #[case("12abc", Decimal::ZERO)]
    #[case("1_000", Decimal::ZERO)]
    #[case("_5", Decimal::ZERO)]
    fn parses_or_degrades_to_zero(#[case] input: &str, #[case] expected: Decimal) {
        assert_eq!(parse_amount(input), expected);
    }

    #[rstest]
    #[case(Decimal::new(3333333, 5), "33.33")]
    #[case(Decimal::new(25, 0), "25.00")]
    #[case(Decimal::new(1005, 3), "1.01")]
    #[case(Decimal::new(-1005, 3), "-1.01")]
    #[case(Decimal::new(-1, 3), "0.00")]
    #[case(Decimal::new(5, 1), "0.50")]
    fn renders_two_decimals(#[case] value: Decimal, #[case] expected: &str) {
        assert_eq!(cents_literal(value), expected);
    }

    #[test]
    fn widest_values_still_get_two_decimals() {
        assert_eq!(cents_literal(Decimal::MAX), "79228162514264337593543950335.00");
        assert_eq!(cents_literal(Decimal::MIN), "-79228162514264337593543950335.00");
    }

    #[test]
    fn sums_mixed_literals() {
        let values = vec!["10".to_string(), "".to_string(), "x".to_string(), "2.5".to_string()];
        assert_eq!(sum_amounts(&values), Decimal::new(125, 1));
    }
}
