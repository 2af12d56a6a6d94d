//! Common utility functions for the calculation engines.
//!
//! This module holds the shared number handling: interpreting free text as a
//! number, guarding divisions, and rounding values for display.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Parses the longest numeric prefix of `input`.
///
/// Leading whitespace is skipped. The prefix may carry a sign, an integer
/// part, a fractional part and an exponent, or be the word `Infinity`.
/// Anything after the prefix is ignored, so `"12kg"` parses as `12`.
/// Returns `None` when no digits can be read.
///
/// # Examples
///
/// ```
/// use profit_core::calculations::common::parse_leading_number;
///
/// assert_eq!(parse_leading_number("  42.5"), Some(42.5));
/// assert_eq!(parse_leading_number("1e3 units"), Some(1000.0));
/// assert_eq!(parse_leading_number(".5"), Some(0.5));
/// assert_eq!(parse_leading_number("abc"), None);
/// assert_eq!(parse_leading_number(""), None);
/// ```
pub fn parse_leading_number(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        // A lone "." after digits is still part of the number ("5." == 5).
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

/// Parses `input` like [`parse_leading_number`], substituting zero when no
/// number can be read.
pub fn parse_or_zero(input: &str) -> f64 {
    parse_leading_number(input).unwrap_or_else(|| {
        if !input.trim().is_empty() {
            tracing::trace!(input, "non-numeric input treated as zero");
        }
        0.0
    })
}

/// Returns `value` unchanged when finite, otherwise zero.
///
/// Used for ratios whose denominator may be zero.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Rounds a value to exactly two decimal places for display, using half-up
/// rounding (away from zero at the midpoint).
///
/// Returns `None` for infinities and NaN, which have no decimal form.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use profit_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(123.454), Some(dec!(123.45)));
/// assert_eq!(round_half_up(-2.5), Some(dec!(-2.50)));
/// assert_eq!(round_half_up(f64::INFINITY), None);
/// ```
pub fn round_half_up(value: f64) -> Option<Decimal> {
    Decimal::from_f64(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // parse_leading_number tests
    // =========================================================================

    #[test]
    fn parse_plain_integer_and_decimal() {
        assert_eq!(parse_leading_number("100"), Some(100.0));
        assert_eq!(parse_leading_number("12.25"), Some(12.25));
    }

    #[test]
    fn parse_skips_leading_whitespace() {
        assert_eq!(parse_leading_number(" \t 7"), Some(7.0));
    }

    #[test]
    fn parse_accepts_signs() {
        assert_eq!(parse_leading_number("-3.5"), Some(-3.5));
        assert_eq!(parse_leading_number("+8"), Some(8.0));
    }

    #[test]
    fn parse_stops_at_first_non_numeric_character() {
        assert_eq!(parse_leading_number("12abc"), Some(12.0));
        assert_eq!(parse_leading_number("3.5.1"), Some(3.5));
        assert_eq!(parse_leading_number("1,234"), Some(1.0));
    }

    #[test]
    fn parse_handles_bare_fraction_and_trailing_dot() {
        assert_eq!(parse_leading_number(".25"), Some(0.25));
        assert_eq!(parse_leading_number("5."), Some(5.0));
        assert_eq!(parse_leading_number("-.5"), Some(-0.5));
    }

    #[test]
    fn parse_reads_exponent_only_when_complete() {
        assert_eq!(parse_leading_number("2e2"), Some(200.0));
        assert_eq!(parse_leading_number("2E-1"), Some(0.2));
        assert_eq!(parse_leading_number("2e"), Some(2.0));
        assert_eq!(parse_leading_number("2e+"), Some(2.0));
    }

    #[test]
    fn parse_reads_infinity() {
        assert_eq!(parse_leading_number("Infinity"), Some(f64::INFINITY));
        assert_eq!(parse_leading_number("-Infinity"), Some(f64::NEG_INFINITY));
    }

    #[test]
    fn parse_rejects_text_without_digits() {
        assert_eq!(parse_leading_number(""), None);
        assert_eq!(parse_leading_number("   "), None);
        assert_eq!(parse_leading_number("abc"), None);
        assert_eq!(parse_leading_number("."), None);
        assert_eq!(parse_leading_number("-"), None);
        assert_eq!(parse_leading_number("e5"), None);
        assert_eq!(parse_leading_number("NaN"), None);
    }

    // =========================================================================
    // parse_or_zero / finite_or_zero tests
    // =========================================================================

    #[test]
    fn parse_or_zero_substitutes_zero() {
        assert_eq!(parse_or_zero(""), 0.0);
        assert_eq!(parse_or_zero("n/a"), 0.0);
        assert_eq!(parse_or_zero("19.5"), 19.5);
    }

    #[test]
    fn finite_or_zero_replaces_non_finite_values() {
        assert_eq!(finite_or_zero(f64::INFINITY), 0.0);
        assert_eq!(finite_or_zero(f64::NEG_INFINITY), 0.0);
        assert_eq!(finite_or_zero(f64::NAN), 0.0);
        assert_eq!(finite_or_zero(-12.5), -12.5);
    }

    // =========================================================================
    // round_half_up tests
    // =========================================================================

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        assert_eq!(round_half_up(123.454), Some(dec!(123.45)));
    }

    #[test]
    fn round_half_up_rounds_up_above_midpoint() {
        assert_eq!(round_half_up(123.456), Some(dec!(123.46)));
    }

    #[test]
    fn round_half_up_moves_exact_midpoint_away_from_zero() {
        assert_eq!(round_half_up(0.125), Some(dec!(0.13)));
        assert_eq!(round_half_up(-0.125), Some(dec!(-0.13)));
    }

    #[test]
    fn round_half_up_handles_zero() {
        assert_eq!(round_half_up(0.0), Some(dec!(0.00)));
    }

    #[test]
    fn round_half_up_rejects_non_finite_values() {
        assert_eq!(round_half_up(f64::NAN), None);
        assert_eq!(round_half_up(f64::NEG_INFINITY), None);
    }
}
