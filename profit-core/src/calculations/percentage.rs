//! Percentage calculations.
//!
//! Two operations share this module:
//!
//! | Operation              | Result |
//! |------------------------|--------|
//! | [`compute_percentage`] | `p%` of `n`, and `n` increased / decreased by it |
//! | [`compute_comparison`] | `a` as a percentage of `b`, and the change from `b` to `a` |
//!
//! Unlike the profitability engine, any input that cannot be read as a number
//! yields no result at all rather than being treated as zero.
//!
//! # Example
//!
//! ```
//! use profit_core::compute_percentage;
//!
//! // VAT of 18% on 100
//! let result = compute_percentage("100", "18").unwrap();
//!
//! assert_eq!(result.basic_result, 18.0);
//! assert_eq!(result.add_result, 118.0);
//! assert_eq!(result.subtract_result, 82.0);
//! ```

use crate::calculations::common::parse_leading_number;
use crate::models::{ComparisonResult, PercentageResult};

/// Applies `percentage` percent to `base_number`.
///
/// Returns `None` when either input has no numeric prefix.
pub fn compute_percentage(
    base_number: &str,
    percentage: &str,
) -> Option<PercentageResult> {
    let base = parse_leading_number(base_number)?;
    let perc = parse_leading_number(percentage)?;

    let basic_result = (base * perc) / 100.0;

    Some(PercentageResult {
        basic_result,
        add_result: base + basic_result,
        subtract_result: base - basic_result,
    })
}

/// Expresses `a` relative to `b`.
///
/// Returns `None` when either input has no numeric prefix or when `b` is zero.
pub fn compute_comparison(
    a: &str,
    b: &str,
) -> Option<ComparisonResult> {
    let a = parse_leading_number(a)?;
    let b = parse_leading_number(b)?;

    if b == 0.0 {
        return None;
    }

    Some(ComparisonResult {
        percentage_of: (a / b) * 100.0,
        change_rate: ((a - b) / b) * 100.0,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // =========================================================================
    // compute_percentage tests
    // =========================================================================

    #[test]
    fn percentage_of_whole_number() {
        let result = compute_percentage("100", "25");

        assert_eq!(
            result,
            Some(PercentageResult {
                basic_result: 25.0,
                add_result: 125.0,
                subtract_result: 75.0,
            })
        );
    }

    #[test]
    fn percentage_for_discount() {
        let result = compute_percentage("200", "25").unwrap();

        assert_eq!(result.subtract_result, 150.0);
    }

    #[test]
    fn percentage_with_negative_rate() {
        let result = compute_percentage("80", "-50").unwrap();

        assert_eq!(result.basic_result, -40.0);
        assert_eq!(result.add_result, 40.0);
        assert_eq!(result.subtract_result, 120.0);
    }

    #[test]
    fn percentage_of_zero_is_zero() {
        let result = compute_percentage("0", "75").unwrap();

        assert_eq!(result.basic_result, 0.0);
        assert_eq!(result.add_result, 0.0);
    }

    #[test]
    fn percentage_uses_numeric_prefix() {
        let result = compute_percentage("100 TL", "10%").unwrap();

        assert_eq!(result.basic_result, 10.0);
    }

    #[test]
    fn percentage_without_number_has_no_result() {
        assert_eq!(compute_percentage("abc", "10"), None);
        assert_eq!(compute_percentage("100", ""), None);
        assert_eq!(compute_percentage("", ""), None);
    }

    // =========================================================================
    // compute_comparison tests
    // =========================================================================

    #[test]
    fn comparison_of_larger_number() {
        let result = compute_comparison("150", "100");

        assert_eq!(
            result,
            Some(ComparisonResult {
                percentage_of: 150.0,
                change_rate: 50.0,
            })
        );
    }

    #[test]
    fn comparison_of_smaller_number() {
        let result = compute_comparison("50", "200").unwrap();

        assert_eq!(result.percentage_of, 25.0);
        assert_eq!(result.change_rate, -75.0);
    }

    #[test]
    fn comparison_with_zero_numerator() {
        let result = compute_comparison("0", "40").unwrap();

        assert_eq!(result.percentage_of, 0.0);
        assert_eq!(result.change_rate, -100.0);
    }

    #[test]
    fn comparison_against_zero_has_no_result() {
        assert_eq!(compute_comparison("50", "0"), None);
        assert_eq!(compute_comparison("50", "-0"), None);
        assert_eq!(compute_comparison("50", "0.000"), None);
    }

    #[test]
    fn comparison_without_number_has_no_result() {
        assert_eq!(compute_comparison("x", "10"), None);
        assert_eq!(compute_comparison("10", "y"), None);
    }
}
