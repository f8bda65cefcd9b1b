//! Exact decimal helpers: parsing display text, rounding division and
//! formatting results for the display.

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};
use num_traits::Zero;
use std::str::FromStr;

/// Parse display text into an exact decimal.
///
/// A single trailing decimal point is ignored so `"5."` reads as `5`.
/// Anything unparsable yields `None`.
pub fn parse_display(text: &str) -> Option<BigDecimal> {
    let text = text.strip_suffix('.').unwrap_or(text);
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit() || c == '.' || c == '-') {
        return None;
    }
    BigDecimal::from_str(text).ok()
}

/// Format a value for the display.
///
/// Plain notation, no trailing fractional zeros, no dangling point.
pub fn format_value(value: &BigDecimal) -> String {
    let formatted = value.to_plain_string();
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

/// Divide `dividend` by `divisor`, rounding half-up to `scale` fractional
/// digits.
///
/// The quotient is computed on the unscaled integers so the rounding step
/// sees the exact remainder. `divisor` must be non-zero.
pub fn divide_rounded(dividend: &BigDecimal, divisor: &BigDecimal, scale: u32) -> BigDecimal {
    let (numerator, dividend_scale) = dividend.as_bigint_and_exponent();
    let (denominator, divisor_scale) = divisor.as_bigint_and_exponent();

    // dividend / divisor * 10^scale
    //   = numerator / denominator * 10^(divisor_scale - dividend_scale + scale)
    let shift = divisor_scale - dividend_scale + i64::from(scale);
    let (numerator, denominator) = if shift >= 0 {
        (numerator * power_of_ten(shift.unsigned_abs()), denominator)
    } else {
        (numerator, denominator * power_of_ten(shift.unsigned_abs()))
    };

    let mut quotient = &numerator / &denominator;
    let remainder = &numerator % &denominator;

    // Ties go away from zero.
    if !remainder.is_zero() && remainder.magnitude().clone() * 2u32 >= *denominator.magnitude() {
        let negative = (numerator.sign() == Sign::Minus) != (denominator.sign() == Sign::Minus);
        if negative {
            quotient -= 1u32;
        } else {
            quotient += 1u32;
        }
    }

    BigDecimal::new(quotient, i64::from(scale))
}

/// Convert a finite `f64` into an exact decimal via its shortest round-trip
/// representation.
pub fn from_f64(value: f64) -> Option<BigDecimal> {
    if !value.is_finite() {
        return None;
    }
    BigDecimal::from_str(&value.to_string()).ok()
}

fn power_of_ten(exponent: u64) -> BigInt {
    num_traits::pow(BigInt::from(10u8), exponent as usize)
}
