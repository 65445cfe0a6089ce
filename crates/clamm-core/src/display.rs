//! # Display Formatting
//!
//! Human-readable rendering of prices and amounts. Everything here is
//! display-only: a failed computation upstream should render as "no preview",
//! never as a misleading zero, and nothing produced here may be submitted
//! on-chain. This is the one module where floating point is acceptable.

use crate::errors::{CoreResult, MathError};
use crate::math::price_math::PriceRatio;
use primitive_types::U512;

/// Render an exact rational as a decimal string by long division, up to
/// `max_fraction_digits` fractional digits, trailing zeros trimmed.
///
/// This is the no-float path for price display; the fraction is exact up to
/// the digit limit.
pub fn ratio_to_decimal_string(
    ratio: &PriceRatio,
    max_fraction_digits: usize,
) -> CoreResult<String> {
    if ratio.denominator.is_zero() {
        return Err(MathError::DivisionByZero);
    }

    let (integer, mut remainder) = ratio.numerator.div_mod(ratio.denominator);
    let mut rendered = integer.to_string();
    if remainder.is_zero() || max_fraction_digits == 0 {
        return Ok(rendered);
    }

    rendered.push('.');
    let ten = U512::from(10);
    for _ in 0..max_fraction_digits {
        remainder = match remainder.checked_mul(ten) {
            Some(shifted) => shifted,
            None => break,
        };
        let (digit, rest) = remainder.div_mod(ratio.denominator);
        rendered.push((digit.low_u64() as u8 + b'0') as char);
        remainder = rest;
        if remainder.is_zero() {
            break;
        }
    }

    Ok(trim_trailing_zeros(rendered))
}

/// Lossy float view of a rational, for display math only
pub fn ratio_to_f64(ratio: &PriceRatio) -> f64 {
    match ratio_to_decimal_string(ratio, 180) {
        Ok(rendered) => rendered.parse::<f64>().unwrap_or(0.0),
        Err(_) => f64::NAN,
    }
}

/// Compact rendering of large and small magnitudes: suffixes above a
/// thousand, plain decimals in the middle, a dust floor below display
/// precision
pub fn format_compact(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }

    let abs = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs >= 1e12 {
        format!("{}{:.2}T", sign, abs / 1e12)
    } else if abs >= 1e9 {
        format!("{}{:.2}B", sign, abs / 1e9)
    } else if abs >= 1e6 {
        format!("{}{:.2}M", sign, abs / 1e6)
    } else if abs >= 1e3 {
        format!("{}{:.2}K", sign, abs / 1e3)
    } else if abs >= 0.01 {
        format!("{:.2}", value)
    } else if abs >= 1e-5 {
        format_significant(value, 3)
    } else if abs > 0.0 {
        "<0.00001".to_string()
    } else {
        "0".to_string()
    }
}

/// Round to `sig_figs` significant digits, trimming trailing zeros
pub fn format_significant(value: f64, sig_figs: u32) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{}", value);
    }

    let exponent = value.abs().log10().floor() as i32;
    let decimals = (sig_figs as i32 - 1 - exponent).max(0) as usize;
    trim_trailing_zeros(format!("{:.*}", decimals, value))
}

fn trim_trailing_zeros(rendered: String) -> String {
    if rendered.contains('.') {
        rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio(numerator: u64, denominator: u64) -> PriceRatio {
        PriceRatio {
            numerator: U512::from(numerator),
            denominator: U512::from(denominator),
        }
    }

    #[test]
    fn test_ratio_rendering_terminates() {
        assert_eq!(ratio_to_decimal_string(&ratio(1, 8), 30).unwrap(), "0.125");
        assert_eq!(ratio_to_decimal_string(&ratio(5, 4), 30).unwrap(), "1.25");
        assert_eq!(ratio_to_decimal_string(&ratio(42, 1), 30).unwrap(), "42");
    }

    #[test]
    fn test_ratio_rendering_truncates_repeating() {
        assert_eq!(ratio_to_decimal_string(&ratio(1, 3), 5).unwrap(), "0.33333");
        assert_eq!(ratio_to_decimal_string(&ratio(2, 3), 0).unwrap(), "0");
    }

    #[test]
    fn test_ratio_zero_denominator() {
        assert_eq!(
            ratio_to_decimal_string(&ratio(1, 0), 5),
            Err(MathError::DivisionByZero)
        );
        assert!(ratio_to_f64(&ratio(1, 0)).is_nan());
    }

    #[test]
    fn test_ratio_to_f64() {
        assert_eq!(ratio_to_f64(&ratio(1, 8)), 0.125);
        assert_eq!(ratio_to_f64(&ratio(3, 2)), 1.5);
    }

    #[test]
    fn test_format_compact_suffixes() {
        assert_eq!(format_compact(1_234_567.0), "1.23M");
        assert_eq!(format_compact(5_000_000_000.0), "5.00B");
        assert_eq!(format_compact(2.5e12), "2.50T");
        assert_eq!(format_compact(1000.0), "1.00K");
        assert_eq!(format_compact(-1_500_000.0), "-1.50M");
    }

    #[test]
    fn test_format_compact_small_values() {
        assert_eq!(format_compact(0.5), "0.50");
        assert_eq!(format_compact(0.0001234), "0.000123");
        assert_eq!(format_compact(0.0000001), "<0.00001");
        assert_eq!(format_compact(0.0), "0");
        assert_eq!(format_compact(f64::NAN), "-");
    }

    #[test]
    fn test_format_significant() {
        assert_eq!(format_significant(1234.5678, 6), "1234.57");
        assert_eq!(format_significant(0.000999999999, 6), "0.001");
        assert_eq!(format_significant(0.00012345, 3), "0.000123");
        assert_eq!(format_significant(0.0, 4), "0");
    }
}
