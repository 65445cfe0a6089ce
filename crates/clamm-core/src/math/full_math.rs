//! # Full-Precision Multiply-Divide
//!
//! `floor(a * b / denominator)` and its rounding-up variant with a full
//! 512-bit intermediate product, so no precision is lost before the final
//! division. Every ratio in the engine goes through these two functions;
//! their rounding behavior is what keeps computed amounts consistent with
//! the reference pool contracts.

use crate::errors::{CoreResult, MathError};
use primitive_types::{U256, U512};

/// Multiply and divide with 512-bit intermediate precision (rounds down).
/// Returns `floor(a * b / denominator)`.
pub fn mul_div(a: U256, b: U256, denominator: U256) -> CoreResult<U256> {
    if denominator.is_zero() {
        return Err(MathError::DivisionByZero);
    }

    let product = a.full_mul(b);
    u512_to_u256(product / U512::from(denominator))
}

/// Multiply and divide with 512-bit intermediate precision (rounds up).
/// Returns `ceil(a * b / denominator)`.
pub fn mul_div_rounding_up(a: U256, b: U256, denominator: U256) -> CoreResult<U256> {
    if denominator.is_zero() {
        return Err(MathError::DivisionByZero);
    }

    let product = a.full_mul(b);
    let (quotient, remainder) = product.div_mod(U512::from(denominator));
    let quotient = u512_to_u256(quotient)?;

    if remainder.is_zero() {
        Ok(quotient)
    } else {
        quotient
            .checked_add(U256::one())
            .ok_or(MathError::AmountOverflow)
    }
}

/// Unsigned division with rounding up
pub fn div_rounding_up(a: U256, denominator: U256) -> CoreResult<U256> {
    if denominator.is_zero() {
        return Err(MathError::DivisionByZero);
    }

    let (quotient, remainder) = a.div_mod(denominator);
    if remainder.is_zero() {
        Ok(quotient)
    } else {
        // remainder != 0 implies denominator >= 2, so the quotient has headroom
        Ok(quotient + U256::one())
    }
}

/// Narrow a 512-bit value to 256 bits
pub(crate) fn u512_to_u256(value: U512) -> CoreResult<U256> {
    let U512(words) = value;
    if words[4..].iter().any(|&w| w != 0) {
        return Err(MathError::AmountOverflow);
    }
    Ok(U256([words[0], words[1], words[2], words[3]]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_div_basic() {
        assert_eq!(
            mul_div(U256::from(10), U256::from(20), U256::from(5)).unwrap(),
            U256::from(40)
        );
    }

    #[test]
    fn test_mul_div_rounds_down() {
        assert_eq!(
            mul_div(U256::from(1), U256::from(1), U256::from(2)).unwrap(),
            U256::zero()
        );
        assert_eq!(
            mul_div(U256::from(5), U256::from(1), U256::from(3)).unwrap(),
            U256::from(1)
        );
    }

    #[test]
    fn test_mul_div_phantom_overflow() {
        // a * b overflows 256 bits but the quotient fits
        let max = U256::MAX;
        assert_eq!(mul_div(max, max, max).unwrap(), max);

        let big = U256::one() << 200;
        assert_eq!(mul_div(big, big, big).unwrap(), big);
    }

    #[test]
    fn test_mul_div_quotient_overflow() {
        let max = U256::MAX;
        assert_eq!(
            mul_div(max, max, U256::from(2)),
            Err(MathError::AmountOverflow)
        );
    }

    #[test]
    fn test_mul_div_zero_denominator() {
        assert_eq!(
            mul_div(U256::from(10), U256::from(20), U256::zero()),
            Err(MathError::DivisionByZero)
        );
        assert_eq!(
            mul_div_rounding_up(U256::from(10), U256::from(20), U256::zero()),
            Err(MathError::DivisionByZero)
        );
    }

    #[test]
    fn test_mul_div_rounding_up_with_remainder() {
        // 10 * 3 / 7 = 4.28... -> 5
        assert_eq!(
            mul_div_rounding_up(U256::from(10), U256::from(3), U256::from(7)).unwrap(),
            U256::from(5)
        );
        // exact division stays exact
        assert_eq!(
            mul_div_rounding_up(U256::from(10), U256::from(20), U256::from(5)).unwrap(),
            U256::from(40)
        );
    }

    #[test]
    fn test_rounding_up_vs_down_difference() {
        // 7 * 11 = 77, 77 / 13 = 5.923... -> down: 5, up: 6
        let down = mul_div(U256::from(7), U256::from(11), U256::from(13)).unwrap();
        let up = mul_div_rounding_up(U256::from(7), U256::from(11), U256::from(13)).unwrap();
        assert_eq!(down, U256::from(5));
        assert_eq!(up, U256::from(6));
    }

    #[test]
    fn test_div_rounding_up() {
        assert_eq!(
            div_rounding_up(U256::from(10), U256::from(3)).unwrap(),
            U256::from(4)
        );
        assert_eq!(
            div_rounding_up(U256::from(9), U256::from(3)).unwrap(),
            U256::from(3)
        );
        assert_eq!(
            div_rounding_up(U256::zero(), U256::from(5)).unwrap(),
            U256::zero()
        );
        assert_eq!(
            div_rounding_up(U256::from(1), U256::zero()),
            Err(MathError::DivisionByZero)
        );
    }
}
