//! # Price Conversion
//!
//! Conversions between Q64.96 sqrt prices, exact rational prices, and human
//! decimal prices. Raw price space is token1-per-token0 in smallest units;
//! human space differs by `10^(decimals0 - decimals1)`. Prices stay rational
//! end to end - no floating point touches anything that can reach a
//! transaction.

use crate::constants::{MAX_SQRT_PRICE_X96, MAX_TOKEN_DECIMALS, MIN_SQRT_PRICE_X96};
use crate::errors::{CoreResult, MathError};
use crate::math::full_math::u512_to_u256;
use crate::types::SqrtPriceX96;
use primitive_types::U512;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use tracing::debug;

/// An exact rational price, `numerator / denominator`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRatio {
    pub numerator: U512,
    pub denominator: U512,
}

impl PriceRatio {
    /// Move a raw integer-unit price into human price space by folding
    /// `10^(decimals0 - decimals1)` into the appropriate side
    pub fn rescale(self, decimals0: u8, decimals1: u8) -> CoreResult<PriceRatio> {
        if decimals0 > MAX_TOKEN_DECIMALS || decimals1 > MAX_TOKEN_DECIMALS {
            return Err(MathError::InvalidPrice);
        }

        if decimals0 >= decimals1 {
            Ok(PriceRatio {
                numerator: self.numerator * pow10((decimals0 - decimals1) as u32),
                denominator: self.denominator,
            })
        } else {
            Ok(PriceRatio {
                numerator: self.numerator,
                denominator: self.denominator * pow10((decimals1 - decimals0) as u32),
            })
        }
    }
}

/// The raw integer-unit price under a sqrt price, as the exact rational
/// `sqrt_price_x96^2 / 2^192`
pub fn price_ratio_from_sqrt(sqrt_price_x96: SqrtPriceX96) -> CoreResult<PriceRatio> {
    if sqrt_price_x96.is_zero() || sqrt_price_x96 > MAX_SQRT_PRICE_X96 {
        return Err(MathError::InvalidPrice);
    }

    Ok(PriceRatio {
        numerator: sqrt_price_x96.full_mul(sqrt_price_x96),
        denominator: U512::one() << 192,
    })
}

/// Compute the sqrt price for an exact human decimal price (token1 per
/// token0) and the two tokens' decimals.
///
/// The decimal is decomposed into mantissa/scale, rescaled into raw price
/// space, and the sqrt price is the truncating integer square root of
/// `raw_price * 2^192`, clamped into the representable sqrt-price band.
pub fn sqrt_price_from_decimal(
    price: Decimal,
    decimals0: u8,
    decimals1: u8,
) -> CoreResult<SqrtPriceX96> {
    if price.is_sign_negative() || price.is_zero() {
        return Err(MathError::InvalidPrice);
    }
    if decimals0 > MAX_TOKEN_DECIMALS || decimals1 > MAX_TOKEN_DECIMALS {
        return Err(MathError::InvalidPrice);
    }

    // price = mantissa / 10^scale; raw price = price * 10^(decimals1 - decimals0)
    let numerator = U512::from(price.mantissa() as u128) * pow10(decimals1 as u32);
    let denominator = pow10(price.scale() + decimals0 as u32);

    let radicand = (numerator << 192) / denominator;
    let unbounded = u512_to_u256(radicand.integer_sqrt())?;

    if unbounded < MIN_SQRT_PRICE_X96 {
        debug!(%unbounded, "sqrt price below representable band, clamping");
        Ok(MIN_SQRT_PRICE_X96)
    } else if unbounded > MAX_SQRT_PRICE_X96 {
        debug!(%unbounded, "sqrt price above representable band, clamping");
        Ok(MAX_SQRT_PRICE_X96)
    } else {
        Ok(unbounded)
    }
}

/// Convenience entry for float-typed UI input. Validates finiteness and
/// positivity, converts losslessly to [`Decimal`], and delegates to
/// [`sqrt_price_from_decimal`]; the float never feeds the integer pipeline.
pub fn sqrt_price_from_human(
    price: f64,
    decimals0: u8,
    decimals1: u8,
) -> CoreResult<SqrtPriceX96> {
    if !price.is_finite() || price <= 0.0 {
        return Err(MathError::InvalidPrice);
    }

    let price = Decimal::from_f64(price).ok_or(MathError::InvalidPrice)?;
    if price.is_zero() {
        // subnormal input underflowed the decimal representation
        return Err(MathError::InvalidPrice);
    }

    sqrt_price_from_decimal(price, decimals0, decimals1)
}

fn pow10(exp: u32) -> U512 {
    U512::from(10).pow(U512::from(exp))
}
