//! # Liquidity Math
//!
//! Conversions between the virtual liquidity constant `L` and token amounts
//! over a sqrt-price range. These are the routines behind deposit previews
//! ("how much of each token will this mint actually consume") and position
//! valuation at the current price.
//!
//! Boundary pairs are order-normalized by swapping, so callers may pass them
//! in either order. All divisions truncate downward unless a function takes
//! an explicit `round_up`.

use crate::constants::Q96;
use crate::errors::{CoreResult, MathError};
use crate::math::full_math::{div_rounding_up, mul_div, mul_div_rounding_up};
use crate::types::{AmountPair, Liquidity, SqrtPriceX96};
use primitive_types::U256;

/// Calculate liquidity from a token0 amount over a range:
/// `L = amount0 * (sqrt_a * sqrt_b / Q96) / (sqrt_b - sqrt_a)`
pub fn liquidity_for_amount0(
    sqrt_ratio_a_x96: SqrtPriceX96,
    sqrt_ratio_b_x96: SqrtPriceX96,
    amount0: U256,
) -> CoreResult<Liquidity> {
    let (sqrt_ratio_a_x96, sqrt_ratio_b_x96) = ordered(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    let intermediate = mul_div(sqrt_ratio_a_x96, sqrt_ratio_b_x96, Q96)?;
    let liquidity = mul_div(amount0, intermediate, sqrt_ratio_b_x96 - sqrt_ratio_a_x96)?;

    to_liquidity(liquidity)
}

/// Calculate liquidity from a token1 amount over a range:
/// `L = amount1 * Q96 / (sqrt_b - sqrt_a)`
pub fn liquidity_for_amount1(
    sqrt_ratio_a_x96: SqrtPriceX96,
    sqrt_ratio_b_x96: SqrtPriceX96,
    amount1: U256,
) -> CoreResult<Liquidity> {
    let (sqrt_ratio_a_x96, sqrt_ratio_b_x96) = ordered(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    let liquidity = mul_div(amount1, Q96, sqrt_ratio_b_x96 - sqrt_ratio_a_x96)?;

    to_liquidity(liquidity)
}

/// Calculate the liquidity minted from desired amounts of both tokens.
///
/// When the current price is inside the range the scarcer token bounds the
/// position, so the result is the min of the two single-token liquidities;
/// outside the range only the relevant token participates. Feed the result
/// back through [`amounts_for_liquidity`] to get the amounts actually
/// consumed - a range deposit generally cannot consume a caller-chosen ratio
/// exactly.
pub fn liquidity_for_amounts(
    sqrt_price_x96: SqrtPriceX96,
    sqrt_ratio_a_x96: SqrtPriceX96,
    sqrt_ratio_b_x96: SqrtPriceX96,
    amount0_desired: U256,
    amount1_desired: U256,
) -> CoreResult<Liquidity> {
    let (sqrt_ratio_a_x96, sqrt_ratio_b_x96) = ordered(sqrt_ratio_a_x96, sqrt_ratio_b_x96);
    if sqrt_ratio_a_x96 == sqrt_ratio_b_x96 {
        return Err(MathError::InvalidRange);
    }

    if sqrt_price_x96 <= sqrt_ratio_a_x96 {
        liquidity_for_amount0(sqrt_ratio_a_x96, sqrt_ratio_b_x96, amount0_desired)
    } else if sqrt_price_x96 < sqrt_ratio_b_x96 {
        let liquidity0 =
            liquidity_for_amount0(sqrt_price_x96, sqrt_ratio_b_x96, amount0_desired)?;
        let liquidity1 =
            liquidity_for_amount1(sqrt_ratio_a_x96, sqrt_price_x96, amount1_desired)?;

        Ok(liquidity0.min(liquidity1))
    } else {
        liquidity_for_amount1(sqrt_ratio_a_x96, sqrt_ratio_b_x96, amount1_desired)
    }
}

/// Calculate the token amounts held by `liquidity` over a range at the
/// current price.
///
/// Three-region split, boundary-inclusive: at or below the lower boundary
/// the position is entirely token0, at or above the upper boundary entirely
/// token1, strictly inside it holds both.
pub fn amounts_for_liquidity(
    sqrt_price_x96: SqrtPriceX96,
    sqrt_ratio_a_x96: SqrtPriceX96,
    sqrt_ratio_b_x96: SqrtPriceX96,
    liquidity: Liquidity,
) -> CoreResult<AmountPair> {
    let (sqrt_ratio_a_x96, sqrt_ratio_b_x96) = ordered(sqrt_ratio_a_x96, sqrt_ratio_b_x96);
    if sqrt_ratio_a_x96 == sqrt_ratio_b_x96 {
        return Err(MathError::InvalidRange);
    }

    if sqrt_price_x96 <= sqrt_ratio_a_x96 {
        Ok(AmountPair {
            amount0: amount0_delta(sqrt_ratio_a_x96, sqrt_ratio_b_x96, liquidity, false)?,
            amount1: U256::zero(),
        })
    } else if sqrt_price_x96 < sqrt_ratio_b_x96 {
        Ok(AmountPair {
            amount0: amount0_delta(sqrt_price_x96, sqrt_ratio_b_x96, liquidity, false)?,
            amount1: amount1_delta(sqrt_ratio_a_x96, sqrt_price_x96, liquidity, false)?,
        })
    } else {
        Ok(AmountPair {
            amount0: U256::zero(),
            amount1: amount1_delta(sqrt_ratio_a_x96, sqrt_ratio_b_x96, liquidity, false)?,
        })
    }
}

/// Token0 amount covered by `liquidity` between two sqrt prices:
/// `liquidity * (sqrt_b - sqrt_a) * Q96 / (sqrt_a * sqrt_b)`,
/// computed as two chained divisions so the rounding matches the reference
/// pool exactly
pub fn amount0_delta(
    sqrt_ratio_a_x96: SqrtPriceX96,
    sqrt_ratio_b_x96: SqrtPriceX96,
    liquidity: Liquidity,
    round_up: bool,
) -> CoreResult<U256> {
    let (sqrt_ratio_a_x96, sqrt_ratio_b_x96) = ordered(sqrt_ratio_a_x96, sqrt_ratio_b_x96);
    if sqrt_ratio_a_x96.is_zero() {
        return Err(MathError::DivisionByZero);
    }

    let numerator1 = U256::from(liquidity) << 96;
    let numerator2 = sqrt_ratio_b_x96 - sqrt_ratio_a_x96;

    if round_up {
        div_rounding_up(
            mul_div_rounding_up(numerator1, numerator2, sqrt_ratio_b_x96)?,
            sqrt_ratio_a_x96,
        )
    } else {
        Ok(mul_div(numerator1, numerator2, sqrt_ratio_b_x96)? / sqrt_ratio_a_x96)
    }
}

/// Token1 amount covered by `liquidity` between two sqrt prices:
/// `liquidity * (sqrt_b - sqrt_a) / Q96`
pub fn amount1_delta(
    sqrt_ratio_a_x96: SqrtPriceX96,
    sqrt_ratio_b_x96: SqrtPriceX96,
    liquidity: Liquidity,
    round_up: bool,
) -> CoreResult<U256> {
    let (sqrt_ratio_a_x96, sqrt_ratio_b_x96) = ordered(sqrt_ratio_a_x96, sqrt_ratio_b_x96);

    if round_up {
        mul_div_rounding_up(
            U256::from(liquidity),
            sqrt_ratio_b_x96 - sqrt_ratio_a_x96,
            Q96,
        )
    } else {
        mul_div(
            U256::from(liquidity),
            sqrt_ratio_b_x96 - sqrt_ratio_a_x96,
            Q96,
        )
    }
}

fn ordered(a: SqrtPriceX96, b: SqrtPriceX96) -> (SqrtPriceX96, SqrtPriceX96) {
    if a > b {
        (b, a)
    } else {
        (a, b)
    }
}

fn to_liquidity(value: U256) -> CoreResult<Liquidity> {
    if value.bits() > 128 {
        return Err(MathError::LiquidityOverflow);
    }
    Ok(value.low_u128())
}
