//! # Tick Math
//!
//! Conversions between tick indices and Q64.96 sqrt prices, and alignment of
//! ticks to a fee tier's spacing. The forward conversion is bit-exact with
//! the reference pool contracts for every tick in the domain; the inverse is
//! defined against the forward map, so round-tripping a valid tick always
//! returns the same tick.

use crate::constants::{MAX_TICK, MIN_TICK, Q128};
use crate::errors::{CoreResult, MathError};
use crate::types::{SqrtPriceX96, Tick, TickSpacing};
use primitive_types::{U256, U512};
use tracing::debug;

/// Precomputed sqrt(1.0001)^(-2^i) for bit positions 0..=19, in Q128.
/// MAX_TICK < 2^20, so twenty entries cover the whole domain.
const SQRT_RATIO_MAGIC: [u128; 20] = [
    0xfffcb933bd6fad37aa2d162d1a594001,
    0xfff97272373d413259a46990580e213a,
    0xfff2e50f5f656932ef12357cf3c7fdcc,
    0xffe5caca7e10e4e61c3624eaa0941cd0,
    0xffcb9843d60f6159c9db58835c926644,
    0xff973b41fa98c081472e6896dfb254c0,
    0xff2ea16466c96a3843ec78b326b52861,
    0xfe5dee046a99a2a811c461f1969c3053,
    0xfcbe86c7900a88aedcffc83b479aa3a4,
    0xf987a7253ac413176f2b074cf7815e54,
    0xf3392b0822b70005940c7a398e4b70f3,
    0xe7159475a2c29b7443b29c7fa6e889d9,
    0xd097f3bdfd2022b8845ad8f792aa5825,
    0xa9f746462d870fdf8a65dc1f90e061e5,
    0x70d869a156d2a1b890bb3df62baf32f7,
    0x31be135f97d08fd981231505542fcfa6,
    0x9aa508b5b7a84e1c677de54f3e99bc9,
    0x5d6af8dedb81196699c329225ee604,
    0x2216e584f5fa1ea926041bedfe98,
    0x48a170391f7dc42444e8fa2,
];

/// Calculate sqrt(1.0001^tick) * 2^96.
///
/// Binary decomposition of `|tick|` against the Q128 ratio table, inversion
/// for positive ticks, then a Q128 -> Q96 shift that rounds up when any
/// discarded bit is set. Strictly increasing in `tick`.
pub fn sqrt_price_at_tick(tick: Tick) -> CoreResult<SqrtPriceX96> {
    if !(MIN_TICK..=MAX_TICK).contains(&tick) {
        return Err(MathError::TickOutOfRange);
    }

    let abs_tick = tick.unsigned_abs();

    let mut ratio = if abs_tick & 1 != 0 {
        U256::from(SQRT_RATIO_MAGIC[0])
    } else {
        Q128
    };

    for (i, &magic) in SQRT_RATIO_MAGIC.iter().enumerate().skip(1) {
        if abs_tick & (1u32 << i) != 0 {
            ratio = mul_shift_128(ratio, magic);
        }
    }

    // The table is built for negative ticks; invert for positive ones
    if tick > 0 {
        ratio = U256::MAX / ratio;
    }

    // Q128 -> Q96, rounding toward positive infinity on this final truncation
    // only; intermediate steps above all truncate downward
    let rounded = !(ratio & U256::from(u32::MAX)).is_zero();
    let mut sqrt_price_x96 = ratio >> 32;
    if rounded {
        sqrt_price_x96 = sqrt_price_x96 + U256::one();
    }
    Ok(sqrt_price_x96)
}

/// Get the greatest tick whose sqrt price is <= the input, clamped to the
/// valid tick domain.
///
/// Binary search over the forward map: floor semantics and exact
/// round-tripping follow from the forward map itself, so the one-tick
/// disagreement a logarithm-based inverse can exhibit at representation
/// boundaries cannot occur here.
pub fn tick_at_sqrt_price(sqrt_price_x96: SqrtPriceX96) -> CoreResult<Tick> {
    if sqrt_price_x96.is_zero() {
        return Err(MathError::InvalidPrice);
    }

    let mut low = MIN_TICK;
    let mut high = MAX_TICK;

    while low <= high {
        let mid = low + (high - low) / 2;
        let mid_price = sqrt_price_at_tick(mid)?;

        if mid_price == sqrt_price_x96 {
            return Ok(mid);
        } else if mid_price < sqrt_price_x96 {
            low = mid + 1;
        } else {
            high = mid - 1;
        }
    }

    // `high` is now the greatest tick below the input; inputs outside the
    // representable sqrt-price band land on the domain edges
    if high < MIN_TICK {
        debug!(%sqrt_price_x96, "sqrt price below the representable band, clamping");
        return Ok(MIN_TICK);
    }
    Ok(high)
}

/// Largest multiple of `spacing` that is <= `tick`, clamped into the aligned
/// valid domain.
///
/// Truncating division rounds toward zero, so negative unaligned ticks need
/// one extra downward step. A floored multiple that falls below MIN_TICK is
/// lifted one spacing back into range, keeping the result usable as a pool
/// boundary.
pub fn floor_to_spacing(tick: Tick, spacing: TickSpacing) -> CoreResult<Tick> {
    if spacing < 1 {
        return Err(MathError::InvalidRange);
    }

    let tick = tick.clamp(MIN_TICK, MAX_TICK);
    let mut compressed = tick / spacing;
    if tick < 0 && tick % spacing != 0 {
        compressed -= 1;
    }
    Ok(clamp_aligned(compressed * spacing, spacing))
}

/// Smallest multiple of `spacing` that is >= `tick`, clamped into the aligned
/// valid domain.
pub fn ceil_to_spacing(tick: Tick, spacing: TickSpacing) -> CoreResult<Tick> {
    if spacing < 1 {
        return Err(MathError::InvalidRange);
    }

    let tick = tick.clamp(MIN_TICK, MAX_TICK);
    let mut compressed = tick / spacing;
    if tick > 0 && tick % spacing != 0 {
        compressed += 1;
    }
    Ok(clamp_aligned(compressed * spacing, spacing))
}

/// The widest aligned tick range for a spacing, for positions that should be
/// active at every price
pub fn full_range_ticks(spacing: TickSpacing) -> CoreResult<(Tick, Tick)> {
    Ok((
        floor_to_spacing(MIN_TICK, spacing)?,
        floor_to_spacing(MAX_TICK, spacing)?,
    ))
}

/// Whether a pool's current tick falls inside a position's boundaries
/// (half-open: the upper boundary itself is out of range)
pub const fn is_in_range(tick: Tick, lower: Tick, upper: Tick) -> bool {
    lower <= tick && tick < upper
}

/// Clamp an aligned tick into the aligned valid domain. Multiples of
/// `spacing` are `spacing` apart, so clamping to the extreme in-range
/// multiples preserves alignment.
fn clamp_aligned(aligned: Tick, spacing: TickSpacing) -> Tick {
    let max_aligned = (MAX_TICK / spacing) * spacing;
    aligned.clamp(-max_aligned, max_aligned)
}

/// Multiply a Q128 ratio by a Q128 constant and shift right by 128 bits
/// (truncating). The ratio never exceeds 2^128 and every table entry is
/// below 2^128, so the product always fits 256 bits.
fn mul_shift_128(ratio: U256, magic: u128) -> U256 {
    let U512(words) = ratio.full_mul(U256::from(magic));
    U256([words[2], words[3], words[4], words[5]])
}
