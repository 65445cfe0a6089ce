//! # Engine Constants
//!
//! Fundamental constants for the concentrated-liquidity math engine:
//! - Fixed-point scale factors (Q96, Q128, Q192)
//! - Tick domain bounds and their exact sqrt-price images
//! - Tick spacing bounds and the reference fee-tier spacings

use primitive_types::U256;

// ============================================================================
// Fixed-Point Scale Factors
// ============================================================================

/// Q96 scale factor: 2^96, the denominator of the sqrt-price encoding
pub const Q96: U256 = U256([0, 1 << 32, 0, 0]);

/// Q128 scale factor: 2^128, the working precision of the tick-ratio table
pub const Q128: U256 = U256([0, 0, 1, 0]);

/// Q192 scale factor: 2^192, the denominator of the squared price ratio
pub const Q192: U256 = U256([0, 0, 0, 1]);

// ============================================================================
// Tick Domain
// ============================================================================

/// Minimum tick index (price 2^-128)
pub const MIN_TICK: i32 = -887_272;

/// Maximum tick index (price 2^128)
pub const MAX_TICK: i32 = 887_272;

/// Minimum tick spacing
pub const MIN_TICK_SPACING: i32 = 1;

/// Maximum tick spacing
pub const MAX_TICK_SPACING: i32 = 32_767;

// ============================================================================
// Sqrt Price Bounds
// ============================================================================

/// Sqrt price at MIN_TICK, the smallest representable sqrt price
pub const MIN_SQRT_PRICE_X96: U256 = U256([4_295_128_739, 0, 0, 0]);

/// Sqrt price at MAX_TICK, the largest representable sqrt price.
/// Equals 1461446703485210103287273052203988822378723970342.
pub const MAX_SQRT_PRICE_X96: U256 =
    U256([0x5d95_1d52_6398_8d26, 0xefd1_fc6a_5064_8849, 0xfffd_8963, 0]);

// ============================================================================
// Decimal Boundary
// ============================================================================

/// Largest token-decimals value accepted at the price-conversion boundary.
/// 10^77 is the last power of ten below 2^256; staying well under that keeps
/// every rescaled rational inside 512 bits.
pub const MAX_TOKEN_DECIMALS: u8 = 38;
