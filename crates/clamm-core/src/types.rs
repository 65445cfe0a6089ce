//! # Core Value Types
//!
//! Plain value types passed through the engine. All are `Copy`, carry no
//! identity, and hold no state between calls; pool facts (live tick, token
//! decimals, position liquidity) are read from chain by callers and passed in
//! as values.

use crate::constants::{MAX_TICK, MIN_TICK};
use primitive_types::U256;

/// Signed tick index into the geometric price grid (1.0001 per step)
pub type Tick = i32;

/// Minimum tick granularity for a fee tier
pub type TickSpacing = i32;

/// Virtual liquidity constant `L` of a position or pool
pub type Liquidity = u128;

/// Sqrt of the raw token1/token0 price, as a Q64.96 fixed-point integer
pub type SqrtPriceX96 = U256;

/// Raw integer token amounts corresponding to a liquidity over a range.
///
/// token0/token1 ordering is established by the caller: token0's address
/// sorts below token1's. The engine assumes that ordering holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct AmountPair {
    /// Amount of token0, in raw integer units
    pub amount0: U256,
    /// Amount of token1, in raw integer units
    pub amount1: U256,
}

impl AmountPair {
    pub const ZERO: AmountPair = AmountPair {
        amount0: U256([0, 0, 0, 0]),
        amount1: U256([0, 0, 0, 0]),
    };
}

/// Fee tiers of the reference deployment, each fixing a tick spacing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum FeeTier {
    /// 0.05% fee, tick spacing 10
    Low,
    /// 0.3% fee, tick spacing 60
    Medium,
    /// 1% fee, tick spacing 200
    High,
}

impl FeeTier {
    /// Fee in hundredths of a basis point (pips), as encoded on-chain
    pub const fn fee_pips(&self) -> u32 {
        match self {
            FeeTier::Low => 500,
            FeeTier::Medium => 3_000,
            FeeTier::High => 10_000,
        }
    }

    /// Tick spacing enforced for pool boundaries at this tier
    pub const fn tick_spacing(&self) -> TickSpacing {
        match self {
            FeeTier::Low => 10,
            FeeTier::Medium => 60,
            FeeTier::High => 200,
        }
    }

    /// Look up a tier by its on-chain fee encoding
    pub const fn from_fee_pips(fee: u32) -> Option<FeeTier> {
        match fee {
            500 => Some(FeeTier::Low),
            3_000 => Some(FeeTier::Medium),
            10_000 => Some(FeeTier::High),
            _ => None,
        }
    }
}

/// Check if a tick is within the supported domain
pub const fn is_tick_valid(tick: Tick) -> bool {
    tick >= MIN_TICK && tick <= MAX_TICK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_tier_spacings() {
        assert_eq!(FeeTier::Low.tick_spacing(), 10);
        assert_eq!(FeeTier::Medium.tick_spacing(), 60);
        assert_eq!(FeeTier::High.tick_spacing(), 200);
    }

    #[test]
    fn test_fee_tier_lookup() {
        assert_eq!(FeeTier::from_fee_pips(3_000), Some(FeeTier::Medium));
        assert_eq!(FeeTier::from_fee_pips(100), None);
        for tier in [FeeTier::Low, FeeTier::Medium, FeeTier::High] {
            assert_eq!(FeeTier::from_fee_pips(tier.fee_pips()), Some(tier));
        }
    }

    #[test]
    fn test_tick_validity() {
        assert!(is_tick_valid(0));
        assert!(is_tick_valid(MIN_TICK));
        assert!(is_tick_valid(MAX_TICK));
        assert!(!is_tick_valid(MIN_TICK - 1));
        assert!(!is_tick_valid(MAX_TICK + 1));
    }
}
