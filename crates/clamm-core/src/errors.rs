//! # Core Error Types
//!
//! Every fallible operation in the engine returns one of these kinds; nothing
//! is swallowed into a zero or a default. All errors are recoverable by the
//! caller correcting the input and recomputing - retrying with the same input
//! is meaningless for pure functions.

use thiserror::Error;

/// Errors produced by the math engine
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum MathError {
    /// A tick argument falls outside the valid tick domain
    #[error("tick out of range")]
    TickOutOfRange,

    /// A price input is zero, negative, non-finite, or otherwise unusable
    #[error("invalid price")]
    InvalidPrice,

    /// A ratio's denominator is zero, typically from equal boundary sqrt prices
    #[error("division by zero")]
    DivisionByZero,

    /// A lower boundary is not strictly below the upper boundary after
    /// normalization, or a tick spacing is not strictly positive
    #[error("invalid range")]
    InvalidRange,

    /// A computed liquidity value does not fit in 128 bits
    #[error("liquidity overflow")]
    LiquidityOverflow,

    /// A 512-bit intermediate quotient does not fit in 256 bits
    #[error("amount overflow")]
    AmountOverflow,
}

/// Result type using core errors
pub type CoreResult<T> = Result<T, MathError>;
