//! # CLAMM Core - Concentrated-Liquidity Math
//!
//! This crate contains the pure numeric routines shared between the on-chain
//! parameter path and off-chain clients of a tick-based liquidity market:
//!
//! - Conversions between tick index, Q64.96 sqrt price, and human decimal price
//! - Liquidity/amount conversions for minting, burning, and valuing positions
//! - Tick-spacing alignment for pool boundary selection
//! - Display formatting for already-final integer results
//!
//! All computation that can reach a transaction stays in integer/fixed-point
//! space; rounding directions match the reference pool contracts bit for bit.
//! Floating point appears only in [`display`].
//!
//! ## Feature Flags
//!
//! - `client`: Enables standard serialization for off-chain use

// Re-export all modules
pub mod constants;
pub mod display;
pub mod errors;
pub mod math;
pub mod types;

// Re-export commonly used items
pub use constants::*;
pub use errors::{CoreResult, MathError};
pub use types::*;
