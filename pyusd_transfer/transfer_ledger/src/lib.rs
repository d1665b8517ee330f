//! In-process mock of the PYUSD mock-token and transfer-escrow contracts.
//!
//! The contract state lives in an explicit [`ChainState`] store (balance map,
//! allowance map, used-order-id set) instead of ambient globals. Every
//! mutating call runs a state transition on a cloned store and commits only
//! on success, giving the same all-or-nothing semantics a transaction has on
//! chain: a reverted `transferPYUSD` can never leave its order id consumed.
//!
//! Preconditions fail with tagged error variants rather than revert-message
//! strings, so tests assert exact equality instead of substring matching.

pub mod chain;
pub mod errors;
pub mod escrow;
pub mod state;
pub mod token;

pub use chain::MockChain;
pub use errors::{EscrowError, EscrowResult, TokenError, TokenResult};
pub use state::{ChainState, EscrowState, TokenState};

use alloy::primitives::U256;

/// PYUSD uses 6 decimal places.
pub const PYUSD_DECIMALS: u8 = 6;

/// Converts a whole-token amount into 6-decimal base units.
pub fn units(whole: u64) -> U256 {
    U256::from(whole) * U256::from(10u64).pow(U256::from(PYUSD_DECIMALS))
}
