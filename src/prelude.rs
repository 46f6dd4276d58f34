//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use xyk_amm::prelude::*;
//! ```

pub use crate::domain::{
    AccountRef, Address, Amount, DepositReceipt, PoolId, PoolState, Shares, Side, SwapDirection,
    SwapQuote, SwapReceipt, TokenPair, UserAccounts, VaultRef,
};

pub use crate::traits::CustodyService;

pub use crate::math::{CheckedArithmetic, Rounding};

pub use crate::config::{AmmConfig, DepositPolicy};

pub use crate::custody::MemoryLedger;

pub use crate::engine::Amm;

pub use crate::error::{AmmError, CustodyError, Result};
