//! Pool core: the directory of pool records and the pure engines that
//! compute state transitions.
//!
//! Nothing in this module touches custody.  [`plan_deposit`] and
//! [`quote_swap`] return the complete new pool record; the
//! [`Amm`](crate::engine::Amm) engine moves tokens and only then stores
//! the record in the [`PoolDirectory`].

mod directory;
mod liquidity;
mod swap;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;

pub use directory::{PoolDirectory, ShareCredit};
pub use liquidity::{plan_deposit, DepositPlan};
pub use swap::{apply_quote, quote_swap};
