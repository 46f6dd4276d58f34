//! Engine configuration.
//!
//! [`AmmConfig`] is the declarative blueprint for an engine instance: the
//! pool identity domain, the [`DepositPolicy`] applied to funded pools,
//! and the minimum size of a pool's first deposit.

mod amm_config;
mod deposit_policy;

pub use amm_config::{AmmConfig, DEFAULT_POOL_DOMAIN};
pub use deposit_policy::{DepositPolicy, BPS_DENOMINATOR};
