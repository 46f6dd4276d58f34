//! Engine-wide configuration.

use super::DepositPolicy;
use crate::error::{AmmError, Result};

/// Default domain separator for pool identity derivation.
pub const DEFAULT_POOL_DOMAIN: &[u8] = b"XYK_AMM_POOL_V1";

/// Declarative configuration for an [`Amm`](crate::engine::Amm).
///
/// Every field has a default; the `with_*` builders override one at a
/// time.  The engine validates the configuration once, at construction.
///
/// # Validation
///
/// - `pool_domain` must be non-empty.
/// - `minimum_initial_shares` must be at least 1.
/// - The [`DepositPolicy`] must itself be valid.
///
/// # Examples
///
/// ```
/// use xyk_amm::config::{AmmConfig, DepositPolicy};
///
/// let config = AmmConfig::default()
///     .with_deposit_policy(DepositPolicy::ExactRatio { tolerance_bps: 50 })
///     .with_minimum_initial_shares(1_000);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.minimum_initial_shares(), 1_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AmmConfig {
    pool_domain: &'static [u8],
    deposit_policy: DepositPolicy,
    minimum_initial_shares: u128,
}

impl AmmConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// [`AmmError::InvalidConfiguration`] if any field is out of range.
    pub fn new(
        pool_domain: &'static [u8],
        deposit_policy: DepositPolicy,
        minimum_initial_shares: u128,
    ) -> Result<Self> {
        let config = Self {
            pool_domain,
            deposit_policy,
            minimum_initial_shares,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// [`AmmError::InvalidConfiguration`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if self.pool_domain.is_empty() {
            return Err(AmmError::InvalidConfiguration("pool domain must be non-empty"));
        }
        if self.minimum_initial_shares == 0 {
            return Err(AmmError::InvalidConfiguration(
                "minimum initial shares must be at least 1",
            ));
        }
        self.deposit_policy.validate()
    }

    /// Overrides the pool identity domain separator.
    #[must_use]
    pub fn with_pool_domain(mut self, pool_domain: &'static [u8]) -> Self {
        self.pool_domain = pool_domain;
        self
    }

    /// Overrides the deposit policy.
    #[must_use]
    pub fn with_deposit_policy(mut self, deposit_policy: DepositPolicy) -> Self {
        self.deposit_policy = deposit_policy;
        self
    }

    /// Overrides the minimum share count of a pool's first deposit.
    #[must_use]
    pub fn with_minimum_initial_shares(mut self, minimum_initial_shares: u128) -> Self {
        self.minimum_initial_shares = minimum_initial_shares;
        self
    }

    /// Domain separator hashed into every pool identity.
    #[must_use]
    pub const fn pool_domain(&self) -> &'static [u8] {
        self.pool_domain
    }

    /// Deposit policy for funded pools.
    #[must_use]
    pub const fn deposit_policy(&self) -> DepositPolicy {
        self.deposit_policy
    }

    /// Shares the first deposit into a pool must mint at minimum.
    #[must_use]
    pub const fn minimum_initial_shares(&self) -> u128 {
        self.minimum_initial_shares
    }
}

impl Default for AmmConfig {
    fn default() -> Self {
        Self {
            pool_domain: DEFAULT_POOL_DOMAIN,
            deposit_policy: DepositPolicy::Clamp,
            minimum_initial_shares: 1,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = AmmConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.pool_domain(), b"XYK_AMM_POOL_V1");
        assert_eq!(config.deposit_policy(), DepositPolicy::Clamp);
        assert_eq!(config.minimum_initial_shares(), 1);
    }

    #[test]
    fn new_validates() {
        let Ok(config) = AmmConfig::new(b"TEST", DepositPolicy::Clamp, 10) else {
            panic!("expected valid config");
        };
        assert_eq!(config.pool_domain(), b"TEST");

        assert_eq!(
            AmmConfig::new(b"", DepositPolicy::Clamp, 1),
            Err(AmmError::InvalidConfiguration("pool domain must be non-empty"))
        );
        assert!(AmmConfig::new(b"TEST", DepositPolicy::Clamp, 0).is_err());
        assert!(
            AmmConfig::new(b"TEST", DepositPolicy::ExactRatio { tolerance_bps: 20_000 }, 1)
                .is_err()
        );
    }

    #[test]
    fn builders_override_single_fields() {
        let config = AmmConfig::default().with_pool_domain(b"OTHER");
        assert_eq!(config.pool_domain(), b"OTHER");
        assert_eq!(config.minimum_initial_shares(), 1);

        let broken = AmmConfig::default().with_minimum_initial_shares(0);
        assert!(broken.validate().is_err());
    }
}
