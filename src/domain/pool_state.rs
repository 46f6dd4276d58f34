//! The persisted pool record.

use super::{Address, Amount, PoolId, Shares, Side, TokenPair, VaultRef};

/// The persisted record of one pool.
///
/// # Invariants
///
/// - `pair.token0() < pair.token1()` (guaranteed by [`TokenPair`]).
/// - `reserve0` equals the custody balance of `vault0`, and `reserve1`
///   the balance of `vault1`, between instructions.
/// - `total_shares` is zero iff the pool has never received a deposit.
///
/// Records are only created by pool initialization and only replaced by
/// a fully successful deposit or swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolState {
    id: PoolId,
    pair: TokenPair,
    reserve0: Amount,
    reserve1: Amount,
    vault0: VaultRef,
    vault1: VaultRef,
    total_shares: Shares,
}

impl PoolState {
    /// A freshly initialized pool: zero reserves, zero shares.
    #[must_use]
    pub const fn new(id: PoolId, pair: TokenPair, vault0: VaultRef, vault1: VaultRef) -> Self {
        Self {
            id,
            pair,
            reserve0: Amount::ZERO,
            reserve1: Amount::ZERO,
            vault0,
            vault1,
            total_shares: Shares::ZERO,
        }
    }

    /// Returns the pool identity.
    #[must_use]
    pub const fn id(&self) -> PoolId {
        self.id
    }

    /// Returns the canonical token pair.
    #[must_use]
    pub const fn pair(&self) -> &TokenPair {
        &self.pair
    }

    /// Returns the token0 mint.
    #[must_use]
    pub const fn token0(&self) -> Address {
        self.pair.token0()
    }

    /// Returns the token1 mint.
    #[must_use]
    pub const fn token1(&self) -> Address {
        self.pair.token1()
    }

    /// Accounted balance of token0.
    pub const fn reserve0(&self) -> Amount {
        self.reserve0
    }

    /// Accounted balance of token1.
    pub const fn reserve1(&self) -> Amount {
        self.reserve1
    }

    /// Reserve on the given side.
    pub const fn reserve(&self, side: Side) -> Amount {
        match side {
            Side::Token0 => self.reserve0,
            Side::Token1 => self.reserve1,
        }
    }

    /// Vault holding token0.
    #[must_use]
    pub const fn vault0(&self) -> VaultRef {
        self.vault0
    }

    /// Vault holding token1.
    #[must_use]
    pub const fn vault1(&self) -> VaultRef {
        self.vault1
    }

    /// Vault on the given side.
    #[must_use]
    pub const fn vault(&self, side: Side) -> VaultRef {
        match side {
            Side::Token0 => self.vault0,
            Side::Token1 => self.vault1,
        }
    }

    /// Outstanding liquidity-provider shares.
    #[must_use]
    pub const fn total_shares(&self) -> Shares {
        self.total_shares
    }

    /// `true` while both reserves are zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.reserve0.is_zero() && self.reserve1.is_zero()
    }

    /// `reserve0 × reserve1` in the widened domain.
    #[must_use]
    pub const fn invariant(&self) -> u128 {
        self.reserve0.widen() * self.reserve1.widen()
    }

    /// Returns a copy with new reserves and share total.
    ///
    /// Used by the engines to stage a state transition that is committed
    /// only once custody transfers have succeeded.
    pub(crate) fn with_balances(
        &self,
        reserve0: Amount,
        reserve1: Amount,
        total_shares: Shares,
    ) -> Self {
        Self {
            reserve0,
            reserve1,
            total_shares,
            ..*self
        }
    }
}
