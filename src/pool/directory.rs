//! Pool Directory: identity derivation and the record store.

use std::collections::HashMap;

use crate::domain::{Address, PoolId, PoolState, Shares, TokenPair};
use crate::error::{AmmError, Result};
use crate::math::CheckedArithmetic;

/// A share balance computed by [`PoolDirectory::preview_credit`], ready
/// to be stored with [`PoolDirectory::apply_credit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct ShareCredit {
    pool: PoolId,
    owner: Address,
    balance: Shares,
}

impl ShareCredit {
    /// The owner's balance once the credit is applied.
    #[must_use]
    pub const fn balance(&self) -> Shares {
        self.balance
    }
}

/// Owns every pool record and every provider's share balance.
///
/// Records are keyed by [`PoolId`], which is derived from the canonical
/// token pair, so at most one record can exist per unordered pair.
/// Records are never removed.
#[derive(Debug, Clone)]
pub struct PoolDirectory {
    domain: &'static [u8],
    pools: HashMap<PoolId, PoolState>,
    shares: HashMap<(PoolId, Address), Shares>,
}

impl PoolDirectory {
    /// Creates an empty directory deriving identities under `domain`.
    #[must_use]
    pub fn new(domain: &'static [u8]) -> Self {
        Self {
            domain,
            pools: HashMap::new(),
            shares: HashMap::new(),
        }
    }

    /// Identity of the pool for `(token_a, token_b)`, in either order.
    ///
    /// Pure: it does not consult the store.
    ///
    /// # Errors
    ///
    /// [`AmmError::IdenticalTokens`] if both tokens are the same mint.
    pub fn derive_identity(&self, token_a: Address, token_b: Address) -> Result<PoolId> {
        let pair = TokenPair::new(token_a, token_b)?;
        Ok(self.identity_of(&pair))
    }

    /// Identity of the pool for an already canonical pair.
    #[must_use]
    pub fn identity_of(&self, pair: &TokenPair) -> PoolId {
        PoolId::derive(self.domain, pair)
    }

    /// The record stored under `id`.
    ///
    /// # Errors
    ///
    /// [`AmmError::NotFound`] if no pool has that identity.
    pub fn get(&self, id: &PoolId) -> Result<&PoolState> {
        self.pools.get(id).ok_or(AmmError::NotFound(*id))
    }

    /// `true` if a pool is recorded under `id`.
    #[must_use]
    pub fn contains(&self, id: &PoolId) -> bool {
        self.pools.contains_key(id)
    }

    /// Stores a freshly initialized record.
    ///
    /// # Errors
    ///
    /// [`AmmError::AlreadyExists`] if the identity is taken; the existing
    /// record is left untouched.
    pub fn insert_new(&mut self, pool: PoolState) -> Result<()> {
        let id = pool.id();
        if self.pools.contains_key(&id) {
            return Err(AmmError::AlreadyExists(id));
        }
        self.pools.insert(id, pool);
        Ok(())
    }

    /// Stores `pool` over the record with the same identity.
    ///
    /// Only the engine calls this, with a record derived from one it read
    /// from this directory.
    pub(crate) fn commit(&mut self, pool: PoolState) {
        self.pools.insert(pool.id(), pool);
    }

    /// Computes `owner`'s share balance after minting `minted`, without
    /// storing it.
    ///
    /// # Errors
    ///
    /// [`AmmError::ArithmeticOverflow`] if the balance would overflow.
    pub fn preview_credit(&self, id: &PoolId, owner: &Address, minted: Shares) -> Result<ShareCredit> {
        let balance = self.shares_of(id, owner).safe_add(&minted)?;
        Ok(ShareCredit {
            pool: *id,
            owner: *owner,
            balance,
        })
    }

    /// Stores a balance computed by [`preview_credit`](Self::preview_credit).
    pub fn apply_credit(&mut self, credit: ShareCredit) {
        self.shares.insert((credit.pool, credit.owner), credit.balance);
    }

    /// Shares of pool `id` held by `owner`; zero if none.
    #[must_use]
    pub fn shares_of(&self, id: &PoolId, owner: &Address) -> Shares {
        self.shares
            .get(&(*id, *owner))
            .copied()
            .unwrap_or(Shares::ZERO)
    }

    /// Number of pools recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    /// `true` if no pool has been initialized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// Iterates over every pool record, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &PoolState> {
        self.pools.values()
    }
}
