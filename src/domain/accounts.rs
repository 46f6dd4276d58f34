//! Custody account handles.

use core::fmt;

use super::{Address, Side};

/// Opaque handle to an account held by the custody service.
///
/// The handle is issued by the service and is meaningless to the core:
/// it is only ever passed back to the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AccountRef(u64);

impl AccountRef {
    /// Wraps a custody-issued handle.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw handle.
    #[must_use]
    pub const fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for AccountRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "acct#{}", self.0)
    }
}

/// A custody account exclusively controlled by one pool.
///
/// Only accounted instructions of the owning pool move tokens in or out
/// of a vault.  The wrapper exists so that a user account can never be
/// passed where a vault is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VaultRef(AccountRef);

impl VaultRef {
    /// Binds a freshly created custody account as a vault.
    #[must_use]
    pub const fn new(account: AccountRef) -> Self {
        Self(account)
    }

    /// The underlying custody account.
    #[must_use]
    pub const fn account(&self) -> AccountRef {
        self.0
    }
}

/// The caller's externally owned accounts for one instruction.
///
/// `token0_account` and `token1_account` must hold the pool's token0 and
/// token1 respectively; the custody service rejects transfers between
/// accounts of different mints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserAccounts {
    /// Identity credited with liquidity shares.
    pub owner: Address,
    /// Account holding the pool's token0.
    pub token0_account: AccountRef,
    /// Account holding the pool's token1.
    pub token1_account: AccountRef,
}

impl UserAccounts {
    /// Bundles a caller's accounts.
    #[must_use]
    pub const fn new(owner: Address, token0_account: AccountRef, token1_account: AccountRef) -> Self {
        Self {
            owner,
            token0_account,
            token1_account,
        }
    }

    /// The caller's account for `side`.
    #[must_use]
    pub const fn account(&self, side: Side) -> AccountRef {
        match side {
            Side::Token0 => self.token0_account,
            Side::Token1 => self.token1_account,
        }
    }
}
