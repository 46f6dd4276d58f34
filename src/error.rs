//! Unified error types.
//!
//! Every fallible instruction returns [`AmmError`].  Errors are terminal
//! for the instruction that raised them: nothing is retried internally and
//! no pool record or vault balance is changed on an error path.
//!
//! Failures reported by the custody service are described by
//! [`CustodyError`] and surface to callers wrapped in
//! [`AmmError::TransferFailed`].

use thiserror::Error;

use crate::domain::{AccountRef, Address, Amount, PoolId, Side};

/// Errors raised by pool instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmmError {
    /// A pool already exists for this token pair.
    #[error("pool {0} already exists")]
    AlreadyExists(PoolId),

    /// No pool is recorded under this identity.
    #[error("pool {0} not found")]
    NotFound(PoolId),

    /// Both sides of a pair name the same mint.
    #[error("token0 and token1 must be different mints")]
    IdenticalTokens,

    /// A caller account that may not take part in the instruction, such
    /// as one of the pool's own vaults.
    #[error("invalid account: {0}")]
    InvalidAccount(&'static str),

    /// A zero or otherwise unusable deposit or swap amount.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// The pool cannot pay out: zero reserves, or the trade would drain
    /// a reserve.
    #[error("insufficient liquidity: {0}")]
    InsufficientLiquidity(&'static str),

    /// An intermediate value left the representable integer range.
    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(&'static str),

    /// The custody service refused a debit, credit or account operation.
    #[error("transfer failed: {0}")]
    TransferFailed(#[from] CustodyError),

    /// A vault balance disagrees with the pool's accounted reserve.
    #[error("custody mismatch on {side}: reserve {reserve}, vault balance {balance}")]
    CustodyMismatch {
        /// Side whose vault disagrees.
        side: Side,
        /// Accounted reserve.
        reserve: Amount,
        /// Balance reported by custody.
        balance: Amount,
    },

    /// An [`AmmConfig`](crate::config::AmmConfig) failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Failures reported by a [`CustodyService`](crate::traits::CustodyService).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CustodyError {
    /// The handle does not name an account.
    #[error("unknown account {0}")]
    UnknownAccount(AccountRef),

    /// The signing authority does not own the debited account.
    #[error("{authority} may not debit {account}")]
    Unauthorized {
        /// Debited account.
        account: AccountRef,
        /// Authority that signed the transfer.
        authority: Address,
    },

    /// The debited account holds less than requested.
    #[error("insufficient funds in {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        /// Debited account.
        account: AccountRef,
        /// Balance at the time of the request.
        balance: Amount,
        /// Requested debit.
        requested: Amount,
    },

    /// Source and destination hold different mints.
    #[error("token mismatch between {from} and {to}")]
    TokenMismatch {
        /// Source account.
        from: AccountRef,
        /// Destination account.
        to: AccountRef,
    },

    /// Crediting would overflow the destination balance.
    #[error("balance overflow in {0}")]
    BalanceOverflow(AccountRef),

    /// Any other refusal by the service.
    #[error("rejected by custody: {0}")]
    Rejected(&'static str),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;
