//! Boundary to the external token custody service.
//!
//! The core never holds tokens.  It asks a [`CustodyService`] to open
//! vault accounts for new pools, to move tokens between accounts, and to
//! report balances.  Everything else about custody (key management, mint
//! authority, rent, account layout) lives behind this trait.
//!
//! # Authority
//!
//! Every transfer names the authority signing for the debited account.
//! The engine signs vault debits with the pool's authority
//! ([`PoolId::authority`]) and user debits with the caller's owner
//! address.  A service must refuse a debit whose authority does not own
//! the source account, so a caller can never spend a vault or another
//! user's account by naming it as their own.
//!
//! [`PoolId::authority`]: crate::domain::PoolId::authority

use crate::domain::{AccountRef, Address, Amount};
use crate::error::CustodyError;

/// Token custody operations consumed by the pool engine.
///
/// # Contract
///
/// - `transfer` is all-or-nothing for a single leg: on `Err`, neither
///   account changed.
/// - `transfer` refuses a debit not signed by the source account's owner.
/// - `transfer` refuses to move tokens between accounts of different
///   mints.
/// - `balance_of` reflects every successful `transfer` immediately.
pub trait CustodyService {
    /// Opens a new account holding `token`, controlled by `owner`.
    ///
    /// # Errors
    ///
    /// Any [`CustodyError`] the service reports.
    fn create_custody_account(
        &mut self,
        owner: &Address,
        token: &Address,
    ) -> Result<AccountRef, CustodyError>;

    /// Moves `amount` from `from` to `to`, signed by `authority`.
    ///
    /// # Errors
    ///
    /// - [`CustodyError::UnknownAccount`] for an unknown handle.
    /// - [`CustodyError::Unauthorized`] if `authority` does not own `from`.
    /// - [`CustodyError::InsufficientFunds`] if `from` holds less than `amount`.
    /// - [`CustodyError::TokenMismatch`] if the accounts hold different mints.
    fn transfer(
        &mut self,
        authority: &Address,
        from: &AccountRef,
        to: &AccountRef,
        amount: Amount,
    ) -> Result<(), CustodyError>;

    /// Current balance of `account`.
    ///
    /// # Errors
    ///
    /// [`CustodyError::UnknownAccount`] for an unknown handle.
    fn balance_of(&self, account: &AccountRef) -> Result<Amount, CustodyError>;
}

impl<C: CustodyService + ?Sized> CustodyService for &mut C {
    fn create_custody_account(
        &mut self,
        owner: &Address,
        token: &Address,
    ) -> Result<AccountRef, CustodyError> {
        (**self).create_custody_account(owner, token)
    }

    fn transfer(
        &mut self,
        authority: &Address,
        from: &AccountRef,
        to: &AccountRef,
        amount: Amount,
    ) -> Result<(), CustodyError> {
        (**self).transfer(authority, from, to, amount)
    }

    fn balance_of(&self, account: &AccountRef) -> Result<Amount, CustodyError> {
        (**self).balance_of(account)
    }
}
