//! All-or-nothing execution of multi-leg transfers.

use tracing::{error, warn};

use crate::domain::{AccountRef, Address, Amount};
use crate::error::CustodyError;
use crate::traits::CustodyService;

/// One leg of a custody batch.
///
/// A leg records the authority of both accounts: `from_authority` signs
/// the debit, and `to_authority` signs the reversal if the batch unwinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transfer {
    /// Debited account.
    pub from: AccountRef,
    /// Owner of `from`.
    pub from_authority: Address,
    /// Credited account.
    pub to: AccountRef,
    /// Owner of `to`.
    pub to_authority: Address,
    /// Quantity moved.
    pub amount: Amount,
}

impl Transfer {
    /// Creates a transfer leg.
    #[must_use]
    pub const fn new(
        (from, from_authority): (AccountRef, Address),
        (to, to_authority): (AccountRef, Address),
        amount: Amount,
    ) -> Self {
        Self {
            from,
            from_authority,
            to,
            to_authority,
            amount,
        }
    }

    /// The same leg in the opposite direction.
    #[must_use]
    pub const fn reversed(&self) -> Self {
        Self {
            from: self.to,
            from_authority: self.to_authority,
            to: self.from,
            to_authority: self.from_authority,
            amount: self.amount,
        }
    }

    fn apply<C>(&self, custody: &mut C) -> Result<(), CustodyError>
    where
        C: CustodyService + ?Sized,
    {
        custody.transfer(&self.from_authority, &self.from, &self.to, self.amount)
    }
}

/// Executes `legs` in order so that either all of them take effect or
/// none do.
///
/// 1. Every debited account is checked up front against the sum of its
///    debits in the batch.  Credits received earlier in the same batch
///    are not counted.
/// 2. Legs run in order; zero-amount legs are skipped.
/// 3. If a leg fails, the legs already executed are reversed in reverse
///    order and the original error is returned.
///
/// # Errors
///
/// The first [`CustodyError`] raised by the pre-check or by a leg.
pub fn execute_atomically<C>(custody: &mut C, legs: &[Transfer]) -> Result<(), CustodyError>
where
    C: CustodyService + ?Sized,
{
    precheck_debits(custody, legs)?;

    let mut done: Vec<Transfer> = Vec::with_capacity(legs.len());
    for leg in legs.iter().filter(|leg| !leg.amount.is_zero()) {
        if let Err(err) = leg.apply(custody) {
            warn!(from = %leg.from, to = %leg.to, amount = %leg.amount, %err, "custody leg failed, unwinding batch");
            unwind(custody, &done);
            return Err(err);
        }
        done.push(*leg);
    }
    Ok(())
}

fn precheck_debits<C>(custody: &C, legs: &[Transfer]) -> Result<(), CustodyError>
where
    C: CustodyService + ?Sized,
{
    let mut debits: Vec<(AccountRef, u128)> = Vec::new();
    for leg in legs.iter().filter(|leg| !leg.amount.is_zero()) {
        match debits.iter_mut().find(|(account, _)| *account == leg.from) {
            Some((_, total)) => *total += leg.amount.widen(),
            None => debits.push((leg.from, leg.amount.widen())),
        }
    }

    for (account, total) in debits {
        let balance = custody.balance_of(&account)?;
        if balance.widen() < total {
            return Err(CustodyError::InsufficientFunds {
                account,
                balance,
                requested: u64::try_from(total).map_or(Amount::MAX, Amount::new),
            });
        }
    }
    Ok(())
}

fn unwind<C>(custody: &mut C, done: &[Transfer])
where
    C: CustodyService + ?Sized,
{
    for leg in done.iter().rev().map(Transfer::reversed) {
        if let Err(err) = leg.apply(custody) {
            error!(from = %leg.from, to = %leg.to, amount = %leg.amount, %err, "failed to reverse custody leg");
        }
    }
}
