//! In-memory custody ledger.

use crate::domain::{AccountRef, Address, Amount};
use crate::error::CustodyError;
use crate::traits::CustodyService;

#[derive(Debug, Clone, PartialEq, Eq)]
struct LedgerAccount {
    owner: Address,
    token: Address,
    balance: Amount,
}

/// A self-contained [`CustodyService`] that keeps every account in memory.
///
/// Intended for simulations and tests.  It enforces the same rules a real
/// token program does for the operations the engine uses: only the owner
/// may debit an account, balances never go negative or overflow, and
/// tokens never move between different mints.
///
/// # Examples
///
/// ```
/// use xyk_amm::custody::MemoryLedger;
/// use xyk_amm::domain::{Address, Amount};
/// use xyk_amm::traits::CustodyService;
///
/// let alice = Address::from_bytes([7u8; 32]);
/// let usdc = Address::from_bytes([1u8; 32]);
///
/// let mut ledger = MemoryLedger::new();
/// let a = ledger.open_account(alice, usdc).expect("open");
/// let b = ledger.open_account(alice, usdc).expect("open");
/// ledger.mint_to(a, Amount::new(100)).expect("known account");
/// ledger.transfer(&alice, &a, &b, Amount::new(40)).expect("funded");
///
/// assert_eq!(ledger.balance_of(&a), Ok(Amount::new(60)));
/// assert_eq!(ledger.balance_of(&b), Ok(Amount::new(40)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryLedger {
    accounts: Vec<LedgerAccount>,
}

impl MemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a zero-balance account for `token` owned by `owner`.
    ///
    /// # Errors
    ///
    /// [`CustodyError::Rejected`] once the handle space is exhausted.
    pub fn open_account(
        &mut self,
        owner: Address,
        token: Address,
    ) -> Result<AccountRef, CustodyError> {
        let raw = u64::try_from(self.accounts.len())
            .map_err(|_| CustodyError::Rejected("account handles exhausted"))?;
        self.accounts.push(LedgerAccount {
            owner,
            token,
            balance: Amount::ZERO,
        });
        Ok(AccountRef::new(raw))
    }

    /// Credits newly issued tokens to `account`.
    ///
    /// # Errors
    ///
    /// [`CustodyError::UnknownAccount`] or [`CustodyError::BalanceOverflow`].
    pub fn mint_to(&mut self, account: AccountRef, amount: Amount) -> Result<(), CustodyError> {
        let entry = self.get_mut(&account)?;
        entry.balance = entry
            .balance
            .checked_add(&amount)
            .ok_or(CustodyError::BalanceOverflow(account))?;
        Ok(())
    }

    /// Owner recorded for `account`.
    ///
    /// # Errors
    ///
    /// [`CustodyError::UnknownAccount`] for an unknown handle.
    pub fn owner_of(&self, account: &AccountRef) -> Result<Address, CustodyError> {
        self.get(account).map(|a| a.owner)
    }

    /// Mint held by `account`.
    ///
    /// # Errors
    ///
    /// [`CustodyError::UnknownAccount`] for an unknown handle.
    pub fn token_of(&self, account: &AccountRef) -> Result<Address, CustodyError> {
        self.get(account).map(|a| a.token)
    }

    /// Sum of all balances of `token`, across every account.
    #[must_use]
    pub fn supply_of(&self, token: &Address) -> u128 {
        self.accounts
            .iter()
            .filter(|a| a.token == *token)
            .map(|a| a.balance.widen())
            .sum()
    }

    /// Number of accounts opened so far.
    #[must_use]
    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    fn index(account: &AccountRef) -> Result<usize, CustodyError> {
        usize::try_from(account.raw()).map_err(|_| CustodyError::UnknownAccount(*account))
    }

    fn get(&self, account: &AccountRef) -> Result<&LedgerAccount, CustodyError> {
        self.accounts
            .get(Self::index(account)?)
            .ok_or(CustodyError::UnknownAccount(*account))
    }

    fn get_mut(&mut self, account: &AccountRef) -> Result<&mut LedgerAccount, CustodyError> {
        self.accounts
            .get_mut(Self::index(account)?)
            .ok_or(CustodyError::UnknownAccount(*account))
    }
}

impl CustodyService for MemoryLedger {
    fn create_custody_account(
        &mut self,
        owner: &Address,
        token: &Address,
    ) -> Result<AccountRef, CustodyError> {
        self.open_account(*owner, *token)
    }

    fn transfer(
        &mut self,
        authority: &Address,
        from: &AccountRef,
        to: &AccountRef,
        amount: Amount,
    ) -> Result<(), CustodyError> {
        let source = self.get(from)?;
        let dest = self.get(to)?;

        if source.owner != *authority {
            return Err(CustodyError::Unauthorized {
                account: *from,
                authority: *authority,
            });
        }

        if source.token != dest.token {
            return Err(CustodyError::TokenMismatch {
                from: *from,
                to: *to,
            });
        }

        let new_source = source
            .balance
            .checked_sub(&amount)
            .ok_or(CustodyError::InsufficientFunds {
                account: *from,
                balance: source.balance,
                requested: amount,
            })?;

        if from == to {
            return Ok(());
        }

        let new_dest = dest
            .balance
            .checked_add(&amount)
            .ok_or(CustodyError::BalanceOverflow(*to))?;

        // Both balances are computed before either is written.
        self.get_mut(from)?.balance = new_source;
        self.get_mut(to)?.balance = new_dest;
        Ok(())
    }

    fn balance_of(&self, account: &AccountRef) -> Result<Amount, CustodyError> {
        self.get(account).map(|a| a.balance)
    }
}
