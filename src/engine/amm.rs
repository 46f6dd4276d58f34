//! The instruction engine.

use tracing::{debug, info, warn};

use crate::config::AmmConfig;
use crate::custody::{execute_atomically, Transfer};
use crate::domain::{
    Address, Amount, DepositReceipt, PoolId, PoolState, Shares, Side, SwapDirection, SwapQuote,
    SwapReceipt, TokenPair, UserAccounts, VaultRef,
};
use crate::error::{AmmError, Result};
use crate::pool::{apply_quote, plan_deposit, quote_swap, PoolDirectory};
use crate::traits::CustodyService;

/// Constant-product AMM over a [`CustodyService`].
///
/// Executes the three instructions (pool initialization, liquidity
/// deposit, swap) against the pools in its [`PoolDirectory`].  Every
/// instruction takes `&mut self`, so instructions are serialized; pools
/// share no mutable state with each other.
///
/// Each instruction follows the same sequence:
///
/// 1. Read the pool record and compute the complete new record.
/// 2. Move tokens with [`execute_atomically`].
/// 3. Commit the new record.
///
/// An error at any step returns before the record is committed, and the
/// custody batch leaves no partial transfer behind, so a failed
/// instruction changes neither reserves nor balances.  Nothing after
/// step 2 can fail.
///
/// User legs are signed with `UserAccounts::owner` and vault legs with
/// [`PoolId::authority`]; the custody service decides whether the
/// signer may debit the account.
///
/// # Examples
///
/// ```
/// use xyk_amm::prelude::*;
///
/// let (usdc, sol) = (Address::from_bytes([1; 32]), Address::from_bytes([2; 32]));
/// let alice = Address::from_bytes([9; 32]);
///
/// let mut ledger = MemoryLedger::new();
/// let a0 = ledger.open_account(alice, usdc).expect("open");
/// let a1 = ledger.open_account(alice, sol).expect("open");
/// ledger.mint_to(a0, Amount::new(100)).expect("mint");
/// ledger.mint_to(a1, Amount::new(100)).expect("mint");
/// let user = UserAccounts::new(alice, a0, a1);
///
/// let mut amm = Amm::new(AmmConfig::default(), ledger).expect("valid config");
/// let pool = amm.initialize_pool(usdc, sol).expect("new pool");
/// amm.provide_liquidity(&pool.id(), &user, Amount::new(25), Amount::new(10))
///     .expect("deposit");
/// let receipt = amm
///     .swap(&pool.id(), &user, SwapDirection::Token0ToToken1, Amount::new(25))
///     .expect("swap");
///
/// assert_eq!(receipt.quote.amount_out(), Amount::new(5));
/// assert_eq!(receipt.pool.reserve0(), Amount::new(50));
/// assert_eq!(receipt.pool.reserve1(), Amount::new(5));
/// ```
#[derive(Debug)]
pub struct Amm<C: CustodyService> {
    config: AmmConfig,
    directory: PoolDirectory,
    custody: C,
}

impl<C: CustodyService> Amm<C> {
    /// Creates an engine with no pools.
    ///
    /// # Errors
    ///
    /// [`AmmError::InvalidConfiguration`] if `config` fails validation.
    pub fn new(config: AmmConfig, custody: C) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            directory: PoolDirectory::new(config.pool_domain()),
            config,
            custody,
        })
    }

    /// Creates the pool for `(token_a, token_b)` with zero reserves.
    ///
    /// The tokens may be given in either order.  Two vault accounts are
    /// opened with the custody service, owned by [`PoolId::authority`].
    /// If the second vault cannot be opened no pool is recorded and the
    /// call may be retried.
    ///
    /// # Errors
    ///
    /// - [`AmmError::IdenticalTokens`] if both tokens are the same mint.
    /// - [`AmmError::AlreadyExists`] if the pair already has a pool.
    /// - [`AmmError::TransferFailed`] if custody cannot open a vault.
    pub fn initialize_pool(
        &mut self,
        token_a: Address,
        token_b: Address,
    ) -> Result<PoolState> {
        let pair = TokenPair::new(token_a, token_b)?;
        let id = self.directory.identity_of(&pair);
        if self.directory.contains(&id) {
            return Err(AmmError::AlreadyExists(id));
        }

        let authority = id.authority();
        let vault0 = self
            .custody
            .create_custody_account(&authority, &pair.token(Side::Token0))?;
        let vault1 = self
            .custody
            .create_custody_account(&authority, &pair.token(Side::Token1))?;

        let pool = PoolState::new(id, pair, VaultRef::new(vault0), VaultRef::new(vault1));
        self.directory.insert_new(pool)?;

        info!(
            pool = %id,
            token0 = %pair.token0(),
            token1 = %pair.token1(),
            vault0 = %vault0,
            vault1 = %vault1,
            "pool initialized"
        );
        Ok(pool)
    }

    /// Deposits up to `(amount0, amount1)` from `user` into the pool.
    ///
    /// An empty pool takes both amounts as given.  A funded pool applies
    /// the configured [`DepositPolicy`](crate::config::DepositPolicy).
    /// Shares are credited to `user.owner`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::NotFound`] for an unknown pool.
    /// - [`AmmError::InvalidAccount`] if a user account is one of the
    ///   pool's vaults, or `user.owner` is a pool authority.
    /// - [`AmmError::InvalidAmount`] for zero, off-ratio or dust deposits.
    /// - [`AmmError::ArithmeticOverflow`] if a reserve or share balance
    ///   would overflow.
    /// - [`AmmError::TransferFailed`] if custody refuses either transfer.
    pub fn provide_liquidity(
        &mut self,
        pool_id: &PoolId,
        user: &UserAccounts,
        amount0: Amount,
        amount1: Amount,
    ) -> Result<DepositReceipt> {
        let pool = *self.directory.get(pool_id)?;
        self.check_user_accounts(&pool, user)?;
        let plan = plan_deposit(
            &pool,
            amount0,
            amount1,
            &self.config.deposit_policy(),
            self.config.minimum_initial_shares(),
        )?;
        let credit = self
            .directory
            .preview_credit(pool_id, &user.owner, plan.shares_minted)?;

        let vaults = pool_id.authority();
        let legs = [
            Transfer::new(
                (user.token0_account, user.owner),
                (pool.vault0().account(), vaults),
                plan.deposit0,
            ),
            Transfer::new(
                (user.token1_account, user.owner),
                (pool.vault1().account(), vaults),
                plan.deposit1,
            ),
        ];
        self.move_tokens(pool_id, &legs)?;

        self.directory.commit(plan.new_state);
        self.directory.apply_credit(credit);

        debug!(
            pool = %pool_id,
            owner = %user.owner,
            deposited0 = %plan.deposit0,
            deposited1 = %plan.deposit1,
            shares = %plan.shares_minted,
            owner_shares = %credit.balance(),
            reserve0 = %plan.new_state.reserve0(),
            reserve1 = %plan.new_state.reserve1(),
            "liquidity provided"
        );
        Ok(DepositReceipt {
            deposited0: plan.deposit0,
            deposited1: plan.deposit1,
            shares_minted: plan.shares_minted,
            pool: plan.new_state,
        })
    }

    /// Swaps `amount_in` of the input token for the output token.
    ///
    /// `amount_in` moves from the user's input-side account into the
    /// input vault; the priced output moves from the output vault to the
    /// user's output-side account.
    ///
    /// # Errors
    ///
    /// - [`AmmError::NotFound`] for an unknown pool.
    /// - [`AmmError::InvalidAccount`] if a user account is one of the
    ///   pool's vaults, or `user.owner` is a pool authority.
    /// - [`AmmError::InvalidAmount`] if `amount_in` is zero.
    /// - [`AmmError::InsufficientLiquidity`] if the pool is unfunded or the
    ///   output would be zero or drain the reserve.
    /// - [`AmmError::ArithmeticOverflow`] if the input reserve would
    ///   overflow.
    /// - [`AmmError::TransferFailed`] if custody refuses either transfer.
    pub fn swap(
        &mut self,
        pool_id: &PoolId,
        user: &UserAccounts,
        direction: SwapDirection,
        amount_in: Amount,
    ) -> Result<SwapReceipt> {
        let pool = *self.directory.get(pool_id)?;
        self.check_user_accounts(&pool, user)?;
        let quote = quote_swap(&pool, direction, amount_in)?;
        let new_state = apply_quote(&pool, &quote);

        let (input, output) = (direction.input_side(), direction.output_side());
        let vaults = pool_id.authority();
        let legs = [
            Transfer::new(
                (user.account(input), user.owner),
                (pool.vault(input).account(), vaults),
                amount_in,
            ),
            Transfer::new(
                (pool.vault(output).account(), vaults),
                (user.account(output), user.owner),
                quote.amount_out(),
            ),
        ];
        self.move_tokens(pool_id, &legs)?;

        self.directory.commit(new_state);

        debug!(
            pool = %pool_id,
            %direction,
            amount_in = %amount_in,
            amount_out = %quote.amount_out(),
            reserve0 = %new_state.reserve0(),
            reserve1 = %new_state.reserve1(),
            "swap executed"
        );
        Ok(SwapReceipt {
            quote,
            pool: new_state,
        })
    }

    /// Prices a swap without executing it.
    ///
    /// # Errors
    ///
    /// Same as [`swap`](Self::swap), minus custody failures.
    pub fn quote_swap(
        &self,
        pool_id: &PoolId,
        direction: SwapDirection,
        amount_in: Amount,
    ) -> Result<SwapQuote> {
        quote_swap(self.directory.get(pool_id)?, direction, amount_in)
    }

    /// Identity of the pool for `(token_a, token_b)`, whether or not it
    /// exists yet.
    ///
    /// # Errors
    ///
    /// [`AmmError::IdenticalTokens`] if both tokens are the same mint.
    pub fn pool_id(&self, token_a: Address, token_b: Address) -> Result<PoolId> {
        self.directory.derive_identity(token_a, token_b)
    }

    /// The record of pool `pool_id`.
    ///
    /// # Errors
    ///
    /// [`AmmError::NotFound`] for an unknown pool.
    pub fn pool(&self, pool_id: &PoolId) -> Result<&PoolState> {
        self.directory.get(pool_id)
    }

    /// The record of the pool for `(token_a, token_b)`, in either order.
    ///
    /// # Errors
    ///
    /// [`AmmError::IdenticalTokens`] or [`AmmError::NotFound`].
    pub fn pool_for_pair(&self, token_a: Address, token_b: Address) -> Result<&PoolState> {
        let id = self.directory.derive_identity(token_a, token_b)?;
        self.directory.get(&id)
    }

    /// Every pool record, in no particular order.
    pub fn pools(&self) -> impl Iterator<Item = &PoolState> {
        self.directory.iter()
    }

    /// Shares of `pool_id` held by `owner`.
    #[must_use]
    pub fn shares_of(&self, pool_id: &PoolId, owner: &Address) -> Shares {
        self.directory.shares_of(pool_id, owner)
    }

    /// Checks that both vault balances equal the pool's reserves.
    ///
    /// # Errors
    ///
    /// - [`AmmError::NotFound`] for an unknown pool.
    /// - [`AmmError::TransferFailed`] if custody cannot report a balance.
    /// - [`AmmError::CustodyMismatch`] naming the first side that
    ///   disagrees.
    pub fn verify_custody(&self, pool_id: &PoolId) -> Result<()> {
        let pool = self.directory.get(pool_id)?;
        for side in [Side::Token0, Side::Token1] {
            let balance = self.custody.balance_of(&pool.vault(side).account())?;
            let reserve = pool.reserve(side);
            if balance != reserve {
                warn!(pool = %pool_id, %side, %reserve, %balance, "vault balance disagrees with reserve");
                return Err(AmmError::CustodyMismatch {
                    side,
                    reserve,
                    balance,
                });
            }
        }
        Ok(())
    }

    /// The engine configuration.
    #[must_use]
    pub const fn config(&self) -> &AmmConfig {
        &self.config
    }

    /// The custody service.
    #[must_use]
    pub const fn custody(&self) -> &C {
        &self.custody
    }

    /// Mutable access to the custody service, for funding user accounts.
    ///
    /// Moving tokens in or out of a pool vault through this handle breaks
    /// the reserve/balance correspondence; [`verify_custody`](Self::verify_custody)
    /// reports it.
    pub fn custody_mut(&mut self) -> &mut C {
        &mut self.custody
    }

    /// Consumes the engine, returning the custody service.
    pub fn into_custody(self) -> C {
        self.custody
    }

    /// Rejects callers that would act for a pool rather than against it.
    ///
    /// A vault on the user side turns a deposit or swap into a
    /// vault-to-vault move that pays out shares or tokens for nothing, and
    /// a pool authority as `owner` would let user legs sign for vaults.
    fn check_user_accounts(&self, pool: &PoolState, user: &UserAccounts) -> Result<()> {
        let vaults = [pool.vault0().account(), pool.vault1().account()];
        for side in [Side::Token0, Side::Token1] {
            if vaults.contains(&user.account(side)) {
                warn!(pool = %pool.id(), %side, "user account is a pool vault");
                return Err(AmmError::InvalidAccount("user account is a pool vault"));
            }
        }
        if self
            .directory
            .contains(&PoolId::from_bytes(*user.owner.as_bytes()))
        {
            warn!(pool = %pool.id(), owner = %user.owner, "pool authority used as a user");
            return Err(AmmError::InvalidAccount("pool authority cannot act as a user"));
        }
        Ok(())
    }

    fn move_tokens(&mut self, pool_id: &PoolId, legs: &[Transfer]) -> Result<()> {
        execute_atomically(&mut self.custody, legs).map_err(|err| {
            warn!(pool = %pool_id, %err, "instruction rejected by custody");
            AmmError::TransferFailed(err)
        })
    }
}
