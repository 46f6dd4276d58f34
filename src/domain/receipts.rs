//! Outcomes of pool instructions.

use super::{Amount, PoolState, Shares, SwapDirection};

/// A priced swap that has not been applied yet.
///
/// Produced by the swap engine; applying it moves the pool to
/// `(new_reserve0, new_reserve1)`.
///
/// # Invariants
///
/// - `amount_in > 0`, `amount_out > 0`.
/// - `new_reserve0 * new_reserve1 >= reserve0 * reserve1` of the pool the
///   quote was computed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapQuote {
    direction: SwapDirection,
    amount_in: Amount,
    amount_out: Amount,
    new_reserve0: Amount,
    new_reserve1: Amount,
}

impl SwapQuote {
    pub(crate) const fn new(
        direction: SwapDirection,
        amount_in: Amount,
        amount_out: Amount,
        new_reserve0: Amount,
        new_reserve1: Amount,
    ) -> Self {
        Self {
            direction,
            amount_in,
            amount_out,
            new_reserve0,
            new_reserve1,
        }
    }

    /// Direction of the trade.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Tokens the trader pays in.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Tokens the trader receives.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Token0 reserve after the trade.
    pub const fn new_reserve0(&self) -> Amount {
        self.new_reserve0
    }

    /// Token1 reserve after the trade.
    pub const fn new_reserve1(&self) -> Amount {
        self.new_reserve1
    }
}

/// A committed swap: the quote that was executed and the resulting pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapReceipt {
    /// The executed quote.
    pub quote: SwapQuote,
    /// Pool record after commit.
    pub pool: PoolState,
}

/// A committed liquidity deposit.
///
/// Under the clamping deposit policy `deposited0`/`deposited1` may be
/// lower than the amounts offered; the excess is never debited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositReceipt {
    /// Token0 actually moved into the vault.
    pub deposited0: Amount,
    /// Token1 actually moved into the vault.
    pub deposited1: Amount,
    /// Shares credited to the depositor.
    pub shares_minted: Shares,
    /// Pool record after commit.
    pub pool: PoolState,
}
