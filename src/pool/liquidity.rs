//! Liquidity engine: deposit planning and share minting.
//!
//! Planning is pure.  [`plan_deposit`] computes how much of each token
//! moves, how many shares are minted and the resulting pool record; the
//! engine applies the plan only after custody has moved the tokens.

use crate::config::{DepositPolicy, BPS_DENOMINATOR};
use crate::domain::{Amount, PoolState, Shares};
use crate::error::{AmmError, Result};
use crate::math::{isqrt, mul_div, narrow, product, CheckedArithmetic, Rounding};

/// The full effect of a deposit, computed before any token moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepositPlan {
    /// Token0 to move from the depositor into `vault0`.
    pub deposit0: Amount,
    /// Token1 to move from the depositor into `vault1`.
    pub deposit1: Amount,
    /// Shares credited to the depositor.
    pub shares_minted: Shares,
    /// Pool record to commit once both transfers succeed.
    pub new_state: PoolState,
}

/// Plans a deposit of at most `(amount0, amount1)` into `pool`.
///
/// An empty pool takes both amounts as given and mints
/// `isqrt(amount0 × amount1)` shares.  A funded pool applies `policy`
/// and mints `min(d0 × L / r0, d1 × L / r1)` shares, rounded down.
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] if either amount is zero, if the first
///   deposit mints fewer than `minimum_initial_shares`, if an
///   [`ExactRatio`](DepositPolicy::ExactRatio) offer is off-ratio, or if
///   the deposit is too small to mint a share.
/// - [`AmmError::ArithmeticOverflow`] if a reserve or the share total
///   would overflow.
pub fn plan_deposit(
    pool: &PoolState,
    amount0: Amount,
    amount1: Amount,
    policy: &DepositPolicy,
    minimum_initial_shares: u128,
) -> Result<DepositPlan> {
    if amount0.is_zero() || amount1.is_zero() {
        return Err(AmmError::InvalidAmount("deposit amounts must be non-zero"));
    }

    if pool.is_empty() {
        return plan_initial(pool, amount0, amount1, minimum_initial_shares);
    }

    let (r0, r1) = (pool.reserve0(), pool.reserve1());
    if r0.is_zero() || r1.is_zero() {
        return Err(AmmError::InsufficientLiquidity("pool has one empty reserve"));
    }

    let (deposit0, deposit1) = match policy {
        DepositPolicy::Clamp => clamp_to_ratio(r0, r1, amount0, amount1)?,
        DepositPolicy::ExactRatio { tolerance_bps } => {
            if !within_tolerance(product(amount0, r1), product(amount1, r0), *tolerance_bps) {
                return Err(AmmError::InvalidAmount("deposit ratio differs from pool ratio"));
            }
            (amount0, amount1)
        }
    };

    let total = pool.total_shares().get();
    let by0 = mul_div(deposit0.widen(), total, r0.widen(), Rounding::Down)?;
    let by1 = mul_div(deposit1.widen(), total, r1.widen(), Rounding::Down)?;
    let shares_minted = Shares::new(by0.min(by1));
    if shares_minted.is_zero() {
        return Err(AmmError::InvalidAmount("deposit too small to mint shares"));
    }

    finish(pool, deposit0, deposit1, shares_minted)
}

fn plan_initial(
    pool: &PoolState,
    amount0: Amount,
    amount1: Amount,
    minimum_initial_shares: u128,
) -> Result<DepositPlan> {
    let shares = isqrt(product(amount0, amount1));
    if shares < minimum_initial_shares.max(1) {
        return Err(AmmError::InvalidAmount("initial deposit mints too few shares"));
    }
    finish(pool, amount0, amount1, Shares::new(shares))
}

/// Reduces the side in excess of `r0 : r1`.  Rounding up favors the pool.
fn clamp_to_ratio(
    r0: Amount,
    r1: Amount,
    amount0: Amount,
    amount1: Amount,
) -> Result<(Amount, Amount)> {
    let optimal1 = mul_div(amount0.widen(), r1.widen(), r0.widen(), Rounding::Up)?;
    if optimal1 <= amount1.widen() {
        return Ok((amount0, narrow(optimal1, "clamped token1 deposit")?));
    }
    let optimal0 = mul_div(amount1.widen(), r0.widen(), r1.widen(), Rounding::Up)?;
    Ok((narrow(optimal0, "clamped token0 deposit")?.min(amount0), amount1))
}

/// `|lhs - rhs| <= max(lhs, rhs) × tolerance_bps / 10 000`, without overflow.
fn within_tolerance(lhs: u128, rhs: u128, tolerance_bps: u16) -> bool {
    let (hi, lo) = if lhs >= rhs { (lhs, rhs) } else { (rhs, lhs) };
    let bps = u128::from(BPS_DENOMINATOR);
    let tol = u128::from(tolerance_bps);
    let allowed = (hi / bps) * tol + (hi % bps) * tol / bps;
    hi - lo <= allowed
}

fn finish(
    pool: &PoolState,
    deposit0: Amount,
    deposit1: Amount,
    shares_minted: Shares,
) -> Result<DepositPlan> {
    let reserve0 = pool
        .reserve0()
        .safe_add(&deposit0)
        .map_err(|_| AmmError::ArithmeticOverflow("token0 reserve overflow"))?;
    let reserve1 = pool
        .reserve1()
        .safe_add(&deposit1)
        .map_err(|_| AmmError::ArithmeticOverflow("token1 reserve overflow"))?;
    let total_shares = pool.total_shares().safe_add(&shares_minted)?;

    Ok(DepositPlan {
        deposit0,
        deposit1,
        shares_minted,
        new_state: pool.with_balances(reserve0, reserve1, total_shares),
    })
}
