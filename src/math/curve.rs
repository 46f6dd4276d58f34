//! Constant-product curve step.
//!
//! Given reserves `(x, y)` and an input `dx`, the pool moves to
//! `(x + dx, ceil(x·y / (x + dx)))`.  Rounding the new output reserve up
//! keeps `x'·y' >= x·y`: the rounding remainder stays in the pool.

use super::{div_round, narrow, product, CheckedArithmetic, Rounding};
use crate::domain::Amount;
use crate::error::{AmmError, Result};

/// Result of moving along the curve by one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurveStep {
    /// Input-side reserve after the trade.
    pub new_reserve_in: Amount,
    /// Output-side reserve after the trade.
    pub new_reserve_out: Amount,
    /// Tokens paid out to the trader.
    pub amount_out: Amount,
}

/// Prices `amount_in` against `(reserve_in, reserve_out)`.
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] if `amount_in` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero, if the
///   output rounds to zero, or if the trade would empty the output reserve.
/// - [`AmmError::ArithmeticOverflow`] if `reserve_in + amount_in` does not
///   fit in a `u64`.
///
/// # Examples
///
/// ```
/// use xyk_amm::domain::Amount;
/// use xyk_amm::math::constant_product_out;
///
/// let step = constant_product_out(Amount::new(25), Amount::new(10), Amount::new(25))
///     .expect("priced");
/// assert_eq!(step.new_reserve_in, Amount::new(50));
/// assert_eq!(step.new_reserve_out, Amount::new(5));
/// assert_eq!(step.amount_out, Amount::new(5));
/// ```
pub fn constant_product_out(
    reserve_in: Amount,
    reserve_out: Amount,
    amount_in: Amount,
) -> Result<CurveStep> {
    if amount_in.is_zero() {
        return Err(AmmError::InvalidAmount("swap amount must be non-zero"));
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InsufficientLiquidity("pool has zero reserves"));
    }

    let k = product(reserve_in, reserve_out);
    let new_reserve_in = reserve_in
        .safe_add(&amount_in)
        .map_err(|_| AmmError::ArithmeticOverflow("input reserve overflow"))?;

    let new_out = div_round(k, new_reserve_in.widen(), Rounding::Up)
        .ok_or(AmmError::ArithmeticOverflow("curve division"))?;
    let new_reserve_out = narrow(new_out, "output reserve")?;

    if new_reserve_out.is_zero() {
        return Err(AmmError::InsufficientLiquidity("trade would drain output reserve"));
    }
    let amount_out = reserve_out.safe_sub(&new_reserve_out)?;
    if amount_out.is_zero() {
        return Err(AmmError::InsufficientLiquidity("output rounds to zero"));
    }

    Ok(CurveStep {
        new_reserve_in,
        new_reserve_out,
        amount_out,
    })
}
