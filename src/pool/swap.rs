//! Swap engine: pricing a trade against a pool record.

use crate::domain::{Amount, PoolState, Side, SwapDirection, SwapQuote};
use crate::error::{AmmError, Result};
use crate::math::constant_product_out;

/// Prices a swap of `amount_in` in `direction` against `pool`.
///
/// Pure: the pool record is not modified.  The quote carries both
/// post-trade reserves so the engine can commit it verbatim.
///
/// # Errors
///
/// - [`AmmError::InvalidAmount`] if `amount_in` is zero.
/// - [`AmmError::InsufficientLiquidity`] if the pool is unfunded or the
///   trade pays out nothing or empties the output reserve.
/// - [`AmmError::ArithmeticOverflow`] if the input reserve would overflow.
pub fn quote_swap(
    pool: &PoolState,
    direction: SwapDirection,
    amount_in: Amount,
) -> Result<SwapQuote> {
    let step = constant_product_out(
        pool.reserve(direction.input_side()),
        pool.reserve(direction.output_side()),
        amount_in,
    )?;

    let (new_reserve0, new_reserve1) = match direction.input_side() {
        Side::Token0 => (step.new_reserve_in, step.new_reserve_out),
        Side::Token1 => (step.new_reserve_out, step.new_reserve_in),
    };

    Ok(SwapQuote::new(
        direction,
        amount_in,
        step.amount_out,
        new_reserve0,
        new_reserve1,
    ))
}

/// The pool record after `quote` is applied.  Share totals are unchanged.
#[must_use]
pub fn apply_quote(pool: &PoolState, quote: &SwapQuote) -> PoolState {
    pool.with_balances(quote.new_reserve0(), quote.new_reserve1(), pool.total_shares())
}
