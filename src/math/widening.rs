//! Widened products, narrowing and integer square root.
//!
//! Reserves are `u64`; anything multiplied is computed in `u128` and
//! checked on the way back down.

use super::{div_round, Rounding};
use crate::domain::Amount;
use crate::error::{AmmError, Result};

/// `a × b` in `u128`.  Cannot overflow for `u64` inputs.
#[must_use]
pub const fn product(a: Amount, b: Amount) -> u128 {
    a.widen() * b.widen()
}

/// Narrows a widened intermediate back into an [`Amount`].
///
/// # Errors
///
/// [`AmmError::ArithmeticOverflow`] tagged with `what` if `value`
/// exceeds `u64::MAX`.
pub fn narrow(value: u128, what: &'static str) -> Result<Amount> {
    u64::try_from(value)
        .map(Amount::new)
        .map_err(|_| AmmError::ArithmeticOverflow(what))
}

/// `a × b / d` with explicit rounding, all in `u128`.
///
/// # Errors
///
/// [`AmmError::ArithmeticOverflow`] if `a × b` overflows or `d` is zero.
pub fn mul_div(a: u128, b: u128, d: u128, rounding: Rounding) -> Result<u128> {
    let numerator = a
        .checked_mul(b)
        .ok_or(AmmError::ArithmeticOverflow("mul_div numerator"))?;
    div_round(numerator, d, rounding).ok_or(AmmError::ArithmeticOverflow("mul_div by zero"))
}

/// Integer square root (floor) via Newton's method.
///
/// # Examples
///
/// ```
/// use xyk_amm::math::isqrt;
///
/// assert_eq!(isqrt(250), 15);
/// assert_eq!(isqrt(1_000_000), 1_000);
/// ```
#[must_use]
pub const fn isqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }
    // Start above the root; n / 2 + 1 >= sqrt(n) for n >= 2 and never overflows.
    let mut x = n / 2 + 1;
    let mut y = (x + n / x) / 2;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}
