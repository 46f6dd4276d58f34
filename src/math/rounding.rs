//! Explicit rounding direction and rounded integer division.
//!
//! **Always round in the pool's favour:**
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Reserve left after paying out | [`Rounding::Up`] |
//! | Counter-side amount a depositor must add | [`Rounding::Up`] |
//! | Shares minted to a depositor | [`Rounding::Down`] |
//!
//! # Examples
//!
//! ```
//! use xyk_amm::math::{div_round, Rounding};
//!
//! assert_eq!(div_round(250, 50, Rounding::Up), Some(5));
//! assert_eq!(div_round(250, 60, Rounding::Down), Some(4));
//! assert_eq!(div_round(250, 60, Rounding::Up), Some(5));
//! assert_eq!(div_round(1, 0, Rounding::Up), None);
//! ```

/// Rounding direction for a division.
///
/// Every division in the crate names its direction; there is no implicit
/// truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Toward positive infinity (ceiling).
    Up,
    /// Toward zero (floor).
    Down,
}

/// `u128` division with an explicit [`Rounding`] direction.
///
/// Returns [`None`] if `denominator` is zero.  Ceiling division never
/// overflows, even for `numerator == u128::MAX`.
#[must_use]
pub const fn div_round(numerator: u128, denominator: u128, rounding: Rounding) -> Option<u128> {
    if denominator == 0 {
        return None;
    }
    let q = numerator / denominator;
    match rounding {
        Rounding::Down => Some(q),
        // q + 1 cannot overflow: a non-zero remainder implies q < u128::MAX.
        Rounding::Up if numerator % denominator != 0 => Some(q + 1),
        Rounding::Up => Some(q),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn div_by_zero_returns_none() {
        assert_eq!(div_round(100, 0, Rounding::Down), None);
        assert_eq!(div_round(0, 0, Rounding::Up), None);
    }

    #[test]
    fn exact_division_agrees() {
        assert_eq!(div_round(100, 10, Rounding::Down), Some(10));
        assert_eq!(div_round(100, 10, Rounding::Up), Some(10));
    }

    #[test]
    fn inexact_division_differs_by_one() {
        assert_eq!(div_round(7, 2, Rounding::Down), Some(3));
        assert_eq!(div_round(7, 2, Rounding::Up), Some(4));
    }

    #[test]
    fn zero_numerator() {
        assert_eq!(div_round(0, 5, Rounding::Up), Some(0));
    }

    #[test]
    fn ceiling_at_u128_max() {
        assert_eq!(div_round(u128::MAX, 1, Rounding::Up), Some(u128::MAX));
        assert_eq!(div_round(u128::MAX, 2, Rounding::Up), Some(u128::MAX / 2 + 1));
    }
}
