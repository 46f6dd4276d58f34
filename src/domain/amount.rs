//! Raw token amount with checked arithmetic.

use core::fmt;

/// A raw token amount in the smallest unit of its token.
///
/// Reserves, deposits and swap amounts are all `Amount`s.  The inner value
/// is a `u64`, the width custody accounts hold; intermediate products are
/// computed in `u128` via [`Amount::widen`] and narrowed back with
/// [`crate::math::narrow`].
///
/// Arithmetic methods are checked: they return `None` on overflow or
/// underflow instead of wrapping or panicking.
///
/// # Examples
///
/// ```
/// use xyk_amm::domain::Amount;
///
/// let a = Amount::new(25);
/// let b = Amount::new(10);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(35)));
/// assert_eq!(b.checked_sub(&a), None);
/// assert_eq!(a.widen() * b.widen(), 250);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(u64);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u64::MAX);

    /// Creates a new `Amount` from a raw `u64` value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying `u64` value.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Returns the value widened to `u128` for overflow-free products.
    #[must_use]
    pub const fn widen(&self) -> u128 {
        self.0 as u128
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants() {
        assert_eq!(Amount::ZERO.get(), 0);
        assert_eq!(Amount::MAX.get(), u64::MAX);
        assert_eq!(Amount::default(), Amount::ZERO);
    }

    #[test]
    fn is_zero() {
        assert!(Amount::ZERO.is_zero());
        assert!(!Amount::new(1).is_zero());
    }

    #[test]
    fn add_overflow_is_none() {
        assert_eq!(Amount::MAX.checked_add(&Amount::new(1)), None);
        assert_eq!(
            Amount::new(40).checked_add(&Amount::new(2)),
            Some(Amount::new(42))
        );
    }

    #[test]
    fn sub_underflow_is_none() {
        assert_eq!(Amount::new(1).checked_sub(&Amount::new(2)), None);
        assert_eq!(Amount::new(7).checked_sub(&Amount::new(7)), Some(Amount::ZERO));
    }

    #[test]
    fn widen_does_not_overflow_products() {
        let m = Amount::MAX.widen();
        assert_eq!(m * m, (u64::MAX as u128) * (u64::MAX as u128));
    }

    #[test]
    fn display_and_ordering() {
        assert_eq!(format!("{}", Amount::new(1_000_000)), "1000000");
        assert!(Amount::new(1) < Amount::new(2));
    }
}
