//! Checked arithmetic trait for quantity newtypes.
//!
//! [`CheckedArithmetic`] lifts the `Option`-returning checked methods of
//! [`Amount`] and [`Shares`] into [`AmmError::ArithmeticOverflow`], so
//! engine code can propagate with `?` and every failure names the
//! computation that overflowed.
//!
//! # Examples
//!
//! ```
//! use xyk_amm::domain::Amount;
//! use xyk_amm::math::CheckedArithmetic;
//!
//! assert_eq!(Amount::new(25).safe_add(&Amount::new(25)), Ok(Amount::new(50)));
//! assert!(Amount::MAX.safe_add(&Amount::new(1)).is_err());
//! ```

use crate::domain::{Amount, Shares};
use crate::error::{AmmError, Result};

/// Fallible arithmetic for quantity newtypes.
///
/// No saturation and no panics: every out-of-range result is an error.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// [`AmmError::ArithmeticOverflow`] if the sum is not representable.
    fn safe_add(&self, other: &Self) -> Result<Self>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// [`AmmError::ArithmeticOverflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self> {
        self.checked_add(other)
            .ok_or(AmmError::ArithmeticOverflow("amount addition"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self> {
        self.checked_sub(other)
            .ok_or(AmmError::ArithmeticOverflow("amount subtraction"))
    }
}

impl CheckedArithmetic for Shares {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self> {
        self.checked_add(other)
            .ok_or(AmmError::ArithmeticOverflow("share addition"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self> {
        self.checked_sub(other)
            .ok_or(AmmError::ArithmeticOverflow("share subtraction"))
    }
}
