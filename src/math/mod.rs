//! Overflow-checked integer arithmetic for pool calculations.
//!
//! - [`Rounding`] and [`div_round`]: division with an explicit direction.
//! - [`CheckedArithmetic`]: `Result`-returning ops on [`Amount`] and
//!   [`Shares`].
//! - [`product`], [`mul_div`], [`narrow`]: `u64 → u128 → u64` widening.
//! - [`isqrt`]: share minting for the first deposit.
//! - [`constant_product_out`]: one step along `x · y = k`.
//!
//! [`Amount`]: crate::domain::Amount
//! [`Shares`]: crate::domain::Shares

mod checked;
mod curve;
mod rounding;
mod widening;

pub use checked::CheckedArithmetic;
pub use curve::{constant_product_out, CurveStep};
pub use rounding::{div_round, Rounding};
pub use widening::{isqrt, mul_div, narrow, product};
