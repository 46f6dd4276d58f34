//! How deposits into a funded pool treat an off-ratio offer.

use core::fmt;

use crate::error::{AmmError, Result};

/// Denominator of a basis-point tolerance (`10_000 bps = 100%`).
pub const BPS_DENOMINATOR: u16 = 10_000;

/// Policy for a deposit into a pool that already holds reserves.
///
/// A deposit into an empty pool always takes both amounts as given; they
/// set the initial price.  Once the pool is funded, an offer whose ratio
/// differs from `reserve0 : reserve1` is handled as follows.
///
/// - [`Clamp`](Self::Clamp): the offered amounts are maxima.  The side in
///   excess of the current ratio is reduced to the matching amount and the
///   excess is never debited.
/// - [`ExactRatio`](Self::ExactRatio): the offer must match the ratio
///   within `tolerance_bps`, otherwise the deposit is rejected with
///   [`AmmError::InvalidAmount`].  Matching offers are taken as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DepositPolicy {
    /// Reduce the excess side to the pool ratio.
    #[default]
    Clamp,
    /// Reject offers off the pool ratio by more than `tolerance_bps`.
    ExactRatio {
        /// Allowed relative deviation, in basis points.
        tolerance_bps: u16,
    },
}

impl DepositPolicy {
    /// Checks the policy's parameters.
    ///
    /// # Errors
    ///
    /// [`AmmError::InvalidConfiguration`] if `tolerance_bps` exceeds
    /// [`BPS_DENOMINATOR`].
    pub const fn validate(&self) -> Result<()> {
        match self {
            Self::Clamp => Ok(()),
            Self::ExactRatio { tolerance_bps } => {
                if *tolerance_bps > BPS_DENOMINATOR {
                    Err(AmmError::InvalidConfiguration(
                        "ratio tolerance exceeds 10000 bps",
                    ))
                } else {
                    Ok(())
                }
            }
        }
    }
}

impl fmt::Display for DepositPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clamp => write!(f, "clamp"),
            Self::ExactRatio { tolerance_bps } => write!(f, "exact-ratio({tolerance_bps} bps)"),
        }
    }
}
