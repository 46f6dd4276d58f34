//! Pool sides and swap direction.

use core::fmt;

/// One of the two token sides of a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Side {
    /// The lower-ordered token of the pair.
    Token0 = 0,
    /// The higher-ordered token of the pair.
    Token1 = 1,
}

impl Side {
    /// Returns the opposite side.
    #[must_use]
    pub const fn other(&self) -> Self {
        match self {
            Self::Token0 => Self::Token1,
            Self::Token1 => Self::Token0,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token0 => write!(f, "token0"),
            Self::Token1 => write!(f, "token1"),
        }
    }
}

/// Which way a swap moves tokens through the pool.
///
/// # Examples
///
/// ```
/// use xyk_amm::domain::{Side, SwapDirection};
///
/// let dir = SwapDirection::Token0ToToken1;
/// assert_eq!(dir.input_side(), Side::Token0);
/// assert_eq!(dir.output_side(), Side::Token1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SwapDirection {
    /// Sell token0, receive token1.
    Token0ToToken1 = 0,
    /// Sell token1, receive token0.
    Token1ToToken0 = 1,
}

impl SwapDirection {
    /// The side the trader pays into.
    #[must_use]
    pub const fn input_side(&self) -> Side {
        match self {
            Self::Token0ToToken1 => Side::Token0,
            Self::Token1ToToken0 => Side::Token1,
        }
    }

    /// The side the trader is paid from.
    #[must_use]
    pub const fn output_side(&self) -> Side {
        self.input_side().other()
    }
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token0ToToken1 => write!(f, "token0->token1"),
            Self::Token1ToToken0 => write!(f, "token1->token0"),
        }
    }
}
