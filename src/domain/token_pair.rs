//! Canonically ordered pair of distinct tokens.

use super::{Address, Side};
use crate::error::{AmmError, Result};

/// An ordered pair of distinct token mints, canonically sorted by address.
///
/// The canonical ordering guarantees `token0 < token1`, so `(A, B)` and
/// `(B, A)` produce the same pair.  This is what makes pool identity
/// independent of argument order.
///
/// # Examples
///
/// ```
/// use xyk_amm::domain::{Address, TokenPair};
///
/// let a = Address::from_bytes([1u8; 32]);
/// let b = Address::from_bytes([2u8; 32]);
///
/// let pair = TokenPair::new(b, a).expect("distinct tokens");
/// assert_eq!(pair.token0(), a);
/// assert_eq!(pair.token1(), b);
/// assert_eq!(pair, TokenPair::new(a, b).expect("distinct tokens"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenPair {
    token0: Address,
    token1: Address,
}

impl TokenPair {
    /// Creates a new canonically-ordered `TokenPair`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::IdenticalTokens`] if both addresses are equal.
    pub fn new(token_a: Address, token_b: Address) -> Result<Self> {
        if token_a == token_b {
            return Err(AmmError::IdenticalTokens);
        }

        let (token0, token1) = if token_a < token_b {
            (token_a, token_b)
        } else {
            (token_b, token_a)
        };

        Ok(Self { token0, token1 })
    }

    /// Returns the lower-ordered token.
    #[must_use]
    pub const fn token0(&self) -> Address {
        self.token0
    }

    /// Returns the higher-ordered token.
    #[must_use]
    pub const fn token1(&self) -> Address {
        self.token1
    }

    /// Returns the token on the given side.
    #[must_use]
    pub const fn token(&self, side: Side) -> Address {
        match side {
            Side::Token0 => self.token0,
            Side::Token1 => self.token1,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn addr(b: u8) -> Address {
        Address::from_bytes([b; 32])
    }

    #[test]
    fn ordered_input_is_preserved() {
        let Ok(pair) = TokenPair::new(addr(1), addr(2)) else {
            panic!("expected Ok");
        };
        assert_eq!(pair.token0(), addr(1));
        assert_eq!(pair.token1(), addr(2));
    }

    #[test]
    fn reversed_input_is_sorted() {
        let Ok(pair) = TokenPair::new(addr(9), addr(3)) else {
            panic!("expected Ok");
        };
        assert_eq!(pair.token0(), addr(3));
        assert_eq!(pair.token1(), addr(9));
    }

    #[test]
    fn identical_tokens_rejected() {
        assert_eq!(
            TokenPair::new(addr(4), addr(4)),
            Err(AmmError::IdenticalTokens)
        );
    }

    #[test]
    fn token_by_side() {
        let Ok(pair) = TokenPair::new(addr(1), addr(2)) else {
            panic!("expected Ok");
        };
        assert_eq!(pair.token(Side::Token0), addr(1));
        assert_eq!(pair.token(Side::Token1), addr(2));
    }
}
