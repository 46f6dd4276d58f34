//! Chain-agnostic 32-byte address.

use core::fmt;

/// A generic 32-byte identifier for a token mint or an account owner.
///
/// All 32-byte sequences are valid, so construction is infallible.  The
/// derived ordering is byte-wise lexicographic; it is the fixed total
/// order used to canonicalize token pairs.
///
/// # Examples
///
/// ```
/// use xyk_amm::domain::Address;
///
/// let lo = Address::from_bytes([1u8; 32]);
/// let hi = Address::from_bytes([2u8; 32]);
/// assert!(lo < hi);
/// assert_eq!(lo.as_bytes(), &[1u8; 32]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; 32]);

impl Address {
    /// Creates an `Address` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0[..4] {
            write!(f, "{b:02x}")?;
        }
        f.write_str("…")
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}
