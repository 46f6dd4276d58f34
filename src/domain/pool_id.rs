//! Deterministic pool identity.

use core::fmt;

use super::{Address, TokenPair};

/// The identity of a pool, derived from its canonical token pair.
///
/// `PoolId = BLAKE3(domain ‖ token0 ‖ token1)`.  Because [`TokenPair`]
/// is canonically ordered, the identity does not depend on the order in
/// which the two mints were supplied.  Distinct pairs map to distinct ids
/// with the collision resistance of BLAKE3.
///
/// # Examples
///
/// ```
/// use xyk_amm::domain::{Address, PoolId, TokenPair};
///
/// let a = Address::from_bytes([1u8; 32]);
/// let b = Address::from_bytes([2u8; 32]);
/// let ab = TokenPair::new(a, b).expect("distinct");
/// let ba = TokenPair::new(b, a).expect("distinct");
///
/// assert_eq!(PoolId::derive(b"demo", &ab), PoolId::derive(b"demo", &ba));
/// assert_ne!(PoolId::derive(b"demo", &ab), PoolId::derive(b"other", &ab));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PoolId([u8; 32]);

impl PoolId {
    /// Derives the pool identity for `pair` under the given domain separator.
    #[must_use]
    pub fn derive(domain: &[u8], pair: &TokenPair) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(domain);
        hasher.update(pair.token0().as_bytes());
        hasher.update(pair.token1().as_bytes());
        Self(*hasher.finalize().as_bytes())
    }

    /// Wraps raw bytes, e.g. an id read back from storage.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw 32-byte identity.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// The address that owns the pool's vaults and signs their debits.
    #[must_use]
    pub const fn authority(&self) -> Address {
        Address::from_bytes(self.0)
    }
}

impl fmt::Display for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for PoolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PoolId({self})")
    }
}
