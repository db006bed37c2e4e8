//! Domain-Separated Hashing
//!
//! Provides deterministic SHA-256 hashing for:
//! - Allowlist leaf construction
//! - Merkle node combination
//! - Condition id derivation
//!
//! Order of updates is critical: two hashers fed the same values in the
//! same order always produce the same digest.

use sha2::{Digest, Sha256};

/// Hash output type (256 bits / 32 bytes)
pub type Hash256 = [u8; 32];

/// Domain separator for allowlist leaf hashes.
pub const ALLOWLIST_LEAF_DOMAIN: &[u8] = b"DROP_ENGINE_ALLOWLIST_LEAF_V1";

/// Domain separator for Merkle internal nodes.
pub const MERKLE_NODE_DOMAIN: &[u8] = b"DROP_ENGINE_MERKLE_NODE_V1";

/// Domain separator for condition id derivation.
pub const CONDITION_ID_DOMAIN: &[u8] = b"DROP_ENGINE_CONDITION_ID_V1";

/// Deterministic hasher for engine data.
///
/// Wraps SHA-256 with helpers for the engine's field types. Optional
/// fields are encoded as a presence byte followed by the value, so
/// `None` and `Some(0)` hash differently.
pub struct ClaimHasher {
    hasher: Sha256,
}

impl ClaimHasher {
    /// Create a new hasher with a domain separator.
    pub fn new(domain: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(domain);
        Self { hasher }
    }

    /// Create a hasher for allowlist leaves.
    pub fn for_allowlist_leaf() -> Self {
        Self::new(ALLOWLIST_LEAF_DOMAIN)
    }

    /// Create a hasher for condition id derivation.
    pub fn for_condition_id() -> Self {
        Self::new(CONDITION_ID_DOMAIN)
    }

    /// Update with raw bytes.
    #[inline]
    pub fn update_bytes(&mut self, bytes: &[u8]) {
        self.hasher.update(bytes);
    }

    /// Update with a u8 value.
    #[inline]
    pub fn update_u8(&mut self, value: u8) {
        self.hasher.update([value]);
    }

    /// Update with a u64 value (little-endian).
    #[inline]
    pub fn update_u64(&mut self, value: u64) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Update with a boolean.
    #[inline]
    pub fn update_bool(&mut self, value: bool) {
        self.update_u8(value as u8);
    }

    /// Update with a 16-byte identifier.
    #[inline]
    pub fn update_id(&mut self, id: &[u8; 16]) {
        self.hasher.update(id);
    }

    /// Update with an optional u64 (presence byte + value).
    #[inline]
    pub fn update_opt_u64(&mut self, value: Option<u64>) {
        match value {
            Some(v) => {
                self.update_bool(true);
                self.update_u64(v);
            }
            None => self.update_bool(false),
        }
    }

    /// Update with an optional 16-byte identifier (presence byte + value).
    #[inline]
    pub fn update_opt_id(&mut self, id: Option<&[u8; 16]>) {
        match id {
            Some(v) => {
                self.update_bool(true);
                self.update_id(v);
            }
            None => self.update_bool(false),
        }
    }

    /// Finalize and return the hash.
    pub fn finalize(self) -> Hash256 {
        self.hasher.finalize().into()
    }
}

/// Compute hash with domain separator.
pub fn hash_with_domain(domain: &[u8], data: &[u8]) -> Hash256 {
    let mut hasher = Sha256::new();
    hasher.update(domain);
    hasher.update(data);
    hasher.finalize().into()
}

// =============================================================================
// TESTS
// =============================================================================
