//! Claim Condition Data Model
//!
//! The active claim condition, its version id, and the allowlist proof
//! shape. Identifiers are 16-byte newtypes with `Ord` so all keyed state
//! can live in `BTreeMap`s with deterministic iteration order.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::hash::{ClaimHasher, Hash256};

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Unique wallet identity of a claimant (or administrator).
///
/// Implements Ord for deterministic BTreeMap ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct ClaimantId(pub [u8; 16]);

impl ClaimantId {
    /// Create from raw bytes.
    pub const fn new(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Create from UUID string.
    pub fn from_uuid_str(s: &str) -> Option<Self> {
        uuid::Uuid::parse_str(s).ok().map(|u| Self(*u.as_bytes()))
    }

    /// Convert to UUID string.
    pub fn to_uuid_string(&self) -> String {
        uuid::Uuid::from_bytes(self.0).to_string()
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

impl fmt::Display for ClaimantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// Identifier of the currency a claim is priced in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct CurrencyId(pub [u8; 16]);

impl CurrencyId {
    /// The chain-native currency (all-zero id).
    pub const NATIVE: CurrencyId = CurrencyId([0; 16]);

    /// Create from raw bytes.
    pub const fn new(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Create from UUID string.
    pub fn from_uuid_str(s: &str) -> Option<Self> {
        uuid::Uuid::parse_str(s).ok().map(|u| Self(*u.as_bytes()))
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

impl fmt::Display for CurrencyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// Opaque version tag of a claim-condition epoch.
///
/// Changes only when an admin reset occurs. Partitions the supply ledger
/// so a reset never erases history: entries under a prior id simply
/// become unreachable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct ConditionId(pub [u8; 16]);

impl ConditionId {
    /// The id of the initial, never-reset condition epoch.
    pub const GENESIS: ConditionId = ConditionId([0; 16]);

    /// Derive a fresh condition id from the resetting admin and the
    /// store's monotonic reset counter.
    ///
    /// Deterministic: the same (admin, counter) pair always yields the
    /// same id, and the bumped counter guarantees uniqueness.
    pub fn derive(admin: &ClaimantId, reset_count: u64) -> Self {
        let mut hasher = ClaimHasher::for_condition_id();
        hasher.update_id(admin.as_bytes());
        hasher.update_u64(reset_count);
        let digest = hasher.finalize();

        let mut id = [0u8; 16];
        id.copy_from_slice(&digest[..16]);
        Self(id)
    }

    /// Get raw bytes.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }
}

impl fmt::Display for ConditionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

// =============================================================================
// CLAIM CONDITION
// =============================================================================

/// The active set of rules governing claims.
///
/// Invariant: `supply_claimed <= max_claimable_supply` after every
/// successful claim. Exactly one condition is active at a time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClaimCondition {
    /// Unix timestamp (seconds) at which claiming opens.
    pub start_time: u64,

    /// Total supply claimable under this condition.
    pub max_claimable_supply: u64,

    /// Supply already claimed under this condition.
    pub supply_claimed: u64,

    /// Public per-wallet cumulative quantity limit.
    pub quantity_limit_per_wallet: u64,

    /// Allowlist Merkle root. `None` disables the allowlist.
    pub merkle_root: Option<Hash256>,

    /// Public price per token.
    pub price_per_token: u64,

    /// Public currency the price is denominated in.
    pub currency: CurrencyId,

    /// Free-form condition metadata (e.g. a content URI).
    pub metadata: serde_json::Value,
}

impl Default for ClaimCondition {
    fn default() -> Self {
        Self {
            start_time: 0,
            max_claimable_supply: 0,
            supply_claimed: 0,
            quantity_limit_per_wallet: 0,
            merkle_root: None,
            price_per_token: 0,
            currency: CurrencyId::NATIVE,
            metadata: serde_json::Value::Null,
        }
    }
}

// =============================================================================
// ALLOWLIST PROOF
// =============================================================================

/// A Merkle inclusion proof plus optional per-wallet overrides.
///
/// Override precedence (applied only when the proof verifies):
/// - quantity limit override active iff present
/// - price override active iff present
/// - currency override active iff a price override is *also* present
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AllowlistProof {
    /// Ordered sibling hashes from leaf to root.
    pub proof: Vec<Hash256>,

    /// Per-wallet quantity limit override.
    pub quantity_limit_per_wallet: Option<u64>,

    /// Per-wallet price override.
    pub price_per_token: Option<u64>,

    /// Per-wallet currency override (meaningful only with a price override).
    pub currency: Option<CurrencyId>,
}

impl AllowlistProof {
    /// Compute the allowlist leaf this proof claims membership for.
    ///
    /// Binds the claimant identity and all three override fields,
    /// including their presence bits. Tree builders must use the same
    /// encoding.
    pub fn leaf(&self, claimant: &ClaimantId) -> Hash256 {
        let mut hasher = ClaimHasher::for_allowlist_leaf();
        hasher.update_id(claimant.as_bytes());
        hasher.update_opt_u64(self.quantity_limit_per_wallet);
        hasher.update_opt_u64(self.price_per_token);
        hasher.update_opt_id(self.currency.as_ref().map(CurrencyId::as_bytes));
        hasher.finalize()
    }
}

// =============================================================================
// CONDITION STORE
// =============================================================================

/// Holds the single active condition and its version id.
///
/// Replaced atomically by the admin path; the claim path only bumps
/// `supply_claimed` on the contained condition.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClaimConditionStore {
    condition: ClaimCondition,
    condition_id: ConditionId,
    /// Monotonic source for condition id derivation. Bumped on every reset.
    reset_count: u64,
}

impl ClaimConditionStore {
    /// Create a store with an initial condition under the genesis id.
    pub fn new(condition: ClaimCondition) -> Self {
        Self {
            condition,
            condition_id: ConditionId::GENESIS,
            reset_count: 0,
        }
    }

    /// The active condition.
    pub fn condition(&self) -> &ClaimCondition {
        &self.condition
    }

    /// The active condition id.
    pub fn condition_id(&self) -> ConditionId {
        self.condition_id
    }

    /// Number of eligibility resets performed so far.
    pub fn reset_count(&self) -> u64 {
        self.reset_count
    }

    /// Mutable access to the active condition (claim accounting only).
    pub(crate) fn condition_mut(&mut self) -> &mut ClaimCondition {
        &mut self.condition
    }

    /// Bump the reset counter and derive the next condition id.
    pub(crate) fn next_condition_id(&mut self, admin: &ClaimantId) -> ConditionId {
        self.reset_count += 1;
        ConditionId::derive(admin, self.reset_count)
    }

    /// Atomically replace the stored condition and id.
    pub(crate) fn replace(&mut self, condition: ClaimCondition, id: ConditionId) {
        self.condition = condition;
        self.condition_id = id;
    }
}

// =============================================================================
// TESTS
// =============================================================================
