//! Shared test support: mock collaborators and an allowlist tree builder.
//!
//! The engine only verifies Merkle proofs; building trees is test-side
//! work. The builder here uses the engine's own leaf encoding and
//! commutative pair hash so its proofs verify against the roots it
//! commits to.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use drop_engine::core::hash::Hash256;
use drop_engine::core::merkle::hash_pair;
use drop_engine::{
    AllowlistProof, AuthorizationPredicate, ClaimCondition, ClaimantId, CurrencyId,
    ItemTransferrer, PaymentCollector,
};

// =============================================================================
// MOCK COLLABORATORS
// =============================================================================

/// Payment collector that records every collection and can be toggled
/// to fail. Clone it before boxing to keep an inspection handle.
#[derive(Clone, Default)]
pub struct RecordingPayments {
    pub collected: Arc<Mutex<Vec<(u64, CurrencyId, u64)>>>,
    pub fail: Arc<AtomicBool>,
}

impl PaymentCollector for RecordingPayments {
    fn collect(
        &mut self,
        quantity: u64,
        currency: CurrencyId,
        price_per_token: u64,
    ) -> anyhow::Result<()> {
        if self.fail.load(Ordering::SeqCst) {
            anyhow::bail!("settlement unavailable");
        }
        self.collected
            .lock()
            .unwrap()
            .push((quantity, currency, price_per_token));
        Ok(())
    }
}

/// Transferrer handing out sequential item ids, with a failure toggle.
#[derive(Clone)]
pub struct SequentialTransfers {
    pub next_id: Arc<Mutex<u64>>,
    pub fail: Arc<AtomicBool>,
}

impl Default for SequentialTransfers {
    fn default() -> Self {
        Self {
            next_id: Arc::new(Mutex::new(0)),
            fail: Arc::new(AtomicBool::new(false)),
        }
    }
}

impl ItemTransferrer for SequentialTransfers {
    fn transfer(&mut self, _receiver: &ClaimantId, quantity: u64) -> anyhow::Result<u64> {
        if self.fail.load(Ordering::SeqCst) {
            anyhow::bail!("mint paused");
        }
        let mut next = self.next_id.lock().unwrap();
        let start = *next;
        *next += quantity;
        Ok(start)
    }
}

/// Authorization predicate accepting every admin.
pub struct AllowAll;

impl AuthorizationPredicate for AllowAll {
    fn can_set_claim_conditions(&self, _admin: &ClaimantId) -> bool {
        true
    }
}

/// Authorization predicate accepting a single admin identity.
pub struct OnlyAdmin(pub ClaimantId);

impl AuthorizationPredicate for OnlyAdmin {
    fn can_set_claim_conditions(&self, admin: &ClaimantId) -> bool {
        *admin == self.0
    }
}

// =============================================================================
// ALLOWLIST TREE BUILDER
// =============================================================================

/// One allowlist member with optional per-leaf overrides.
#[derive(Clone, Debug, Default)]
pub struct AllowlistEntry {
    pub claimant: ClaimantId,
    pub quantity_limit_per_wallet: Option<u64>,
    pub price_per_token: Option<u64>,
    pub currency: Option<CurrencyId>,
}

impl AllowlistEntry {
    fn leaf(&self) -> Hash256 {
        AllowlistProof {
            proof: Vec::new(),
            quantity_limit_per_wallet: self.quantity_limit_per_wallet,
            price_per_token: self.price_per_token,
            currency: self.currency,
        }
        .leaf(&self.claimant)
    }
}

/// Merkle tree over allowlist entries.
///
/// Odd nodes carry up unchanged, so proofs can be shorter than the tree
/// height; the engine's verifier handles that naturally.
pub struct AllowlistTree {
    entries: Vec<AllowlistEntry>,
    levels: Vec<Vec<Hash256>>,
}

impl AllowlistTree {
    /// Build a tree from entries.
    pub fn build(entries: Vec<AllowlistEntry>) -> Self {
        assert!(!entries.is_empty(), "allowlist must have members");

        let mut levels = vec![entries.iter().map(AllowlistEntry::leaf).collect::<Vec<_>>()];
        while levels.last().unwrap().len() > 1 {
            let prev = levels.last().unwrap();
            let mut next = Vec::with_capacity(prev.len().div_ceil(2));
            for chunk in prev.chunks(2) {
                if chunk.len() == 2 {
                    next.push(hash_pair(&chunk[0], &chunk[1]));
                } else {
                    next.push(chunk[0]);
                }
            }
            levels.push(next);
        }

        Self { entries, levels }
    }

    /// The committed root.
    pub fn root(&self) -> Hash256 {
        self.levels.last().unwrap()[0]
    }

    /// Inclusion proof (sibling path) for the entry at `index`.
    pub fn proof_path(&self, index: usize) -> Vec<Hash256> {
        let mut siblings = Vec::new();
        let mut i = index;
        for level in &self.levels[..self.levels.len() - 1] {
            let sibling = i ^ 1;
            if sibling < level.len() {
                siblings.push(level[sibling]);
            }
            i /= 2;
        }
        siblings
    }

    /// Full allowlist proof (path + overrides) for the entry at `index`.
    pub fn proof(&self, index: usize) -> AllowlistProof {
        let entry = &self.entries[index];
        AllowlistProof {
            proof: self.proof_path(index),
            quantity_limit_per_wallet: entry.quantity_limit_per_wallet,
            price_per_token: entry.price_per_token,
            currency: entry.currency,
        }
    }
}

// =============================================================================
// FIXTURES
// =============================================================================

/// Claimant with all bytes set to `n`.
pub fn claimant(n: u8) -> ClaimantId {
    ClaimantId::new([n; 16])
}

/// Open condition: no allowlist, cap 100, limit 5, price 10 in native.
pub fn base_condition() -> ClaimCondition {
    ClaimCondition {
        start_time: 0,
        max_claimable_supply: 100,
        supply_claimed: 0,
        quantity_limit_per_wallet: 5,
        merkle_root: None,
        price_per_token: 10,
        currency: CurrencyId::NATIVE,
        metadata: serde_json::json!({"name": "test drop"}),
    }
}
