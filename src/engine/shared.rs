//! Shared Engine Handle
//!
//! Serializes concurrent callers over a single [`DropEngine`]. Every
//! operation (the read-check-write of a claim plus its collaborator
//! calls) runs inside one exclusive critical section, so two concurrent
//! claims can never both observe a stale `supply_claimed` and jointly
//! exceed the cap.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::engine::condition::{
    AllowlistProof, ClaimCondition, ClaimantId, ConditionId, CurrencyId,
};
use crate::engine::drop::DropEngine;
use crate::engine::error::ClaimError;
use crate::engine::events::{DropEvent, TokensClaimed};
use crate::engine::traits::ClaimRequest;

/// Clone-to-share handle serializing all engine operations.
#[derive(Clone)]
pub struct SharedDrop {
    inner: Arc<Mutex<DropEngine>>,
}

impl SharedDrop {
    /// Wrap an engine for shared use.
    pub fn new(engine: DropEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, DropEngine> {
        // A panic mid-claim cannot leave partial state behind (rollback
        // happens before any error propagates), so a poisoned lock is
        // still safe to reuse.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Execute a claim. See [`DropEngine::claim`].
    pub fn claim(
        &self,
        caller: ClaimantId,
        request: ClaimRequest,
        allowlist_proof: &AllowlistProof,
        now: u64,
    ) -> Result<TokensClaimed, ClaimError> {
        self.lock().claim(caller, request, allowlist_proof, now)
    }

    /// Replace the active condition. See [`DropEngine::set_claim_conditions`].
    pub fn set_claim_conditions(
        &self,
        admin: ClaimantId,
        new_condition: ClaimCondition,
        reset_eligibility: bool,
    ) -> Result<(), ClaimError> {
        self.lock()
            .set_claim_conditions(admin, new_condition, reset_eligibility)
    }

    /// Dry-run eligibility check. See [`DropEngine::verify_claim`].
    #[allow(clippy::too_many_arguments)]
    pub fn verify_claim(
        &self,
        claimant: &ClaimantId,
        quantity: u64,
        currency: CurrencyId,
        price_per_token: u64,
        allowlist_proof: &AllowlistProof,
        now: u64,
    ) -> Result<bool, ClaimError> {
        self.lock().verify_claim(
            claimant,
            quantity,
            currency,
            price_per_token,
            allowlist_proof,
            now,
        )
    }

    /// Quantity claimed by `claimant` under the active condition id.
    pub fn supply_claimed_by_wallet(&self, claimant: &ClaimantId) -> u64 {
        self.lock().supply_claimed_by_wallet(claimant)
    }

    /// Snapshot of the active condition.
    pub fn active_condition(&self) -> ClaimCondition {
        self.lock().active_condition().clone()
    }

    /// The active condition id.
    pub fn active_condition_id(&self) -> ConditionId {
        self.lock().active_condition_id()
    }

    /// Take pending events (consumes them).
    pub fn take_events(&self) -> Vec<DropEvent> {
        self.lock().take_events()
    }
}
