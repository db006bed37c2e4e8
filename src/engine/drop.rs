//! Drop Engine
//!
//! The orchestrator owning the condition store, the supply ledger, and
//! the injected collaborator set. Executes claims (verify, account,
//! settle, transfer, record) as all-or-nothing operations and handles
//! authorized condition replacement.
//!
//! State mutation always precedes external delegation; any collaborator
//! or hook failure rolls back the accounting applied during the same
//! operation.

use tracing::{info, warn};

use crate::engine::condition::{
    AllowlistProof, ClaimCondition, ClaimConditionStore, ClaimantId, ConditionId, CurrencyId,
};
use crate::engine::error::ClaimError;
use crate::engine::events::{ClaimConditionUpdated, DropEvent, TokensClaimed};
use crate::engine::ledger::SupplyLedger;
use crate::engine::traits::{
    AuthorizationPredicate, ClaimHooks, ClaimRequest, ClaimantIdentity, DirectCaller,
    ItemTransferrer, NoopHooks, PaymentCollector,
};
use crate::engine::verify::verify_claim;

// =============================================================================
// COLLABORATOR SET
// =============================================================================

/// The capability set injected into the engine at construction.
pub struct DropCollaborators {
    /// Payment settlement.
    pub payments: Box<dyn PaymentCollector + Send>,
    /// Item transfer.
    pub transfers: Box<dyn ItemTransferrer + Send>,
    /// Admin gate.
    pub authorization: Box<dyn AuthorizationPredicate + Send>,
    /// Claimant identity resolution.
    pub identity: Box<dyn ClaimantIdentity + Send>,
    /// Lifecycle hooks.
    pub hooks: Box<dyn ClaimHooks + Send>,
}

impl DropCollaborators {
    /// Create a collaborator set with direct-caller identity and no-op hooks.
    pub fn new(
        payments: Box<dyn PaymentCollector + Send>,
        transfers: Box<dyn ItemTransferrer + Send>,
        authorization: Box<dyn AuthorizationPredicate + Send>,
    ) -> Self {
        Self {
            payments,
            transfers,
            authorization,
            identity: Box::new(DirectCaller),
            hooks: Box::new(NoopHooks),
        }
    }

    /// Replace the identity resolver.
    pub fn with_identity(mut self, identity: Box<dyn ClaimantIdentity + Send>) -> Self {
        self.identity = identity;
        self
    }

    /// Replace the lifecycle hooks.
    pub fn with_hooks(mut self, hooks: Box<dyn ClaimHooks + Send>) -> Self {
        self.hooks = hooks;
        self
    }
}

// =============================================================================
// DROP ENGINE
// =============================================================================

/// Single-phase claim engine.
///
/// Owns all persisted state (active condition, condition id, supply
/// ledger). `&mut self` operations serialize naturally; wrap in
/// [`SharedDrop`](crate::engine::shared::SharedDrop) for concurrent
/// callers.
pub struct DropEngine {
    store: ClaimConditionStore,
    ledger: SupplyLedger,
    collaborators: DropCollaborators,
    pending_events: Vec<DropEvent>,
}

impl DropEngine {
    /// Create an engine with an initial condition.
    pub fn new(condition: ClaimCondition, collaborators: DropCollaborators) -> Self {
        Self {
            store: ClaimConditionStore::new(condition),
            ledger: SupplyLedger::new(),
            collaborators,
            pending_events: Vec::new(),
        }
    }

    // =========================================================================
    // READS
    // =========================================================================

    /// The active claim condition.
    pub fn active_condition(&self) -> &ClaimCondition {
        self.store.condition()
    }

    /// The active condition id.
    pub fn active_condition_id(&self) -> ConditionId {
        self.store.condition_id()
    }

    /// The supply ledger.
    pub fn ledger(&self) -> &SupplyLedger {
        &self.ledger
    }

    /// Quantity claimed by `claimant` under the active condition id.
    pub fn supply_claimed_by_wallet(&self, claimant: &ClaimantId) -> u64 {
        self.ledger.claimed(self.store.condition_id(), claimant)
    }

    /// Dry-run eligibility check against current state. Read-only.
    ///
    /// Returns whether a verifying allowlist proof supplied the
    /// effective values.
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
        verify_claim(
            self.store.condition(),
            &self.ledger,
            self.store.condition_id(),
            claimant,
            quantity,
            currency,
            price_per_token,
            allowlist_proof,
            now,
        )
    }

    /// Take pending events (consumes them).
    pub fn take_events(&mut self) -> Vec<DropEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // =========================================================================
    // CLAIM PATH
    // =========================================================================

    /// Execute a claim submitted by `caller` at time `now`.
    ///
    /// Verification, accounting, settlement, transfer, and the emitted
    /// record are all-or-nothing: any failure leaves the engine exactly
    /// as it was.
    pub fn claim(
        &mut self,
        caller: ClaimantId,
        request: ClaimRequest,
        allowlist_proof: &AllowlistProof,
        now: u64,
    ) -> Result<TokensClaimed, ClaimError> {
        self.collaborators
            .hooks
            .before_claim(&request)
            .map_err(ClaimError::Hook)?;

        let claimant = self.collaborators.identity.resolve(caller);
        let condition_id = self.store.condition_id();

        let is_override = verify_claim(
            self.store.condition(),
            &self.ledger,
            condition_id,
            &claimant,
            request.quantity,
            request.currency,
            request.price_per_token,
            allowlist_proof,
            now,
        )?;

        // Accounting, before any external delegation.
        let prev_supply = self.store.condition().supply_claimed;
        let new_supply = prev_supply
            .checked_add(request.quantity)
            .ok_or(ClaimError::Overflow)?;
        self.store.condition_mut().supply_claimed = new_supply;
        if let Err(err) = self.ledger.record(condition_id, &claimant, request.quantity) {
            self.store.condition_mut().supply_claimed = prev_supply;
            return Err(err);
        }

        // Settlement, transfer, and the after hook. Failure here must
        // restore the accounting applied above.
        match self.settle(&claimant, &request) {
            Ok(record) => {
                info!(
                    claimant = %claimant,
                    receiver = %record.receiver,
                    quantity = record.quantity,
                    start_id = record.start_id,
                    is_override,
                    supply_claimed = new_supply,
                    "claim committed"
                );
                self.pending_events
                    .push(DropEvent::TokensClaimed(record.clone()));
                Ok(record)
            }
            Err(err) => {
                warn!(
                    claimant = %claimant,
                    quantity = request.quantity,
                    error = %err,
                    "claim failed after accounting, rolling back"
                );
                self.store.condition_mut().supply_claimed = prev_supply;
                self.ledger.unrecord(condition_id, &claimant, request.quantity);
                Err(err)
            }
        }
    }

    /// Settlement phase: collect payment, transfer items, run the after
    /// hook, and build the claim record.
    fn settle(
        &mut self,
        claimant: &ClaimantId,
        request: &ClaimRequest,
    ) -> Result<TokensClaimed, ClaimError> {
        self.collaborators
            .payments
            .collect(request.quantity, request.currency, request.price_per_token)
            .map_err(ClaimError::Payment)?;

        let start_id = self
            .collaborators
            .transfers
            .transfer(&request.receiver, request.quantity)
            .map_err(ClaimError::Transfer)?;

        let record = TokensClaimed {
            claimant: *claimant,
            receiver: request.receiver,
            start_id,
            quantity: request.quantity,
        };

        self.collaborators
            .hooks
            .after_claim(&record)
            .map_err(ClaimError::Hook)?;

        Ok(record)
    }

    // =========================================================================
    // ADMIN PATH
    // =========================================================================

    /// Replace the active claim condition.
    ///
    /// With `reset_eligibility`, carried supply resets to zero and a
    /// fresh condition id makes all prior ledger entries unreachable;
    /// otherwise the current `supply_claimed` carries over and must fit
    /// under the new cap.
    pub fn set_claim_conditions(
        &mut self,
        admin: ClaimantId,
        mut new_condition: ClaimCondition,
        reset_eligibility: bool,
    ) -> Result<(), ClaimError> {
        if !self
            .collaborators
            .authorization
            .can_set_claim_conditions(&admin)
        {
            return Err(ClaimError::Unauthorized);
        }

        let carried_supply = if reset_eligibility {
            0
        } else {
            self.store.condition().supply_claimed
        };
        if carried_supply > new_condition.max_claimable_supply {
            return Err(ClaimError::ExceedMaxSupply {
                cap: new_condition.max_claimable_supply,
                attempted: carried_supply,
            });
        }
        new_condition.supply_claimed = carried_supply;

        let condition_id = if reset_eligibility {
            self.store.next_condition_id(&admin)
        } else {
            self.store.condition_id()
        };

        self.store.replace(new_condition.clone(), condition_id);

        info!(
            admin = %admin,
            condition_id = %condition_id,
            reset_eligibility,
            max_claimable_supply = new_condition.max_claimable_supply,
            supply_claimed = carried_supply,
            merkle_root = ?new_condition.merkle_root.map(hex::encode),
            "claim condition updated"
        );

        self.pending_events
            .push(DropEvent::ClaimConditionUpdated(ClaimConditionUpdated {
                condition: new_condition,
                reset_eligibility,
            }));

        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
