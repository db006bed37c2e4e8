//! Collaborator Interfaces
//!
//! The capability set injected into the engine at construction. Payment
//! settlement, item transfer, admin authorization, and claimant identity
//! resolution all live outside the engine; it only consumes these
//! contracts. Implementations report failures as `anyhow::Error`, which
//! the engine wraps with the failing step attached.

use serde::{Deserialize, Serialize};

use crate::engine::condition::{ClaimantId, CurrencyId};
use crate::engine::events::TokensClaimed;

/// Gate for condition administration.
///
/// The engine consumes the boolean only; who holds the capability and
/// why is the caller's concern.
pub trait AuthorizationPredicate {
    /// Whether `admin` may replace the active claim condition.
    fn can_set_claim_conditions(&self, admin: &ClaimantId) -> bool;
}

/// Payment settlement for a successful claim.
pub trait PaymentCollector {
    /// Collect payment for `quantity` items at `price_per_token` in
    /// `currency`. A failure aborts and rolls back the whole claim.
    fn collect(
        &mut self,
        quantity: u64,
        currency: CurrencyId,
        price_per_token: u64,
    ) -> anyhow::Result<()>;
}

/// Item transfer for a successful claim.
pub trait ItemTransferrer {
    /// Transfer `quantity` items to `receiver`, returning the starting
    /// identifier of the transferred batch. A failure aborts and rolls
    /// back the whole claim.
    fn transfer(&mut self, receiver: &ClaimantId, quantity: u64) -> anyhow::Result<u64>;
}

/// Resolution of the claimant identity charged against the ledger.
///
/// Lets a deployment substitute who is deemed the claimant, e.g. the
/// original sender of a relayed request rather than the relayer.
pub trait ClaimantIdentity {
    /// Resolve the ledger identity for a claim submitted by `caller`.
    fn resolve(&self, caller: ClaimantId) -> ClaimantId {
        caller
    }
}

/// Identity resolution that charges the direct caller.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectCaller;

impl ClaimantIdentity for DirectCaller {}

/// The request shape passed to `before_claim` hooks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimRequest {
    /// Receiver of the claimed items.
    pub receiver: ClaimantId,

    /// Quantity requested.
    pub quantity: u64,

    /// Currency the claimant offers to pay in.
    pub currency: CurrencyId,

    /// Price per token the claimant offers.
    pub price_per_token: u64,

    /// Opaque payload forwarded to hooks.
    pub data: Vec<u8>,
}

/// Lifecycle extension hooks around a claim. Both default to no-ops.
///
/// `before_claim` runs before any validation or mutation; a failure
/// rejects the request outright. `after_claim` runs after settlement and
/// transfer; a failure rolls back the whole claim.
pub trait ClaimHooks {
    /// Called before verification.
    fn before_claim(&mut self, request: &ClaimRequest) -> anyhow::Result<()> {
        let _ = request;
        Ok(())
    }

    /// Called after settlement and transfer, with the pending record.
    fn after_claim(&mut self, record: &TokensClaimed) -> anyhow::Result<()> {
        let _ = record;
        Ok(())
    }
}

/// Hooks that do nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHooks;

impl ClaimHooks for NoopHooks {}
