//! Engine Events
//!
//! Records emitted on successful state changes, for indexing and audit.
//! The engine accumulates them in a pending log drained by
//! `DropEngine::take_events`.

use serde::{Deserialize, Serialize};

use crate::engine::condition::{ClaimCondition, ClaimantId};

/// Record of a successful claim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokensClaimed {
    /// Resolved claimant identity charged against the ledger.
    pub claimant: ClaimantId,

    /// Receiver of the claimed items.
    pub receiver: ClaimantId,

    /// Starting identifier of the transferred batch.
    pub start_id: u64,

    /// Quantity claimed.
    pub quantity: u64,
}

/// Record of a condition replacement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClaimConditionUpdated {
    /// The condition now active (with carried or reset supply).
    pub condition: ClaimCondition,

    /// Whether eligibility was reset (fresh condition id).
    pub reset_eligibility: bool,
}

/// An engine event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DropEvent {
    /// A claim committed.
    TokensClaimed(TokensClaimed),
    /// The active condition was replaced.
    ClaimConditionUpdated(ClaimConditionUpdated),
}
