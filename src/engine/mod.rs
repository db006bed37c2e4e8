//! Claim Engine
//!
//! The single-phase claim rule engine and its orchestration:
//! - `condition` - data model and the active condition store
//! - `ledger`    - per-epoch, per-claimant supply accounting
//! - `verify`    - pure eligibility rules
//! - `traits`    - injected collaborator interfaces
//! - `drop`      - the orchestrator (claim + admin paths)
//! - `shared`    - serialized handle for concurrent callers
//! - `events`    - emitted records
//! - `error`     - the error taxonomy

pub mod condition;
pub mod error;
pub mod events;
pub mod ledger;
pub mod shared;
pub mod traits;
pub mod verify;

pub mod drop;

pub use condition::{
    AllowlistProof, ClaimCondition, ClaimConditionStore, ClaimantId, ConditionId, CurrencyId,
};
pub use drop::{DropCollaborators, DropEngine};
pub use error::ClaimError;
pub use events::{ClaimConditionUpdated, DropEvent, TokensClaimed};
pub use ledger::SupplyLedger;
pub use shared::SharedDrop;
pub use traits::{
    AuthorizationPredicate, ClaimHooks, ClaimRequest, ClaimantIdentity, DirectCaller,
    ItemTransferrer, NoopHooks, PaymentCollector,
};
