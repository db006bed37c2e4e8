//! # Drop Engine
//!
//! Single-phase claim authorization and accounting engine. Governs
//! distribution of a fixed-supply resource under exactly one active
//! claim condition: price, per-wallet limits, a total supply cap, a
//! start-time gate, and an optional Merkle allowlist with per-leaf
//! overrides.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       DROP ENGINE                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/             - Deterministic primitives                │
//! │  ├── hash.rs       - Domain-separated SHA-256 hashing        │
//! │  └── merkle.rs     - Commutative-pair proof verification     │
//! │                                                              │
//! │  engine/           - Claim rules and orchestration           │
//! │  ├── condition.rs  - Claim condition, ids, allowlist proofs  │
//! │  ├── ledger.rs     - Per-epoch per-claimant supply ledger    │
//! │  ├── verify.rs     - Pure eligibility rule engine            │
//! │  ├── traits.rs     - Injected collaborator interfaces        │
//! │  ├── drop.rs       - Claim + admin orchestration             │
//! │  └── shared.rs     - Serialized concurrent handle            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism Guarantee
//!
//! The engine itself is **100% deterministic**:
//! - Caller identity and current time are explicit parameters
//! - All keyed state lives in `BTreeMap`s (sorted iteration)
//! - Accounting uses checked arithmetic; overflow aborts, never wraps
//! - All randomness and clocks belong to the injected collaborators
//!
//! Every claim is all-or-nothing: verification, accounting, payment
//! settlement, item transfer, and the emitted record either all commit
//! or the engine is left exactly as it was.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::core::hash::Hash256;
pub use engine::condition::{
    AllowlistProof, ClaimCondition, ClaimConditionStore, ClaimantId, ConditionId, CurrencyId,
};
pub use engine::drop::{DropCollaborators, DropEngine};
pub use engine::error::ClaimError;
pub use engine::events::{ClaimConditionUpdated, DropEvent, TokensClaimed};
pub use engine::ledger::SupplyLedger;
pub use engine::shared::SharedDrop;
pub use engine::traits::{
    AuthorizationPredicate, ClaimHooks, ClaimRequest, ClaimantIdentity, DirectCaller,
    ItemTransferrer, NoopHooks, PaymentCollector,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
