//! Engine Errors
//!
//! Every error aborts the whole operation with no state change; nothing
//! is internally retried. Collaborator failures are wrapped with their
//! cause attached.

use crate::engine::condition::CurrencyId;

/// Claim engine errors.
#[derive(Debug, thiserror::Error)]
pub enum ClaimError {
    /// Admin gate failed.
    #[error("caller is not authorized to set claim conditions")]
    Unauthorized,

    /// A claim (or carried supply on the admin path) would exceed the cap.
    #[error("max claimable supply exceeded (cap {cap}, attempted {attempted})")]
    ExceedMaxSupply {
        /// The condition's maximum claimable supply.
        cap: u64,
        /// The total that the operation would have reached.
        attempted: u64,
    },

    /// Requested currency/price does not match the resolved effective values.
    #[error(
        "invalid price: expected {expected_price} in {expected_currency}, \
         got {actual_price} in {actual_currency}"
    )]
    InvalidPrice {
        /// Effective currency after override resolution.
        expected_currency: CurrencyId,
        /// Effective price after override resolution.
        expected_price: u64,
        /// Currency the claimant offered.
        actual_currency: CurrencyId,
        /// Price the claimant offered.
        actual_price: u64,
    },

    /// Zero quantity, or the cumulative claim would exceed the wallet limit.
    #[error("per-wallet limit exceeded (limit {limit}, attempted {attempted})")]
    ExceedLimit {
        /// Effective per-wallet limit after override resolution.
        limit: u64,
        /// Cumulative quantity the claim would have reached.
        attempted: u64,
    },

    /// Claim attempted before the condition's start time.
    #[error("claim phase not started (starts at {start_time}, now {now})")]
    NotStarted {
        /// Unix timestamp at which claiming opens.
        start_time: u64,
        /// Unix timestamp supplied by the caller.
        now: u64,
    },

    /// Arithmetic overflow in an accounting step. Fatal, never wrapped.
    #[error("arithmetic overflow in claim accounting")]
    Overflow,

    /// Payment settlement collaborator failed.
    #[error("payment collection failed")]
    Payment(#[source] anyhow::Error),

    /// Item transfer collaborator failed.
    #[error("item transfer failed")]
    Transfer(#[source] anyhow::Error),

    /// A before/after claim hook rejected the operation.
    #[error("claim hook rejected the operation")]
    Hook(#[source] anyhow::Error),
}
