//! Claim Verification
//!
//! The pure rule engine deciding claim eligibility. Takes every input
//! explicitly (state, claimant, request, current time) and mutates
//! nothing: identical state and inputs always yield identical results.
//!
//! Resolution order:
//! 1. Allowlist membership (when a root is present)
//! 2. Override application per presence rules
//! 3. Price/currency equality
//! 4. Per-wallet quantity limit (zero quantity always fails here)
//! 5. Total supply cap
//! 6. Start-time gate

use tracing::debug;

use crate::core::merkle;
use crate::engine::condition::{AllowlistProof, ClaimCondition, ClaimantId, ConditionId, CurrencyId};
use crate::engine::error::ClaimError;
use crate::engine::ledger::SupplyLedger;

/// Decide whether a prospective claim is eligible.
///
/// Returns `Ok(is_override)` when every rule passes; `is_override` is
/// informational (whether a verifying allowlist proof supplied the
/// effective values). All accounting sums use checked arithmetic.
#[allow(clippy::too_many_arguments)]
pub fn verify_claim(
    condition: &ClaimCondition,
    ledger: &SupplyLedger,
    condition_id: ConditionId,
    claimant: &ClaimantId,
    quantity: u64,
    currency: CurrencyId,
    price_per_token: u64,
    allowlist_proof: &AllowlistProof,
    now: u64,
) -> Result<bool, ClaimError> {
    // 1. Allowlist membership. An absent root disables the allowlist;
    //    a failed proof demotes the claimant to the public values.
    let is_override = match condition.merkle_root {
        Some(root) => {
            let leaf = allowlist_proof.leaf(claimant);
            merkle::verify(&allowlist_proof.proof, &root, &leaf)
        }
        None => false,
    };

    // 2. Effective values. Overrides apply only on a verified proof;
    //    the currency override additionally requires a price override.
    let mut effective_limit = condition.quantity_limit_per_wallet;
    let mut effective_price = condition.price_per_token;
    let mut effective_currency = condition.currency;
    if is_override {
        if let Some(limit) = allowlist_proof.quantity_limit_per_wallet {
            effective_limit = limit;
        }
        if let Some(price) = allowlist_proof.price_per_token {
            effective_price = price;
            if let Some(currency) = allowlist_proof.currency {
                effective_currency = currency;
            }
        }
    }

    // 3. Price/currency match.
    if currency != effective_currency || price_per_token != effective_price {
        return Err(ClaimError::InvalidPrice {
            expected_currency: effective_currency,
            expected_price: effective_price,
            actual_currency: currency,
            actual_price: price_per_token,
        });
    }

    // 4. Per-wallet limit.
    let already_claimed = ledger.claimed(condition_id, claimant);
    let attempted = already_claimed
        .checked_add(quantity)
        .ok_or(ClaimError::Overflow)?;
    if quantity == 0 || attempted > effective_limit {
        return Err(ClaimError::ExceedLimit {
            limit: effective_limit,
            attempted,
        });
    }

    // 5. Supply cap.
    let attempted_supply = condition
        .supply_claimed
        .checked_add(quantity)
        .ok_or(ClaimError::Overflow)?;
    if attempted_supply > condition.max_claimable_supply {
        return Err(ClaimError::ExceedMaxSupply {
            cap: condition.max_claimable_supply,
            attempted: attempted_supply,
        });
    }

    // 6. Start-time gate.
    if condition.start_time > now {
        return Err(ClaimError::NotStarted {
            start_time: condition.start_time,
            now,
        });
    }

    debug!(
        claimant = %claimant,
        quantity,
        is_override,
        "claim verified"
    );

    Ok(is_override)
}

// =============================================================================
// TESTS
// =============================================================================
