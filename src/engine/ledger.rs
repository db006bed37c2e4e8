//! Supply Ledger
//!
//! Per-(condition id, claimant) cumulative claimed quantities.
//! Entries are monotonically non-decreasing and never deleted: a
//! condition reset makes old entries unreachable by rolling the id
//! forward, not by erasing them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::engine::condition::{ClaimantId, ConditionId};
use crate::engine::error::ClaimError;

/// Cumulative claimed quantity per condition epoch and claimant.
///
/// Uses BTreeMap for deterministic iteration order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SupplyLedger {
    entries: BTreeMap<(ConditionId, ClaimantId), u64>,
}

impl SupplyLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Quantity already claimed by `claimant` under `condition_id`.
    pub fn claimed(&self, condition_id: ConditionId, claimant: &ClaimantId) -> u64 {
        self.entries
            .get(&(condition_id, *claimant))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of all claims recorded under `condition_id`.
    pub fn total_claimed_under(&self, condition_id: ConditionId) -> u64 {
        self.entries
            .iter()
            .filter(|((id, _), _)| *id == condition_id)
            .map(|(_, quantity)| quantity)
            .sum()
    }

    /// Number of (condition id, claimant) entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Record a successful claim, returning the new cumulative total.
    ///
    /// Overflow is a fatal abort, never a wrap.
    pub(crate) fn record(
        &mut self,
        condition_id: ConditionId,
        claimant: &ClaimantId,
        quantity: u64,
    ) -> Result<u64, ClaimError> {
        let entry = self.entries.entry((condition_id, *claimant)).or_insert(0);
        let total = entry.checked_add(quantity).ok_or(ClaimError::Overflow)?;
        *entry = total;
        Ok(total)
    }

    /// Undo a `record` made earlier in the same failed claim.
    pub(crate) fn unrecord(
        &mut self,
        condition_id: ConditionId,
        claimant: &ClaimantId,
        quantity: u64,
    ) {
        if let Some(entry) = self.entries.get_mut(&(condition_id, *claimant)) {
            *entry = entry.saturating_sub(quantity);
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
