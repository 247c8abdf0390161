//! Derived outcome of a purchase that passed every rule.

use serde::Serialize;

use crate::domain::value_objects::AccountId;

/// Everything the collaborators need for one valid purchase.
///
/// Counts are non-negative here: the validator only builds a decision after
/// the negative-count and maximum checks passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PurchaseDecision {
    pub account_id: AccountId,
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
    /// Amount to charge, in currency-agnostic units.
    pub total_cost: u64,
    /// Seats to reserve. Infants are excluded.
    pub total_seats: u32,
}

impl PurchaseDecision {
    pub fn total_tickets(&self) -> u32 {
        self.adults + self.children + self.infants
    }
}
