use tracing::{debug, warn};

use crate::domain::{
    entities::{PurchaseDecision, TicketCounts, TicketTypeRequest},
    error::{DomainError, PurchaseRejection},
    policy::TicketPolicy,
    value_objects::AccountId,
};

/// The purchase decision function.
///
/// Stateless apart from its policy: every call is independent, so one
/// validator can be shared freely between callers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PurchaseValidator {
    policy: TicketPolicy,
}

impl PurchaseValidator {
    /// Validator with the canonical prices and limit.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: TicketPolicy) -> Result<Self, DomainError> {
        policy.validate()?;
        Ok(Self { policy })
    }

    pub fn policy(&self) -> &TicketPolicy {
        &self.policy
    }

    /// Validate a purchase and compute its totals.
    ///
    /// Rules run in a fixed order and the first violation wins:
    /// absent requests, account id, negative counts, maximum, accompaniment.
    /// An empty but present request list is valid and yields zero totals.
    pub fn decide(
        &self,
        account_id: i64,
        requests: Option<&[TicketTypeRequest]>,
    ) -> Result<PurchaseDecision, DomainError> {
        let Some(requests) = requests else {
            return Err(self.reject(PurchaseRejection::NullRequests));
        };

        let account_id = AccountId::parse(account_id).map_err(|reason| self.reject(reason))?;

        let counts = TicketCounts::from_requests(requests);
        debug!(
            requests = requests.len(),
            adults = counts.adults(),
            children = counts.children(),
            infants = counts.infants(),
            "Ticket requests aggregated"
        );

        self.check_counts(&counts)?;

        let total_cost = self.policy.cost(&counts)?;
        let total_seats = self.policy.seats(&counts);

        // Every count is within 0..=max_tickets at this point.
        let narrow = |value: i64| u32::try_from(value).map_err(|_| DomainError::AmountOverflow);

        Ok(PurchaseDecision {
            account_id,
            adults: narrow(counts.adults())?,
            children: narrow(counts.children())?,
            infants: narrow(counts.infants())?,
            total_cost,
            total_seats: narrow(total_seats)?,
        })
    }

    fn check_counts(&self, counts: &TicketCounts) -> Result<(), DomainError> {
        if counts.has_negative() {
            return Err(self.reject(PurchaseRejection::NegativeCount));
        }

        if counts.total() > i64::from(self.policy.max_tickets) {
            return Err(self.reject(PurchaseRejection::TooManyTickets));
        }

        let needs_adult = counts
            .iter()
            .any(|(ticket_type, count)| ticket_type.requires_adult() && count > 0);
        if needs_adult && counts.adults() == 0 {
            return Err(self.reject(PurchaseRejection::NoAdult));
        }

        Ok(())
    }

    fn reject(&self, reason: PurchaseRejection) -> DomainError {
        warn!(reason = reason.code(), "Purchase rejected");
        DomainError::rejected(reason, self.policy.max_tickets)
    }
}
