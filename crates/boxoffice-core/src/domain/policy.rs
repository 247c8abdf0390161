//! Ticket prices and purchase limits.

use serde::{Deserialize, Serialize};

use crate::domain::{entities::TicketCounts, error::DomainError, value_objects::TicketType};

pub const ADULT_TICKET_PRICE: u32 = 25;
pub const CHILD_TICKET_PRICE: u32 = 15;
pub const INFANT_TICKET_PRICE: u32 = 0;
pub const MAX_TICKETS_PER_PURCHASE: u32 = 25;

/// Price table and per-purchase maximum.
///
/// `Default` is the canonical venue contract: adults 25, children 15,
/// infants free, at most 25 tickets per purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketPolicy {
    pub adult_price: u32,
    pub child_price: u32,
    pub infant_price: u32,
    pub max_tickets: u32,
}

impl Default for TicketPolicy {
    fn default() -> Self {
        Self {
            adult_price: ADULT_TICKET_PRICE,
            child_price: CHILD_TICKET_PRICE,
            infant_price: INFANT_TICKET_PRICE,
            max_tickets: MAX_TICKETS_PER_PURCHASE,
        }
    }
}

impl TicketPolicy {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.max_tickets == 0 {
            return Err(DomainError::InvalidPolicy {
                field: "max_tickets",
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    pub const fn price_of(&self, ticket_type: TicketType) -> u32 {
        match ticket_type {
            TicketType::Adult => self.adult_price,
            TicketType::Child => self.child_price,
            TicketType::Infant => self.infant_price,
        }
    }

    /// Amount owed for `counts`. Callers must have rejected negative counts.
    pub fn cost(&self, counts: &TicketCounts) -> Result<u64, DomainError> {
        TicketType::ALL.iter().try_fold(0u64, |total, &ticket_type| {
            let count = u64::try_from(counts.get(ticket_type))
                .map_err(|_| DomainError::AmountOverflow)?;
            count
                .checked_mul(u64::from(self.price_of(ticket_type)))
                .and_then(|line| total.checked_add(line))
                .ok_or(DomainError::AmountOverflow)
        })
    }

    /// Number of seats to reserve for `counts`.
    pub fn seats(&self, counts: &TicketCounts) -> i64 {
        TicketType::ALL
            .iter()
            .filter(|ticket_type| ticket_type.occupies_seat())
            .map(|&ticket_type| counts.get(ticket_type))
            .sum()
    }
}
