//! A single (ticket type, quantity) line of a purchase.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, value_objects::TicketType};

/// Immutable request for `quantity` tickets of one type.
///
/// The quantity is signed: negative values are representable so the
/// validator can reject them instead of the type system hiding them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketTypeRequest {
    ticket_type: TicketType,
    quantity: i32,
}

impl TicketTypeRequest {
    pub const fn new(ticket_type: TicketType, quantity: i32) -> Self {
        Self {
            ticket_type,
            quantity,
        }
    }

    pub const fn ticket_type(&self) -> TicketType {
        self.ticket_type
    }

    pub const fn quantity(&self) -> i32 {
        self.quantity
    }
}

impl fmt::Display for TicketTypeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.ticket_type, self.quantity)
    }
}

/// Parses `TYPE=QTY` or `TYPE:QTY`, e.g. `adult=5` or `CHILD:3`.
impl FromStr for TicketTypeRequest {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, quantity) = s
            .split_once(['=', ':'])
            .ok_or_else(|| DomainError::MalformedTicketRequest(s.to_string()))?;

        let ticket_type = kind.parse::<TicketType>()?;
        let quantity = quantity
            .trim()
            .parse::<i32>()
            .map_err(|_| DomainError::MalformedTicketRequest(s.to_string()))?;

        Ok(Self::new(ticket_type, quantity))
    }
}
