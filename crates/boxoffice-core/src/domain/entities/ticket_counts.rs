//! Per-type aggregation of a purchase's ticket requests.

use std::collections::HashMap;

use crate::domain::{entities::TicketTypeRequest, value_objects::TicketType};

/// Total requested quantity per ticket type.
///
/// Duplicate types in the input are summed; order is irrelevant. Types that
/// never appear count as zero. Sums are kept in `i64` so adding up `i32`
/// quantities cannot overflow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketCounts {
    counts: HashMap<TicketType, i64>,
}

impl TicketCounts {
    pub fn from_requests(requests: &[TicketTypeRequest]) -> Self {
        let mut counts: HashMap<TicketType, i64> = HashMap::new();
        for request in requests {
            *counts.entry(request.ticket_type()).or_insert(0) += i64::from(request.quantity());
        }
        Self { counts }
    }

    pub fn get(&self, ticket_type: TicketType) -> i64 {
        self.counts.get(&ticket_type).copied().unwrap_or(0)
    }

    pub fn adults(&self) -> i64 {
        self.get(TicketType::Adult)
    }

    pub fn children(&self) -> i64 {
        self.get(TicketType::Child)
    }

    pub fn infants(&self) -> i64 {
        self.get(TicketType::Infant)
    }

    /// Sum across every type, infants included.
    pub fn total(&self) -> i64 {
        self.counts.values().sum()
    }

    pub fn has_negative(&self) -> bool {
        self.counts.values().any(|&count| count < 0)
    }

    /// Types present in the input, with their aggregated counts.
    pub fn iter(&self) -> impl Iterator<Item = (TicketType, i64)> + '_ {
        self.counts.iter().map(|(ticket_type, count)| (*ticket_type, *count))
    }
}
