// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Boxoffice.
//!
//! This module contains pure business logic with ZERO I/O.
//! Payment and seat reservation are reached only through ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror, serde, tracing
//! - **Immutable values**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod policy;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use entities::{PurchaseDecision, TicketCounts, TicketTypeRequest};

pub use error::{DomainError, ErrorCategory, PurchaseRejection};

pub use policy::TicketPolicy;

pub use value_objects::{AccountId, TicketType};

pub use validation::PurchaseValidator;

#[cfg(test)]
mod tests {
    use super::*;

    fn decide(
        account: i64,
        requests: &[(TicketType, i32)],
    ) -> Result<PurchaseDecision, DomainError> {
        let requests: Vec<_> = requests
            .iter()
            .map(|&(ticket_type, quantity)| TicketTypeRequest::new(ticket_type, quantity))
            .collect();
        PurchaseValidator::new().decide(account, Some(&requests))
    }

    // ========================================================================
    // Cost and seat properties over a grid of valid purchases
    // ========================================================================

    #[test]
    fn cost_and_seats_follow_the_formula() {
        for adults in 1..=10 {
            for children in 0..=8 {
                for infants in 0..=7 {
                    let decision = decide(
                        1,
                        &[
                            (TicketType::Adult, adults),
                            (TicketType::Child, children),
                            (TicketType::Infant, infants),
                        ],
                    )
                    .unwrap();
                    assert_eq!(decision.total_cost, (25 * adults + 15 * children) as u64);
                    assert_eq!(decision.total_seats, (adults + children) as u32);
                }
            }
        }
    }

    #[test]
    fn every_total_above_the_maximum_is_rejected() {
        for total in 26..=60 {
            let err = decide(1, &[(TicketType::Adult, total)]).unwrap_err();
            assert_eq!(err.rejection(), Some(PurchaseRejection::TooManyTickets));
        }
    }

    #[test]
    fn dependants_without_adults_are_always_rejected() {
        for children in 0..=5 {
            for infants in 0..=5 {
                if children == 0 && infants == 0 {
                    continue;
                }
                let err = decide(
                    1,
                    &[(TicketType::Child, children), (TicketType::Infant, infants)],
                )
                .unwrap_err();
                assert_eq!(err.rejection(), Some(PurchaseRejection::NoAdult));
            }
        }
    }

    #[test]
    fn reexports_are_usable() {
        let _ = TicketPolicy::default();
        assert_eq!(TicketType::ALL.len(), 3);
        assert!(AccountId::parse(1).is_ok());
        assert_eq!(TicketCounts::default().total(), 0);
    }
}
