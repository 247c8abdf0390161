//! Ticket Service - purchase orchestrator.
//!
//! This service coordinates the purchase workflow:
//! 1. Validate the request and compute totals
//! 2. Take payment
//! 3. Reserve seats
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use tracing::{info, instrument};

use crate::{
    application::ports::{PaymentProcessor, SeatAllocator},
    domain::{PurchaseDecision, PurchaseValidator, TicketPolicy, TicketTypeRequest},
    error::BoxOfficeResult,
};

/// Main purchase service.
///
/// Holds only immutable configuration and its collaborators, so a single
/// instance can serve any number of independent purchases.
pub struct TicketService {
    validator: PurchaseValidator,
    payments: Box<dyn PaymentProcessor>,
    seats: Box<dyn SeatAllocator>,
}

impl TicketService {
    /// Create a ticket service with the canonical prices and limit.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use boxoffice_core::application::{TicketService, ports::*};
    ///
    /// let service = TicketService::new(
    ///     payments, // impl PaymentProcessor
    ///     seats,    // impl SeatAllocator
    /// );
    /// ```
    pub fn new(payments: Box<dyn PaymentProcessor>, seats: Box<dyn SeatAllocator>) -> Self {
        Self::with_validator(PurchaseValidator::new(), payments, seats)
    }

    pub fn with_validator(
        validator: PurchaseValidator,
        payments: Box<dyn PaymentProcessor>,
        seats: Box<dyn SeatAllocator>,
    ) -> Self {
        Self {
            validator,
            payments,
            seats,
        }
    }

    pub fn policy(&self) -> &TicketPolicy {
        self.validator.policy()
    }

    /// Purchase tickets.
    ///
    /// Validation completes before any collaborator is called. On success the
    /// payment is taken first, then the seats are reserved, each exactly once.
    /// A collaborator failure propagates; if payment fails no reservation is
    /// attempted.
    #[instrument(skip_all, fields(account_id = account_id))]
    pub fn purchase_tickets(
        &self,
        account_id: i64,
        requests: Option<&[TicketTypeRequest]>,
    ) -> BoxOfficeResult<PurchaseDecision> {
        let decision = self.validator.decide(account_id, requests)?;

        info!(amount = decision.total_cost, "Processing payment");
        self.payments
            .make_payment(decision.account_id, decision.total_cost)?;

        info!(seats = decision.total_seats, "Processing seat reservation");
        self.seats
            .reserve_seats(decision.account_id, decision.total_seats)?;

        info!("Purchase completed");
        Ok(decision)
    }

    /// Validate and price a purchase without paying or reserving.
    #[instrument(skip_all, fields(account_id = account_id))]
    pub fn quote(
        &self,
        account_id: i64,
        requests: Option<&[TicketTypeRequest]>,
    ) -> BoxOfficeResult<PurchaseDecision> {
        Ok(self.validator.decide(account_id, requests)?)
    }
}
