//! Boxoffice Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for validating and
//! processing ticket purchases, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          boxoffice-cli (CLI)            │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (TicketService)              │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Driven: PaymentProcessor, SeatAllocator)│
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    boxoffice-adapters (Infrastructure)  │
//! │ (LoggingPaymentGateway, InMemorySeatBook)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (TicketType, TicketCounts, Validator)   │
//! │         No External Dependencies        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use boxoffice_core::{
//!     application::TicketService,
//!     domain::{TicketType, TicketTypeRequest},
//! };
//! # use boxoffice_core::prelude::*;
//! # struct Noop;
//! # impl PaymentProcessor for Noop {
//! #     fn make_payment(&self, _: AccountId, _: u64) -> BoxOfficeResult<()> { Ok(()) }
//! # }
//! # impl SeatAllocator for Noop {
//! #     fn reserve_seats(&self, _: AccountId, _: u32) -> BoxOfficeResult<()> { Ok(()) }
//! # }
//! # let (payments, seats) = (Box::new(Noop), Box::new(Noop));
//!
//! // Use application service (with injected adapters)
//! let service = TicketService::new(payments, seats);
//! let decision = service
//!     .purchase_tickets(
//!         2,
//!         Some(&[
//!             TicketTypeRequest::new(TicketType::Adult, 5),
//!             TicketTypeRequest::new(TicketType::Child, 3),
//!         ]),
//!     )
//!     .unwrap();
//! assert_eq!(decision.total_cost, 170);
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        TicketService,
        ports::{PaymentProcessor, SeatAllocator},
    };
    pub use crate::domain::{
        AccountId, PurchaseDecision, PurchaseRejection, PurchaseValidator, TicketCounts,
        TicketPolicy, TicketType, TicketTypeRequest,
    };
    pub use crate::error::{BoxOfficeError, BoxOfficeResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
