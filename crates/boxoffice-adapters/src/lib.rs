//! Infrastructure adapters for Boxoffice.
//!
//! This crate implements the ports defined in `boxoffice-core::application::ports`.
//! It contains the stand-ins for the external payment and seat booking services.

pub mod payment;
pub mod seating;

// Re-export commonly used adapters
pub use payment::{InMemoryPaymentLedger, LoggingPaymentGateway, PaymentRecord};
pub use seating::{InMemorySeatBook, LoggingSeatBooking, ReservationRecord};
