//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `boxoffice-adapters` crate provides implementations.

use crate::domain::AccountId;
use crate::error::BoxOfficeResult;

/// Port for taking payment.
///
/// Implemented by:
/// - `boxoffice_adapters::payment::LoggingPaymentGateway` (production stand-in)
/// - `boxoffice_adapters::payment::InMemoryPaymentLedger` (testing)
///
/// A failure is fatal for the purchase: the service propagates it and does
/// not reserve seats.
#[cfg_attr(test, mockall::automock)]
pub trait PaymentProcessor: Send + Sync {
    /// Charge `amount` units to `account`.
    fn make_payment(&self, account: AccountId, amount: u64) -> BoxOfficeResult<()>;
}

/// Port for seat reservation.
///
/// Implemented by:
/// - `boxoffice_adapters::seating::LoggingSeatBooking` (production stand-in)
/// - `boxoffice_adapters::seating::InMemorySeatBook` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait SeatAllocator: Send + Sync {
    /// Reserve `seats` seats for `account`.
    fn reserve_seats(&self, account: AccountId, seats: u32) -> BoxOfficeResult<()>;
}
