//! Seat booking stand-in that only reports what it would reserve.

use boxoffice_core::{application::ports::SeatAllocator, domain::AccountId, error::BoxOfficeResult};
use tracing::info;

/// Production seat reservation adapter.
#[derive(Debug, Clone, Copy)]
pub struct LoggingSeatBooking;

impl LoggingSeatBooking {
    /// Create a new logging seat booking adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingSeatBooking {
    fn default() -> Self {
        Self::new()
    }
}

impl SeatAllocator for LoggingSeatBooking {
    fn reserve_seats(&self, account: AccountId, seats: u32) -> BoxOfficeResult<()> {
        info!(account_id = account.get(), seats, "Seats reserved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_every_reservation() {
        let booking = LoggingSeatBooking::new();
        assert!(booking.reserve_seats(AccountId::parse(3).unwrap(), 8).is_ok());
    }
}
