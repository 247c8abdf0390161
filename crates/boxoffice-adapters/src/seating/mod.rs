//! Seat reservation adapters.

mod logging;
mod memory;

pub use logging::LoggingSeatBooking;
pub use memory::{InMemorySeatBook, ReservationRecord};
