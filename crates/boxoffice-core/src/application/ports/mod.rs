//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `boxoffice-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `PaymentProcessor`: Takes payment for a purchase
//!   - `SeatAllocator`: Reserves seats for a purchase
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{PaymentProcessor, SeatAllocator};

#[cfg(test)]
pub use output::{MockPaymentProcessor, MockSeatAllocator};
