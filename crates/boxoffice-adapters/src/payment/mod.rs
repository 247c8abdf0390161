//! Payment adapters.

mod logging;
mod memory;

pub use logging::LoggingPaymentGateway;
pub use memory::{InMemoryPaymentLedger, PaymentRecord};
