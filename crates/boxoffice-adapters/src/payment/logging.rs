//! Payment gateway stand-in that only reports what it would charge.

use boxoffice_core::{
    application::ports::PaymentProcessor, domain::AccountId, error::BoxOfficeResult,
};
use tracing::info;

/// Production payment adapter.
///
/// The real gateway is a third-party service; this adapter accepts every
/// charge and emits a structured event for it.
#[derive(Debug, Clone, Copy)]
pub struct LoggingPaymentGateway;

impl LoggingPaymentGateway {
    /// Create a new logging payment gateway.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingPaymentGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl PaymentProcessor for LoggingPaymentGateway {
    fn make_payment(&self, account: AccountId, amount: u64) -> BoxOfficeResult<()> {
        info!(account_id = account.get(), amount, "Payment accepted");
        Ok(())
    }
}
