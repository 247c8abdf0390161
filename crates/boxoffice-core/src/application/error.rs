//! Application layer errors.
//!
//! These errors represent collaborator failures, not business rules.
//! Business rule violations are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::domain::AccountId;
use crate::error::ErrorCategory;

/// Errors raised by the collaborators behind the output ports.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The payment collaborator refused or failed the charge.
    #[error("Payment for account {account} failed: {reason}")]
    PaymentDeclined { account: AccountId, reason: String },

    /// The reservation collaborator could not reserve the seats.
    #[error("Seat reservation for account {account} failed: {reason}")]
    ReservationFailed { account: AccountId, reason: String },

    /// A recording adapter's lock was poisoned.
    #[error("Ledger lock poisoned")]
    LedgerLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::PaymentDeclined { account, .. } => vec![
                format!("No seats were reserved for account {account}"),
                "Check the payment details and try again".into(),
            ],
            Self::ReservationFailed { account, .. } => vec![
                format!("Payment for account {account} was already taken"),
                "Contact the venue to reconcile the reservation".into(),
            ],
            Self::LedgerLockError => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PaymentDeclined { .. } | Self::ReservationFailed { .. } => {
                ErrorCategory::Collaborator
            }
            Self::LedgerLockError => ErrorCategory::Internal,
        }
    }
}
