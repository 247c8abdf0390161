// ============================================================================
// domain/error.rs - PURCHASE RULE VIOLATIONS
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reason a purchase was rejected.
///
/// Variants are declared in fail-fast precedence order: when a request
/// breaks several rules, the earliest variant is the one reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PurchaseRejection {
    /// The request sequence itself was absent.
    NullRequests,
    /// The account id was zero or negative.
    InvalidAccount,
    /// At least one aggregated per-type count was negative.
    NegativeCount,
    /// The aggregated total exceeded the per-purchase maximum.
    TooManyTickets,
    /// Child or infant tickets were requested without an adult ticket.
    NoAdult,
}

impl PurchaseRejection {
    /// Stable reason code, suitable for logs and machine-readable output.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NullRequests => "nullRequests",
            Self::InvalidAccount => "invalidAccount",
            Self::NegativeCount => "negativeCount",
            Self::TooManyTickets => "tooManyTickets",
            Self::NoAdult => "noAdult",
        }
    }
}

impl fmt::Display for PurchaseRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (callers may keep them around for reporting)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Purchase Rejections (400-level equivalent)
    // ========================================================================
    #[error("{}", describe(.reason, .max_tickets))]
    InvalidPurchase {
        reason: PurchaseRejection,
        /// Per-purchase maximum that was in force, for `TooManyTickets`.
        max_tickets: u32,
    },

    // ========================================================================
    // Parsing Errors
    // ========================================================================
    #[error("unknown ticket type: {0}")]
    UnknownTicketType(String),

    #[error("malformed ticket request '{0}', expected TYPE=QUANTITY")]
    MalformedTicketRequest(String),

    // ========================================================================
    // Policy Errors
    // ========================================================================
    #[error("invalid ticket policy: {field} {reason}")]
    InvalidPolicy { field: &'static str, reason: String },

    #[error("total cost exceeds the representable amount")]
    AmountOverflow,
}

fn describe(reason: &PurchaseRejection, max_tickets: &u32) -> String {
    match reason {
        PurchaseRejection::NullRequests => "ticket requests are missing".into(),
        PurchaseRejection::InvalidAccount => "account id must be greater than zero".into(),
        PurchaseRejection::NegativeCount => "ticket count must not be negative".into(),
        PurchaseRejection::TooManyTickets => {
            format!("no more than {max_tickets} tickets may be purchased at a time")
        }
        PurchaseRejection::NoAdult => {
            "child and infant tickets must be purchased with at least one adult ticket".into()
        }
    }
}

impl DomainError {
    /// Build a rejection for the given reason.
    pub fn rejected(reason: PurchaseRejection, max_tickets: u32) -> Self {
        Self::InvalidPurchase {
            reason,
            max_tickets,
        }
    }

    /// The rejection reason, if this error is a purchase rejection.
    pub fn rejection(&self) -> Option<PurchaseRejection> {
        match self {
            Self::InvalidPurchase { reason, .. } => Some(*reason),
            _ => None,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidPurchase { reason, max_tickets } => match reason {
                PurchaseRejection::NullRequests => vec![
                    "Provide at least one ticket request".into(),
                    "Example: --ticket adult=2".into(),
                ],
                PurchaseRejection::InvalidAccount => {
                    vec!["Use a positive account id, e.g. --account 42".into()]
                }
                PurchaseRejection::NegativeCount => vec![
                    "Ticket quantities are summed per type".into(),
                    "Make sure each type adds up to zero or more".into(),
                ],
                PurchaseRejection::TooManyTickets => vec![
                    format!("Split the order so each purchase has at most {max_tickets} tickets"),
                    "Infant tickets count towards the limit".into(),
                ],
                PurchaseRejection::NoAdult => vec![
                    "Add at least one adult ticket, e.g. --ticket adult=1".into(),
                ],
            },
            Self::UnknownTicketType(_) | Self::MalformedTicketRequest(_) => vec![
                "Ticket requests look like TYPE=QUANTITY".into(),
                "Known types: adult, child, infant".into(),
            ],
            Self::InvalidPolicy { field, .. } => vec![
                format!("Check the '{field}' value in your configuration"),
                "Try: boxoffice config list".into(),
            ],
            Self::AmountOverflow => vec!["Check the configured ticket prices".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidPurchase { .. } => ErrorCategory::Rejected,
            Self::UnknownTicketType(_) | Self::MalformedTicketRequest(_) => {
                ErrorCategory::Validation
            }
            Self::InvalidPolicy { .. } => ErrorCategory::Policy,
            Self::AmountOverflow => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Rejected,
    Validation,
    Policy,
    Internal,
}
