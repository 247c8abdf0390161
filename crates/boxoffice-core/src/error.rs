//! Unified error handling for Boxoffice Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{DomainError, PurchaseRejection};

/// Root error type for Boxoffice Core operations.
///
/// This enum wraps all possible errors that can occur when using boxoffice-core,
/// providing a unified interface for error handling.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BoxOfficeError {
    /// Errors from the domain layer (business rule violations).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (collaborator failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl BoxOfficeError {
    /// The purchase rejection carried by this error, if any.
    pub fn rejection(&self) -> Option<PurchaseRejection> {
        match self {
            Self::Domain(e) => e.rejection(),
            _ => None,
        }
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Rejected => ErrorCategory::Rejected,
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Policy => ErrorCategory::Configuration,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Rejected,
    Validation,
    Collaborator,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type BoxOfficeResult<T> = Result<T, BoxOfficeError>;
