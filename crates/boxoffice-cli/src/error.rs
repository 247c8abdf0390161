//! Error handling for the Boxoffice CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use serde::Serialize;
use thiserror::Error;

use boxoffice_core::error::BoxOfficeError;

pub use boxoffice_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input that clap could not catch.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Core errors ────────────────────────────────────────────────────────
    /// An error propagated from `boxoffice-core`, including purchase
    /// rejections and collaborator failures.
    #[error("{0}")]
    Core(#[from] BoxOfficeError),

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON output could not be produced.
    #[error("Failed to render JSON output")]
    Render(#[from] serde_json::Error),
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message } => vec![
                format!("Check your input: {message}"),
                "Use --help for usage information".into(),
            ],

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {message}"),
                format!(
                    "Check your config file at {}",
                    crate::config::AppConfig::config_path().display()
                ),
                "Use 'boxoffice init --force' to restore the defaults".into(),
            ],

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions".into(),
                "Ensure the parent directory exists".into(),
            ],

            Self::Render(_) => vec!["Retry with --output-format plain".into()],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Rejected | CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::Collaborator => ErrorCategory::Collaborator,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } | Self::Render(_) => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Collaborator  |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::Collaborator => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {self}\n"));

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Machine-readable form printed for `--output-format json`.
    pub fn report(&self) -> ErrorReport {
        let reason = match self {
            Self::Core(core) => core.rejection().map(|r| r.code()),
            _ => None,
        };
        ErrorReport {
            error: self.to_string(),
            reason,
            exit_code: self.exit_code(),
            suggestions: self.suggestions(),
        }
    }

    /// Log the error using tracing.
    ///
    /// User errors stay at debug: the core already warned about rejections
    /// and the formatted error follows on stderr.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::debug!(exit_code = self.exit_code(), "{self}"),
            _ => tracing::error!(exit_code = self.exit_code(), "{self}"),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error, including rejected purchases.
    UserError,
    /// Payment or seat reservation failed.
    Collaborator,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

/// JSON shape of a failed command.
#[derive(Debug, Serialize)]
pub struct ErrorReport {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'static str>,
    pub exit_code: u8,
    pub suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    use boxoffice_core::{
        application::ApplicationError,
        domain::{AccountId, DomainError, PurchaseRejection},
    };

    fn rejected(reason: PurchaseRejection) -> CliError {
        CliError::Core(DomainError::rejected(reason, 25).into())
    }

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn no_adult_suggestions_mention_adult() {
        let err = rejected(PurchaseRejection::NoAdult);
        assert!(err.suggestions().iter().any(|s| s.contains("adult")));
    }

    #[test]
    fn config_error_suggests_init() {
        let err = CliError::ConfigError {
            message: "bad".into(),
            source: None,
        };
        assert!(err.suggestions().iter().any(|s| s.contains("init")));
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_rejection() {
        assert_eq!(rejected(PurchaseRejection::TooManyTickets).exit_code(), 2);
    }

    #[test]
    fn exit_code_user_error() {
        let err = CliError::InvalidInput {
            message: "x".into(),
        };
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn exit_code_collaborator() {
        let err = CliError::Core(
            ApplicationError::PaymentDeclined {
                account: AccountId::parse(1).unwrap(),
                reason: "declined".into(),
            }
            .into(),
        );
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn exit_code_configuration() {
        let err = CliError::ConfigError {
            message: "x".into(),
            source: None,
        };
        assert_eq!(err.exit_code(), 4);

        let policy = CliError::Core(
            DomainError::InvalidPolicy {
                field: "max_tickets",
                reason: "must be at least 1".into(),
            }
            .into(),
        );
        assert_eq!(policy.exit_code(), 4);
    }

    #[test]
    fn exit_code_internal() {
        let err = CliError::IoError {
            message: "x".into(),
            source: io::Error::other("e"),
        };
        assert_eq!(err.exit_code(), 1);
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_header() {
        let s = rejected(PurchaseRejection::NoAdult).format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_cause() {
        let err = CliError::IoError {
            message: "writing config".into(),
            source: io::Error::other("disk full"),
        };
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: disk full"));
        assert!(!s.contains("--verbose"));
    }

    #[test]
    fn report_carries_rejection_code() {
        let report = rejected(PurchaseRejection::NegativeCount).report();
        assert_eq!(report.reason, Some("negativeCount"));
        assert_eq!(report.exit_code, 2);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["reason"], "negativeCount");
    }

    #[test]
    fn report_omits_reason_for_other_errors() {
        let report = CliError::InvalidInput {
            message: "x".into(),
        }
        .report();
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("reason").is_none());
    }
}
