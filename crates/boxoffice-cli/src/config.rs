//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the resulting
//! [`TicketPolicy`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. Environment variables (`BOXOFFICE_PRICING__ADULT_PRICE=30`, ...)
//! 2. Config file (`--config FILE`, else the platform config dir)
//! 3. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use boxoffice_core::{domain::TicketPolicy, error::BoxOfficeResult};

use crate::cli::OutputFormat;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Ticket prices and the per-purchase maximum.
    pub pricing: PricingConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub adult_price: u32,
    pub child_price: u32,
    pub infant_price: u32,
    pub max_tickets: u32,
}

impl Default for PricingConfig {
    fn default() -> Self {
        let policy = TicketPolicy::default();
        Self {
            adult_price: policy.adult_price,
            child_price: policy.child_price,
            infant_price: policy.infant_price,
            max_tickets: policy.max_tickets,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: OutputFormat,
}

impl AppConfig {
    /// Load configuration by layering defaults, the config file, and the
    /// environment.
    ///
    /// A file passed via `--config` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to encode default configuration")?;

        let file = match config_file {
            Some(path) => File::from(path.as_path())
                .format(FileFormat::Toml)
                .required(true),
            None => File::from(Self::config_path().as_path())
                .format(FileFormat::Toml)
                .required(false),
        };

        Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(
                Environment::with_prefix("BOXOFFICE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|config| config.try_deserialize::<Self>())
            .with_context(|| match config_file {
                Some(path) => format!("Failed to load configuration from '{}'", path.display()),
                None => "Failed to load configuration".to_owned(),
            })
    }

    /// The configured prices as a validated [`TicketPolicy`].
    pub fn policy(&self) -> BoxOfficeResult<TicketPolicy> {
        let policy = TicketPolicy {
            adult_price: self.pricing.adult_price,
            child_price: self.pricing.child_price,
            infant_price: self.pricing.infant_price,
            max_tickets: self.pricing.max_tickets,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.boxoffice.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "boxoffice", "boxoffice")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".boxoffice.toml"))
    }

    /// The file `init` writes and `config path` reports: the `--config`
    /// file when one was given, else [`Self::config_path`].
    pub fn resolve_path(config_file: Option<&PathBuf>) -> PathBuf {
        config_file.cloned().unwrap_or_else(Self::config_path)
    }

    /// Render the configuration as TOML, as written by `boxoffice init`.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
