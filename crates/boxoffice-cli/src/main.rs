//! # Boxoffice CLI
//!
//! Validates, prices, and books venue ticket purchases.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (file + env + defaults).
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the appropriate command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                              |
//! |------|--------------------------------------|
//! |  0   | Success                              |
//! |  1   | Internal / system error              |
//! |  2   | Rejected purchase / user input error |
//! |  3   | Payment or reservation failed        |
//! |  4   | Configuration error                  |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands, ConfigCommands, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Missing .env is fine.
    let _ = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version arrive here too; clap picks the stream
            // and exit code.
            e.exit();
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    let reporting = Reporting {
        verbose: cli.global.verbose > 0,
        json: cli.global.output_format == OutputFormat::Json,
        no_color: cli.global.no_color,
    };

    // ── 3. Load configuration ─────────────────────────────────────────────
    let loaded = if needs_config(&cli.command) {
        AppConfig::load(cli.global.config.as_ref())
    } else {
        debug!("Skipping configuration load");
        Ok(AppConfig::default())
    };
    let config = match loaded {
        Ok(cfg) => cfg,
        Err(e) => {
            return handle_error(
                CliError::ConfigError {
                    message: format!("{e:#}"),
                    source: Some(e.into()),
                },
                reporting,
            );
        }
    };

    let reporting = Reporting {
        json: reporting.json
            || (cli.global.output_format == OutputFormat::Auto
                && config.output.format == OutputFormat::Json),
        no_color: reporting.no_color || config.output.no_color,
        ..reporting
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global, &config);

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match run(cli, config, output) {
        Ok(()) => {
            info!("Boxoffice completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, reporting),
    }
}

/// `false` for the commands that must work while the config file is broken.
fn needs_config(command: &Commands) -> bool {
    !matches!(
        command,
        Commands::Init(_) | Commands::Completions(_) | Commands::Config(ConfigCommands::Path)
    )
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let config_file = cli.global.config;
    match cli.command {
        Commands::Purchase(cmd) => commands::purchase::execute(cmd, config, output),
        Commands::Quote(cmd) => commands::quote::execute(cmd, config, output),
        Commands::Prices => commands::prices::execute(config, output),
        Commands::Init(cmd) => commands::init::execute(cmd, config_file, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
        Commands::Config(cmd) => commands::config::execute(cmd, config, config_file, output),
    }
}

/// How a failure should be shown to the user.
#[derive(Debug, Clone, Copy)]
struct Reporting {
    verbose: bool,
    json: bool,
    no_color: bool,
}

/// Translate a `CliError` into a user message and an appropriate exit code.
fn handle_error(err: CliError, reporting: Reporting) -> ExitCode {
    err.log();

    // stderr, so the message survives a redirected stdout.
    let msg = if reporting.json {
        match serde_json::to_string_pretty(&err.report()) {
            Ok(json) => format!("{json}\n"),
            Err(_) => err.format_plain(reporting.verbose),
        }
    } else if !reporting.no_color && std::io::stderr().is_terminal() {
        err.format_colored(reporting.verbose)
    } else {
        err.format_plain(reporting.verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
