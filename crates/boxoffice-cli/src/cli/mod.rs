//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

use boxoffice_core::domain::TicketTypeRequest;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "boxoffice",
    bin_name = "boxoffice",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f3ab} Venue ticket purchases",
    long_about = "Boxoffice validates ticket purchases, prices them, takes \
                  payment, and reserves seats.",
    after_help = "EXAMPLES:\n\
        \x20 boxoffice purchase --account 2 --ticket adult=5 --ticket child=3\n\
        \x20 boxoffice quote    --account 2 --ticket adult=1 --ticket infant=1\n\
        \x20 boxoffice prices\n\
        \x20 boxoffice completions bash > /usr/share/bash-completion/completions/boxoffice",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Purchase tickets: validate, pay, and reserve seats.
    #[command(
        visible_alias = "buy",
        about = "Purchase tickets",
        after_help = "EXAMPLES:\n\
            \x20 boxoffice purchase --account 2 --ticket adult=5 --ticket child=3\n\
            \x20 boxoffice purchase -a 7 -t adult=2 -t infant=1"
    )]
    Purchase(OrderArgs),

    /// Price a purchase without paying or reserving.
    #[command(
        about = "Validate and price a purchase (dry run)",
        after_help = "EXAMPLES:\n\
            \x20 boxoffice quote --account 2 --ticket adult=10 --ticket child=10"
    )]
    Quote(OrderArgs),

    /// Show the active prices and purchase limit.
    #[command(about = "Show ticket prices")]
    Prices,

    /// Initialise a Boxoffice configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 boxoffice init          # default location\n\
            \x20 boxoffice init --force  # overwrite existing config"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 boxoffice completions bash > ~/.local/share/bash-completion/completions/boxoffice\n\
            \x20 boxoffice completions zsh  > ~/.zfunc/_boxoffice\n\
            \x20 boxoffice completions fish > ~/.config/fish/completions/boxoffice.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Boxoffice configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 boxoffice config get pricing.adult_price\n\
            \x20 boxoffice config list"
    )]
    Config(ConfigCommands),
}

// ── purchase / quote ─────────────────────────────────────────────────────────

/// Arguments shared by `boxoffice purchase` and `boxoffice quote`.
#[derive(Debug, Args)]
pub struct OrderArgs {
    /// Purchasing account id.
    #[arg(
        short = 'a',
        long = "account",
        value_name = "ID",
        allow_negative_numbers = true,
        help = "Account id of the purchaser"
    )]
    pub account: i64,

    /// Ticket requests.  Omitting every `--ticket` means no request list was
    /// supplied at all, which is rejected.
    #[arg(
        short = 't',
        long = "ticket",
        value_name = "TYPE=QTY",
        help = "Ticket request, e.g. adult=2 (repeatable; duplicates are summed)"
    )]
    pub tickets: Option<Vec<TicketTypeRequest>>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `boxoffice init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `boxoffice completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `boxoffice config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `pricing.max_tickets`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
