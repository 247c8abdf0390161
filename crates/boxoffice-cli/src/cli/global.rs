//! Flags shared by every `boxoffice` subcommand.
//!
//! Flattened into [`super::Cli`], so `boxoffice -v purchase ...` and
//! `boxoffice purchase -v ...` are equivalent.

use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Logging, output, and config-file flags.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Show more of what a purchase does.
    ///
    /// With no flag only rejections and failures are logged. `-v` adds the
    /// payment and seat reservation steps, `-vv` the aggregated ticket
    /// counts and startup details. Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log more purchase detail (-v, -vv, -vvv)",
        long_help = "Log more purchase detail to stderr:
    (none)  - Rejected purchases and collaborator failures
    -v      - Payment taken, seats reserved, purchase completed
    -vv     - Aggregated ticket counts, config and startup details
    -vvv    - Every boxoffice event

RUST_LOG overrides this flag when set."
    )]
    pub verbose: u8,

    /// Print only errors: no summary rows, no log events below ERROR.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print errors only"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// Automatically honoured when `NO_COLOR` is set in the environment
    /// (see <https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Pricing config file to read, and the file `init` writes.
    ///
    /// Defaults to `config.toml` in the platform config directory.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Pricing config file (read by purchase/quote/prices, written by init)"
    )]
    pub config: Option<PathBuf>,

    /// How results and errors are printed.
    ///
    /// `json` prints decisions and price tables as JSON on stdout, errors
    /// (with their rejection code) as JSON on stderr, and switches log
    /// events to JSON lines.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format for results, errors, and logs"
    )]
    pub output_format: OutputFormat,
}

/// How the CLI should render its output.
///
/// Also accepted as `output.format` in the config file; the flag wins
/// unless it is left at `auto`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped.
    #[default]
    Auto,
    /// Coloured summary rows.
    Human,
    /// Summary rows without ANSI codes.
    Plain,
    /// Serialised decisions and error reports.
    Json,
}
