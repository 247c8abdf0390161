//! Implementation of the `boxoffice quote` command.

use tracing::instrument;

use crate::{cli::OrderArgs, config::AppConfig, error::CliResult, output::OutputManager};

/// Validate and price the order. Nothing is charged or reserved.
#[instrument(skip_all, fields(account = args.account))]
pub fn execute(args: OrderArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = super::ticket_service(&config)?;
    let decision = service.quote(args.account, args.tickets.as_deref())?;

    if !output.is_json() {
        output.info("Quote only: no payment taken, no seats reserved")?;
    }
    super::render_decision(&output, &decision)
}
