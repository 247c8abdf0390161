//! Implementation of the `boxoffice purchase` command.

use tracing::instrument;

use crate::{cli::OrderArgs, config::AppConfig, error::CliResult, output::OutputManager};

/// Validate the order, take payment, then reserve seats.
#[instrument(skip_all, fields(account = args.account))]
pub fn execute(args: OrderArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = super::ticket_service(&config)?;
    let decision = service.purchase_tickets(args.account, args.tickets.as_deref())?;

    if !output.is_json() {
        output.success(&format!(
            "Purchased {} ticket(s) for account {}",
            decision.total_tickets(),
            decision.account_id,
        ))?;
    }
    super::render_decision(&output, &decision)
}
