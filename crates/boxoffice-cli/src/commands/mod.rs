//! Command handlers. Each translates parsed arguments into core calls and
//! renders the result; no business logic lives here.

pub mod completions;
pub mod config;
pub mod init;
pub mod prices;
pub mod purchase;
pub mod quote;

use boxoffice_adapters::{LoggingPaymentGateway, LoggingSeatBooking};
use boxoffice_core::{
    application::TicketService,
    domain::{PurchaseDecision, PurchaseValidator},
    error::BoxOfficeError,
};

use crate::{config::AppConfig, error::CliResult, output::OutputManager};

/// Ticket service priced from `config`, wired to the logging adapters.
fn ticket_service(config: &AppConfig) -> CliResult<TicketService> {
    let validator =
        PurchaseValidator::with_policy(config.policy()?).map_err(BoxOfficeError::from)?;

    Ok(TicketService::with_validator(
        validator,
        Box::new(LoggingPaymentGateway::new()),
        Box::new(LoggingSeatBooking::new()),
    ))
}

/// Render a purchase decision in the resolved output format.
fn render_decision(output: &OutputManager, decision: &PurchaseDecision) -> CliResult<()> {
    if output.is_json() {
        return output.json(decision);
    }

    output.row("Account", decision.account_id)?;
    output.row("Adults", decision.adults)?;
    output.row("Children", decision.children)?;
    output.row("Infants", decision.infants)?;
    output.row("Total cost", decision.total_cost)?;
    output.row("Seats", decision.total_seats)?;
    Ok(())
}
