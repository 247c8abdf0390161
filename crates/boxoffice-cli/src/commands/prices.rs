//! `boxoffice prices`: show the active price table.

use serde::Serialize;

use boxoffice_core::domain::{TicketPolicy, TicketType};

use crate::{config::AppConfig, error::CliResult, output::OutputManager};

#[derive(Debug, Serialize)]
struct PriceRow {
    ticket_type: TicketType,
    price: u32,
    occupies_seat: bool,
}

#[derive(Debug, Serialize)]
struct PriceTable {
    prices: Vec<PriceRow>,
    max_tickets: u32,
}

impl From<&TicketPolicy> for PriceTable {
    fn from(policy: &TicketPolicy) -> Self {
        Self {
            prices: TicketType::ALL
                .iter()
                .map(|&ticket_type| PriceRow {
                    ticket_type,
                    price: policy.price_of(ticket_type),
                    occupies_seat: ticket_type.occupies_seat(),
                })
                .collect(),
            max_tickets: policy.max_tickets,
        }
    }
}

pub fn execute(config: AppConfig, output: OutputManager) -> CliResult<()> {
    let policy = config.policy()?;
    let table = PriceTable::from(&policy);

    if output.is_json() {
        return output.json(&table);
    }

    output.header("Ticket Prices:")?;
    for row in &table.prices {
        let seat = if row.occupies_seat { "" } else { " (no seat)" };
        output.row(row.ticket_type.as_str(), format!("{}{seat}", row.price))?;
    }
    output.row("Max/purchase", table.max_tickets)?;
    Ok(())
}
