//! Domain entities - purchase-scoped data built from caller input.

pub mod purchase_decision;
pub mod ticket_counts;
pub mod ticket_request;

pub use purchase_decision::PurchaseDecision;
pub use ticket_counts::TicketCounts;
pub use ticket_request::TicketTypeRequest;
