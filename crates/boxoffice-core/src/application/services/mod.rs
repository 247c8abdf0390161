//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "purchase tickets".

pub mod ticket_service;

pub use ticket_service::TicketService;
