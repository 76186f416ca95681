//! Ticket statistics, ordering, and the staff lifecycle controller

pub mod aggregator;
pub mod lifecycle;
pub mod ports;
pub mod priority;
pub mod service;

pub use lifecycle::TicketLifecycle;
pub use service::TicketService;
