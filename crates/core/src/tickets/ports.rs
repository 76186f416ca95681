//! Port interfaces for ticket persistence

use async_trait::async_trait;
use autocrm_domain::{NewTicket, Result, Ticket, TicketId, TicketPatch};

/// Trait for the tickets table
///
/// Row visibility is decided by the store; each implementation acts on behalf
/// of whoever holds the current session.
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// Every visible ticket, newest first
    async fn list_tickets(&self) -> Result<Vec<Ticket>>;

    async fn get_ticket(&self, id: &TicketId) -> Result<Option<Ticket>>;

    /// Insert a ticket with status `new` owned by `owner`
    async fn create_ticket(&self, ticket: &NewTicket, owner: &str) -> Result<Ticket>;

    /// Apply `patch` to the ticket with `id`
    ///
    /// Returns `NotFound` when no row matched.
    async fn update_ticket(&self, id: &TicketId, patch: &TicketPatch) -> Result<()>;
}
