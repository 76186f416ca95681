//! Customer-facing ticket operations

use std::sync::Arc;

use autocrm_domain::{AutoCrmError, NewTicket, Result, Ticket, TicketId};
use tracing::{debug, info};

use super::ports::TicketRepository;
use crate::user::Viewer;

/// Ticket submission and lookup for any signed-in user
pub struct TicketService {
    repository: Arc<dyn TicketRepository>,
}

impl TicketService {
    pub fn new(repository: Arc<dyn TicketRepository>) -> Self {
        Self { repository }
    }

    /// Create a ticket owned by the viewer.
    pub async fn submit_ticket(&self, viewer: Option<&Viewer>, ticket: NewTicket) -> Result<Ticket> {
        let viewer = viewer
            .ok_or_else(|| AutoCrmError::AuthRequired("sign in to submit a ticket".into()))?;
        let ticket = ticket.normalized()?;

        let created = self.repository.create_ticket(&ticket, viewer.user_id()).await?;
        info!(ticket_id = %created.id, owner = viewer.user_id(), "ticket submitted");
        Ok(created)
    }

    /// Tickets the store lets this viewer see, newest first.
    ///
    /// Row-level policy on the store decides which rows come back; this
    /// only requires that someone is signed in.
    pub async fn list_tickets(&self, viewer: Option<&Viewer>) -> Result<Vec<Ticket>> {
        let viewer = signed_in(viewer)?;
        let tickets = self.repository.list_tickets().await?;
        debug!(user_id = viewer.user_id(), count = tickets.len(), "listed tickets");
        Ok(tickets)
    }

    pub async fn get_ticket(&self, viewer: Option<&Viewer>, id: &TicketId) -> Result<Ticket> {
        signed_in(viewer)?;
        self.repository
            .get_ticket(id)
            .await?
            .ok_or_else(|| AutoCrmError::NotFound(format!("ticket {id}")))
    }
}

fn signed_in(viewer: Option<&Viewer>) -> Result<&Viewer> {
    viewer.ok_or_else(|| AutoCrmError::AuthRequired("sign in to view tickets".into()))
}
