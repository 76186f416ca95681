//! Staff dashboard session over the ticket list

use std::sync::Arc;

use autocrm_domain::{AutoCrmError, Result, Ticket, TicketId, TicketPatch, TicketStats};
use tracing::{debug, info};

use super::aggregator::aggregate_at;
use super::ports::TicketRepository;
use super::priority::sort_by_priority;
use crate::clock::Clock;
use crate::user::Viewer;

/// List view plus an optional detail view, kept in step with the store
///
/// Local state only changes after the store confirms a write.
pub struct TicketLifecycle {
    repository: Arc<dyn TicketRepository>,
    viewer: Viewer,
    tickets: Vec<Ticket>,
    selected: Option<Ticket>,
}

impl TicketLifecycle {
    /// Open a dashboard session. Only employees may manage tickets.
    pub fn new(repository: Arc<dyn TicketRepository>, viewer: Viewer) -> Result<Self> {
        viewer.require_staff()?;
        Ok(Self { repository, viewer, tickets: Vec::new(), selected: None })
    }

    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    /// Fetch every ticket and replace the list view, ordered by priority.
    pub async fn load(&mut self) -> Result<()> {
        let mut tickets = self.repository.list_tickets().await?;
        sort_by_priority(&mut tickets);
        debug!(count = tickets.len(), "loaded ticket list");

        if let Some(open_id) = self.selected.as_ref().map(|t| t.id.clone()) {
            self.selected = tickets.iter().find(|t| t.id == open_id).cloned();
        }
        self.tickets = tickets;
        Ok(())
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn stats(&self, clock: &dyn Clock) -> TicketStats {
        aggregate_at(&self.tickets, clock)
    }

    /// Open the detail view for a ticket in the list.
    pub fn select(&mut self, id: &TicketId) -> Result<&Ticket> {
        let ticket = self
            .tickets
            .iter()
            .find(|t| &t.id == id)
            .cloned()
            .ok_or_else(|| AutoCrmError::NotFound(format!("ticket {id}")))?;
        let selected: &Ticket = self.selected.insert(ticket);
        Ok(selected)
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Ticket> {
        self.selected.as_ref()
    }

    /// Persist `patch`, then reflect it into the list and detail views.
    ///
    /// On any error the local state is left untouched. The list keeps its
    /// current order even when the priority changes.
    pub async fn update_ticket(&mut self, id: &TicketId, patch: TicketPatch) -> Result<()> {
        patch.validate()?;
        self.repository.update_ticket(id, &patch).await?;

        if let Some(ticket) = self.tickets.iter_mut().find(|t| &t.id == id) {
            ticket.apply(&patch);
        }
        if let Some(selected) = self.selected.as_mut().filter(|t| &t.id == id) {
            selected.apply(&patch);
        }

        info!(
            ticket_id = %id,
            status = ?patch.status,
            priority = ?patch.priority,
            updated_by = self.viewer.user_id(),
            "ticket updated"
        );
        Ok(())
    }
}
