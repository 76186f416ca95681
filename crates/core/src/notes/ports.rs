//! Port interfaces for note persistence

use async_trait::async_trait;
use autocrm_domain::{NewNote, Note, Result, TicketId, VisibilityFilter};

/// Trait for the ticket notes table
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Notes on a ticket matching `filter`, newest first
    async fn list_notes(&self, ticket_id: &TicketId, filter: VisibilityFilter)
        -> Result<Vec<Note>>;

    /// Insert a note and return the stored row
    async fn insert_note(&self, note: &NewNote) -> Result<Note>;
}
