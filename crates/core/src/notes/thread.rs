//! Newest-first note thread for one ticket

use std::sync::Arc;

use autocrm_domain::{
    AutoCrmError, NewNote, Note, Result, TicketId, Visibility, VisibilityFilter,
};
use tracing::{debug, info};

use super::ports::NoteRepository;
use crate::user::Viewer;

/// Load a snapshot of a ticket's notes, newest first.
///
/// Customers may only read public notes.
pub async fn list_notes(
    repository: &dyn NoteRepository,
    viewer: Option<&Viewer>,
    ticket_id: &TicketId,
    filter: VisibilityFilter,
) -> Result<Vec<Note>> {
    authorize_filter(viewer, filter)?;

    let mut notes = repository.list_notes(ticket_id, filter).await?;
    notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    debug!(ticket_id = %ticket_id, ?filter, count = notes.len(), "loaded notes");
    Ok(notes)
}

fn authorize_filter(viewer: Option<&Viewer>, filter: VisibilityFilter) -> Result<()> {
    let viewer =
        viewer.ok_or_else(|| AutoCrmError::AuthRequired("sign in to read notes".into()))?;
    if !viewer.is_staff() && filter != VisibilityFilter::Public {
        return Err(AutoCrmError::Forbidden("customers may only read public notes".into()));
    }
    Ok(())
}

/// In-memory thread for a ticket detail view
pub struct NoteThread {
    repository: Arc<dyn NoteRepository>,
    ticket_id: TicketId,
    filter: VisibilityFilter,
    notes: Vec<Note>,
}

impl NoteThread {
    pub fn new(
        repository: Arc<dyn NoteRepository>,
        ticket_id: TicketId,
        filter: VisibilityFilter,
    ) -> Self {
        Self { repository, ticket_id, filter, notes: Vec::new() }
    }

    pub fn ticket_id(&self) -> &TicketId {
        &self.ticket_id
    }

    pub fn filter(&self) -> VisibilityFilter {
        self.filter
    }

    /// Notes currently held, newest first
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Replace the thread with a fresh snapshot from the store.
    pub async fn load(&mut self, viewer: Option<&Viewer>) -> Result<&[Note]> {
        self.notes =
            list_notes(self.repository.as_ref(), viewer, &self.ticket_id, self.filter).await?;
        Ok(&self.notes)
    }

    /// Add a note to the ticket.
    ///
    /// The body is trimmed before it is stored. Customers may only post
    /// public notes, and only into a thread filtered to public notes. The
    /// stored note is prepended when this thread's filter would show it.
    pub async fn add_note(
        &mut self,
        viewer: Option<&Viewer>,
        body: &str,
        visibility: Visibility,
    ) -> Result<Note> {
        let body = body.trim();
        if body.is_empty() {
            return Err(AutoCrmError::Validation("note must not be empty".into()));
        }
        let viewer =
            viewer.ok_or_else(|| AutoCrmError::AuthRequired("sign in to add a note".into()))?;
        if visibility == Visibility::Internal && !viewer.is_staff() {
            return Err(AutoCrmError::Forbidden("customers may only add public notes".into()));
        }
        authorize_filter(Some(viewer), self.filter)?;

        let new_note = NewNote {
            ticket_id: self.ticket_id.clone(),
            body: body.to_string(),
            visibility,
            created_by: viewer.user_id().to_string(),
        };
        let note = self.repository.insert_note(&new_note).await?;
        info!(
            ticket_id = %self.ticket_id,
            note_id = %note.id,
            visibility = %note.visibility,
            "note added"
        );

        if self.filter.matches(note.visibility) {
            self.notes.insert(0, note.clone());
        }
        Ok(note)
    }
}
