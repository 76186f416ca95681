//! Mock repository implementations for testing
//!
//! In-memory stand-ins for the store ports. Each mock counts writes so tests
//! can assert that rejected operations never reached the store.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use autocrm_core::{NoteRepository, TicketRepository};
use autocrm_domain::{
    AutoCrmError, NewNote, NewTicket, Note, NoteId, Result as DomainResult, Ticket, TicketId,
    TicketPatch, TicketStatus, VisibilityFilter,
};
use chrono::Utc;
use parking_lot::Mutex;
use uuid::Uuid;

/// In-memory mock for `TicketRepository`.
///
/// Holds rows in store order (newest first). `fail_next_write` makes the next
/// write fail with the given error.
#[derive(Default)]
pub struct InMemoryTicketRepository {
    tickets: Mutex<Vec<Ticket>>,
    writes: AtomicUsize,
    fail_next_write: Mutex<Option<AutoCrmError>>,
}

impl InMemoryTicketRepository {
    pub fn new(tickets: Vec<Ticket>) -> Self {
        Self { tickets: Mutex::new(tickets), ..Default::default() }
    }

    pub fn fail_next_write(&self, error: AutoCrmError) {
        *self.fail_next_write.lock() = Some(error);
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn stored(&self, id: &str) -> Option<Ticket> {
        self.tickets.lock().iter().find(|t| t.id.as_str() == id).cloned()
    }

    fn take_failure(&self) -> DomainResult<()> {
        match self.fail_next_write.lock().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl TicketRepository for InMemoryTicketRepository {
    async fn list_tickets(&self) -> DomainResult<Vec<Ticket>> {
        Ok(self.tickets.lock().clone())
    }

    async fn get_ticket(&self, id: &TicketId) -> DomainResult<Option<Ticket>> {
        Ok(self.tickets.lock().iter().find(|t| &t.id == id).cloned())
    }

    async fn create_ticket(&self, ticket: &NewTicket, owner: &str) -> DomainResult<Ticket> {
        self.take_failure()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        let created = Ticket {
            id: TicketId::new(Uuid::new_v4().to_string()),
            title: ticket.title.clone(),
            description: ticket.description.clone(),
            status: TicketStatus::New,
            priority: ticket.priority,
            user_id: owner.to_string(),
            created_at: Utc::now(),
        };
        self.tickets.lock().insert(0, created.clone());
        Ok(created)
    }

    async fn update_ticket(&self, id: &TicketId, patch: &TicketPatch) -> DomainResult<()> {
        self.take_failure()?;
        let mut tickets = self.tickets.lock();
        let ticket = tickets
            .iter_mut()
            .find(|t| &t.id == id)
            .ok_or_else(|| AutoCrmError::NotFound(format!("ticket {id}")))?;
        ticket.apply(patch);
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// In-memory mock for `NoteRepository`.
#[derive(Default)]
pub struct InMemoryNoteRepository {
    notes: Mutex<Vec<Note>>,
    inserts: AtomicUsize,
}

impl InMemoryNoteRepository {
    pub fn new(notes: Vec<Note>) -> Self {
        Self { notes: Mutex::new(notes), ..Default::default() }
    }

    pub fn inserts(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }

    pub fn stored(&self) -> Vec<Note> {
        self.notes.lock().clone()
    }
}

#[async_trait]
impl NoteRepository for InMemoryNoteRepository {
    async fn list_notes(
        &self,
        ticket_id: &TicketId,
        filter: VisibilityFilter,
    ) -> DomainResult<Vec<Note>> {
        Ok(self
            .notes
            .lock()
            .iter()
            .filter(|note| &note.ticket_id == ticket_id && filter.matches(note.visibility))
            .cloned()
            .collect())
    }

    async fn insert_note(&self, note: &NewNote) -> DomainResult<Note> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        let stored = Note {
            id: NoteId::new(Uuid::new_v4().to_string()),
            ticket_id: note.ticket_id.clone(),
            body: note.body.clone(),
            visibility: note.visibility,
            created_by: note.created_by.clone(),
            created_at: Utc::now(),
        };
        self.notes.lock().push(stored.clone());
        Ok(stored)
    }
}
