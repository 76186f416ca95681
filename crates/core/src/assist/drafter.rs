//! Reply suggestions for staff

use std::fmt::Write as _;
use std::sync::Arc;

use autocrm_domain::{AutoCrmError, Note, Result, Ticket, Visibility};
use tracing::{debug, info};

use super::ports::PromptRelay;
use crate::user::Viewer;

/// Builds a prompt from a ticket and its public thread and relays it
pub struct ReplyDrafter {
    relay: Arc<dyn PromptRelay>,
}

impl ReplyDrafter {
    pub fn new(relay: Arc<dyn PromptRelay>) -> Self {
        Self { relay }
    }

    /// Ask the relay for a suggested customer reply.
    ///
    /// Internal notes never leave the staff view, so only public notes are
    /// included in the prompt.
    pub async fn draft_reply(&self, viewer: &Viewer, ticket: &Ticket, notes: &[Note]) -> Result<String> {
        viewer.require_staff()?;

        let prompt = build_prompt(ticket, notes);
        debug!(ticket_id = %ticket.id, prompt_len = prompt.len(), "requesting reply draft");

        let reply = self.relay.generate(&prompt).await?;
        let reply = reply.trim();
        if reply.is_empty() {
            return Err(AutoCrmError::Network("prompt relay returned an empty response".into()));
        }

        info!(ticket_id = %ticket.id, drafted_by = viewer.user_id(), "reply drafted");
        Ok(reply.to_string())
    }
}

fn build_prompt(ticket: &Ticket, notes: &[Note]) -> String {
    let mut prompt = String::from(
        "Draft a short, friendly reply to the customer for this support ticket.\n\n",
    );
    let _ = writeln!(prompt, "Title: {}", ticket.title);
    let _ = writeln!(prompt, "Description: {}", ticket.description);
    let _ = writeln!(prompt, "Status: {}", ticket.status.label());
    let _ = writeln!(prompt, "Priority: {}", ticket.priority);

    let mut public = notes.iter().filter(|note| note.visibility == Visibility::Public).peekable();
    if public.peek().is_some() {
        prompt.push_str("\nConversation so far (newest first):\n");
        for note in public {
            let _ = writeln!(prompt, "- {}", note.body);
        }
    }
    prompt
}
