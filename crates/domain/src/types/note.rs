//! Ticket note types
//!
//! Notes are immutable once created and ordered newest first. Rows decode
//! from the `ticket_notes` table, whose text column is named `note`.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::ticket::TicketId;
use crate::impl_domain_enum_conversions;

/// Store-assigned note identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(transparent)]
pub struct NoteId(String);

impl NoteId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Who may read a note
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Shown to the customer who owns the ticket
    Public,
    /// Staff only. Rows stored without a visibility decode to this.
    #[default]
    Internal,
}

impl_domain_enum_conversions!(Visibility {
    Public => "public",
    Internal => "internal",
});

/// Visibility selection for listing a thread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum VisibilityFilter {
    Public,
    Internal,
    All,
}

impl VisibilityFilter {
    /// The single visibility this filter pins, if any.
    pub const fn visibility(self) -> Option<Visibility> {
        match self {
            Self::Public => Some(Visibility::Public),
            Self::Internal => Some(Visibility::Internal),
            Self::All => None,
        }
    }

    pub fn matches(self, visibility: Visibility) -> bool {
        self.visibility().map_or(true, |pinned| pinned == visibility)
    }
}

/// A note attached to a ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Note {
    pub id: NoteId,
    pub ticket_id: TicketId,
    #[serde(rename = "note")]
    pub body: String,
    #[serde(default)]
    pub visibility: Visibility,
    /// Author (auth user id)
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a note; id and timestamp are assigned by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewNote {
    pub ticket_id: TicketId,
    #[serde(rename = "note")]
    pub body: String,
    pub visibility: Visibility,
    pub created_by: String,
}
