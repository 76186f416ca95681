//! Ticket types
//!
//! A ticket is a customer support request tracked through a status/priority
//! lifecycle. Rows decode directly from the `tickets` table.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use crate::constants::SHORT_ID_LEN;
use crate::errors::{AutoCrmError, Result};
use crate::impl_domain_enum_conversions;

/// Opaque, store-assigned ticket identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(transparent)]
pub struct TicketId(String);

impl TicketId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Leading characters used in human-facing references.
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(SHORT_ID_LEN) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TicketId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TicketId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Ticket lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    New,
    InProgress,
    Resolved,
    Closed,
}

impl_domain_enum_conversions!(TicketStatus {
    New => "new",
    InProgress => "in_progress",
    Resolved => "resolved",
    Closed => "closed",
});

impl TicketStatus {
    /// `new` and `in_progress` tickets still need staff attention.
    pub const fn is_open(self) -> bool {
        matches!(self, Self::New | Self::InProgress)
    }

    /// Badge text (`in_progress` renders as `in progress`).
    pub const fn label(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::InProgress => "in progress",
            Self::Resolved => "resolved",
            Self::Closed => "closed",
        }
    }
}

/// Ticket priority
///
/// Values outside the enumeration can only originate from the store; they
/// decode to [`Priority::Unrecognized`] and are never accepted as input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    #[serde(other)]
    Unrecognized,
}

impl Priority {
    /// Priorities a caller may assign, highest first.
    pub const RECOGNIZED: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Unrecognized => "unrecognized",
        }
    }

    pub const fn is_recognized(self) -> bool {
        !matches!(self, Self::Unrecognized)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = AutoCrmError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::RECOGNIZED
            .into_iter()
            .find(|priority| priority.as_str() == normalized)
            .ok_or_else(|| AutoCrmError::Validation(format!("unrecognized Priority value: {s:?}")))
    }
}

/// A support ticket as stored remotely
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct Ticket {
    pub id: TicketId,
    pub title: String,
    pub description: String,
    pub status: TicketStatus,
    pub priority: Priority,
    /// Owning customer (auth user id)
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}

impl Ticket {
    pub fn short_id(&self) -> &str {
        self.id.short()
    }

    /// Merge the fields present in `patch` into this ticket.
    pub fn apply(&mut self, patch: &TicketPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
    }
}

/// Partial update to a ticket's staff-editable fields
///
/// Unknown fields are rejected at deserialization time, so a patch built from
/// raw JSON can only ever carry `status` and/or `priority`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
#[serde(deny_unknown_fields)]
pub struct TicketPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TicketStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl TicketPatch {
    pub const fn status(status: TicketStatus) -> Self {
        Self { status: Some(status), priority: None }
    }

    pub const fn priority(priority: Priority) -> Self {
        Self { status: None, priority: Some(priority) }
    }

    pub const fn with_status(mut self, status: TicketStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Build a patch from raw form values.
    pub fn parse(status: Option<&str>, priority: Option<&str>) -> Result<Self> {
        let patch = Self {
            status: status.map(str::parse).transpose()?,
            priority: priority.map(str::parse).transpose()?,
        };
        patch.validate()?;
        Ok(patch)
    }

    /// Build a patch from an untyped JSON object.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        let patch: Self = serde_json::from_value(value)
            .map_err(|err| AutoCrmError::Validation(format!("invalid ticket update: {err}")))?;
        patch.validate()?;
        Ok(patch)
    }

    pub const fn is_empty(&self) -> bool {
        self.status.is_none() && self.priority.is_none()
    }

    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(AutoCrmError::Validation("ticket update contains no fields".into()));
        }
        if let Some(priority) = self.priority {
            if !priority.is_recognized() {
                return Err(AutoCrmError::Validation(
                    "ticket update carries an unrecognized priority".into(),
                ));
            }
        }
        Ok(())
    }
}

/// Customer submission for a new ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct NewTicket {
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

impl NewTicket {
    pub fn new(title: impl Into<String>, description: impl Into<String>, priority: Priority) -> Self {
        Self { title: title.into(), description: description.into(), priority }
    }

    /// Trim text fields and reject blank or unrecognized input.
    pub fn normalized(self) -> Result<Self> {
        let title = self.title.trim().to_string();
        let description = self.description.trim().to_string();

        if title.is_empty() {
            return Err(AutoCrmError::Validation("ticket title must not be empty".into()));
        }
        if description.is_empty() {
            return Err(AutoCrmError::Validation("ticket description must not be empty".into()));
        }
        if !self.priority.is_recognized() {
            return Err(AutoCrmError::Validation("ticket priority is not recognized".into()));
        }

        Ok(Self { title, description, priority: self.priority })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn row() -> serde_json::Value {
        json!({
            "id": "9f8e7d6c-5b4a-3210-fedc-ba9876543210",
            "created_at": "2024-01-01T09:30:00+00:00",
            "title": "Cannot log in",
            "description": "Password reset email never arrives",
            "status": "in_progress",
            "priority": "high",
            "user_id": "user-1"
        })
    }

    #[test]
    fn decodes_store_row() {
        let ticket: Ticket = serde_json::from_value(row()).unwrap();

        assert_eq!(ticket.status, TicketStatus::InProgress);
        assert_eq!(ticket.priority, Priority::High);
        assert_eq!(ticket.short_id(), "9f8e7d6c");
    }

    #[test]
    fn unknown_priority_decodes_as_unrecognized() {
        let mut value = row();
        value["priority"] = json!("urgent");

        let ticket: Ticket = serde_json::from_value(value).unwrap();
        assert_eq!(ticket.priority, Priority::Unrecognized);
    }

    #[test]
    fn unknown_status_fails_to_decode() {
        let mut value = row();
        value["status"] = json!("escalated");

        assert!(serde_json::from_value::<Ticket>(value).is_err());
    }

    #[test]
    fn short_id_handles_short_ids() {
        assert_eq!(TicketId::new("abc").short(), "abc");
    }

    #[test]
    fn priority_parse_rejects_unrecognized() {
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert!(matches!("unrecognized".parse::<Priority>(), Err(AutoCrmError::Validation(_))));
    }

    #[test]
    fn open_statuses() {
        let open: Vec<_> = TicketStatus::ALL.iter().filter(|s| s.is_open()).collect();
        assert_eq!(open, vec![&TicketStatus::New, &TicketStatus::InProgress]);
        assert_eq!(TicketStatus::InProgress.label(), "in progress");
    }

    #[test]
    fn patch_serializes_only_present_fields() {
        let patch = TicketPatch::status(TicketStatus::Resolved);
        assert_eq!(serde_json::to_value(patch).unwrap(), json!({ "status": "resolved" }));
    }

    #[test]
    fn patch_from_json_rejects_unknown_fields() {
        let err = TicketPatch::from_json(json!({ "status": "closed", "title": "x" })).unwrap_err();
        assert!(matches!(err, AutoCrmError::Validation(_)));
    }

    #[test]
    fn patch_from_json_rejects_unrecognized_priority() {
        let err = TicketPatch::from_json(json!({ "priority": "urgent" })).unwrap_err();
        assert!(matches!(err, AutoCrmError::Validation(_)));
    }

    #[test]
    fn empty_patch_is_invalid() {
        assert!(matches!(TicketPatch::default().validate(), Err(AutoCrmError::Validation(_))));
        assert!(matches!(TicketPatch::parse(None, None), Err(AutoCrmError::Validation(_))));
    }

    #[test]
    fn parse_builds_combined_patch() {
        let patch = TicketPatch::parse(Some("resolved"), Some("low")).unwrap();
        assert_eq!(
            patch,
            TicketPatch::status(TicketStatus::Resolved).with_priority(Priority::Low)
        );
    }

    #[test]
    fn apply_merges_present_fields() {
        let mut ticket: Ticket = serde_json::from_value(row()).unwrap();
        ticket.apply(&TicketPatch::priority(Priority::Low));

        assert_eq!(ticket.priority, Priority::Low);
        assert_eq!(ticket.status, TicketStatus::InProgress);
    }

    #[test]
    fn new_ticket_is_trimmed_and_checked() {
        let ticket = NewTicket::new("  Printer jam ", " Tray 2 ", Priority::Medium).normalized().unwrap();
        assert_eq!(ticket.title, "Printer jam");
        assert_eq!(ticket.description, "Tray 2");

        let blank = NewTicket::new("   ", "desc", Priority::Low).normalized();
        assert!(matches!(blank, Err(AutoCrmError::Validation(_))));
    }
}
