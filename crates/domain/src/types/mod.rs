//! Domain data types
//!
//! Types are grouped by the remote table (or platform concept) they mirror.
//! Field names follow the store's column names so rows decode directly.

pub mod note;
pub mod profile;
pub mod session;
pub mod stats;
pub mod ticket;

pub use note::{NewNote, Note, NoteId, Visibility, VisibilityFilter};
pub use profile::{Profile, Role};
pub use session::{AuthUser, Session};
pub use stats::TicketStats;
pub use ticket::{NewTicket, Priority, Ticket, TicketId, TicketPatch, TicketStatus};
