//! # AutoCRM Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Ticket aggregation, priority ordering and the lifecycle controller
//! - The note thread
//! - Viewer authorization and session subscriptions
//! - Port interfaces (traits) for the remote store, auth provider and relay
//!
//! ## Architecture Principles
//! - Only depends on `autocrm-domain`
//! - No HTTP or platform code
//! - All external collaborators via traits
//! - Pure, testable business logic

pub mod assist;
pub mod auth;
pub mod clock;
pub mod notes;
pub mod tickets;
pub mod user;

// Re-export specific items to avoid ambiguity
pub use assist::ports::PromptRelay;
pub use assist::ReplyDrafter;
pub use auth::ports::{require_session, AuthProvider};
pub use auth::{SessionHub, SessionSubscription};
pub use clock::{Clock, FixedClock, SystemClock};
pub use notes::ports::NoteRepository;
pub use notes::{list_notes, NoteThread};
pub use tickets::aggregator::{aggregate, aggregate_at};
pub use tickets::ports::TicketRepository;
pub use tickets::priority::{compare_priority, priority_rank, sort_by_priority, sorted_by_priority};
pub use tickets::{TicketLifecycle, TicketService};
pub use user::ports::ProfileRepository;
pub use user::{ProfileService, Viewer};
