//! Hosted store adapters (PostgREST dialect)

pub mod query;
pub mod repositories;
pub mod rest;

pub use query::Query;
pub use repositories::{RestNoteRepository, RestProfileRepository, RestTicketRepository};
pub use rest::{AccessTokenSource, AnonymousAccess, RestStore};
