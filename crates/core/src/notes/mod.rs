//! Ticket note threads

pub mod ports;
pub mod thread;

pub use thread::{list_notes, NoteThread};
