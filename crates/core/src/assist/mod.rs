//! AI-drafted replies through the prompt relay

pub mod drafter;
pub mod ports;

pub use drafter::ReplyDrafter;
