//! Session state and the auth provider port

pub mod hub;
pub mod ports;

pub use hub::{SessionHub, SessionSubscription};
