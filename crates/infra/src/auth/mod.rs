//! Hosted auth provider adapter

pub mod session;

pub use session::RestAuthProvider;
