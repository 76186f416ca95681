//! # AutoCRM Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - REST adapters for the hosted store and auth endpoints
//! - The prompt relay client
//! - Configuration loading and tracing setup
//! - The application context that wires everything together
//!
//! ## Architecture
//! - Implements traits defined in `autocrm-core`
//! - Contains all "impure" code (network, environment, files)

pub mod auth;
pub mod config;
pub mod context;
pub mod errors;
pub mod http;
pub mod logging;
pub mod relay;
pub mod store;

// Re-export commonly used items
pub use auth::RestAuthProvider;
pub use context::AppContext;
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use logging::init_tracing;
pub use relay::{PromptRelayClient, RelayError};
pub use store::{
    AccessTokenSource, AnonymousAccess, Query, RestNoteRepository, RestProfileRepository,
    RestStore, RestTicketRepository,
};
