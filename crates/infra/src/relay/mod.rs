//! Prompt relay integration for reply drafting
//!
//! The relay is a hosted function that forwards one prompt to a language
//! model and returns the generated text.
//!
//! # Wire contract
//!
//! - Request: `POST {endpoint}` with `{"prompt": "..."}`
//! - Success: `200 {"response": "..."}`
//! - Failure: any non-2xx with `{"error": "..."}`
//!
//! The endpoint is `{store.url}/functions/v1/{relay.function}` unless
//! `relay.url` overrides it.

pub mod client;
pub mod types;

pub use client::PromptRelayClient;
pub use types::RelayError;
