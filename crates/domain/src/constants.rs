//! Application constants
//!
//! Centralized location for domain-level constants shared by the core and the
//! store adapters.

// Remote tables
pub const TICKETS_TABLE: &str = "tickets";
pub const NOTES_TABLE: &str = "ticket_notes";
pub const PROFILES_TABLE: &str = "profiles";

// Hosted platform path prefixes
pub const REST_PATH: &str = "rest/v1";
pub const AUTH_PATH: &str = "auth/v1";
pub const FUNCTIONS_PATH: &str = "functions/v1";

/// Name of the prompt-relay function when none is configured.
pub const DEFAULT_RELAY_FUNCTION: &str = "generateResponse";

/// Number of leading id characters shown in ticket references (`#1a2b3c4d`).
pub const SHORT_ID_LEN: usize = 8;

pub const DEFAULT_LOG_LEVEL: &str = "info";
