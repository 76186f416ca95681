//! # AutoCRM Domain
//!
//! Business domain types and models for the AutoCRM support core.
//!
//! This crate contains:
//! - Ticket, note, profile and session data types
//! - The domain error taxonomy and `Result` alias
//! - Configuration structures
//! - Domain constants (table names, display widths)
//!
//! ## Architecture
//! - No dependencies on other AutoCRM crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
