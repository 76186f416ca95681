//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for AutoCRM
///
/// Every variant is scoped to the single user-initiated action that produced
/// it; none of them is fatal to the process.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum AutoCrmError {
    /// Malformed input (blank note body, unrecognized status value, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Operation attempted without a valid session
    #[error("Authentication required: {0}")]
    AuthRequired(String),

    /// Authenticated, but the caller's role does not allow the operation
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Remote store rejected the request or was unreachable
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Referenced ticket/profile absent
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure talking to a non-store collaborator (the prompt relay)
    #[error("Network error: {0}")]
    Network(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AutoCrmError {
    /// Stable label suitable for structured log fields.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation",
            Self::AuthRequired(_) => "auth_required",
            Self::Forbidden(_) => "forbidden",
            Self::Persistence(_) => "persistence",
            Self::NotFound(_) => "not_found",
            Self::Config(_) => "config",
            Self::Network(_) => "network",
            Self::Internal(_) => "internal",
        }
    }
}

/// Result type alias for AutoCRM operations
pub type Result<T> = std::result::Result<T, AutoCrmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_tag() {
        let err = AutoCrmError::Persistence("permission denied for table tickets".into());
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["type"], "Persistence");
        assert_eq!(json["message"], "permission denied for table tickets");
    }

    #[test]
    fn labels_are_snake_case() {
        assert_eq!(AutoCrmError::AuthRequired(String::new()).label(), "auth_required");
        assert_eq!(AutoCrmError::NotFound(String::new()).label(), "not_found");
    }
}
