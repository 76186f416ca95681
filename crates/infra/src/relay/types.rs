//! Relay request/response types

use autocrm_domain::AutoCrmError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by the relay client
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RelayError {
    /// Connection failed, timed out, or the body could not be read
    #[error("Network error: {0}")]
    Network(String),

    /// The relay answered with a failure status
    #[error("Relay error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The caller's token was rejected
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Response body doesn't match the wire contract
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl From<RelayError> for AutoCrmError {
    fn from(value: RelayError) -> Self {
        match value {
            RelayError::Authentication(message) => AutoCrmError::AuthRequired(message),
            RelayError::Api { message, .. } => AutoCrmError::Network(message),
            RelayError::Network(message) | RelayError::InvalidResponse(message) => {
                AutoCrmError::Network(message)
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RelayRequest<'a> {
    pub prompt: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RelayResponse {
    #[serde(default)]
    pub response: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RelayErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
