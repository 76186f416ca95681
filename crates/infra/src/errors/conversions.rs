//! Conversions from external infrastructure errors into domain errors.

use autocrm_domain::AutoCrmError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use url::ParseError as UrlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub AutoCrmError);

impl From<InfraError> for AutoCrmError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<AutoCrmError> for InfraError {
    fn from(value: AutoCrmError) -> Self {
        InfraError(value)
    }
}

trait IntoAutoCrmError {
    fn into_autocrm(self) -> AutoCrmError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → AutoCrmError */
/* -------------------------------------------------------------------------- */

impl IntoAutoCrmError for HttpError {
    fn into_autocrm(self) -> AutoCrmError {
        if self.is_timeout() {
            return AutoCrmError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return AutoCrmError::Network(format!("HTTP connection failure: {self}"));
        }

        if self.is_decode() {
            return AutoCrmError::Network(format!("malformed HTTP response body: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 => AutoCrmError::AuthRequired(message),
                403 => AutoCrmError::Forbidden(message),
                404 => AutoCrmError::NotFound(message),
                _ => AutoCrmError::Network(message),
            };
        }

        AutoCrmError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_autocrm())
    }
}

/* -------------------------------------------------------------------------- */
/* url::ParseError → AutoCrmError */
/* -------------------------------------------------------------------------- */

impl IntoAutoCrmError for UrlError {
    fn into_autocrm(self) -> AutoCrmError {
        AutoCrmError::Config(format!("invalid URL: {self}"))
    }
}

impl From<UrlError> for InfraError {
    fn from(value: UrlError) -> Self {
        InfraError(value.into_autocrm())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → AutoCrmError */
/* -------------------------------------------------------------------------- */

impl IntoAutoCrmError for JsonError {
    fn into_autocrm(self) -> AutoCrmError {
        AutoCrmError::Persistence(format!("failed to decode store payload: {self}"))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_autocrm())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
