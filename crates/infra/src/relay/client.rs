//! Prompt relay client

use std::sync::Arc;

use async_trait::async_trait;
use autocrm_core::PromptRelay;
use autocrm_domain::constants::FUNCTIONS_PATH;
use autocrm_domain::{AutoCrmError, Config, Result};
use reqwest::Method;
use tracing::{debug, info};
use url::Url;

use super::types::{RelayError, RelayErrorBody, RelayRequest, RelayResponse};
use crate::errors::InfraError;
use crate::http::HttpClient;
use crate::store::rest::parse_base;
use crate::store::AccessTokenSource;

/// Client for the prompt relay function
pub struct PromptRelayClient {
    http_client: HttpClient,
    endpoint: Url,
    anon_key: String,
    tokens: Arc<dyn AccessTokenSource>,
}

impl PromptRelayClient {
    /// Create a relay client from the application config.
    ///
    /// `relay.url` wins over the function name when both are set.
    pub fn new(
        config: &Config,
        http_client: HttpClient,
        tokens: Arc<dyn AccessTokenSource>,
    ) -> Result<Self> {
        let endpoint = match &config.relay.url {
            Some(url) => Url::parse(url).map_err(InfraError::from)?,
            None => parse_base(&config.store.url)?
                .join(&format!("{FUNCTIONS_PATH}/{}", config.relay.function))
                .map_err(InfraError::from)?,
        };

        Ok(Self { http_client, endpoint, anon_key: config.store.anon_key.clone(), tokens })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Send a prompt and return the generated text.
    pub async fn generate_text(&self, prompt: &str) -> std::result::Result<String, RelayError> {
        let bearer = self.tokens.access_token().unwrap_or_else(|| self.anon_key.clone());
        let request = self
            .http_client
            .request(Method::POST, self.endpoint.clone())
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {bearer}"))
            .json(&RelayRequest { prompt });

        let response = self.http_client.send(request).await.map_err(|err| match err {
            AutoCrmError::Network(msg) => RelayError::Network(msg),
            other => RelayError::Network(format!("HTTP error: {other}")),
        })?;

        let status = response.status();
        debug!(status = status.as_u16(), "received relay response");

        if !status.is_success() {
            return Err(Self::handle_error_status(status.as_u16(), response).await);
        }

        let body: RelayResponse = response
            .json()
            .await
            .map_err(|e| RelayError::InvalidResponse(format!("failed to parse response: {e}")))?;
        let text = body
            .response
            .ok_or_else(|| RelayError::InvalidResponse("response field missing".into()))?;

        info!(chars = text.len(), "relay produced text");
        Ok(text)
    }

    async fn handle_error_status(status: u16, response: reqwest::Response) -> RelayError {
        let raw = response.text().await.unwrap_or_default();
        let parsed = serde_json::from_str::<RelayErrorBody>(&raw).ok().and_then(|body| body.error);
        let message = match parsed {
            Some(error) => error,
            None if raw.trim().is_empty() => format!("HTTP {status}"),
            None => raw,
        };

        match status {
            401 => RelayError::Authentication(message),
            _ => RelayError::Api { status, message },
        }
    }
}

#[async_trait]
impl PromptRelay for PromptRelayClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        Ok(self.generate_text(prompt).await?)
    }
}
