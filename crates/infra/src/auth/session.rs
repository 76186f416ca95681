//! Password sign-in and sign-out against `{url}/auth/v1`

use async_trait::async_trait;
use autocrm_core::{AuthProvider, SessionHub, SessionSubscription};
use autocrm_domain::constants::AUTH_PATH;
use autocrm_domain::{AuthUser, AutoCrmError, Result, Session, StoreConfig};
use chrono::{DateTime, Duration, Utc};
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, StatusCode};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info, warn};
use url::Url;

use crate::errors::InfraError;
use crate::http::HttpClient;
use crate::store::rest::{error_message, parse_base};
use crate::store::AccessTokenSource;

/// Token grant returned by the auth endpoint
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    /// Unix seconds
    #[serde(default)]
    expires_at: Option<i64>,
    /// Seconds from now; used when `expires_at` is absent
    #[serde(default)]
    expires_in: Option<i64>,
    user: AuthUser,
}

impl TokenResponse {
    fn into_session(self, now: DateTime<Utc>) -> Session {
        let expires_at = self
            .expires_at
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .or_else(|| self.expires_in.map(|secs| now + Duration::seconds(secs)));

        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: self.user,
        }
    }
}

/// Auth provider backed by the hosted platform
///
/// Owns the [`SessionHub`]; sign-in and sign-out publish to it, and store
/// requests read their bearer token from it.
#[derive(Debug, Clone)]
pub struct RestAuthProvider {
    http: HttpClient,
    base: Url,
    anon_key: String,
    hub: SessionHub,
}

impl RestAuthProvider {
    pub fn new(config: &StoreConfig, http: HttpClient) -> Result<Self> {
        Ok(Self {
            http,
            base: parse_base(&config.url)?,
            anon_key: config.anon_key.clone(),
            hub: SessionHub::default(),
        })
    }

    pub fn hub(&self) -> &SessionHub {
        &self.hub
    }

    /// Exchange email and password for a session.
    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session> {
        let mut url = self.endpoint("token")?;
        url.query_pairs_mut().append_pair("grant_type", "password");

        let request = self
            .http
            .request(Method::POST, url)
            .header("apikey", &self.anon_key)
            .json(&json!({ "email": email, "password": password }));
        let response = self.send(request).await?;

        let status = response.status();
        let body = response.text().await.map_err(|err| InfraError::from(err).0)?;
        if !status.is_success() {
            debug!(%status, "password sign-in rejected");
            return Err(auth_error(status, &body));
        }

        let grant: TokenResponse = serde_json::from_str(&body)
            .map_err(|err| AutoCrmError::AuthRequired(format!("malformed token response: {err}")))?;
        let session = grant.into_session(Utc::now());
        info!(user_id = session.user_id(), "signed in");

        self.hub.publish(Some(session.clone()));
        Ok(session)
    }

    /// Adopt a previously issued session, e.g. one persisted by the caller.
    pub fn restore(&self, session: Session) {
        debug!(user_id = session.user_id(), "restoring session");
        self.hub.publish(Some(session));
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base.join(&format!("{AUTH_PATH}/{path}")).map_err(|err| InfraError::from(err).into())
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response> {
        self.http.send(request).await.map_err(|err| match err {
            AutoCrmError::Network(msg) => {
                AutoCrmError::Persistence(format!("auth service unreachable: {msg}"))
            }
            other => other,
        })
    }
}

#[async_trait]
impl AuthProvider for RestAuthProvider {
    async fn get_session(&self) -> Result<Option<Session>> {
        Ok(self.hub.current())
    }

    fn subscribe(&self) -> SessionSubscription {
        self.hub.subscribe()
    }

    /// Revoke the session remotely and clear it locally.
    ///
    /// The local session is cleared even when revocation fails. An already
    /// invalid token counts as signed out.
    async fn sign_out(&self) -> Result<()> {
        let Some(session) = self.hub.current() else {
            return Ok(());
        };
        self.hub.publish(None);

        let request = self
            .http
            .request(Method::POST, self.endpoint("logout")?)
            .header("apikey", &self.anon_key)
            .header(AUTHORIZATION, format!("Bearer {}", session.access_token));
        let response = self.send(request).await?;

        let status = response.status();
        if status.is_success() || status == StatusCode::UNAUTHORIZED || status == StatusCode::NOT_FOUND {
            info!(user_id = session.user_id(), "signed out");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        warn!(%status, "remote sign-out failed");
        Err(AutoCrmError::Persistence(error_message(status, &body)))
    }
}

impl AccessTokenSource for RestAuthProvider {
    fn access_token(&self) -> Option<String> {
        self.hub.current().map(|session| session.access_token)
    }
}

fn auth_error(status: StatusCode, body: &str) -> AutoCrmError {
    let message = error_message(status, body);
    if status.is_client_error() {
        AutoCrmError::AuthRequired(message)
    } else {
        AutoCrmError::Persistence(message)
    }
}
