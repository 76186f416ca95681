//! Generic row operations against the store's REST endpoint

use std::sync::Arc;

use autocrm_domain::constants::REST_PATH;
use autocrm_domain::{AutoCrmError, Result, StoreConfig};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use super::query::Query;
use crate::errors::InfraError;
use crate::http::HttpClient;

/// Supplies the bearer token for store requests
///
/// When no session token is available the anon key is sent instead, and the
/// store's row-level policies treat the request as anonymous.
pub trait AccessTokenSource: Send + Sync {
    fn access_token(&self) -> Option<String>;
}

/// Token source for requests made without a session.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnonymousAccess;

impl AccessTokenSource for AnonymousAccess {
    fn access_token(&self) -> Option<String> {
        None
    }
}

#[derive(Debug, Deserialize)]
struct StoreErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
}

/// Client for `{url}/rest/v1/{table}`
#[derive(Clone)]
pub struct RestStore {
    http: HttpClient,
    base: Url,
    anon_key: String,
    tokens: Arc<dyn AccessTokenSource>,
}

impl RestStore {
    pub fn new(
        config: &StoreConfig,
        http: HttpClient,
        tokens: Arc<dyn AccessTokenSource>,
    ) -> Result<Self> {
        let base = parse_base(&config.url)?;
        Ok(Self { http, base, anon_key: config.anon_key.clone(), tokens })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Resolve `{base}/{prefix}/{path}`.
    pub(crate) fn endpoint(&self, prefix: &str, path: &str) -> Result<Url> {
        self.base.join(&format!("{prefix}/{path}")).map_err(|err| InfraError::from(err).into())
    }

    /// `GET` rows matching `query`.
    pub async fn select<T>(&self, table: &str, query: &Query) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(REST_PATH, table)?;
        debug!(table, params = ?query.params(), "selecting rows");
        let request = self.authorized(Method::GET, url).query(query.params());
        read_rows(self.execute(request).await?).await
    }

    /// `POST` one row and return the stored representation.
    pub async fn insert<B, R>(&self, table: &str, row: &B) -> Result<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = self.endpoint(REST_PATH, table)?;
        debug!(table, "inserting row");
        let request = self
            .authorized(Method::POST, url)
            .header("Prefer", "return=representation")
            .json(row);
        let rows: Vec<R> = read_rows(self.execute(request).await?).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| AutoCrmError::Persistence(format!("insert into {table} returned no row")))
    }

    /// `PATCH` rows matching `query` and return the updated rows.
    pub async fn update<B, R>(&self, table: &str, query: &Query, patch: &B) -> Result<Vec<R>>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = self.endpoint(REST_PATH, table)?;
        debug!(table, params = ?query.params(), "updating rows");
        let request = self
            .authorized(Method::PATCH, url)
            .query(query.params())
            .header("Prefer", "return=representation")
            .json(patch);
        read_rows(self.execute(request).await?).await
    }

    /// Request builder carrying `apikey` and the bearer token.
    fn authorized(&self, method: Method, url: Url) -> RequestBuilder {
        let bearer = self.tokens.access_token().unwrap_or_else(|| self.anon_key.clone());
        self.http.request(method, url).headers(self.auth_headers(&bearer))
    }

    fn auth_headers(&self, bearer: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(value) = HeaderValue::from_str(&self.anon_key) {
            headers.insert("apikey", value);
        }
        if let Ok(value) = HeaderValue::from_str(&format!("Bearer {bearer}")) {
            headers.insert(AUTHORIZATION, value);
        }
        headers
    }

    /// Send once, reporting transport failures as an unreachable store.
    async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        self.http.send(request).await.map_err(|err| match err {
            AutoCrmError::Network(msg) => AutoCrmError::Persistence(format!("store unreachable: {msg}")),
            other => other,
        })
    }
}

impl std::fmt::Debug for RestStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestStore").field("base", &self.base.as_str()).finish_non_exhaustive()
    }
}

/// Parse the project URL so that `join` appends rather than replaces.
pub(crate) fn parse_base(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    let normalized = if trimmed.ends_with('/') { trimmed.to_string() } else { format!("{trimmed}/") };
    Url::parse(&normalized).map_err(|err| InfraError::from(err).into())
}

/// Decode a success body, or map the failure status.
pub(crate) async fn read_rows<T>(response: Response) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|err| AutoCrmError::Persistence(format!("store unreachable: {err}")))?;

    if !status.is_success() {
        return Err(status_error(status, &body));
    }
    serde_json::from_str(&body).map_err(|err| InfraError::from(err).into())
}

/// Human-readable message from a platform error body.
pub(crate) fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<StoreErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message.or(parsed.error_description).or(parsed.msg))
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| format!("HTTP {}: {}", status.as_u16(), body.trim()))
}

/// Map a non-2xx store response.
pub(crate) fn status_error(status: StatusCode, body: &str) -> AutoCrmError {
    let message = error_message(status, body);
    if status == StatusCode::UNAUTHORIZED {
        AutoCrmError::AuthRequired(message)
    } else {
        AutoCrmError::Persistence(message)
    }
}
