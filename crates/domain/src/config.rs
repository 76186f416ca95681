//! Configuration structures
//!
//! Loaded by `autocrm-infra::config` from the environment or a JSON/TOML file.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LOG_LEVEL, DEFAULT_RELAY_FUNCTION};

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub store: StoreConfig,
    #[serde(default)]
    pub relay: RelayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Hosted data/auth platform connection
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Project base URL, e.g. `https://abc.supabase.co`
    pub url: String,
    /// Public (anon) API key sent with every request
    pub anon_key: String,
    /// Optional per-request timeout. Requests are unbounded when unset.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("url", &self.url)
            .field("anon_key", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Prompt-relay function location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Function name under `{store.url}/functions/v1/`
    #[serde(default = "default_relay_function")]
    pub function: String,
    /// Full endpoint override; takes precedence over `function`
    #[serde(default)]
    pub url: Option<String>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self { function: default_relay_function(), url: None }
    }
}

/// Tracing output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), json: false }
    }
}

fn default_relay_function() -> String {
    DEFAULT_RELAY_FUNCTION.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_sections_use_defaults() {
        let config: Config = serde_json::from_str(
            r#"{ "store": { "url": "https://example.supabase.co", "anon_key": "anon" } }"#,
        )
        .unwrap();

        assert_eq!(config.relay.function, "generateResponse");
        assert_eq!(config.relay.url, None);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
        assert_eq!(config.store.timeout_secs, None);
    }

    #[test]
    fn debug_redacts_anon_key() {
        let store = StoreConfig {
            url: "https://example.supabase.co".into(),
            anon_key: "super-secret".into(),
            timeout_secs: None,
        };

        assert!(!format!("{store:?}").contains("super-secret"));
    }
}
