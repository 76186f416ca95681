//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. Reads a `.env` file into the process environment, if one exists
//! 2. Attempts to load from environment variables
//! 3. If incomplete, falls back to loading from file
//! 4. Probes multiple paths for config files (JSON or TOML)
//!
//! ## Environment Variables
//! - `AUTOCRM_STORE_URL`: Hosted project URL (required)
//! - `AUTOCRM_STORE_ANON_KEY`: Public API key (required)
//! - `AUTOCRM_STORE_TIMEOUT_SECS`: Per-request timeout in seconds
//! - `AUTOCRM_RELAY_URL`: Full prompt-relay endpoint
//! - `AUTOCRM_RELAY_FUNCTION`: Prompt-relay function name
//! - `AUTOCRM_LOG_LEVEL`: Default tracing filter
//! - `AUTOCRM_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./autocrm.{json,toml}` and `./config.{json,toml}` (current working directory)
//! 2. The same names in the parent and grandparent directories
//! 3. The same names relative to the executable location

use std::path::{Path, PathBuf};

use autocrm_domain::{AutoCrmError, Config, LoggingConfig, RelayConfig, Result, StoreConfig};

const CONFIG_FILE_NAMES: [&str; 4] = ["autocrm.json", "autocrm.toml", "config.json", "config.toml"];

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables (after reading `.env`).
/// If any required variables are missing, falls back to a config file.
///
/// # Errors
/// Returns `AutoCrmError::Config` if configuration cannot be loaded from
/// either source or is invalid.
pub fn load() -> Result<Config> {
    if let Ok(path) = dotenvy::dotenv() {
        tracing::debug!(path = %path.display(), "Loaded .env file");
    }

    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = %e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `AutoCrmError::Config` if a required variable is missing or an
/// optional one has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let url = env_var("AUTOCRM_STORE_URL")?;
    let anon_key = env_var("AUTOCRM_STORE_ANON_KEY")?;
    let timeout_secs = env_optional("AUTOCRM_STORE_TIMEOUT_SECS")
        .map(|s| {
            s.parse::<u64>()
                .map_err(|e| AutoCrmError::Config(format!("Invalid store timeout: {e}")))
        })
        .transpose()?;

    let relay_defaults = RelayConfig::default();
    let relay = RelayConfig {
        function: env_optional("AUTOCRM_RELAY_FUNCTION").unwrap_or(relay_defaults.function),
        url: env_optional("AUTOCRM_RELAY_URL"),
    };

    let logging_defaults = LoggingConfig::default();
    let logging = LoggingConfig {
        level: env_optional("AUTOCRM_LOG_LEVEL").unwrap_or(logging_defaults.level),
        json: env_bool("AUTOCRM_LOG_JSON", logging_defaults.json)?,
    };

    validate(Config { store: StoreConfig { url, anon_key, timeout_secs }, relay, logging })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations via
/// [`probe_config_paths`]. The format is detected by file extension.
///
/// # Errors
/// Returns `AutoCrmError::Config` if the file is missing, unreadable or
/// invalid.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(AutoCrmError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            AutoCrmError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| AutoCrmError::Config(format!("Failed to read config file: {e}")))?;

    validate(parse_config(&contents, &config_path)?)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| AutoCrmError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| AutoCrmError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(AutoCrmError::Config(format!("Unsupported config format: {extension}"))),
    }
}

fn validate(config: Config) -> Result<Config> {
    if config.store.url.trim().is_empty() {
        return Err(AutoCrmError::Config("store.url must not be empty".into()));
    }
    if config.store.anon_key.trim().is_empty() {
        return Err(AutoCrmError::Config("store.anon_key must not be empty".into()));
    }
    if config.store.timeout_secs == Some(0) {
        return Err(AutoCrmError::Config("store.timeout_secs must be at least 1".into()));
    }
    if config.relay.url.is_none() && config.relay.function.trim().is_empty() {
        return Err(AutoCrmError::Config("relay.function must not be empty".into()));
    }
    Ok(config)
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.extend([cwd.clone(), cwd.join(".."), cwd.join("../..")]);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.extend([exe_dir.to_path_buf(), exe_dir.join(".."), exe_dir.join("../..")]);
        }
    }

    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

fn env_var(key: &str) -> Result<String> {
    env_optional(key).ok_or_else(|| {
        AutoCrmError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Set, non-blank environment variable
fn env_optional(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive).
/// Unset or blank yields `default`.
fn env_bool(key: &str, default: bool) -> Result<bool> {
    let Some(value) = env_optional(key) else {
        return Ok(default);
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AutoCrmError::Config(format!("Invalid boolean for {key}: {value:?}"))),
    }
}
