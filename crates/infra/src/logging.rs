//! Tracing subscriber setup

use autocrm_domain::{AutoCrmError, LoggingConfig, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `config.level`. Fails if a subscriber is
/// already installed or the filter directive is invalid.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(config, rust_log.as_deref())?;

    let registry = tracing_subscriber::registry().with(filter);
    let installed = if config.json {
        registry.with(fmt::layer().json().with_current_span(false)).try_init()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()
    };

    installed.map_err(|e| AutoCrmError::Config(format!("failed to install tracing subscriber: {e}")))
}

/// Filter from `RUST_LOG` when set and non-blank, else from the configured level.
pub fn build_filter(config: &LoggingConfig, rust_log: Option<&str>) -> Result<EnvFilter> {
    let directive = rust_log
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(config.level.as_str());

    EnvFilter::try_new(directive)
        .map_err(|e| AutoCrmError::Config(format!("invalid log filter {directive:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_wins_over_configured_level() {
        let config = LoggingConfig { level: "warn".into(), json: false };
        let filter = build_filter(&config, Some("autocrm_core=debug")).unwrap();
        assert_eq!(filter.to_string(), "autocrm_core=debug");
    }

    #[test]
    fn blank_rust_log_falls_back_to_config() {
        let config = LoggingConfig { level: "warn".into(), json: false };
        assert_eq!(build_filter(&config, Some("  ")).unwrap().to_string(), "warn");
        assert_eq!(build_filter(&config, None).unwrap().to_string(), "warn");
    }

    #[test]
    fn invalid_directive_is_a_config_error() {
        let config = LoggingConfig { level: "autocrm=loud".into(), json: false };
        assert!(matches!(build_filter(&config, None), Err(AutoCrmError::Config(_))));
    }
}
