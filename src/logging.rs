//! Console logging setup with `tracing-subscriber`.
//!
//! The library itself only emits `tracing` events. Applications that do not
//! install their own subscriber can call [`init`] once at startup.

use tracing_subscriber::EnvFilter;

use crate::config::BookStackConfig;
use crate::error::ConfigError;

/// Installs a global fmt subscriber filtered at `level`.
///
/// `RUST_LOG` overrides `level` when set. Returns `false` if a global
/// subscriber was already installed.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidLogLevel`] if `level` is not a valid filter
/// directive.
pub fn init(level: &str) -> Result<bool, ConfigError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => parse_filter(level)?,
    };

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok();
    Ok(installed)
}

/// Installs the subscriber at the configuration's `log_level`.
///
/// # Errors
///
/// See [`init`].
pub fn init_from_config(config: &BookStackConfig) -> Result<bool, ConfigError> {
    init(config.log_level())
}

fn parse_filter(level: &str) -> Result<EnvFilter, ConfigError> {
    EnvFilter::try_new(level).map_err(|e| ConfigError::InvalidLogLevel {
        level: level.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter_accepts_levels_and_directives() {
        assert!(parse_filter("debug").is_ok());
        assert!(parse_filter("bookstack_api=trace,warn").is_ok());
    }

    #[test]
    fn test_parse_filter_rejects_garbage() {
        let result = parse_filter("bookstack_api=loud");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidLogLevel { ref level, .. }) if level == "bookstack_api=loud"
        ));
    }
}
