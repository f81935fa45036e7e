//! Configuration types for the BookStack API client.
//!
//! This module provides the configuration used to construct a
//! [`RestClient`](crate::RestClient): the instance URL, the API credentials,
//! and transport settings.
//!
//! # Overview
//!
//! - [`BookStackConfig`]: The configuration struct holding all client settings
//! - [`BookStackConfigBuilder`]: A builder for constructing [`BookStackConfig`] instances
//! - [`BaseUrl`]: A validated instance URL
//! - [`TokenId`] / [`TokenSecret`]: Validated API token halves
//! - [`Credentials`]: Token pair or bearer key
//!
//! # Example
//!
//! ```rust
//! use bookstack_api::{BookStackConfig, BaseUrl, Credentials, TokenId, TokenSecret};
//!
//! let config = BookStackConfig::builder()
//!     .base_url(BaseUrl::new("https://docs.example.com").unwrap())
//!     .credentials(Credentials::token(
//!         TokenId::new("token-id").unwrap(),
//!         TokenSecret::new("token-secret").unwrap(),
//!     ))
//!     .build()
//!     .unwrap();
//! ```
//!
//! # Environment
//!
//! [`BookStackConfig::from_env`] reads:
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `BOOKSTACK_URL` | Instance URL | required |
//! | `BOOKSTACK_TOKEN_ID` | API token ID | required unless `BOOKSTACK_API_KEY` |
//! | `BOOKSTACK_TOKEN_SECRET` | API token secret | required unless `BOOKSTACK_API_KEY` |
//! | `BOOKSTACK_API_KEY` | Bearer key | none |
//! | `BOOKSTACK_VERIFY_SSL` | TLS verification | `true` |
//! | `BOOKSTACK_TIMEOUT` | Request timeout (seconds) | `30` |
//! | `LOG_LEVEL` | Log filter for [`crate::logging::init`] | `info` |

mod newtypes;

pub use newtypes::{BaseUrl, Credentials, TokenId, TokenSecret};

use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default log level when `LOG_LEVEL` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Configuration for the BookStack API client.
///
/// # Thread Safety
///
/// `BookStackConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct BookStackConfig {
    base_url: BaseUrl,
    credentials: Credentials,
    timeout: Duration,
    verify_ssl: bool,
    rate_limit_tries: u32,
    user_agent_prefix: Option<String>,
    log_level: String,
}

impl BookStackConfig {
    /// Creates a new builder for constructing a `BookStackConfig`.
    #[must_use]
    pub fn builder() -> BookStackConfigBuilder {
        BookStackConfigBuilder::new()
    }

    /// Loads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] listing every missing or invalid setting.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads a `.env` file into the process environment, then reads it.
    ///
    /// Variables already present in the environment take precedence over the
    /// file's values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EnvFile`] if the file cannot be read or parsed,
    /// or [`ConfigError::Invalid`] if the resulting settings are invalid.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        dotenvy::from_path(path).map_err(|e| ConfigError::EnvFile {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_env()
    }

    /// Builds configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] listing every missing or invalid setting.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let mut errors = Vec::new();

        let base_url = match get("BOOKSTACK_URL") {
            Some(url) => BaseUrl::new(url)
                .map_err(|e| errors.push(format!("bookstack.url: {e}")))
                .ok(),
            None => {
                errors.push("bookstack.url: BOOKSTACK_URL not set".to_string());
                None
            }
        };

        let token_id = get("BOOKSTACK_TOKEN_ID");
        let token_secret = get("BOOKSTACK_TOKEN_SECRET");
        let credentials = match (token_id, token_secret, get("BOOKSTACK_API_KEY")) {
            (Some(id), Some(secret), _) => TokenId::new(id)
                .and_then(|id| TokenSecret::new(secret).map(|s| Credentials::token(id, s)))
                .map_err(|e| errors.push(format!("bookstack.credentials: {e}")))
                .ok(),
            (None, None, Some(key)) => Credentials::bearer(key)
                .map_err(|e| errors.push(format!("bookstack.api_key: {e}")))
                .ok(),
            (id, secret, _) => {
                if id.is_none() {
                    errors.push("bookstack.token_id: BOOKSTACK_TOKEN_ID not set".to_string());
                }
                if secret.is_none() {
                    errors.push(
                        "bookstack.token_secret: BOOKSTACK_TOKEN_SECRET not set".to_string(),
                    );
                }
                None
            }
        };

        let verify_ssl = match get("BOOKSTACK_VERIFY_SSL") {
            Some(raw) => parse_bool(&raw).unwrap_or_else(|| {
                errors.push(format!(
                    "bookstack.verify_ssl: expected true/false, got '{raw}'"
                ));
                true
            }),
            None => true,
        };

        let timeout = match get("BOOKSTACK_TIMEOUT") {
            Some(raw) => raw.parse::<u64>().map(Duration::from_secs).unwrap_or_else(|_| {
                errors.push(format!(
                    "bookstack.timeout: expected whole seconds, got '{raw}'"
                ));
                DEFAULT_TIMEOUT
            }),
            None => DEFAULT_TIMEOUT,
        };

        let log_level = get("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        match (base_url, credentials) {
            (Some(base_url), Some(credentials)) if errors.is_empty() => Ok(Self {
                base_url,
                credentials,
                timeout,
                verify_ssl,
                rate_limit_tries: 1,
                user_agent_prefix: None,
                log_level,
            }),
            _ => Err(ConfigError::Invalid { errors }),
        }
    }

    /// Returns the instance URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the API credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns whether TLS certificates are verified.
    #[must_use]
    pub const fn verify_ssl(&self) -> bool {
        self.verify_ssl
    }

    /// Returns how many times a rate-limited (429) request is attempted.
    ///
    /// `1` means rate limiting is reported to the caller immediately.
    #[must_use]
    pub const fn rate_limit_tries(&self) -> u32 {
        self.rate_limit_tries
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the configured log filter.
    #[must_use]
    pub fn log_level(&self) -> &str {
        &self.log_level
    }
}

// Verify BookStackConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BookStackConfig>();
};

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Builder for constructing [`BookStackConfig`] instances.
///
/// Required fields are `base_url` and `credentials`.
///
/// # Defaults
///
/// - `timeout`: 30 seconds
/// - `verify_ssl`: `true`
/// - `rate_limit_tries`: 1 (no automatic retry)
/// - `user_agent_prefix`: `None`
/// - `log_level`: `info`
#[derive(Debug, Default)]
pub struct BookStackConfigBuilder {
    base_url: Option<BaseUrl>,
    credentials: Option<Credentials>,
    timeout: Option<Duration>,
    verify_ssl: Option<bool>,
    rate_limit_tries: Option<u32>,
    user_agent_prefix: Option<String>,
    log_level: Option<String>,
}

impl BookStackConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the instance URL (required).
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the API credentials (required).
    #[must_use]
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets whether TLS certificates are verified.
    ///
    /// Disable only for instances with self-signed certificates.
    #[must_use]
    pub const fn verify_ssl(mut self, verify: bool) -> Self {
        self.verify_ssl = Some(verify);
        self
    }

    /// Sets how many times a rate-limited request is attempted.
    #[must_use]
    pub const fn rate_limit_tries(mut self, tries: u32) -> Self {
        self.rate_limit_tries = Some(tries);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the log filter directive.
    #[must_use]
    pub fn log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Builds the [`BookStackConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` or
    /// `credentials` are not set.
    pub fn build(self) -> Result<BookStackConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;
        let credentials = self.credentials.ok_or(ConfigError::MissingRequiredField {
            field: "credentials",
        })?;

        Ok(BookStackConfig {
            base_url,
            credentials,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            verify_ssl: self.verify_ssl.unwrap_or(true),
            rate_limit_tries: self.rate_limit_tries.unwrap_or(1).max(1),
            user_agent_prefix: self.user_agent_prefix,
            log_level: self
                .log_level
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn test_credentials() -> Credentials {
        Credentials::token(
            TokenId::new("id").unwrap(),
            TokenSecret::new("secret").unwrap(),
        )
    }

    #[test]
    fn test_builder_requires_base_url() {
        let result = BookStackConfigBuilder::new()
            .credentials(test_credentials())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "base_url" })
        ));
    }

    #[test]
    fn test_builder_requires_credentials() {
        let result = BookStackConfigBuilder::new()
            .base_url(BaseUrl::new("https://docs.example.com").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "credentials"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = BookStackConfig::builder()
            .base_url(BaseUrl::new("https://docs.example.com").unwrap())
            .credentials(test_credentials())
            .build()
            .unwrap();

        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        assert!(config.verify_ssl());
        assert_eq!(config.rate_limit_tries(), 1);
        assert!(config.user_agent_prefix().is_none());
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn test_builder_clamps_zero_rate_limit_tries() {
        let config = BookStackConfig::builder()
            .base_url(BaseUrl::new("https://docs.example.com").unwrap())
            .credentials(test_credentials())
            .rate_limit_tries(0)
            .build()
            .unwrap();

        assert_eq!(config.rate_limit_tries(), 1);
    }

    #[test]
    fn test_from_lookup_success() {
        let config = BookStackConfig::from_lookup(lookup(&[
            ("BOOKSTACK_URL", "https://docs.example.com/"),
            ("BOOKSTACK_TOKEN_ID", "test_token_id"),
            ("BOOKSTACK_TOKEN_SECRET", "test_token_secret"),
        ]))
        .unwrap();

        assert_eq!(config.base_url().as_ref(), "https://docs.example.com");
        assert_eq!(
            config.credentials().authorization_header(),
            "Token test_token_id:test_token_secret"
        );
        assert!(config.verify_ssl());
    }

    #[test]
    fn test_from_lookup_reports_all_missing_fields() {
        let result = BookStackConfig::from_lookup(lookup(&[]));

        match result {
            Err(ConfigError::Invalid { errors }) => {
                assert_eq!(errors.len(), 3);
                assert!(errors[0].contains("BOOKSTACK_URL not set"));
                assert!(errors[1].contains("BOOKSTACK_TOKEN_ID not set"));
                assert!(errors[2].contains("BOOKSTACK_TOKEN_SECRET not set"));
            }
            other => panic!("Expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_from_lookup_missing_token_secret() {
        let result = BookStackConfig::from_lookup(lookup(&[
            ("BOOKSTACK_URL", "https://docs.example.com"),
            ("BOOKSTACK_TOKEN_ID", "test_token_id"),
        ]));

        match result {
            Err(ConfigError::Invalid { errors }) => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].contains("BOOKSTACK_TOKEN_SECRET"));
            }
            other => panic!("Expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_from_lookup_treats_empty_values_as_unset() {
        let result = BookStackConfig::from_lookup(lookup(&[
            ("BOOKSTACK_URL", ""),
            ("BOOKSTACK_TOKEN_ID", "id"),
            ("BOOKSTACK_TOKEN_SECRET", "secret"),
        ]));

        assert!(matches!(result, Err(ConfigError::Invalid { errors }) if errors.len() == 1));
    }

    #[test]
    fn test_from_lookup_accepts_bearer_key() {
        let config = BookStackConfig::from_lookup(lookup(&[
            ("BOOKSTACK_URL", "https://docs.example.com"),
            ("BOOKSTACK_API_KEY", "bearer-key"),
        ]))
        .unwrap();

        assert_eq!(
            config.credentials().authorization_header(),
            "Bearer bearer-key"
        );
    }

    #[test]
    fn test_from_lookup_verify_ssl_and_timeout() {
        let config = BookStackConfig::from_lookup(lookup(&[
            ("BOOKSTACK_URL", "https://docs.example.com"),
            ("BOOKSTACK_TOKEN_ID", "id"),
            ("BOOKSTACK_TOKEN_SECRET", "secret"),
            ("BOOKSTACK_VERIFY_SSL", "false"),
            ("BOOKSTACK_TIMEOUT", "5"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert!(!config.verify_ssl());
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn test_from_lookup_rejects_bad_verify_ssl() {
        let result = BookStackConfig::from_lookup(lookup(&[
            ("BOOKSTACK_URL", "https://docs.example.com"),
            ("BOOKSTACK_TOKEN_ID", "id"),
            ("BOOKSTACK_TOKEN_SECRET", "secret"),
            ("BOOKSTACK_VERIFY_SSL", "maybe"),
        ]));

        match result {
            Err(ConfigError::Invalid { errors }) => {
                assert!(errors[0].contains("verify_ssl"));
                assert!(errors[0].contains("maybe"));
            }
            other => panic!("Expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn test_from_lookup_rejects_invalid_url() {
        let result = BookStackConfig::from_lookup(lookup(&[
            ("BOOKSTACK_URL", "docs.example.com"),
            ("BOOKSTACK_TOKEN_ID", "id"),
            ("BOOKSTACK_TOKEN_SECRET", "secret"),
        ]));

        assert!(matches!(result, Err(ConfigError::Invalid { errors }) if errors[0].contains("Invalid base URL")));
    }

    #[test]
    fn test_from_env_file_missing_file() {
        let result = BookStackConfig::from_env_file("/nonexistent/bookstack.env");
        assert!(matches!(result, Err(ConfigError::EnvFile { .. })));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BookStackConfig>();
    }
}
