//! Configuration error types for the BookStack API client.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that
//! missing or malformed settings are reported before any request is sent.
//!
//! # Example
//!
//! ```rust
//! use bookstack_api::{ConfigError, TokenId};
//!
//! let result = TokenId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyTokenId)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API token ID cannot be empty.
    #[error("API token ID cannot be empty. Please provide a valid BookStack token ID.")]
    EmptyTokenId,

    /// API token secret cannot be empty.
    #[error("API token secret cannot be empty. Please provide a valid BookStack token secret.")]
    EmptyTokenSecret,

    /// Bearer API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid bearer key.")]
    EmptyApiKey,

    /// The base URL is not an absolute HTTP(S) URL.
    #[error("Invalid base URL '{url}'. Please provide a URL with scheme (e.g., 'https://docs.example.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// Environment-based configuration failed validation.
    ///
    /// Carries every problem found, one entry per setting.
    #[error("Configuration validation failed:\n  - {}", .errors.join("\n  - "))]
    Invalid {
        /// One message per invalid or missing setting.
        errors: Vec<String>,
    },

    /// The `.env` file could not be loaded.
    #[error("Failed to load environment file '{path}': {reason}")]
    EnvFile {
        /// Path of the file that failed to load.
        path: String,
        /// The loader's error message.
        reason: String,
    },

    /// The log filter directive could not be parsed.
    #[error("Invalid log level '{level}': {reason}")]
    InvalidLogLevel {
        /// The rejected directive.
        level: String,
        /// The parser's error message.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_id_error_message() {
        let message = ConfigError::EmptyTokenId.to_string();
        assert!(message.contains("token ID cannot be empty"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "base_url" };
        let message = error.to_string();
        assert!(message.contains("base_url"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_invalid_lists_every_problem() {
        let error = ConfigError::Invalid {
            errors: vec![
                "bookstack.url: BOOKSTACK_URL not set".to_string(),
                "bookstack.token_id: BOOKSTACK_TOKEN_ID not set".to_string(),
            ],
        };
        let message = error.to_string();
        assert!(message.starts_with("Configuration validation failed:"));
        assert!(message.contains("BOOKSTACK_URL not set"));
        assert!(message.contains("BOOKSTACK_TOKEN_ID not set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyTokenSecret;
        let _: &dyn std::error::Error = &error;
    }
}
