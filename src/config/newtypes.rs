//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated BookStack instance URL.
///
/// The URL must carry an `http://` or `https://` scheme. A trailing slash is
/// stripped so that API paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use bookstack_api::BaseUrl;
///
/// let url = BaseUrl::new("https://docs.example.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://docs.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no HTTP(S) scheme
    /// or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');

        let rest = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"));

        match rest {
            Some(host) if !host.is_empty() && !host.starts_with('/') => {
                Ok(Self(trimmed.to_string()))
            }
            _ => Err(ConfigError::InvalidBaseUrl { url }),
        }
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A validated API token ID.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenId(String);

impl TokenId {
    /// Creates a new validated token ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyTokenId`] if the ID is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ConfigError::EmptyTokenId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for TokenId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated API token secret.
///
/// # Security
///
/// The `Debug` implementation masks the secret value, displaying only
/// `TokenSecret(*****)`.
///
/// ```rust
/// use bookstack_api::TokenSecret;
///
/// let secret = TokenSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "TokenSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct TokenSecret(String);

impl TokenSecret {
    /// Creates a new validated token secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyTokenSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyTokenSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for TokenSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TokenSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TokenSecret(*****)")
    }
}

/// Credentials attached to every request.
///
/// BookStack authenticates API calls with a token ID / token secret pair.
/// A bearer key is accepted for instances sitting behind a proxy that
/// expects one.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// `Authorization: Token <id>:<secret>`.
    TokenPair {
        /// The API token ID.
        id: TokenId,
        /// The API token secret.
        secret: TokenSecret,
    },
    /// `Authorization: Bearer <key>`.
    Bearer(String),
}

impl Credentials {
    /// Creates token-pair credentials.
    #[must_use]
    pub const fn token(id: TokenId, secret: TokenSecret) -> Self {
        Self::TokenPair { id, secret }
    }

    /// Creates bearer-key credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] if the key is empty.
    pub fn bearer(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        Ok(Self::Bearer(key))
    }

    /// Returns the `Authorization` header value for these credentials.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        match self {
            Self::TokenPair { id, secret } => {
                format!("Token {}:{}", id.as_ref(), secret.as_ref())
            }
            Self::Bearer(key) => format!("Bearer {key}"),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TokenPair { id, secret } => f
                .debug_struct("TokenPair")
                .field("id", id)
                .field("secret", secret)
                .finish(),
            Self::Bearer(_) => f.write_str("Bearer(*****)"),
        }
    }
}
