//! Transport-level failures.
//!
//! Everything that can go wrong between building an [`HttpRequest`] and
//! reading its reply ends up in [`HttpError`]. The resource layer wraps it
//! in `RestError` and `ResourceError`, so callers usually only match on
//! [`HttpError::status`] when they care about a specific code.
//!
//! ```rust,ignore
//! use bookstack_api::clients::HttpError;
//!
//! if let Err(HttpError::Response(reply)) = client.request(request).await {
//!     eprintln!("BookStack said {} ({})", reply.message, reply.code);
//! }
//! ```
//!
//! [`HttpRequest`]: crate::clients::HttpRequest

use thiserror::Error;

/// A reply outside the 2xx range.
///
/// `message` comes from BookStack's `{"error": {"message": ...}}` envelope
/// when present, otherwise it is the raw response text.
///
/// ```rust
/// use bookstack_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: "Page not found".to_string(),
///     body: None,
/// };
///
/// assert_eq!(error.to_string(), "BookStack returned 404: Page not found");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
#[error("BookStack returned {code}: {message}")]
pub struct HttpResponseError {
    /// Status code.
    pub code: u16,
    /// Envelope message or response text.
    pub message: String,
    /// Decoded JSON error body, when there was one.
    pub body: Option<serde_json::Value>,
}

/// Every allowed attempt was answered with 429.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Gave up after {tries} rate-limited attempts: {message}")]
pub struct MaxHttpRetriesExceededError {
    /// Status of the final reply.
    pub code: u16,
    /// Attempts made, including the first.
    pub tries: u32,
    /// Message built from the final reply.
    pub message: String,
}

/// A request that was refused before leaving the process.
///
/// ```rust
/// use bookstack_api::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "put".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "A put request needs a body or files.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// `body` was given without `body_type`.
    #[error("A request body was given without a body type.")]
    MissingBodyType,

    /// POST or PUT with nothing to send.
    #[error("A {method} request needs a body or files.")]
    MissingBody {
        /// Lowercase method name.
        method: String,
    },

    #[error("File uploads require the multipart body type.")]
    FilesRequireMultipart,
}

/// Any failure from [`HttpClient::request`](crate::clients::HttpClient::request).
#[derive(Debug, Error)]
pub enum HttpError {
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The reply claimed to be JSON but did not parse.
    #[error("Response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// Connection, TLS, or timeout failure from reqwest.
    #[error("Could not reach BookStack: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Status code behind this failure, when one was received.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::MaxRetries(e) => Some(e.code),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidRequest(_) | Self::Decode(_) => None,
        }
    }
}
