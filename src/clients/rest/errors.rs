//! Failures raised while turning HTTP replies into BookStack records.

use crate::clients::HttpError;
use thiserror::Error;

/// Error from [`RestClient`](crate::clients::RestClient) calls.
///
/// ```rust
/// use bookstack_api::clients::rest::RestError;
///
/// let error = RestError::InvalidPath { path: "/api/".to_string() };
/// assert_eq!(error.to_string(), "Path \"/api/\" names no endpoint");
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// Nothing was left of the path after stripping slashes and `api/`.
    #[error("Path \"{path}\" names no endpoint")]
    InvalidPath {
        /// Path as the caller passed it.
        path: String,
    },

    /// A JSON verb was answered with non-JSON content.
    #[error("Unexpected binary response for {method} request")]
    UnexpectedBinary {
        /// Lowercase method name.
        method: String,
    },

    #[error("Expected binary content from {path}, got a JSON response")]
    ExpectedBinary {
        /// Endpoint that was downloaded.
        path: String,
    },

    /// Envelope or record did not deserialize into the target type.
    #[error("Response does not match the expected shape: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Could not write downloaded content: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Http(#[from] HttpError),
}

impl RestError {
    /// Status code from the server, if this came from a reply.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}
