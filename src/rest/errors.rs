//! Resource-specific error types for REST API operations.
//!
//! This module contains the error type returned by every resource method.
//! It extends [`RestError`](crate::clients::RestError) with client-side
//! payload validation and export format parsing.
//!
//! # Example
//!
//! ```rust,ignore
//! use bookstack_api::rest::{Creatable, ResourceError};
//!
//! match client.pages().create(&payload).await {
//!     Ok(page) => println!("Created page {}", page["id"]),
//!     Err(ResourceError::Validation { resource, message }) => {
//!         println!("{resource}: {message}");
//!     }
//!     Err(e) if e.status() == Some(404) => println!("Parent not found"),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use crate::clients::RestError;
use thiserror::Error;

/// Error type for REST resource operations.
///
/// # Example
///
/// ```rust
/// use bookstack_api::rest::ResourceError;
///
/// let error = ResourceError::Validation {
///     resource: "Page",
///     message: "Either book_id or chapter_id must be provided".to_string(),
/// };
/// assert!(error.to_string().contains("Page"));
/// ```
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A payload was rejected before any request was sent.
    #[error("Invalid {resource} payload: {message}")]
    Validation {
        /// The resource name (e.g., "Page").
        resource: &'static str,
        /// What is wrong with the payload.
        message: String,
    },

    /// The export format is not one the server supports.
    #[error("Invalid export format '{format}'. Expected one of: html, pdf, plaintext, markdown, zip")]
    InvalidExportFormat {
        /// The rejected format string.
        format: String,
    },

    /// A payload could not be serialized to JSON.
    #[error("Failed to serialize payload: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Base64 file content returned by the server could not be decoded.
    #[error("Failed to decode file content: {0}")]
    ContentDecode(#[from] base64::DecodeError),

    /// A local file could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A REST-level error occurred.
    #[error(transparent)]
    Rest(#[from] RestError),
}

impl ResourceError {
    /// Returns the HTTP status code behind this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rest(e) => e.status(),
            _ => None,
        }
    }

    pub(crate) fn validation(resource: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            resource,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{HttpError, HttpResponseError};

    #[test]
    fn test_validation_error_message() {
        let error = ResourceError::validation("Page", "html and markdown are mutually exclusive");
        assert_eq!(
            error.to_string(),
            "Invalid Page payload: html and markdown are mutually exclusive"
        );
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_invalid_export_format_lists_choices() {
        let error = ResourceError::InvalidExportFormat {
            format: "docx".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("docx"));
        assert!(message.contains("markdown"));
    }

    #[test]
    fn test_status_from_wrapped_http_error() {
        let error: ResourceError = RestError::Http(HttpError::Response(HttpResponseError {
            code: 403,
            message: "You do not have permission".to_string(),
            body: None,
        }))
        .into();

        assert_eq!(error.status(), Some(403));
        assert!(error.to_string().contains("permission"));
    }

    #[test]
    fn test_all_error_variants_implement_std_error() {
        let error: &dyn std::error::Error = &ResourceError::InvalidExportFormat {
            format: "x".to_string(),
        };
        let _ = error;
    }
}
