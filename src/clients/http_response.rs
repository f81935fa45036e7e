//! HTTP response types for the BookStack API client.
//!
//! This module provides the [`HttpResponse`] type and the [`ResponseBody`]
//! union that separates structured JSON replies from binary downloads.

use std::collections::HashMap;

/// Seconds to wait after a 429 when the server sends no `Retry-After`.
pub const DEFAULT_RETRY_AFTER_SECS: f64 = 60.0;

/// The body of a successful response.
///
/// BookStack answers JSON for most endpoints and raw bytes for exports,
/// attachment downloads, and image data.
#[derive(Clone, Debug, PartialEq)]
pub enum ResponseBody {
    /// A parsed JSON document. Empty and `204` responses are `{}`.
    Structured(serde_json::Value),
    /// Raw bytes from a non-JSON response.
    Binary(Vec<u8>),
}

impl ResponseBody {
    /// Returns an empty JSON object body.
    #[must_use]
    pub fn empty() -> Self {
        Self::Structured(serde_json::Value::Object(serde_json::Map::new()))
    }

    /// Consumes the body, returning the JSON value if structured.
    #[must_use]
    pub fn into_json(self) -> Option<serde_json::Value> {
        match self {
            Self::Structured(value) => Some(value),
            Self::Binary(_) => None,
        }
    }

    /// Consumes the body, returning the bytes if binary.
    #[must_use]
    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            Self::Binary(bytes) => Some(bytes),
            Self::Structured(_) => None,
        }
    }
}

/// An HTTP response from the BookStack API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The response body.
    pub body: ResponseBody,
    /// Seconds to wait before retrying (from `Retry-After` header).
    pub retry_request_after: Option<f64>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing `Retry-After` from the headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: ResponseBody) -> Self {
        let retry_request_after = headers
            .get("retry-after")
            .and_then(|values| values.first())
            .and_then(|value| value.trim().parse::<f64>().ok())
            .filter(|secs| secs.is_finite() && *secs >= 0.0);

        Self {
            code,
            headers,
            body,
            retry_request_after,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `Content-Type` header value, if present.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.header("content-type")
    }

    /// Seconds to wait before resending a rate-limited request.
    #[must_use]
    pub fn retry_after_secs(&self) -> f64 {
        self.retry_request_after.unwrap_or(DEFAULT_RETRY_AFTER_SECS)
    }
}
