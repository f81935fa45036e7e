//! HTTP client types for BookStack API communication.
//!
//! This module provides the transport layer for making authenticated
//! requests to the BookStack API. It handles request encoding (JSON or
//! multipart), response classification, and opt-in rate-limit waits.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A response from the API
//! - [`ResponseBody`]: Structured JSON or binary body
//! - [`FileUpload`]: A file part for multipart uploads
//! - [`rest::RestClient`]: Higher-level REST API client
//!
//! # Example
//!
//! ```rust,ignore
//! use bookstack_api::clients::{HttpClient, HttpRequest, HttpMethod};
//!
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "books")
//!     .query_param("count", "10")
//!     .build()?;
//!
//! let response = client.request(request).await?;
//! ```
//!
//! # Rate Limiting
//!
//! A `429` response is reported immediately by default. When the request is
//! configured with more than one try, the client waits for the `Retry-After`
//! interval (60 seconds if absent) and resends. No other status is retried.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;
mod upload;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{flatten_form_fields, HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, ResponseBody, DEFAULT_RETRY_AFTER_SECS};
pub use upload::{FileUpload, DEFAULT_MIME_TYPE};

pub use rest::{RestClient, RestError};
