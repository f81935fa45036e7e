//! REST API client for BookStack.
//!
//! This module provides a higher-level REST API client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) that normalizes responses and
//! walks paginated listings.
//!
//! # Overview
//!
//! - [`RestClient`]: `get()`, `post()`, `put()`, `delete()`, `list_all()`, `download_file()`
//! - [`RestError`]: Error type for REST API operations
//! - [`PageCursor`]: Offset cursor used by `list_all()`
//!
//! # Response Normalization
//!
//! - `get` returns the [`ResponseBody`](crate::clients::ResponseBody) as received
//! - `post` and `put` require a JSON reply
//! - `delete` turns a binary reply into `{}`
//!
//! # Path Normalization
//!
//! Leading slashes and an `api/` prefix are stripped: `/api/pages` -> `pages`.

mod client;
mod errors;
pub mod pagination;

pub(crate) use client::write_file;
pub use client::RestClient;
pub use errors::RestError;
pub use pagination::{clamp_page_size, PageCursor, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
