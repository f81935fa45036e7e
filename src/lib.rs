//! # BookStack API Rust Client
//!
//! An async Rust client for the [BookStack](https://www.bookstackapp.com)
//! REST API: configuration, authenticated transport, offset pagination, and
//! typed handles for every documented resource.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`BookStackConfig`] and [`BookStackConfigBuilder`]
//! - Validated newtypes for the base URL and API credentials
//! - An HTTP layer ([`HttpClient`]) that tells JSON replies from binary downloads
//! - A REST client ([`RestClient`]) with full pagination and file downloads
//! - Resource handles with composable capabilities (see [`rest`])
//! - Opt-in retry ([`RetryPolicy`]) and timing ([`timing`]) helpers
//!
//! ## Quick Start
//!
//! ```rust
//! use bookstack_api::{BaseUrl, BookStackConfig, Credentials, TokenId, TokenSecret};
//!
//! let config = BookStackConfig::builder()
//!     .base_url(BaseUrl::new("https://docs.example.com").unwrap())
//!     .credentials(Credentials::token(
//!         TokenId::new("token-id").unwrap(),
//!         TokenSecret::new("token-secret").unwrap(),
//!     ))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://docs.example.com");
//! ```
//!
//! ## Configuration From the Environment
//!
//! ```rust,ignore
//! use bookstack_api::BookStackConfig;
//!
//! // BOOKSTACK_URL, BOOKSTACK_TOKEN_ID, BOOKSTACK_TOKEN_SECRET
//! let config = BookStackConfig::from_env()?;
//!
//! // Or load a .env file first
//! let config = BookStackConfig::from_env_file(".env")?;
//! ```
//!
//! ## Working With Resources
//!
//! ```rust,ignore
//! use bookstack_api::{BookStackConfig, RestClient};
//! use bookstack_api::rest::{Exportable, Filters, Listable, Updatable};
//! use bookstack_api::rest::resources::BookUpdate;
//!
//! let client = RestClient::new(&BookStackConfig::from_env()?)?;
//!
//! // Every book, following pagination
//! let books = client.books().list_all(Some("+name"), &Filters::new()).await?;
//!
//! // Sparse update: sends {"name": "Handbook"} only
//! let update = BookUpdate { name: Some("Handbook".into()), ..Default::default() };
//! client.books().update(1, &update).await?;
//!
//! // Export to a file
//! client.books().export_to_file(1, "pdf".parse()?, "handbook.pdf").await?;
//!
//! // Best-effort bulk delete
//! for outcome in client.recycle_bin().empty().await? {
//!     if !outcome.is_success() {
//!         eprintln!("could not destroy {}", outcome.deletion_id);
//!     }
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes and payloads validate before any request
//! - **Sparse payloads**: Unset optional fields are never sent
//! - **Sequential I/O**: Each call completes before the next request is issued
//! - **Thread-safe**: [`RestClient`] is `Send + Sync`

pub mod clients;
pub mod config;
pub mod error;
pub mod logging;
pub mod rest;
pub mod retry;
pub mod timing;

// Re-export public types at crate root for convenience
pub use config::{
    BaseUrl, BookStackConfig, BookStackConfigBuilder, Credentials, TokenId, TokenSecret,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, FileUpload, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
    ResponseBody, RestClient, RestError,
};

pub use rest::{ExportFormat, Record, ResourceError};
pub use retry::RetryPolicy;
