//! Capability traits for REST resources.
//!
//! Each BookStack endpoint family is a small handle type (e.g. `Books<'a>`)
//! borrowing the [`RestClient`]. A handle implements [`Resource`] and then
//! opts into the capabilities its endpoint supports:
//!
//! | Trait | Operation | Request |
//! |---|---|---|
//! | [`Listable`] | `list`, `list_all` | `GET <endpoint>` |
//! | [`Readable`] | `read` | `GET <endpoint>/<id>` |
//! | [`Creatable`] | `create` | `POST <endpoint>` |
//! | [`Updatable`] | `update` | `PUT <endpoint>/<id>` |
//! | [`Deletable`] | `delete` | `DELETE <endpoint>/<id>` |
//! | [`Exportable`] | `export` | `GET <endpoint>/<id>/export/<format>` |
//!
//! # Implementing a Resource
//!
//! ```rust,ignore
//! use bookstack_api::rest::{Resource, Listable, Readable};
//! use bookstack_api::RestClient;
//!
//! pub struct Books<'a> {
//!     client: &'a RestClient,
//! }
//!
//! impl Resource for Books<'_> {
//!     const ENDPOINT: &'static str = "books";
//!     const NAME: &'static str = "Book";
//!
//!     fn client(&self) -> &RestClient {
//!         self.client
//!     }
//! }
//!
//! impl Listable for Books<'_> {}
//! impl Readable for Books<'_> {}
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::clients::rest::write_file;
use crate::clients::{FileUpload, ResponseBody, RestClient, RestError};
use crate::rest::{Filters, ListParams, ListResponse, Record, ResourceError};

/// A BookStack endpoint family.
pub trait Resource {
    /// The endpoint path under `/api/` (e.g., `"books"`, `"audit-log"`).
    const ENDPOINT: &'static str;

    /// Singular display name used in error messages (e.g., `"Book"`).
    const NAME: &'static str;

    /// Returns the client used for requests.
    fn client(&self) -> &RestClient;

    /// Returns the path of a single item.
    #[must_use]
    fn item_path(id: u64) -> String {
        format!("{}/{id}", Self::ENDPOINT)
    }
}

/// A request body for create and update operations.
///
/// Optional fields should be `Option<T>` with
/// `#[serde(skip_serializing_if = "Option::is_none")]` so that only the
/// fields a caller sets are sent. File fields should be `#[serde(skip)]` and
/// returned from [`files`](Self::files) instead.
pub trait Payload: Serialize {
    /// Checks the payload before any request is made.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] describing the problem.
    fn validate(&self) -> Result<(), ResourceError> {
        Ok(())
    }

    /// Files to upload with the payload.
    ///
    /// A non-empty list switches the request to multipart encoding.
    fn files(&self) -> Vec<FileUpload> {
        Vec::new()
    }

    /// Serializes the structured part of the payload.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Serialization`] if serialization fails.
    fn to_body(&self) -> Result<Value, ResourceError> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Resources with a paginated list endpoint.
#[allow(async_fn_in_trait)]
pub trait Listable: Resource {
    /// Fetches a single page.
    ///
    /// A binary reply yields an empty page.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] for transport and decoding errors.
    async fn list(&self, params: ListParams) -> Result<ListResponse, ResourceError> {
        let body = self
            .client()
            .get(Self::ENDPOINT, &params.to_query())
            .await?;
        decode_list(body)
    }

    /// Fetches every record, following pagination to the end.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] for transport and decoding errors.
    async fn list_all(
        &self,
        sort: Option<&str>,
        filters: &Filters,
    ) -> Result<Vec<Record>, ResourceError> {
        let mut query = Vec::new();
        if let Some(sort) = sort {
            query.push(("sort".to_string(), sort.to_string()));
        }
        query.extend(filters.to_query());

        Ok(self.client().list_all(Self::ENDPOINT, &query).await?)
    }
}

/// Resources whose items can be read by ID.
#[allow(async_fn_in_trait)]
pub trait Readable: Resource {
    /// Reads a single item.
    ///
    /// A binary reply yields an empty record.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] for transport and decoding errors.
    async fn read(&self, id: u64) -> Result<Record, ResourceError> {
        match self.client().get(&Self::item_path(id), &[]).await? {
            ResponseBody::Structured(value) => into_record(value),
            ResponseBody::Binary(_) => Ok(Record::new()),
        }
    }
}

/// Resources that can be created.
#[allow(async_fn_in_trait)]
pub trait Creatable: Resource {
    /// The create payload.
    type Create: Payload;

    /// Validates and sends a create request.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] if the payload is rejected
    /// locally, or [`ResourceError::Rest`] for transport errors.
    async fn create(&self, payload: &Self::Create) -> Result<Record, ResourceError> {
        payload.validate()?;
        let body = payload.to_body()?;
        let value = self
            .client()
            .post(Self::ENDPOINT, Some(body), payload.files())
            .await?;
        into_record(value)
    }
}

/// Resources that can be updated.
#[allow(async_fn_in_trait)]
pub trait Updatable: Resource {
    /// The update payload. Unset fields are not sent.
    type Update: Payload;

    /// Validates and sends an update request.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Validation`] if the payload is rejected
    /// locally, or [`ResourceError::Rest`] for transport errors.
    async fn update(&self, id: u64, payload: &Self::Update) -> Result<Record, ResourceError> {
        payload.validate()?;
        let body = payload.to_body()?;
        let value = self
            .client()
            .put(&Self::item_path(id), Some(body), payload.files())
            .await?;
        into_record(value)
    }
}

/// Resources whose items can be deleted.
#[allow(async_fn_in_trait)]
pub trait Deletable: Resource {
    /// Deletes an item. The server usually answers `204`, giving an empty record.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] for transport errors.
    async fn delete(&self, id: u64) -> Result<Record, ResourceError> {
        let value = self.client().delete(&Self::item_path(id), None).await?;
        into_record(value)
    }
}

/// Formats accepted by the export endpoints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Self-contained HTML.
    Html,
    /// PDF document.
    Pdf,
    /// Plain text.
    Plaintext,
    /// Markdown.
    Markdown,
    /// ZIP archive (BookStack portable export).
    Zip,
}

impl ExportFormat {
    /// All supported formats.
    pub const ALL: [Self; 5] = [
        Self::Html,
        Self::Pdf,
        Self::Plaintext,
        Self::Markdown,
        Self::Zip,
    ];

    /// Returns the path segment for this format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Pdf => "pdf",
            Self::Plaintext => "plaintext",
            Self::Markdown => "markdown",
            Self::Zip => "zip",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| ResourceError::InvalidExportFormat {
                format: s.to_string(),
            })
    }
}

/// Resources that can be exported to documents.
#[allow(async_fn_in_trait)]
pub trait Exportable: Resource {
    /// Returns the export path for an item.
    #[must_use]
    fn export_path(id: u64, format: ExportFormat) -> String {
        format!("{}/{id}/export/{format}", Self::ENDPOINT)
    }

    /// Exports an item and returns the raw bytes.
    ///
    /// A JSON reply yields empty bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] for transport errors.
    async fn export(&self, id: u64, format: ExportFormat) -> Result<Vec<u8>, ResourceError> {
        let body = self
            .client()
            .get(&Self::export_path(id, format), &[])
            .await?;
        Ok(body.into_bytes().unwrap_or_default())
    }

    /// Exports an item into a file, creating parent directories.
    ///
    /// A JSON reply is written as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Io`] if the file cannot be written, or
    /// [`ResourceError::Rest`] for transport errors.
    async fn export_to_file(
        &self,
        id: u64,
        format: ExportFormat,
        output_path: impl AsRef<Path>,
    ) -> Result<PathBuf, ResourceError> {
        let output_path = output_path.as_ref();
        let bytes = match self
            .client()
            .get(&Self::export_path(id, format), &[])
            .await?
        {
            ResponseBody::Binary(bytes) => bytes,
            ResponseBody::Structured(value) => serde_json::to_vec_pretty(&value)?,
        };

        write_file(output_path, &bytes).await?;
        tracing::info!(
            "Exported {} {} as {} to {}",
            Self::NAME,
            id,
            format,
            output_path.display()
        );
        Ok(output_path.to_path_buf())
    }

    /// Exports an item as HTML.
    ///
    /// # Errors
    ///
    /// See [`export`](Self::export).
    async fn export_html(&self, id: u64) -> Result<Vec<u8>, ResourceError> {
        self.export(id, ExportFormat::Html).await
    }

    /// Exports an item as PDF.
    ///
    /// # Errors
    ///
    /// See [`export`](Self::export).
    async fn export_pdf(&self, id: u64) -> Result<Vec<u8>, ResourceError> {
        self.export(id, ExportFormat::Pdf).await
    }

    /// Exports an item as plain text.
    ///
    /// # Errors
    ///
    /// See [`export`](Self::export).
    async fn export_plaintext(&self, id: u64) -> Result<Vec<u8>, ResourceError> {
        self.export(id, ExportFormat::Plaintext).await
    }

    /// Exports an item as Markdown.
    ///
    /// # Errors
    ///
    /// See [`export`](Self::export).
    async fn export_markdown(&self, id: u64) -> Result<Vec<u8>, ResourceError> {
        self.export(id, ExportFormat::Markdown).await
    }

    /// Exports an item as a ZIP archive.
    ///
    /// # Errors
    ///
    /// See [`export`](Self::export).
    async fn export_zip(&self, id: u64) -> Result<Vec<u8>, ResourceError> {
        self.export(id, ExportFormat::Zip).await
    }
}

/// Converts a JSON reply into a record.
///
/// # Errors
///
/// Returns [`ResourceError::Rest`] wrapping a decode error if the value is
/// not an object.
pub fn into_record(value: Value) -> Result<Record, ResourceError> {
    match value {
        Value::Object(map) => Ok(map),
        other => serde_json::from_value(other).map_err(|e| RestError::Decode(e).into()),
    }
}

/// Converts a list reply into a [`ListResponse`]; binary replies are empty.
///
/// # Errors
///
/// Returns [`ResourceError::Rest`] wrapping a decode error if the value is
/// not a list envelope.
pub fn decode_list(body: ResponseBody) -> Result<ListResponse, ResourceError> {
    match body {
        ResponseBody::Structured(value) => {
            serde_json::from_value(value).map_err(|e| RestError::Decode(e).into())
        }
        ResponseBody::Binary(_) => Ok(ListResponse::default()),
    }
}
