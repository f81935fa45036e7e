//! REST client implementation for the BookStack API.
//!
//! This module provides the [`RestClient`] type: JSON-normalizing `get`,
//! `post`, `put`, and `delete` calls, offset pagination, file downloads, and
//! the entry points to every resource.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::clients::rest::pagination::{is_final_page, PageCursor, DEFAULT_PAGE_SIZE};
use crate::clients::rest::RestError;
use crate::clients::{
    DataType, FileUpload, HttpClient, HttpMethod, HttpRequest, HttpResponse, ResponseBody,
};
use crate::config::BookStackConfig;
use crate::rest::resources::{
    Attachments, AuditLog, Books, Chapters, Comments, ContentPermissions, ImageGallery, Pages,
    RecycleBin, Roles, Search, Shelves, System, Users,
};
use crate::rest::{ListResponse, Record};

/// REST API client for BookStack.
///
/// Every call is awaited to completion before the next one is issued;
/// pagination loops issue their page requests one after another.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use bookstack_api::{BookStackConfig, RestClient};
/// use bookstack_api::rest::{Listable, Readable};
///
/// let client = RestClient::new(&BookStackConfig::from_env()?)?;
///
/// let books = client.books().list_all(None, &Default::default()).await?;
/// let page = client.pages().read(42).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the HTTP client cannot be created.
    pub fn new(config: &BookStackConfig) -> Result<Self, RestError> {
        let http_client = HttpClient::new(config)?;
        tracing::debug!("BookStack client initialized for {}", http_client.base_uri());
        Ok(Self { http_client })
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Sends a GET request and returns the raw body.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is empty.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn get(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<ResponseBody, RestError> {
        let response = self
            .make_request(HttpMethod::Get, path, None, query, Vec::new())
            .await?;
        Ok(response.body)
    }

    /// Sends a POST request and returns the JSON reply.
    ///
    /// `data` defaults to `{}`. Attached files switch the request to
    /// multipart encoding.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::UnexpectedBinary`] if the reply is not JSON.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn post(
        &self,
        path: &str,
        data: Option<Value>,
        files: Vec<FileUpload>,
    ) -> Result<Value, RestError> {
        let body = data.unwrap_or_else(empty_object);
        let response = self
            .make_request(HttpMethod::Post, path, Some(body), &[], files)
            .await?;
        expect_json(response.body, HttpMethod::Post)
    }

    /// Sends a PUT request and returns the JSON reply.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::UnexpectedBinary`] if the reply is not JSON.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn put(
        &self,
        path: &str,
        data: Option<Value>,
        files: Vec<FileUpload>,
    ) -> Result<Value, RestError> {
        let body = data.unwrap_or_else(empty_object);
        let response = self
            .make_request(HttpMethod::Put, path, Some(body), &[], files)
            .await?;
        expect_json(response.body, HttpMethod::Put)
    }

    /// Sends a DELETE request.
    ///
    /// A binary reply is normalized to `{}`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn delete(&self, path: &str, data: Option<Value>) -> Result<Value, RestError> {
        let response = self
            .make_request(HttpMethod::Delete, path, data, &[], Vec::new())
            .await?;
        Ok(response.body.into_json().unwrap_or_else(empty_object))
    }

    /// Fetches every record of a list endpoint with the default page size.
    ///
    /// # Errors
    ///
    /// See [`list_all_with_page_size`](Self::list_all_with_page_size).
    pub async fn list_all(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<Vec<Record>, RestError> {
        self.list_all_with_page_size(path, params, DEFAULT_PAGE_SIZE)
            .await
    }

    /// Fetches every record of a list endpoint, one page at a time.
    ///
    /// `page_size` is clamped to `1..=500`. `count` and `offset` are appended
    /// to `params`. The loop ends on an empty page, or on a short page once the
    /// reported total has been collected.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::UnexpectedBinary`] if a page is not JSON.
    /// Returns [`RestError::Decode`] if a page is not a list envelope.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn list_all_with_page_size(
        &self,
        path: &str,
        params: &[(String, String)],
        page_size: u32,
    ) -> Result<Vec<Record>, RestError> {
        let mut cursor = PageCursor::new(page_size);
        let mut records = Vec::new();

        loop {
            let mut query = params.to_vec();
            query.extend(cursor.query());

            let body = self.get(path, &query).await?;
            let page: ListResponse = serde_json::from_value(expect_json(body, HttpMethod::Get)?)?;

            let received = page.data.len();
            records.extend(page.data);
            tracing::debug!(
                "Fetched {} records from {} (offset {}, total {})",
                received,
                path,
                cursor.offset,
                page.total
            );

            if is_final_page(received, cursor.count, records.len() as u64, page.total) {
                break;
            }
            cursor.advance(received);
        }

        Ok(records)
    }

    /// Downloads binary content from `path` into `output_path`.
    ///
    /// Parent directories are created as needed.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::ExpectedBinary`] if the server replied with JSON.
    /// Returns [`RestError::Io`] if the file cannot be written.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn download_file(
        &self,
        path: &str,
        output_path: impl AsRef<Path>,
        query: &[(String, String)],
    ) -> Result<PathBuf, RestError> {
        let output_path = output_path.as_ref();
        let bytes = self
            .get(path, query)
            .await?
            .into_bytes()
            .ok_or_else(|| RestError::ExpectedBinary {
                path: path.to_string(),
            })?;

        write_file(output_path, &bytes).await?;
        tracing::info!("Downloaded {} bytes to {}", bytes.len(), output_path.display());
        Ok(output_path.to_path_buf())
    }

    /// Returns the pages resource.
    #[must_use]
    pub const fn pages(&self) -> Pages<'_> {
        Pages::new(self)
    }

    /// Returns the books resource.
    #[must_use]
    pub const fn books(&self) -> Books<'_> {
        Books::new(self)
    }

    /// Returns the chapters resource.
    #[must_use]
    pub const fn chapters(&self) -> Chapters<'_> {
        Chapters::new(self)
    }

    /// Returns the shelves resource.
    #[must_use]
    pub const fn shelves(&self) -> Shelves<'_> {
        Shelves::new(self)
    }

    /// Returns the users resource.
    #[must_use]
    pub const fn users(&self) -> Users<'_> {
        Users::new(self)
    }

    /// Returns the roles resource.
    #[must_use]
    pub const fn roles(&self) -> Roles<'_> {
        Roles::new(self)
    }

    /// Returns the comments resource.
    #[must_use]
    pub const fn comments(&self) -> Comments<'_> {
        Comments::new(self)
    }

    /// Returns the attachments resource.
    #[must_use]
    pub const fn attachments(&self) -> Attachments<'_> {
        Attachments::new(self)
    }

    /// Returns the audit log resource.
    #[must_use]
    pub const fn audit_log(&self) -> AuditLog<'_> {
        AuditLog::new(self)
    }

    /// Returns the recycle bin resource.
    #[must_use]
    pub const fn recycle_bin(&self) -> RecycleBin<'_> {
        RecycleBin::new(self)
    }

    /// Returns the search aggregator.
    #[must_use]
    pub const fn search(&self) -> Search<'_> {
        Search::new(self)
    }

    /// Returns the system information resource.
    #[must_use]
    pub const fn system(&self) -> System<'_> {
        System::new(self)
    }

    /// Returns the content permissions resource.
    #[must_use]
    pub const fn content_permissions(&self) -> ContentPermissions<'_> {
        ContentPermissions::new(self)
    }

    /// Returns the image gallery resource.
    #[must_use]
    pub const fn image_gallery(&self) -> ImageGallery<'_> {
        ImageGallery::new(self)
    }

    /// Internal helper to build and send requests.
    async fn make_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<Value>,
        query: &[(String, String)],
        files: Vec<FileUpload>,
    ) -> Result<HttpResponse, RestError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path)
            .tries(self.http_client.rate_limit_tries());

        if let Some(body_value) = body {
            builder = builder.body(body_value).body_type(DataType::Json);
        }

        if !query.is_empty() {
            builder = builder.query(query.iter().cloned());
        }

        builder = builder.files(files);

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        self.http_client.request(request).await.map_err(Into::into)
    }
}

fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}

fn expect_json(body: ResponseBody, method: HttpMethod) -> Result<Value, RestError> {
    body.into_json().ok_or_else(|| RestError::UnexpectedBinary {
        method: method.to_string(),
    })
}

pub(crate) async fn write_file(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, bytes).await
}

/// Normalizes an endpoint path.
///
/// Leading slashes and an `api/` prefix are stripped; an empty remainder is
/// rejected.
fn normalize_path(path: &str) -> Result<String, RestError> {
    let trimmed = path.trim_start_matches('/');
    let trimmed = trimmed.strip_prefix("api/").unwrap_or(trimmed);
    let trimmed = trimmed.trim_start_matches('/');

    if trimmed.is_empty() || trimmed == "api" {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BaseUrl, Credentials, TokenId, TokenSecret};

    fn create_test_client() -> RestClient {
        let config = BookStackConfig::builder()
            .base_url(BaseUrl::new("https://docs.example.com").unwrap())
            .credentials(Credentials::token(
                TokenId::new("id").unwrap(),
                TokenSecret::new("secret").unwrap(),
            ))
            .build()
            .unwrap();
        RestClient::new(&config).unwrap()
    }

    #[test]
    fn test_normalize_path_strips_leading_slash() {
        assert_eq!(normalize_path("/books").unwrap(), "books");
        assert_eq!(normalize_path("//books").unwrap(), "books");
    }

    #[test]
    fn test_normalize_path_strips_api_prefix() {
        assert_eq!(normalize_path("api/pages").unwrap(), "pages");
        assert_eq!(normalize_path("/api/pages/3").unwrap(), "pages/3");
    }

    #[test]
    fn test_normalize_path_keeps_nested_paths() {
        assert_eq!(
            normalize_path("books/1/export/markdown").unwrap(),
            "books/1/export/markdown"
        );
    }

    #[test]
    fn test_normalize_path_rejects_empty() {
        for path in ["", "/", "api", "/api/"] {
            let result = normalize_path(path);
            assert!(
                matches!(result, Err(RestError::InvalidPath { path: ref p }) if p == path),
                "expected InvalidPath for {path:?}"
            );
        }
    }

    #[test]
    fn test_expect_json_rejects_binary() {
        let result = expect_json(ResponseBody::Binary(vec![1]), HttpMethod::Put);
        assert!(matches!(result, Err(RestError::UnexpectedBinary { method }) if method == "put"));
    }

    #[test]
    fn test_rest_client_exposes_http_client() {
        let client = create_test_client();
        assert_eq!(client.http_client().base_uri(), "https://docs.example.com/api");
    }

    #[test]
    fn test_rest_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RestClient>();
    }

    #[tokio::test]
    async fn test_write_file_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("exports").join("nested").join("book.pdf");

        write_file(&target, b"%PDF-1.7").await.unwrap();

        assert_eq!(std::fs::read(&target).unwrap(), b"%PDF-1.7");
    }
}
