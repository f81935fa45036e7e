//! Outgoing request description handed to [`HttpClient`](crate::clients::HttpClient).

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;
use crate::clients::upload::FileUpload;

/// The four verbs BookStack's API uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Lowercase name, as used in log fields and error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the body is encoded on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    Json,
    /// Required whenever files are attached.
    Multipart,
}

impl DataType {
    /// `Content-Type` value. reqwest adds the multipart boundary itself.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Multipart => "multipart/form-data",
        }
    }
}

/// One call against `<base>/api/<path>`.
///
/// Build it with [`HttpRequest::builder`], which checks that the parts are
/// consistent before anything is sent.
///
/// ```rust
/// use bookstack_api::clients::{HttpRequest, HttpMethod, DataType};
/// use serde_json::json;
///
/// let listing = HttpRequest::builder(HttpMethod::Get, "shelves")
///     .query_param("count", "10")
///     .build()
///     .unwrap();
/// assert_eq!(listing.query.len(), 1);
///
/// let rename = HttpRequest::builder(HttpMethod::Put, "books/4")
///     .body(json!({"name": "Runbooks"}))
///     .body_type(DataType::Json)
///     .build()
///     .unwrap();
/// assert_eq!(rename.body_type, Some(DataType::Json));
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    pub http_method: HttpMethod,
    /// Endpoint relative to `<base>/api/`, e.g. `pages/3`.
    pub path: String,
    /// JSON body, or the text fields of a multipart form.
    pub body: Option<serde_json::Value>,
    pub body_type: Option<DataType>,
    /// Sent in insertion order.
    pub query: Vec<(String, String)>,
    pub files: Vec<FileUpload>,
    /// Attempts allowed when BookStack answers 429. One means no retry.
    pub tries: u32,
}

impl HttpRequest {
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Checks the parts fit together.
    ///
    /// # Errors
    ///
    /// - [`InvalidHttpRequestError::MissingBodyType`] for a body with no encoding
    /// - [`InvalidHttpRequestError::MissingBody`] for POST or PUT with nothing to send
    /// - [`InvalidHttpRequestError::FilesRequireMultipart`] for files in a JSON request
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        let sends_data = matches!(self.http_method, HttpMethod::Post | HttpMethod::Put);
        let has_files = !self.files.is_empty();

        match (&self.body, self.body_type) {
            (Some(_), None) => Err(InvalidHttpRequestError::MissingBodyType),
            (None, _) if sends_data && !has_files => Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.as_str().to_string(),
            }),
            (_, kind) if has_files && kind != Some(DataType::Multipart) => {
                Err(InvalidHttpRequestError::FilesRequireMultipart)
            }
            _ => Ok(()),
        }
    }
}

/// Accumulates the parts of an [`HttpRequest`].
#[derive(Debug)]
pub struct HttpRequestBuilder {
    request: HttpRequest,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            request: HttpRequest {
                http_method: method,
                path: path.into(),
                body: None,
                body_type: None,
                query: Vec::new(),
                files: Vec::new(),
                tries: 1,
            },
        }
    }

    /// Pair with [`body_type`](Self::body_type), or with [`files`](Self::files)
    /// for multipart forms.
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.request.body = Some(body.into());
        self
    }

    #[must_use]
    pub const fn body_type(mut self, body_type: DataType) -> Self {
        self.request.body_type = Some(body_type);
        self
    }

    /// Appends `(key, value)` pairs after any already added.
    #[must_use]
    pub fn query<I, K, V>(mut self, params: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.request
            .query
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    #[must_use]
    pub fn query_param(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query([(key, value)])
    }

    /// Attaching any file forces [`DataType::Multipart`].
    #[must_use]
    pub fn files(mut self, files: Vec<FileUpload>) -> Self {
        if !files.is_empty() {
            self.request.body_type = Some(DataType::Multipart);
        }
        self.request.files.extend(files);
        self
    }

    /// Values above one wait out `Retry-After` on 429 and try again.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.request.tries = tries;
        self
    }

    /// # Errors
    ///
    /// Anything [`HttpRequest::verify`] rejects.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        self.request.verify()?;
        Ok(self.request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(method: HttpMethod, body_type: Option<DataType>) -> HttpRequest {
        HttpRequest {
            http_method: method,
            path: "attachments".to_string(),
            body: Some(json!({"name": "Report"})),
            body_type,
            query: Vec::new(),
            files: Vec::new(),
            tries: 1,
        }
    }

    #[test]
    fn test_method_names_are_lowercase() {
        let names: Vec<String> = [
            HttpMethod::Get,
            HttpMethod::Post,
            HttpMethod::Put,
            HttpMethod::Delete,
        ]
        .iter()
        .map(ToString::to_string)
        .collect();
        assert_eq!(names, ["get", "post", "put", "delete"]);
    }

    #[test]
    fn test_content_types() {
        assert_eq!(DataType::Json.as_content_type(), "application/json");
        assert_eq!(DataType::Multipart.as_content_type(), "multipart/form-data");
    }

    #[test]
    fn test_bare_read_has_defaults() {
        let request = HttpRequest::builder(HttpMethod::Get, "books/1")
            .build()
            .unwrap();

        assert_eq!(request.path, "books/1");
        assert_eq!(request.body_type, None);
        assert!(request.query.is_empty());
        assert!(request.files.is_empty());
        assert_eq!(request.tries, 1);
    }

    #[test]
    fn test_delete_without_body_is_valid() {
        let request = HttpRequest::builder(HttpMethod::Delete, "recycle-bin/12")
            .tries(3)
            .build()
            .unwrap();

        assert_eq!(request.tries, 3);
    }

    #[test]
    fn test_write_verbs_need_something_to_send() {
        for (method, name) in [(HttpMethod::Post, "post"), (HttpMethod::Put, "put")] {
            let result = HttpRequest::builder(method, "shelves/2").build();
            assert_eq!(
                result.unwrap_err(),
                InvalidHttpRequestError::MissingBody {
                    method: name.to_string()
                }
            );
        }
    }

    #[test]
    fn test_body_without_encoding_is_rejected() {
        let request = raw(HttpMethod::Post, None);
        assert_eq!(
            request.verify(),
            Err(InvalidHttpRequestError::MissingBodyType)
        );
    }

    #[test]
    fn test_attachment_upload_becomes_multipart() {
        let request = HttpRequest::builder(HttpMethod::Post, "attachments")
            .body(json!({"name": "Report", "uploaded_to": 3}))
            .body_type(DataType::Json)
            .files(vec![FileUpload::from_bytes("file", "report.pdf", vec![1, 2, 3])])
            .build()
            .unwrap();

        assert_eq!(request.body_type, Some(DataType::Multipart));
        assert_eq!(request.files[0].file_name, "report.pdf");
    }

    #[test]
    fn test_gallery_upload_with_only_files() {
        let request = HttpRequest::builder(HttpMethod::Post, "image-gallery")
            .files(vec![FileUpload::from_bytes("image", "a.png", vec![0])])
            .build();

        assert!(request.is_ok());
    }

    #[test]
    fn test_files_in_json_request_are_rejected() {
        let mut request = raw(HttpMethod::Post, Some(DataType::Json));
        request.files = vec![FileUpload::from_bytes("file", "a.txt", vec![])];

        assert_eq!(
            request.verify(),
            Err(InvalidHttpRequestError::FilesRequireMultipart)
        );
    }

    #[test]
    fn test_query_keeps_insertion_order() {
        let request = HttpRequest::builder(HttpMethod::Get, "books")
            .query_param("count", "50")
            .query([("offset", "100"), ("sort", "+name")])
            .build()
            .unwrap();

        let keys: Vec<&str> = request.query.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["count", "offset", "sort"]);
        assert_eq!(request.query[2].1, "+name");
    }
}
