//! File parts for multipart uploads.

use std::path::Path;

/// MIME type used when none is given.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// A file sent as one part of a `multipart/form-data` request.
///
/// # Example
///
/// ```rust
/// use bookstack_api::FileUpload;
///
/// let cover = FileUpload::from_bytes("image", "cover.jpg", vec![0xFF, 0xD8])
///     .with_mime_type("image/jpeg");
/// assert_eq!(cover.field, "image");
/// assert_eq!(cover.mime_type, "image/jpeg");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct FileUpload {
    /// The form field name (`file`, `image`, ...).
    pub field: String,
    /// File name reported to the server.
    pub file_name: String,
    /// MIME type of the part.
    pub mime_type: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl FileUpload {
    /// Creates an upload from in-memory bytes.
    #[must_use]
    pub fn from_bytes(
        field: impl Into<String>,
        file_name: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            field: field.into(),
            file_name: file_name.into(),
            mime_type: DEFAULT_MIME_TYPE.to_string(),
            bytes,
        }
    }

    /// Reads a file from disk; the part's file name is the path's final component.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub async fn from_path(
        field: impl Into<String>,
        path: impl AsRef<Path>,
    ) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map_or_else(|| "upload".to_string(), |n| n.to_string_lossy().into_owned());
        Ok(Self::from_bytes(field, file_name, bytes))
    }

    /// Sets the MIME type of the part.
    #[must_use]
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    /// Renames the form field.
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = field.into();
        self
    }

    /// Converts into a reqwest multipart part.
    pub(crate) fn to_part(&self) -> Result<reqwest::multipart::Part, reqwest::Error> {
        reqwest::multipart::Part::bytes(self.bytes.clone())
            .file_name(self.file_name.clone())
            .mime_str(&self.mime_type)
    }
}

impl std::fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileUpload")
            .field("field", &self.field)
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}
