//! Attachment resource implementation.
//!
//! Attachments hang off pages and are either uploaded files or external
//! links. Reading an attachment returns its `content`: base64 file data for
//! uploads, the URL for links.
//!
//! # Example
//!
//! ```rust,ignore
//! use bookstack_api::FileUpload;
//! use bookstack_api::rest::resources::AttachmentContent;
//!
//! let attachments = client.attachments();
//!
//! attachments.create_link("Upstream docs", 12, "https://example.com").await?;
//!
//! let file = FileUpload::from_path("file", "report.pdf").await?;
//! let created = attachments.create_file("Report", 12, file).await?;
//!
//! if let AttachmentContent::File(bytes) = attachments.read_content(3).await? {
//!     tokio::fs::write("report.pdf", bytes).await?;
//! }
//! ```

use base64::Engine;
use serde::Serialize;
use serde_json::{json, Value};

use crate::clients::{FileUpload, RestClient};
use crate::rest::{
    into_record, Deletable, Filters, Listable, Payload, Readable, Record, Resource, ResourceError,
    Updatable,
};

/// Multipart field name for attachment files.
const FILE_FIELD: &str = "file";

/// Handle for the `attachments` endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Attachments<'a> {
    client: &'a RestClient,
}

/// Decoded content of an attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttachmentContent {
    /// An uploaded file's bytes.
    File(Vec<u8>),
    /// An external link's URL.
    Link(String),
}

impl<'a> Attachments<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Attaches an external link to a page.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] for transport errors.
    pub async fn create_link(
        &self,
        name: &str,
        uploaded_to: u64,
        link: &str,
    ) -> Result<Record, ResourceError> {
        let data = json!({ "name": name, "uploaded_to": uploaded_to, "link": link });
        let value = self
            .client
            .post(Self::ENDPOINT, Some(data), Vec::new())
            .await?;
        into_record(value)
    }

    /// Uploads a file and attaches it to a page.
    ///
    /// The upload is always sent as the `file` multipart field.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] for transport errors.
    pub async fn create_file(
        &self,
        name: &str,
        uploaded_to: u64,
        file: FileUpload,
    ) -> Result<Record, ResourceError> {
        let data = json!({ "name": name, "uploaded_to": uploaded_to });
        let value = self
            .client
            .post(Self::ENDPOINT, Some(data), vec![file.with_field(FILE_FIELD)])
            .await?;
        into_record(value)
    }

    /// Lists every attachment on a page.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] for transport and decoding errors.
    pub async fn list_by_page(&self, page_id: u64) -> Result<Vec<Record>, ResourceError> {
        self.list_all(None, &Filters::new().with("uploaded_to", page_id))
            .await
    }

    /// Reads an attachment and decodes its `content` field.
    ///
    /// A missing `content` field yields an empty file.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::ContentDecode`] if file content is not valid
    /// base64, or [`ResourceError::Rest`] for transport errors.
    pub async fn read_content(&self, id: u64) -> Result<AttachmentContent, ResourceError> {
        let record = self.read(id).await?;
        decode_content(&record)
    }
}

fn decode_content(record: &Record) -> Result<AttachmentContent, ResourceError> {
    let content = record.get("content").and_then(Value::as_str).unwrap_or("");
    let external = record
        .get("external")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if external {
        return Ok(AttachmentContent::Link(content.to_string()));
    }
    let bytes = base64::engine::general_purpose::STANDARD.decode(content)?;
    Ok(AttachmentContent::File(bytes))
}

impl Resource for Attachments<'_> {
    const ENDPOINT: &'static str = "attachments";
    const NAME: &'static str = "Attachment";

    fn client(&self) -> &RestClient {
        self.client
    }
}

impl Listable for Attachments<'_> {}
impl Readable for Attachments<'_> {}
impl Deletable for Attachments<'_> {}

impl Updatable for Attachments<'_> {
    type Update = AttachmentUpdate;
}

/// Payload for updating an attachment.
///
/// Set `link` for link attachments or `file` for file attachments.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct AttachmentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Moves the attachment to another page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded_to: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Replacement file.
    #[serde(skip)]
    pub file: Option<FileUpload>,
}

impl Payload for AttachmentUpdate {
    fn validate(&self) -> Result<(), ResourceError> {
        if self.link.is_some() && self.file.is_some() {
            return Err(ResourceError::validation(
                Attachments::NAME,
                "Provide either link or file, not both",
            ));
        }
        Ok(())
    }

    fn files(&self) -> Vec<FileUpload> {
        self.file
            .iter()
            .map(|file| file.clone().with_field(FILE_FIELD))
            .collect()
    }
}
