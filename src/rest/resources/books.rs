//! Book resource implementation.
//!
//! Books are the top-level containers for documentation content. Reading a
//! book returns its `contents`: the chapters and pages directly inside it.
//!
//! # Example
//!
//! ```rust,ignore
//! use bookstack_api::FileUpload;
//! use bookstack_api::rest::{Creatable, Exportable};
//! use bookstack_api::rest::resources::BookCreate;
//!
//! let cover = FileUpload::from_path("image", "cover.jpg").await?;
//! let book = client
//!     .books()
//!     .create(&BookCreate::new("Runbooks").with_image(cover))
//!     .await?;
//!
//! client.books().export_to_file(1, ExportFormat::Zip, "runbooks.zip").await?;
//! ```

use serde::Serialize;

use crate::clients::{FileUpload, RestClient};
use crate::rest::resources::Tag;
use crate::rest::{
    Creatable, Deletable, Exportable, Listable, Payload, Readable, Resource, Updatable,
};

/// MIME type given to cover images unless the upload sets its own.
pub const COVER_IMAGE_MIME_TYPE: &str = "image/jpeg";

/// Handle for the `books` endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Books<'a> {
    client: &'a RestClient,
}

impl<'a> Books<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }
}

impl Resource for Books<'_> {
    const ENDPOINT: &'static str = "books";
    const NAME: &'static str = "Book";

    fn client(&self) -> &RestClient {
        self.client
    }
}

impl Listable for Books<'_> {}
impl Readable for Books<'_> {}
impl Deletable for Books<'_> {}
impl Exportable for Books<'_> {}

impl Creatable for Books<'_> {
    type Create = BookCreate;
}

impl Updatable for Books<'_> {
    type Update = BookUpdate;
}

/// Payload for creating a book.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct BookCreate {
    /// Book title (max 255 characters).
    pub name: String,

    /// Plain text description (max 1900 characters).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// HTML description (max 2000 characters).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_html: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    /// Default template for new pages in this book.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_template_id: Option<u64>,

    /// Cover image, sent as the `image` multipart field.
    #[serde(skip)]
    pub image: Option<FileUpload>,
}

impl BookCreate {
    /// Starts a book payload with the required name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the plain text description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets tags.
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Sets the cover image.
    #[must_use]
    pub fn with_image(mut self, image: FileUpload) -> Self {
        self.image = Some(image);
        self
    }
}

impl Payload for BookCreate {
    fn files(&self) -> Vec<FileUpload> {
        cover_image(self.image.as_ref())
    }
}

/// Payload for updating a book. Unset fields are left unchanged.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct BookUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_template_id: Option<u64>,
    /// Replacement cover image.
    #[serde(skip)]
    pub image: Option<FileUpload>,
}

impl Payload for BookUpdate {
    fn files(&self) -> Vec<FileUpload> {
        cover_image(self.image.as_ref())
    }
}

/// Builds the `image` part for a cover upload.
///
/// Uploads left at the generic MIME type are sent as JPEG.
pub(crate) fn cover_image(image: Option<&FileUpload>) -> Vec<FileUpload> {
    image
        .map(|image| {
            let mut part = image.clone().with_field("image");
            if part.mime_type == crate::clients::DEFAULT_MIME_TYPE {
                part.mime_type = COVER_IMAGE_MIME_TYPE.to_string();
            }
            part
        })
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_book_create_serializes_required_name() {
        let payload = BookCreate::new("Handbook").with_description("Team handbook");
        assert_eq!(
            payload.to_body().unwrap(),
            json!({"name": "Handbook", "description": "Team handbook"})
        );
        assert!(payload.files().is_empty());
    }

    #[test]
    fn test_book_image_is_multipart_file_not_body_field() {
        let payload = BookCreate::new("Handbook")
            .with_image(FileUpload::from_bytes("cover", "cover.jpg", vec![0xFF, 0xD8]));

        let body = payload.to_body().unwrap();
        assert!(body.get("image").is_none());

        let files = payload.files();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].field, "image");
        assert_eq!(files[0].mime_type, "image/jpeg");
    }

    #[test]
    fn test_cover_image_keeps_explicit_mime_type() {
        let upload = FileUpload::from_bytes("image", "cover.png", vec![]).with_mime_type("image/png");
        let files = cover_image(Some(&upload));
        assert_eq!(files[0].mime_type, "image/png");
    }

    #[test]
    fn test_book_update_is_sparse() {
        let payload = BookUpdate {
            name: Some("X".to_string()),
            ..Default::default()
        };
        assert_eq!(payload.to_body().unwrap(), json!({"name": "X"}));
    }
}
