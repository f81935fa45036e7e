//! Shelf resource implementation.
//!
//! Shelves group related books. Reading a shelf returns its `books` list.

use serde::Serialize;

use crate::clients::{FileUpload, RestClient};
use crate::rest::resources::books::cover_image;
use crate::rest::resources::Tag;
use crate::rest::{Creatable, Deletable, Listable, Payload, Readable, Resource, Updatable};

/// Handle for the `shelves` endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Shelves<'a> {
    client: &'a RestClient,
}

impl<'a> Shelves<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }
}

impl Resource for Shelves<'_> {
    const ENDPOINT: &'static str = "shelves";
    const NAME: &'static str = "Shelf";

    fn client(&self) -> &RestClient {
        self.client
    }
}

impl Listable for Shelves<'_> {}
impl Readable for Shelves<'_> {}
impl Deletable for Shelves<'_> {}

impl Creatable for Shelves<'_> {
    type Create = ShelfCreate;
}

impl Updatable for Shelves<'_> {
    type Update = ShelfUpdate;
}

/// Payload for creating a shelf.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct ShelfCreate {
    /// Shelf title (max 255 characters).
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_html: Option<String>,
    /// Book IDs to place on the shelf, in display order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub books: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// Cover image, sent as the `image` multipart field.
    #[serde(skip)]
    pub image: Option<FileUpload>,
}

impl ShelfCreate {
    /// Starts a shelf payload with the required name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Sets the books on the shelf.
    #[must_use]
    pub fn with_books(mut self, books: Vec<u64>) -> Self {
        self.books = Some(books);
        self
    }

    /// Sets the cover image.
    #[must_use]
    pub fn with_image(mut self, image: FileUpload) -> Self {
        self.image = Some(image);
        self
    }
}

impl Payload for ShelfCreate {
    fn files(&self) -> Vec<FileUpload> {
        cover_image(self.image.as_ref())
    }
}

/// Payload for updating a shelf. `books` replaces the existing assignment.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct ShelfUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub books: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip)]
    pub image: Option<FileUpload>,
}

impl Payload for ShelfUpdate {
    fn files(&self) -> Vec<FileUpload> {
        cover_image(self.image.as_ref())
    }
}
