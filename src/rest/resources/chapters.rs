//! Chapter resource implementation.
//!
//! Chapters group pages into sections within a book.

use serde::Serialize;

use crate::clients::RestClient;
use crate::rest::resources::Tag;
use crate::rest::{
    Creatable, Deletable, Exportable, Filters, Listable, Payload, Readable, Record, Resource,
    ResourceError, Updatable,
};

/// Handle for the `chapters` endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Chapters<'a> {
    client: &'a RestClient,
}

impl<'a> Chapters<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Lists every chapter in a book.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] for transport and decoding errors.
    pub async fn list_by_book(&self, book_id: u64) -> Result<Vec<Record>, ResourceError> {
        self.list_all(None, &Filters::new().with("book_id", book_id))
            .await
    }
}

impl Resource for Chapters<'_> {
    const ENDPOINT: &'static str = "chapters";
    const NAME: &'static str = "Chapter";

    fn client(&self) -> &RestClient {
        self.client
    }
}

impl Listable for Chapters<'_> {}
impl Readable for Chapters<'_> {}
impl Deletable for Chapters<'_> {}
impl Exportable for Chapters<'_> {}

impl Creatable for Chapters<'_> {
    type Create = ChapterCreate;
}

impl Updatable for Chapters<'_> {
    type Update = ChapterUpdate;
}

/// Payload for creating a chapter.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct ChapterCreate {
    /// Book to create the chapter in.
    pub book_id: u64,
    /// Chapter title (max 255 characters).
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_template_id: Option<u64>,
}

impl ChapterCreate {
    /// Starts a chapter payload with the required fields.
    #[must_use]
    pub fn new(book_id: u64, name: impl Into<String>) -> Self {
        Self {
            book_id,
            name: name.into(),
            ..Default::default()
        }
    }
}

impl Payload for ChapterCreate {}

/// Payload for updating a chapter. Setting `book_id` moves the chapter.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct ChapterUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_template_id: Option<u64>,
}

impl Payload for ChapterUpdate {}
