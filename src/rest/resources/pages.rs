//! Page resource implementation.
//!
//! Pages hold the actual content in BookStack. A page lives directly in a
//! book or inside one of the book's chapters.
//!
//! # Example
//!
//! ```rust,ignore
//! use bookstack_api::rest::{Creatable, Exportable, Readable};
//! use bookstack_api::rest::resources::PageCreate;
//!
//! let pages = client.pages();
//!
//! let created = pages
//!     .create(&PageCreate::in_book(1, "Install guide").with_markdown("# Install"))
//!     .await?;
//!
//! let page = pages.read(7).await?;
//! let markdown = pages.export_markdown(7).await?;
//! ```

use serde::Serialize;

use crate::clients::RestClient;
use crate::rest::resources::Tag;
use crate::rest::{
    Creatable, Deletable, Exportable, Filters, Listable, Payload, Readable, Record, Resource,
    ResourceError, Updatable,
};

/// Handle for the `pages` endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Pages<'a> {
    client: &'a RestClient,
}

impl<'a> Pages<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Lists every page in a book.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] for transport and decoding errors.
    pub async fn list_by_book(&self, book_id: u64) -> Result<Vec<Record>, ResourceError> {
        self.list_all(None, &Filters::new().with("book_id", book_id))
            .await
    }

    /// Lists every page in a chapter.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] for transport and decoding errors.
    pub async fn list_by_chapter(&self, chapter_id: u64) -> Result<Vec<Record>, ResourceError> {
        self.list_all(None, &Filters::new().with("chapter_id", chapter_id))
            .await
    }
}

impl Resource for Pages<'_> {
    const ENDPOINT: &'static str = "pages";
    const NAME: &'static str = "Page";

    fn client(&self) -> &RestClient {
        self.client
    }
}

impl Listable for Pages<'_> {}
impl Readable for Pages<'_> {}
impl Deletable for Pages<'_> {}
impl Exportable for Pages<'_> {}

impl Creatable for Pages<'_> {
    type Create = PageCreate;
}

impl Updatable for Pages<'_> {
    type Update = PageUpdate;
}

/// Payload for creating a page.
///
/// One of `book_id` or `chapter_id` is required. Content is given as either
/// `html` or `markdown`, not both.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct PageCreate {
    /// Page title (max 255 characters).
    pub name: String,

    /// Book to create the page in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_id: Option<u64>,

    /// Chapter to create the page in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter_id: Option<u64>,

    /// Content as HTML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,

    /// Content as Markdown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    /// Sort order within the parent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

impl PageCreate {
    /// Starts a page directly inside a book.
    #[must_use]
    pub fn in_book(book_id: u64, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            book_id: Some(book_id),
            ..Default::default()
        }
    }

    /// Starts a page inside a chapter.
    #[must_use]
    pub fn in_chapter(chapter_id: u64, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            chapter_id: Some(chapter_id),
            ..Default::default()
        }
    }

    /// Sets HTML content.
    #[must_use]
    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    /// Sets Markdown content.
    #[must_use]
    pub fn with_markdown(mut self, markdown: impl Into<String>) -> Self {
        self.markdown = Some(markdown.into());
        self
    }

    /// Sets tags.
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = Some(tags);
        self
    }
}

impl Payload for PageCreate {
    fn validate(&self) -> Result<(), ResourceError> {
        if self.book_id.is_none() && self.chapter_id.is_none() {
            return Err(ResourceError::validation(
                Pages::NAME,
                "Either book_id or chapter_id must be provided",
            ));
        }
        if self.html.is_some() && self.markdown.is_some() {
            return Err(ResourceError::validation(
                Pages::NAME,
                "Provide either html or markdown content, not both",
            ));
        }
        Ok(())
    }
}

/// Payload for updating a page.
///
/// Setting `book_id` or `chapter_id` moves the page.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct PageUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub book_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

impl Payload for PageUpdate {}
