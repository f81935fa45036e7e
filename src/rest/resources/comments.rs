//! Comment resource implementation.
//!
//! Comments belong to pages and can be nested as replies.

use serde::Serialize;

use crate::clients::RestClient;
use crate::rest::{
    Creatable, Deletable, Filters, Listable, Payload, Readable, Record, Resource, ResourceError,
    Updatable,
};

/// Handle for the `comments` endpoint.
#[derive(Debug, Clone, Copy)]
pub struct Comments<'a> {
    client: &'a RestClient,
}

impl<'a> Comments<'a> {
    pub(crate) const fn new(client: &'a RestClient) -> Self {
        Self { client }
    }

    /// Lists every comment on a page.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::Rest`] for transport and decoding errors.
    pub async fn list_by_page(&self, page_id: u64) -> Result<Vec<Record>, ResourceError> {
        self.list_all(None, &Filters::new().with("commentable_id", page_id))
            .await
    }
}

impl Resource for Comments<'_> {
    const ENDPOINT: &'static str = "comments";
    const NAME: &'static str = "Comment";

    fn client(&self) -> &RestClient {
        self.client
    }
}

impl Listable for Comments<'_> {}
impl Readable for Comments<'_> {}
impl Deletable for Comments<'_> {}

impl Creatable for Comments<'_> {
    type Create = CommentCreate;
}

impl Updatable for Comments<'_> {
    type Update = CommentUpdate;
}

/// Payload for creating a comment.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CommentCreate {
    pub page_id: u64,
    /// Comment body as HTML.
    pub html: String,
    /// Page-local ID of the parent comment when replying.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_ref: Option<String>,
}

impl CommentCreate {
    /// Starts a top-level comment.
    #[must_use]
    pub fn new(page_id: u64, html: impl Into<String>) -> Self {
        Self {
            page_id,
            html: html.into(),
            ..Default::default()
        }
    }

    /// Makes this a reply to another comment.
    #[must_use]
    pub const fn reply_to(mut self, local_id: u64) -> Self {
        self.reply_to = Some(local_id);
        self
    }
}

impl Payload for CommentCreate {}

/// Payload for updating a comment. Only top-level comments can be archived.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct CommentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

impl Payload for CommentUpdate {}
