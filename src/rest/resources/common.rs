//! Types shared by several resource payloads.

use serde::{Deserialize, Serialize};

/// A name/value tag attached to books, chapters, pages, and shelves.
///
/// # Example
///
/// ```rust
/// use bookstack_api::rest::resources::Tag;
///
/// let tag = Tag::new("status", "draft");
/// assert_eq!(serde_json::to_string(&tag).unwrap(), r#"{"name":"status","value":"draft"}"#);
///
/// let bare = Tag::name_only("archived");
/// assert_eq!(serde_json::to_string(&bare).unwrap(), r#"{"name":"archived"}"#);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Tag {
    /// Tag name.
    pub name: String,
    /// Optional tag value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Tag {
    /// Creates a tag with a value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Creates a tag without a value.
    #[must_use]
    pub fn name_only(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }
}
