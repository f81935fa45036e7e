//! Concrete BookStack resources.
//!
//! Each resource is a lightweight handle borrowed from a
//! [`RestClient`](crate::RestClient) and implements the capability traits
//! its endpoint supports:
//!
//! | Handle | Endpoint | Capabilities |
//! |---|---|---|
//! | [`Pages`] | `pages` | list, read, create, update, delete, export |
//! | [`Books`] | `books` | list, read, create, update, delete, export |
//! | [`Chapters`] | `chapters` | list, read, create, update, delete, export |
//! | [`Shelves`] | `shelves` | list, read, create, update, delete |
//! | [`Users`] | `users` | list, read, create, update, delete |
//! | [`Roles`] | `roles` | list, read, create, update, delete |
//! | [`Comments`] | `comments` | list, read, create, update, delete |
//! | [`Attachments`] | `attachments` | list, read, update, delete |
//! | [`ImageGallery`] | `image-gallery` | list, read, create, update, delete |
//! | [`AuditLog`] | `audit-log` | list |
//! | [`RecycleBin`] | `recycle-bin` | list |
//! | [`Search`] | `search` | |
//! | [`System`] | `system` | |
//! | [`ContentPermissions`] | `content-permissions` | |
//!
//! Convenience filters (`list_by_book`, `list_by_page`, ...) are built on
//! [`Listable::list_all`](crate::rest::Listable::list_all).
//!
//! # Example
//!
//! ```rust,ignore
//! use bookstack_api::rest::{Creatable, Readable};
//! use bookstack_api::rest::resources::{ChapterCreate, PageCreate};
//!
//! let chapter = client.chapters().create(&ChapterCreate::new(1, "Setup")).await?;
//! let chapter_id = chapter["id"].as_u64().unwrap_or_default();
//!
//! client
//!     .pages()
//!     .create(&PageCreate::in_chapter(chapter_id, "Install").with_markdown("# Install"))
//!     .await?;
//!
//! let pages = client.pages().list_by_chapter(chapter_id).await?;
//! ```

mod attachments;
mod audit_log;
mod books;
mod chapters;
mod comments;
mod common;
mod content_permissions;
mod image_gallery;
mod pages;
mod recycle_bin;
mod roles;
mod search;
mod shelves;
mod system;
mod users;

pub use attachments::{AttachmentContent, AttachmentUpdate, Attachments};
pub use audit_log::AuditLog;
pub use books::{BookCreate, BookUpdate, Books, COVER_IMAGE_MIME_TYPE};
pub use chapters::{ChapterCreate, ChapterUpdate, Chapters};
pub use comments::{CommentCreate, CommentUpdate, Comments};
pub use common::Tag;
pub use content_permissions::{
    ContentPermissions, ContentType, FallbackPermissions, PermissionsUpdate, RolePermission,
};
pub use image_gallery::{ImageCreate, ImageGallery, ImageType, ImageUpdate};
pub use pages::{PageCreate, PageUpdate, Pages};
pub use recycle_bin::{DestroyOutcome, RecycleBin};
pub use roles::{RoleCreate, RoleUpdate, Roles};
pub use search::{Search, DEFAULT_MAX_RESULTS, MAX_SEARCH_COUNT};
pub use shelves::{ShelfCreate, ShelfUpdate, Shelves};
pub use system::System;
pub use users::{UserCreate, UserUpdate, Users};
