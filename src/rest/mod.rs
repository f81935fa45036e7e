//! REST resource infrastructure for the BookStack API.
//!
//! This module provides:
//!
//! - **Capability traits**: [`Resource`], [`Listable`], [`Readable`],
//!   [`Creatable`], [`Updatable`], [`Deletable`], [`Exportable`]
//! - **[`Payload`]**: Request bodies with local validation and file parts
//! - **[`Record`]** and **[`ListResponse`]**: Opaque JSON results
//! - **[`ListParams`]** and **[`Filters`]**: List query parameters
//! - **[`ResourceError`]**: Error type for resource operations
//!
//! Concrete resources live in the [`resources`] submodule and are obtained
//! from the client (`client.books()`, `client.pages()`, ...).
//!
//! # Example
//!
//! ```rust,ignore
//! use bookstack_api::rest::{Exportable, Filters, Listable, Updatable};
//! use bookstack_api::rest::resources::BookUpdate;
//!
//! let books = client.books();
//!
//! let all = books.list_all(Some("+name"), &Filters::new()).await?;
//!
//! let update = BookUpdate { name: Some("Handbook".into()), ..Default::default() };
//! books.update(1, &update).await?; // PUT books/1 {"name":"Handbook"}
//!
//! let pdf = books.export_pdf(1).await?;
//! ```

mod errors;
mod resource;
mod response;

pub mod resources;

pub use errors::ResourceError;
pub use resource::{
    decode_list, into_record, Creatable, Deletable, ExportFormat, Exportable, Listable, Payload,
    Readable, Resource, Updatable,
};
pub use response::{Filters, ListParams, ListResponse, Record};
