//! Core of the docstash project: an embeddable in-memory document repository.
//!
//! This crate provides:
//!
//! - **Data model** ([`document`]) - Documents, authors and identifier generation
//! - **Search criteria** ([`query`]) - Search requests and the filter expressions they lower into
//! - **Store backend abstraction** ([`backend`]) - Traits for implementing storage backends
//! - **Document store** ([`store`]) - The `save` / `find_by_id` / `search` entry point
//! - **Options** ([`options`]) - Store configuration
//! - **Error handling** ([`error`]) - Error types and result types
//!
//! # Example
//!
//! ```ignore
//! use docstash::{prelude::*, memory::InMemoryStore};
//!
//! let store = DocumentStore::new(InMemoryStore::new());
//!
//! let saved = store
//!     .save(
//!         Document::builder()
//!             .title("Title")
//!             .content("This is the content of the document.")
//!             .author(Author::new("author1", "Author Name"))
//!             .build(),
//!     )
//!     .await?;
//!
//! let hits = store
//!     .search(&SearchRequest::builder().title_prefixes(["Tit"]).build())
//!     .await?;
//! ```

#[allow(unused_extern_crates)]
extern crate self as docstash_core;

pub mod backend;
pub mod document;
pub mod error;
pub mod options;
pub mod query;
pub mod store;
