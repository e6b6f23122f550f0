//! Main docstash crate: an embeddable in-memory document repository.
//!
//! This crate is the primary entry point for users of docstash. It re-exports the
//! core types from `docstash-core` together with the in-memory backend.
//!
//! # Features
//!
//! - **Upsert** - `save` assigns identifiers and replaces stored documents
//! - **Lookup** - `find_by_id` distinguishes found from not found with `Option`
//! - **Multi-criteria search** - title prefixes, content substrings, author ids and
//!   an inclusive creation-time window, combined with logical AND
//!
//! # Quick Start
//!
//! ```ignore
//! use docstash::{prelude::*, memory::InMemoryStore};
//!
//! #[tokio::main]
//! async fn main() {
//!     let store = DocumentStore::new(InMemoryStore::new());
//!     let author = Author::new("author1", "Author Name");
//!
//!     let saved = store
//!         .save(
//!             Document::builder()
//!                 .title("Title")
//!                 .content("This is the content of the document.")
//!                 .author(author.clone())
//!                 .created(Utc::now())
//!                 .build(),
//!         )
//!         .await
//!         .unwrap();
//!
//!     let found = store.find_by_id(saved.id.as_deref().unwrap()).await.unwrap();
//!     assert_eq!(found, Some(saved));
//!
//!     let by_title = store
//!         .search(&SearchRequest::builder().title_prefixes(["Tit"]).build())
//!         .await
//!         .unwrap();
//!
//!     println!("Matched documents: {:?}", by_title);
//! }
//! ```
//!
//! # Missing authors
//!
//! By default a document without an author is stored but never matches an
//! `author_ids` criterion. Use [`options::MissingAuthorPolicy::Reject`] to refuse such
//! documents at save time instead:
//!
//! ```ignore
//! let store = DocumentStore::with_options(
//!     InMemoryStore::new(),
//!     StoreOptions::default().with_missing_author(MissingAuthorPolicy::Reject),
//! );
//! ```

pub mod prelude;

pub use docstash_core::{backend, document, error, options, query, store};

// Re-export chrono for timestamps
pub use chrono;

/// In-memory storage backend implementations.
pub mod memory {
    pub use docstash_memory::{InMemoryStore, InMemoryStoreBuilder};
}
