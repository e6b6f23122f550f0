//! In-memory document storage backend for docstash.
//!
//! This crate provides a thread-safe, in-memory implementation of the `StoreBackend` trait.
//! It uses async-aware read-write locks for concurrent access.
//!
//! # Features
//!
//! - **Thread-safe access** - Concurrent reads and atomic upserts using an async-aware RwLock
//! - **Typed storage** - Stores documents as-is, keyed by identifier
//! - **Full filter support** - Evaluates every filter expression the core crate can build
//!
//! # Quick Start
//!
//! ```ignore
//! use docstash::{prelude::*, memory::InMemoryStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = InMemoryStore::builder().build().await?;
//!     let store = DocumentStore::new(backend);
//!
//!     let saved = store
//!         .save(Document::builder().title("Title").build())
//!         .await?;
//!
//!     assert!(saved.id.is_some());
//!
//!     Ok(())
//! }
//! ```

#[allow(unused_extern_crates)]
extern crate self as docstash_memory;

pub mod store;
mod evaluator;

pub use store::{InMemoryStore, InMemoryStoreBuilder};
