//! Storage backend abstraction for the document store.
//!
//! A backend owns the identifier-to-document map. It is responsible for the
//! identity rule on upsert, because the existence check and the insert must be
//! performed atomically with respect to other writers.
//!
//! # Traits
//!
//! - [`StoreBackend`]: The core trait for storage backends
//! - [`StoreBackendBuilder`]: Factory trait for creating backend instances

use async_trait::async_trait;
use std::fmt::Debug;

use crate::{document::Document, error::DocumentStoreResult, query::Expr};

/// Abstract interface for document storage backends.
///
/// # Thread Safety
///
/// All implementations must be thread-safe and support concurrent access from multiple
/// async tasks. The exact concurrency model is implementation-specific but should be
/// documented by the implementer.
#[async_trait]
pub trait StoreBackend: Send + Sync + Debug {
    /// Inserts or replaces a document and returns it with its final identifier.
    ///
    /// If the document's `id` is unset, or is set but not present in the store, a
    /// fresh identifier from [`new_document_id`](crate::document::new_document_id)
    /// replaces it. If the `id` is already present, the stored document is replaced
    /// entirely. The check and the write must be atomic.
    async fn upsert_document(&self, document: Document) -> DocumentStoreResult<Document>;

    /// Retrieves a document by identifier, or `None` if there is no such document.
    async fn get_document(&self, id: &str) -> DocumentStoreResult<Option<Document>>;

    /// Returns every document matching `filter`, or every document when `filter` is `None`.
    ///
    /// No ordering is guaranteed.
    async fn query_documents(&self, filter: Option<Expr>) -> DocumentStoreResult<Vec<Document>>;

    /// Returns the number of stored documents.
    async fn count_documents(&self) -> DocumentStoreResult<usize>;
}

#[async_trait]
impl<B> StoreBackend for &B
where
    B: StoreBackend,
{
    async fn upsert_document(&self, document: Document) -> DocumentStoreResult<Document> {
        (*self).upsert_document(document).await
    }

    async fn get_document(&self, id: &str) -> DocumentStoreResult<Option<Document>> {
        (*self).get_document(id).await
    }

    async fn query_documents(&self, filter: Option<Expr>) -> DocumentStoreResult<Vec<Document>> {
        (*self).query_documents(filter).await
    }

    async fn count_documents(&self) -> DocumentStoreResult<usize> {
        (*self).count_documents().await
    }
}

/// Factory trait for creating backend instances.
#[async_trait]
pub trait StoreBackendBuilder {
    type Backend: StoreBackend;

    async fn build(self) -> DocumentStoreResult<Self::Backend>;
}
