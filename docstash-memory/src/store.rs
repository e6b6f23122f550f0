//! In-memory storage implementation for document stores.
//!
//! Documents live in a `HashMap` keyed by identifier, behind an async-aware
//! read-write lock.

use std::{collections::HashMap, sync::Arc};
use async_trait::async_trait;
use mea::rwlock::RwLock;

use docstash_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    document::{Document, new_document_id},
    error::DocumentStoreResult,
    query::Expr,
};

use crate::evaluator::DocumentEvaluator;

pub const TRACING_TARGET: &str = "docstash_memory::store";

type DocumentMap = HashMap<String, Document>;


/// Thread-safe in-memory document storage backend.
///
/// # Thread Safety
///
/// `InMemoryStore` is cloneable and uses an `Arc`-wrapped internal state, allowing
/// it to be safely shared across async tasks. Multiple clones of the same instance
/// share the same underlying data. An upsert holds the write lock for the whole
/// existence check and insert, so concurrent saves never race on an identifier.
///
/// # Performance
///
/// Searches scan every document (no indexing).
///
/// # Example
///
/// ```ignore
/// use docstash_memory::InMemoryStore;
/// use docstash::backend::StoreBackend;
///
/// let store = InMemoryStore::new();
/// let saved = store.upsert_document(Document::builder().title("Title").build()).await?;
/// assert!(store.get_document(saved.id.as_deref().unwrap()).await?.is_some());
/// ```
#[derive(Default, Clone, Debug)]
pub struct InMemoryStore {
    /// document_id -> document
    documents: Arc<RwLock<DocumentMap>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory document store.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new empty store with room for at least `capacity` documents.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            documents: Arc::new(RwLock::new(DocumentMap::with_capacity(capacity))),
        }
    }

    /// Creates a builder for constructing an `InMemoryStore` with custom options.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = InMemoryStore::builder().with_capacity(1024).build().await?;
    /// ```
    pub fn builder() -> InMemoryStoreBuilder {
        InMemoryStoreBuilder::default()
    }
}


#[async_trait]
impl StoreBackend for InMemoryStore {
    async fn upsert_document(&self, mut document: Document) -> DocumentStoreResult<Document> {
        let mut documents = self.documents.write().await;

        // Only an identifier that is already stored is kept.
        let (id, generated) = match document.id.take() {
            Some(id) if documents.contains_key(&id) => (id, false),
            _ => (new_document_id(), true),
        };

        document.id = Some(id.clone());
        documents.insert(id.clone(), document.clone());

        tracing::trace!(
            target: TRACING_TARGET,
            id = id.as_str(),
            generated,
            total = documents.len(),
            "upserted document"
        );

        Ok(document)
    }

    async fn get_document(&self, id: &str) -> DocumentStoreResult<Option<Document>> {
        Ok(
            self.documents
                .read()
                .await
                .get(id)
                .cloned()
        )
    }

    async fn query_documents(&self, filter: Option<Expr>) -> DocumentStoreResult<Vec<Document>> {
        let documents = self.documents.read().await;

        let matches = match &filter {
            Some(filter) => DocumentEvaluator::filter_documents(documents.values(), filter)?,
            None => documents
                .values()
                .cloned()
                .collect::<Vec<_>>(),
        };

        tracing::trace!(
            target: TRACING_TARGET,
            scanned = documents.len(),
            matches = matches.len(),
            "scanned documents"
        );

        Ok(matches)
    }

    async fn count_documents(&self) -> DocumentStoreResult<usize> {
        Ok(self.documents.read().await.len())
    }
}


/// Builder for constructing [`InMemoryStore`] instances.
#[derive(Debug, Default)]
pub struct InMemoryStoreBuilder {
    capacity: Option<usize>,
}

impl InMemoryStoreBuilder {
    /// Pre-sizes the document map.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }
}

#[async_trait]
impl StoreBackendBuilder for InMemoryStoreBuilder {
    type Backend = InMemoryStore;

    /// Builds and returns a new [`InMemoryStore`] instance.
    ///
    /// This always succeeds and returns a freshly initialized store.
    async fn build(self) -> DocumentStoreResult<Self::Backend> {
        Ok(InMemoryStore::with_capacity(self.capacity.unwrap_or_default()))
    }
}
