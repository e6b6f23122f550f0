//! Main document store interface.
//!
//! [`DocumentStore`] is the entry point applications use. It wraps a
//! [`StoreBackend`], applies the configured [`StoreOptions`] and lowers search
//! requests into filter expressions before handing them to the backend.
//!
//! # Example
//!
//! ```ignore
//! use docstash::{prelude::*, memory::InMemoryStore};
//!
//! let store = DocumentStore::new(InMemoryStore::new());
//! let saved = store.save(Document::builder().title("Title").build()).await?;
//! let found = store.find_by_id(saved.id.as_deref().unwrap()).await?;
//! ```

use crate::{
    backend::StoreBackend,
    document::Document,
    error::{DocumentStoreError, DocumentStoreResult},
    options::{MissingAuthorPolicy, StoreOptions},
    query::SearchRequest,
};

pub const TRACING_TARGET: &str = "docstash_core::store";

/// A document store bound to a specific backend implementation.
///
/// # Type Parameters
///
/// * `B` - The backend implementation type
#[derive(Debug)]
pub struct DocumentStore<B: StoreBackend> {
    backend: B,
    options: StoreOptions,
}

impl<B: StoreBackend> DocumentStore<B> {
    /// Creates a new document store with the given backend and default options.
    pub fn new(backend: B) -> Self {
        Self::with_options(backend, StoreOptions::default())
    }

    /// Creates a new document store with the given backend and options.
    pub fn with_options(backend: B, options: StoreOptions) -> Self {
        Self { backend, options }
    }

    /// Returns the options this store was created with.
    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Returns a reference to the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Saves a document, inserting it or replacing the stored version.
    ///
    /// The returned document always carries an identifier. A caller-supplied
    /// identifier is kept only if a document with that identifier is already
    /// stored; otherwise a fresh one is generated. `created` is never touched.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentStoreError::InvalidDocument`] if the document has no author
    /// and the store uses [`MissingAuthorPolicy::Reject`]. Backend failures are
    /// propagated.
    pub async fn save(&self, document: Document) -> DocumentStoreResult<Document> {
        if document.author.is_none() && self.options.missing_author == MissingAuthorPolicy::Reject {
            tracing::warn!(
                target: TRACING_TARGET,
                id = ?document.id,
                "rejected document without an author"
            );

            return Err(DocumentStoreError::InvalidDocument(
                "document has no author".to_string(),
            ));
        }

        let requested_id = document.id.clone();
        let saved = self.backend.upsert_document(document).await?;

        tracing::debug!(
            target: TRACING_TARGET,
            id = saved.id.as_deref().unwrap_or_default(),
            overwritten = requested_id.is_some() && requested_id == saved.id,
            "saved document"
        );

        Ok(saved)
    }

    /// Finds a document by its identifier.
    pub async fn find_by_id(&self, id: &str) -> DocumentStoreResult<Option<Document>> {
        let document = self.backend.get_document(id).await?;

        tracing::debug!(
            target: TRACING_TARGET,
            id,
            found = document.is_some(),
            "looked up document"
        );

        Ok(document)
    }

    /// Returns every stored document that satisfies all criteria set on `request`.
    ///
    /// A request with no criteria returns every document. No ordering is guaranteed.
    pub async fn search(&self, request: &SearchRequest) -> DocumentStoreResult<Vec<Document>> {
        let documents = self
            .backend
            .query_documents(request.to_filter())
            .await?;

        tracing::debug!(
            target: TRACING_TARGET,
            criteria = request.criteria_count(),
            matches = documents.len(),
            "searched documents"
        );

        Ok(documents)
    }

    /// Returns the number of stored documents.
    pub async fn count(&self) -> DocumentStoreResult<usize> {
        self.backend.count_documents().await
    }
}
