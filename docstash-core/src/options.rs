//! Store configuration.
//!
//! [`StoreOptions`] derives `Deserialize`, so a host application can embed it in
//! its own configuration file:
//!
//! ```ignore
//! let options: StoreOptions = serde_json::from_str(r#"{ "missing_author": "reject" }"#)?;
//! let store = DocumentStore::with_options(InMemoryStore::new(), options);
//! ```

use serde::{Deserialize, Serialize};

/// How a store treats documents that have no author.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingAuthorPolicy {
    /// Accept the document. It never matches an `author_ids` criterion.
    #[default]
    Unmatched,
    /// Refuse to save the document.
    Reject,
}

/// Options applied by a [`DocumentStore`](crate::store::DocumentStore).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreOptions {
    pub missing_author: MissingAuthorPolicy,
}

impl StoreOptions {
    /// Sets the missing author policy.
    pub fn with_missing_author(mut self, policy: MissingAuthorPolicy) -> Self {
        self.missing_author = policy;
        self
    }
}
