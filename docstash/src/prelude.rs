//! Convenient re-exports of commonly used types from docstash.
//!
//! ```ignore
//! use docstash::prelude::*;
//! ```

pub use chrono::{DateTime, Utc};

pub use docstash_core::{
    backend::{StoreBackend, StoreBackendBuilder},
    document::{Author, Document, DocumentBuilder},
    error::{DocumentStoreError, DocumentStoreResult},
    options::{MissingAuthorPolicy, StoreOptions},
    query::{DocumentField, Expr, FieldOp, Filter, QueryVisitor, SearchRequest, SearchRequestBuilder, Value},
    store::DocumentStore,
};
