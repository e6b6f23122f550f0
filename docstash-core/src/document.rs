//! Core types for document representation and serialization.
//!
//! A [`Document`] is the record kept by a store. It embeds its [`Author`] by value
//! and carries a caller-supplied creation timestamp that the store never touches.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, from_value, to_value};
use uuid::Uuid;

use crate::error::DocumentStoreResult;

/// A named identity referenced by a document.
///
/// Authors are not stored on their own. Uniqueness of `id` is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Author {
    /// Caller-assigned identifier, matched by `author_ids` search criteria.
    pub id: String,
    /// Display label.
    pub name: String,
}

impl Author {
    /// Creates a new author.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }
}

/// A stored record.
///
/// Every field is optional on input. After a successful save the returned
/// document always has `id` set.
///
/// # Example
///
/// ```ignore
/// use docstash::prelude::*;
///
/// let document = Document::builder()
///     .title("Title")
///     .content("This is the content of the document.")
///     .author(Author::new("author1", "Author Name"))
///     .created(chrono::Utc::now())
///     .build();
///
/// assert!(document.id.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    /// Set by the caller. Stores never synthesize or modify it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

impl Document {
    /// Creates a new document builder with every field unset.
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::default()
    }

    /// Returns the identifier of the referenced author, if there is one.
    pub fn author_id(&self) -> Option<&str> {
        self.author
            .as_ref()
            .map(|author| author.id.as_str())
    }

    /// Converts this document to a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> DocumentStoreResult<Value> {
        Ok(to_value(self)?)
    }

    /// Creates a document from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails or the structure is invalid.
    pub fn from_json(value: Value) -> DocumentStoreResult<Self> {
        Ok(from_value(value)?)
    }
}

/// Builder for constructing [`Document`] instances.
#[derive(Debug, Clone, Default)]
pub struct DocumentBuilder {
    document: Document,
}

impl DocumentBuilder {
    /// Sets the document identifier.
    ///
    /// Only an identifier that already exists in the store survives a save.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.document.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.document.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.document.content = Some(content.into());
        self
    }

    pub fn author(mut self, author: Author) -> Self {
        self.document.author = Some(author);
        self
    }

    pub fn created(mut self, created: DateTime<Utc>) -> Self {
        self.document.created = Some(created);
        self
    }

    /// Builds and returns the final document.
    pub fn build(self) -> Document {
        self.document
    }
}

/// Generates a fresh document identifier: a random UUID v4 in hyphenated form.
pub fn new_document_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn builder_sets_fields() {
        let created = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let document = Document::builder()
            .title("Title")
            .content("body")
            .author(Author::new("author1", "Author Name"))
            .created(created)
            .build();

        assert_eq!(document.id, None);
        assert_eq!(document.title.as_deref(), Some("Title"));
        assert_eq!(document.content.as_deref(), Some("body"));
        assert_eq!(document.author_id(), Some("author1"));
        assert_eq!(document.created, Some(created));
    }

    #[test]
    fn json_skips_absent_fields() {
        let document = Document::builder().title("Title").build();
        assert_eq!(document.to_json().unwrap(), json!({ "title": "Title" }));
    }

    #[test]
    fn from_json_rejects_malformed_author() {
        let result = Document::from_json(json!({ "author": { "id": 7 } }));
        assert!(matches!(result, Err(crate::error::DocumentStoreError::Serialization(_))));
    }

    #[test]
    fn generated_ids_are_canonical_uuids() {
        let id = new_document_id();
        assert_eq!(id.len(), 36);
        assert!(Uuid::parse_str(&id).is_ok());
        assert_ne!(id, new_document_id());
    }
}
