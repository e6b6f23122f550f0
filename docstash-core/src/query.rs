//! Search criteria and filter expressions.
//!
//! Callers describe what they are looking for with a [`SearchRequest`]. Before it
//! reaches a backend the request is lowered into an [`Expr`] tree, which backends
//! walk with a [`QueryVisitor`].
//!
//! # Search requests
//!
//! ```ignore
//! use docstash::query::SearchRequest;
//!
//! let request = SearchRequest::builder()
//!     .title_prefixes(["Tit", "Sub"])
//!     .author_ids(["author1"])
//!     .build();
//! ```
//!
//! Every criterion is optional. A document matches when it satisfies all of the
//! criteria that were set. Within a list criterion a single hit is enough.
//!
//! # Filter expressions
//!
//! The [`Filter`] struct provides constructors for field comparisons:
//!
//! - String: `eq`, `starts_with`, `contains`
//! - Membership: `any_of`
//! - Ordering: `gte`, `lte`
//! - Logical: `and`, `or`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DocumentStoreError;

/// A bundle of optional search criteria combined with logical AND.
///
/// A list criterion counts as set as soon as it is `Some`, even when empty. An
/// empty list can never be satisfied, so it matches no documents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    /// The title must start with at least one of these prefixes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_prefixes: Option<Vec<String>>,
    /// The content must contain at least one of these substrings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contains_contents: Option<Vec<String>>,
    /// The author id must be one of these.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_ids: Option<Vec<String>>,
    /// Inclusive lower bound on `created`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `created`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_to: Option<DateTime<Utc>>,
}

impl SearchRequest {
    /// Creates a request with no criteria. It matches every document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new search request builder.
    pub fn builder() -> SearchRequestBuilder {
        SearchRequestBuilder::default()
    }

    /// Returns the number of criteria categories that are set.
    pub fn criteria_count(&self) -> usize {
        [
            self.title_prefixes.is_some(),
            self.contains_contents.is_some(),
            self.author_ids.is_some(),
            self.created_from.is_some(),
            self.created_to.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }

    /// Lowers this request into a filter expression.
    ///
    /// Returns `None` when no criteria are set, meaning every document matches.
    pub fn to_filter(&self) -> Option<Expr> {
        let mut clauses = Vec::with_capacity(self.criteria_count());

        if let Some(prefixes) = &self.title_prefixes {
            clauses.push(Filter::or(
                prefixes
                    .iter()
                    .map(|prefix| Filter::starts_with(DocumentField::Title, prefix.as_str())),
            ));
        }

        if let Some(needles) = &self.contains_contents {
            clauses.push(Filter::or(
                needles
                    .iter()
                    .map(|needle| Filter::contains(DocumentField::Content, needle.as_str())),
            ));
        }

        if let Some(author_ids) = &self.author_ids {
            clauses.push(Filter::any_of(DocumentField::AuthorId, author_ids.clone()));
        }

        if let Some(from) = self.created_from {
            clauses.push(Filter::gte(DocumentField::Created, from));
        }

        if let Some(to) = self.created_to {
            clauses.push(Filter::lte(DocumentField::Created, to));
        }

        match clauses.len() {
            0 => None,
            1 => clauses.pop(),
            _ => Some(Filter::and(clauses)),
        }
    }
}

/// Builder for constructing [`SearchRequest`] instances.
#[derive(Debug, Clone, Default)]
pub struct SearchRequestBuilder {
    request: SearchRequest,
}

impl SearchRequestBuilder {
    pub fn title_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.title_prefixes = Some(prefixes.into_iter().map(Into::into).collect());
        self
    }

    pub fn contains_contents<I, S>(mut self, needles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.contains_contents = Some(needles.into_iter().map(Into::into).collect());
        self
    }

    pub fn author_ids<I, S>(mut self, author_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.request.author_ids = Some(author_ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn created_from(mut self, from: DateTime<Utc>) -> Self {
        self.request.created_from = Some(from);
        self
    }

    pub fn created_to(mut self, to: DateTime<Utc>) -> Self {
        self.request.created_to = Some(to);
        self
    }

    /// Builds and returns the final request.
    pub fn build(self) -> SearchRequest {
        self.request
    }
}

/// The document fields a filter expression can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentField {
    Id,
    Title,
    Content,
    /// The `id` of the embedded author.
    AuthorId,
    /// The `name` of the embedded author.
    AuthorName,
    Created,
}

/// Field comparison operators for filter expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOp {
    /// Equal to (exact match).
    Eq,
    /// String starts with value.
    StartsWith,
    /// String contains value.
    Contains,
    /// Field equals any of the listed values.
    AnyOf,
    /// Greater than or equal to.
    Gte,
    /// Less than or equal to.
    Lte,
}

/// The right-hand side of a field comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    List(Vec<String>),
    DateTime(DateTime<Utc>),
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Vec<String>> for Value {
    fn from(values: Vec<String>) -> Self {
        Value::List(values)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::DateTime(value)
    }
}

/// A filter expression over documents.
///
/// An empty `And` is always true and an empty `Or` is always false.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Logical AND of multiple expressions (all must match).
    And(Vec<Expr>),
    /// Logical OR of multiple expressions (any must match).
    Or(Vec<Expr>),
    /// Field comparison expression. An absent field never matches.
    Field {
        field: DocumentField,
        op: FieldOp,
        value: Value,
    },
}

impl Expr {
    /// Creates a field comparison expression.
    pub fn field(field: DocumentField, op: FieldOp, value: Value) -> Self {
        Expr::Field { field, op, value }
    }

    /// Combines this expression with another using logical AND.
    ///
    /// If this expression is already an AND, the other expression is appended
    /// to the list. Otherwise, a new AND expression is created.
    pub fn and(self, other: Expr) -> Self {
        match self {
            Expr::And(mut list) => {
                list.push(other);
                Expr::And(list)
            }
            _ => Expr::And(vec![self, other]),
        }
    }

    /// Combines this expression with another using logical OR.
    pub fn or(self, other: Expr) -> Self {
        match self {
            Expr::Or(mut list) => {
                list.push(other);
                Expr::Or(list)
            }
            _ => Expr::Or(vec![self, other]),
        }
    }
}

/// Helper struct for constructing filter expressions.
pub struct Filter;

impl Filter {
    /// Matches documents where the field equals the value.
    pub fn eq(field: DocumentField, value: impl Into<Value>) -> Expr {
        Expr::field(field, FieldOp::Eq, value.into())
    }

    /// Matches documents where the string field starts with the value.
    pub fn starts_with(field: DocumentField, value: impl Into<Value>) -> Expr {
        Expr::field(field, FieldOp::StartsWith, value.into())
    }

    /// Matches documents where the string field contains the value.
    pub fn contains(field: DocumentField, value: impl Into<Value>) -> Expr {
        Expr::field(field, FieldOp::Contains, value.into())
    }

    /// Matches documents where the field equals one of the listed values.
    pub fn any_of(field: DocumentField, values: impl Into<Value>) -> Expr {
        Expr::field(field, FieldOp::AnyOf, values.into())
    }

    /// Matches documents where the field is greater than or equal to the value.
    pub fn gte(field: DocumentField, value: impl Into<Value>) -> Expr {
        Expr::field(field, FieldOp::Gte, value.into())
    }

    /// Matches documents where the field is less than or equal to the value.
    pub fn lte(field: DocumentField, value: impl Into<Value>) -> Expr {
        Expr::field(field, FieldOp::Lte, value.into())
    }

    /// Combines expressions such that all must match.
    pub fn and(exprs: impl IntoIterator<Item = Expr>) -> Expr {
        Expr::And(exprs.into_iter().collect())
    }

    /// Combines expressions such that any can match.
    pub fn or(exprs: impl IntoIterator<Item = Expr>) -> Expr {
        Expr::Or(exprs.into_iter().collect())
    }
}

/// Walks a filter expression. Backends implement this to evaluate or translate filters.
pub trait QueryVisitor {
    type Output;
    type Error: Into<DocumentStoreError>;

    fn visit_and(&mut self, exprs: &[Expr]) -> Result<Self::Output, Self::Error>;
    fn visit_or(&mut self, exprs: &[Expr]) -> Result<Self::Output, Self::Error>;
    fn visit_field(
        &mut self,
        field: DocumentField,
        op: FieldOp,
        value: &Value,
    ) -> Result<Self::Output, Self::Error>;

    fn visit_expr(&mut self, expr: &Expr) -> Result<Self::Output, Self::Error> {
        match expr {
            Expr::And(exprs) => self.visit_and(exprs),
            Expr::Or(exprs) => self.visit_or(exprs),
            Expr::Field { field, op, value } => self.visit_field(*field, *op, value),
        }
    }
}
