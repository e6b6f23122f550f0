//! Filter expression evaluation for in-memory documents.
//!
//! This module provides the evaluation engine for filter expressions,
//! resolving document fields and comparing them against filter values.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use docstash_core::{
    document::Document,
    error::{DocumentStoreError, DocumentStoreResult},
    query::{DocumentField, Expr, FieldOp, QueryVisitor, Value},
};

/// Type-erased, comparable view of a document field or filter value.
///
/// # Note
///
/// This is a private implementation detail used for filter evaluation.
#[derive(Debug)]
pub(crate) enum Comparable<'a> {
    /// Absent field
    Null,
    /// String value
    String(&'a str),
    /// DateTime value
    DateTime(DateTime<Utc>),
    /// List of strings
    List(&'a [String]),
}

impl<'a> Comparable<'a> {
    /// Resolves a field of `document`. Absent optionals become [`Comparable::Null`].
    pub fn resolve(document: &'a Document, field: DocumentField) -> Self {
        let value = match field {
            DocumentField::Id => document.id.as_deref().map(Comparable::String),
            DocumentField::Title => document.title.as_deref().map(Comparable::String),
            DocumentField::Content => document.content.as_deref().map(Comparable::String),
            DocumentField::AuthorId => document.author_id().map(Comparable::String),
            DocumentField::AuthorName => document
                .author
                .as_ref()
                .map(|author| Comparable::String(author.name.as_str())),
            DocumentField::Created => document.created.map(Comparable::DateTime),
        };

        value.unwrap_or(Comparable::Null)
    }
}

impl<'a> From<&'a Value> for Comparable<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::String(value) => Comparable::String(value.as_str()),
            Value::List(values) => Comparable::List(values.as_slice()),
            Value::DateTime(value) => Comparable::DateTime(*value),
        }
    }
}

impl<'a> PartialEq for Comparable<'a> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Comparable::String(a), Comparable::String(b)) => a == b,
            (Comparable::DateTime(a), Comparable::DateTime(b)) => a == b,
            (Comparable::List(a), Comparable::List(b)) => a == b,
            _ => false,
        }
    }
}

impl<'a> PartialOrd for Comparable<'a> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Comparable::String(a), Comparable::String(b)) => a.partial_cmp(b),
            (Comparable::DateTime(a), Comparable::DateTime(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

pub(crate) struct DocumentEvaluator<'a> {
    document: &'a Document,
}

impl<'a> DocumentEvaluator<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    pub fn evaluate(&mut self, expr: &Expr) -> DocumentStoreResult<bool> {
        self.visit_expr(expr)
    }

    pub fn filter_documents(
        documents: impl IntoIterator<Item = &'a Document>,
        expr: &Expr,
    ) -> DocumentStoreResult<Vec<Document>> {
        let mut matches = Vec::new();

        for document in documents {
            if DocumentEvaluator::new(document).evaluate(expr)? {
                matches.push(document.clone());
            }
        }

        Ok(matches)
    }
}

impl<'a> QueryVisitor for DocumentEvaluator<'a> {
    type Output = bool;
    type Error = DocumentStoreError;

    fn visit_and(&mut self, exprs: &[Expr]) -> Result<Self::Output, Self::Error> {
        for expr in exprs {
            if !self.visit_expr(expr)? {
                return Ok(false);
            }
        }

        Ok(true)
    }

    fn visit_or(&mut self, exprs: &[Expr]) -> Result<Self::Output, Self::Error> {
        for expr in exprs {
            if self.visit_expr(expr)? {
                return Ok(true);
            }
        }

        Ok(false)
    }

    fn visit_field(
        &mut self,
        field: DocumentField,
        op: FieldOp,
        value: &Value,
    ) -> Result<Self::Output, Self::Error> {
        let left = Comparable::resolve(self.document, field);
        let right = Comparable::from(value);

        if let Comparable::Null = left {
            return Ok(false);
        }

        Ok(match op {
            FieldOp::Eq => left == right,
            FieldOp::Gte => matches!(
                left.partial_cmp(&right),
                Some(Ordering::Greater | Ordering::Equal)
            ),
            FieldOp::Lte => matches!(
                left.partial_cmp(&right),
                Some(Ordering::Less | Ordering::Equal)
            ),
            FieldOp::StartsWith => match (left, right) {
                (Comparable::String(left), Comparable::String(right)) => left.starts_with(right),
                _ => false,
            },
            FieldOp::Contains => match (left, right) {
                (Comparable::String(left), Comparable::String(right)) => left.contains(right),
                _ => false,
            },
            FieldOp::AnyOf => match (left, right) {
                (Comparable::String(left), Comparable::List(values)) => {
                    values.iter().any(|value| value.as_str() == left)
                }
                (left, right) => left == right,
            },
        })
    }
}
