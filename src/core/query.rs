//! Query parameters for filtering and sorting
//!
//! A [`ListQuery`] describes one read over a collection: an optional
//! free-text search, zero or more exact-match field filters, and an optional
//! sort. Queries are plain values; applying one is the job of
//! [`ListStore::query`](crate::core::store::ListStore::query).
//!
//! # Example
//! ```rust,ignore
//! // All Apparel products matching "shirt", most expensive first:
//! let query = ListQuery::new()
//!     .search("shirt")
//!     .filter("category", "Apparel")
//!     .sort("price", SortDirection::Descending);
//!
//! // The same sort from a compact expression:
//! let query = ListQuery::new().sort_expr("price:desc");
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::field::FieldValue;

/// Sort order applied after filtering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

/// Sort field and direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub field: String,
    pub direction: SortDirection,
}

impl Sort {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Parse a sort expression.
    ///
    /// # Format
    /// - `field:asc` or `field` (ascending)
    /// - `field:desc` (descending)
    ///
    /// Returns `None` for an empty field or an unknown direction.
    pub fn parse(expr: &str) -> Option<Self> {
        let (field, direction) = match expr.split_once(':') {
            Some((field, dir)) => {
                let direction = match dir {
                    "asc" => SortDirection::Ascending,
                    "desc" => SortDirection::Descending,
                    _ => return None,
                };
                (field, direction)
            }
            None => (expr, SortDirection::Ascending),
        };
        let field = field.trim();
        if field.is_empty() {
            return None;
        }
        Some(Self::new(field, direction))
    }
}

/// Query parameters for one read over a collection.
///
/// All parts are optional; the default query returns every record in
/// insertion order.
///
/// - `search`: case-insensitive substring match over the record type's
///   searchable fields; empty means no filter
/// - `filters`: exact-match constraints per field; a blank value (null or
///   empty string) means no constraint for that field
/// - `sort`: comparison key and direction; records whose sort field is
///   missing keep their input order relative to each other and sort before
///   records that have the field
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListQuery {
    pub search: Option<String>,
    pub filters: IndexMap<String, FieldValue>,
    pub sort: Option<Sort>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text search term
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Add an exact-match constraint on a field
    pub fn filter(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.filters.insert(field.into(), value.into());
        self
    }

    /// Set the sort field and direction
    pub fn sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = Some(Sort::new(field, direction));
        self
    }

    /// Set the sort from a `field:asc` / `field:desc` expression.
    /// Invalid expressions leave the query unsorted.
    pub fn sort_expr(mut self, expr: &str) -> Self {
        self.sort = Sort::parse(expr);
        self
    }
}
