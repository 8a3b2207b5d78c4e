//! List pagination: the `Page` response envelope and request paging params.

use serde::Deserialize;
use serde::Serialize;

/// A single page of list results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Page number.
    pub page: i64,
    /// Page size.
    pub size: i64,
    /// Total number of items across all pages.
    pub total: i64,
    /// Whether more pages are available.
    pub has_more: bool,
    /// Whether `total` is an estimate.
    #[serde(default)]
    pub total_is_estimated: bool,
}

/// Sort direction for list calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    /// Column to sort by.
    pub column: String,
    /// Sort in descending order.
    pub descending: bool,
}

/// Optional paging parameters for list calls.
///
/// Every field is optional; only set fields are encoded as query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageParams {
    /// Page number to fetch.
    pub page: Option<i64>,
    /// Page size.
    pub size: Option<i64>,
    /// Sort order.
    pub sort: Option<Sort>,
}

impl PageParams {
    /// Create empty paging parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page number.
    pub fn page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size.
    pub fn size(mut self, size: i64) -> Self {
        self.size = Some(size);
        self
    }

    /// Sort by the given column.
    pub fn sort(mut self, column: impl Into<String>, descending: bool) -> Self {
        self.sort = Some(Sort {
            column: column.into(),
            descending,
        });
        self
    }

    /// Encode the set parameters as query key/value pairs.
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(size) = self.size {
            query.push(("size", size.to_string()));
        }
        if let Some(sort) = &self.sort {
            query.push(("sort_column", sort.column.clone()));
            query.push(("sort_desc", sort.descending.to_string()));
        }
        query
    }
}
