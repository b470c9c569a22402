//! Text search over the catalog.

use crate::catalog::{Catalog, Product};
use crate::search::ProductFilter;

/// A text search request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    /// The query as typed by the shopper, trimmed.
    pub query: String,
}

impl SearchQuery {
    /// Create a new search query.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self {
            query: raw.as_ref().trim().to_string(),
        }
    }

    /// Check if the query is blank (matches the full catalog).
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    /// The filter this query applies.
    pub fn filter(&self) -> ProductFilter {
        ProductFilter::text(&self.query)
    }

    /// Run the query against a catalog.
    pub fn run<'a>(&self, catalog: &'a Catalog) -> SearchResults<'a> {
        let items = catalog.select(&self.filter());
        SearchResults {
            query: self.query.clone(),
            result_count: items.len(),
            items,
        }
    }
}

/// Products matching a search, in catalog order.
#[derive(Debug, Clone)]
pub struct SearchResults<'a> {
    /// The (trimmed) query that produced these results.
    pub query: String,
    /// Matching products.
    pub items: Vec<&'a Product>,
    /// Number of matches.
    pub result_count: usize,
}
