//! Search and filtering module.
//!
//! Contains the named catalog filters and text search.

mod filter;
mod query;

pub use filter::{ProductFilter, DEAL_PRICE_CEILING};
pub use query::{SearchQuery, SearchResults};
