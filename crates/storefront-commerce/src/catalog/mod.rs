//! Product catalog module.
//!
//! Contains the product record and the immutable catalog store.

mod product;
mod store;

pub use product::{Product, MAX_RATING, MIN_RATING};
pub use store::Catalog;
