//! Commerce error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur in catalog and cart operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// No product with this id exists in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// The product exists but cannot be added because it is out of stock.
    #[error("Product is out of stock: {0}")]
    OutOfStock(ProductId),

    /// Catalog source could not be read.
    #[error("Failed to read catalog {path}: {source}")]
    CatalogUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Catalog source was read but its contents are not a valid catalog.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in cart calculation")]
    Overflow,
}

impl CommerceError {
    /// Check if this error is caused by the caller asking for something that
    /// does not exist, as opposed to a bad request or a server fault.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CommerceError::ProductNotFound(_))
    }

    /// Check if this error is a catalog loading failure.
    pub fn is_catalog_error(&self) -> bool {
        matches!(
            self,
            CommerceError::CatalogUnreadable { .. } | CommerceError::InvalidCatalog(_)
        )
    }
}
