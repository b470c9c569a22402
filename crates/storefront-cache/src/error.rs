//! Cache error types.

use thiserror::Error;

/// Errors that can occur when using the cache.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// The backing store rejected an operation.
    #[error("Store operation failed: {0}")]
    StoreError(String),

    /// Key not found.
    #[error("Key not found: {0}")]
    NotFound(String),
}
