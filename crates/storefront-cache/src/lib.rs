//! Type-safe key-value cache and session store for the storefront.
//!
//! Provides a small, ergonomic API for keeping serializable values in a
//! key-value store with automatic JSON serialization, and a session manager
//! built on top of it.
//!
//! The default backend is an in-process [`MemoryStore`]; anything that
//! implements [`KeyValueStore`] can be plugged in instead.
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_cache::{Cache, Session};
//! use std::time::Duration;
//!
//! #[derive(Serialize, Deserialize, Default, Clone)]
//! struct Cart {
//!     items: Vec<u64>,
//! }
//!
//! let sessions = Session::<Cart>::new(Cache::in_memory(), Duration::from_secs(86_400));
//!
//! // Start a session for a new visitor
//! let (id, cart) = sessions.create()?;
//!
//! // Mutate it later
//! sessions.update(&id, |cart| cart.items.push(7))?;
//! ```

mod error;
mod kv;
mod session;

pub use error::CacheError;
pub use kv::{Cache, KeyValueStore, MemoryStore};
pub use session::{Session, SessionData, SessionId};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, KeyValueStore, MemoryStore, Session, SessionId};
}
