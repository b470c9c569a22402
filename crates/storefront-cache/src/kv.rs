//! Key-value store wrapper with automatic serialization.

use crate::CacheError;
use dashmap::DashMap;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A byte-oriented key-value backend.
///
/// Implementations must be safe to share between request tasks. Entries
/// written with a TTL must stop being visible once it elapses.
pub trait KeyValueStore: Send + Sync {
    /// Get the raw bytes stored under `key`.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// Store bytes under `key`, optionally expiring after `ttl`.
    fn set(&self, key: &str, value: Vec<u8>, ttl: Option<Duration>) -> Result<(), CacheError>;

    /// Delete `key`. Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Check if `key` holds a live value.
    fn exists(&self, key: &str) -> Result<bool, CacheError>;

    /// All live keys.
    fn keys(&self) -> Result<Vec<String>, CacheError>;

    /// Drop expired entries, returning how many were removed.
    fn purge_expired(&self) -> Result<usize, CacheError>;
}

#[derive(Debug, Clone)]
struct StoredValue {
    bytes: Vec<u8>,
    expires_at: Option<Instant>,
}

impl StoredValue {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.map(|at| now >= at).unwrap_or(false)
    }
}

/// In-process store backed by a concurrent hash map.
///
/// Expired entries are hidden from reads immediately and physically removed
/// on the next read of that key or on [`KeyValueStore::purge_expired`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: DashMap<String, StoredValue>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, including expired ones not yet purged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let now = Instant::now();
        let value = match self.entries.get(key) {
            Some(entry) if entry.is_expired(now) => None,
            Some(entry) => return Ok(Some(entry.bytes.clone())),
            None => return Ok(None),
        };
        // The read guard is released before removing.
        self.entries.remove_if(key, |_, v| v.is_expired(now));
        Ok(value)
    }

    fn set(&self, key: &str, value: Vec<u8>, ttl: Option<Duration>) -> Result<(), CacheError> {
        let expires_at = ttl.map(|ttl| Instant::now() + ttl);
        self.entries.insert(
            key.to_string(),
            StoredValue {
                bytes: value,
                expires_at,
            },
        );
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.entries.remove(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        let now = Instant::now();
        Ok(self
            .entries
            .get(key)
            .map(|entry| !entry.is_expired(now))
            .unwrap_or(false))
    }

    fn keys(&self) -> Result<Vec<String>, CacheError> {
        let now = Instant::now();
        Ok(self
            .entries
            .iter()
            .filter(|entry| !entry.value().is_expired(now))
            .map(|entry| entry.key().clone())
            .collect())
    }

    fn purge_expired(&self) -> Result<usize, CacheError> {
        let now = Instant::now();
        let before = self.entries.len();
        self.entries.retain(|_, v| !v.is_expired(now));
        Ok(before.saturating_sub(self.entries.len()))
    }
}

/// Type-safe cache over a [`KeyValueStore`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`. Cloning is cheap and clones share the
/// same backend.
#[derive(Clone)]
pub struct Cache {
    store: Arc<dyn KeyValueStore>,
}

impl Cache {
    /// Create a cache over a fresh in-process store.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let cache = Cache::in_memory();
    /// ```
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    /// Create a cache over a custom backend.
    pub fn with_store(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let cart: Option<Cart> = cache.get("cart:sess_abc")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Set a value in the cache with no expiry.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        self.set_with_ttl(key, value, None)
    }

    /// Set a value that expires after `ttl`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// cache.set_with_ttl("cart:sess_abc", &cart, Some(Duration::from_secs(60)))?;
    /// ```
    pub fn set_with_ttl<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        ttl: Option<Duration>,
    ) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(value)?;
        self.store.set(key, bytes, ttl)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store.delete(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.store.exists(key)
    }

    /// Get all live keys in the cache.
    pub fn keys(&self) -> Result<Vec<String>, CacheError> {
        self.store.keys()
    }

    /// Drop expired entries from the backend.
    pub fn purge_expired(&self) -> Result<usize, CacheError> {
        self.store.purge_expired()
    }
}

impl std::fmt::Debug for Cache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cache").finish_non_exhaustive()
    }
}
