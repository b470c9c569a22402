//! Session management using the key-value cache.

use crate::{Cache, CacheError};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// A unique session identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Create a new session ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new cryptographically secure session ID.
    pub fn generate() -> Self {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
        use rand::Rng;

        let bytes: [u8; 18] = rand::thread_rng().gen();
        Self(format!("sess_{}", URL_SAFE_NO_PAD.encode(bytes)))
    }

    /// Get the session ID as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Session data stored in the cache.
///
/// Generic over the user data type `T`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData<T> {
    /// The session ID.
    pub id: SessionId,
    /// User-defined session data.
    pub data: T,
    /// When the session was created (Unix timestamp).
    pub created_at: u64,
    /// When the session stops being valid (Unix timestamp).
    pub expires_at: u64,
}

impl<T> SessionData<T> {
    /// Check if the session has reached its expiry.
    pub fn is_expired(&self) -> bool {
        current_timestamp() >= self.expires_at
    }

    /// Time left before expiry.
    pub fn remaining(&self) -> Duration {
        Duration::from_secs(self.expires_at.saturating_sub(current_timestamp()))
    }
}

/// Session manager for visitor sessions.
///
/// Every session lives for a fixed TTL counted from creation; reads and
/// writes do not extend it. Writes are unconditional, so concurrent
/// requests on one session resolve as last write wins.
///
/// # Example
///
/// ```rust,ignore
/// use storefront_cache::{Cache, Session};
///
/// let sessions = Session::<Cart>::new(Cache::in_memory(), Duration::from_secs(86_400));
///
/// let (id, _cart) = sessions.create()?;
/// let count = sessions.update(&id, |cart| cart.total_quantity())?;
/// ```
#[derive(Debug, Clone)]
pub struct Session<T> {
    cache: Cache,
    ttl: Duration,
    _phantom: std::marker::PhantomData<fn() -> T>,
}

impl<T> Session<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    /// Create a session manager over `cache` with a fixed session lifetime.
    pub fn new(cache: Cache, ttl: Duration) -> Self {
        Self {
            cache,
            ttl,
            _phantom: std::marker::PhantomData,
        }
    }

    /// The configured session lifetime.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Start a new session holding `T::default()`.
    ///
    /// Expired sessions left behind by other visitors are swept first.
    pub fn create(&self) -> Result<(SessionId, T), CacheError> {
        let purged = self.cache.purge_expired()?;
        if purged > 0 {
            debug!(purged, "purged expired sessions");
        }

        let id = SessionId::generate();
        let now = current_timestamp();
        let session_data = SessionData {
            id: id.clone(),
            data: T::default(),
            created_at: now,
            expires_at: now.saturating_add(self.ttl.as_secs()),
        };
        self.cache
            .set_with_ttl(&self.session_key(&id), &session_data, Some(self.ttl))?;
        Ok((id, session_data.data))
    }

    /// Get session data if the session exists and has not expired.
    pub fn get(&self, id: &SessionId) -> Result<Option<T>, CacheError> {
        Ok(self.get_versioned(id)?.map(|s| s.data))
    }

    /// Get the full session record including timestamps.
    pub fn get_versioned(&self, id: &SessionId) -> Result<Option<SessionData<T>>, CacheError> {
        let key = self.session_key(id);
        match self.cache.get::<SessionData<T>>(&key)? {
            Some(session_data) if session_data.is_expired() => {
                self.cache.delete(&key)?;
                Ok(None)
            }
            other => Ok(other),
        }
    }

    /// Replace the data of an existing session, keeping its expiry.
    pub fn set(&self, id: &SessionId, data: T) -> Result<(), CacheError> {
        let mut session_data = self
            .get_versioned(id)?
            .ok_or_else(|| CacheError::NotFound(id.to_string()))?;
        session_data.data = data;
        self.write(&session_data)
    }

    /// Read, modify and write back session data.
    ///
    /// The closure's return value is passed through. There is no locking:
    /// a concurrent update on the same session may overwrite this one.
    pub fn update<F, R>(&self, id: &SessionId, f: F) -> Result<R, CacheError>
    where
        F: FnOnce(&mut T) -> R,
    {
        let mut session_data = self
            .get_versioned(id)?
            .ok_or_else(|| CacheError::NotFound(id.to_string()))?;
        let result = f(&mut session_data.data);
        self.write(&session_data)?;
        Ok(result)
    }

    /// Like [`update`](Self::update), but a missing or expired session is
    /// read as a default value. Nothing is stored in that case.
    pub fn update_or_default<F, R>(&self, id: &SessionId, f: F) -> Result<R, CacheError>
    where
        F: FnOnce(&mut T) -> R,
    {
        match self.get_versioned(id)? {
            Some(mut session_data) => {
                let result = f(&mut session_data.data);
                self.write(&session_data)?;
                Ok(result)
            }
            None => {
                debug!(session = %id, "session gone before update");
                Ok(f(&mut T::default()))
            }
        }
    }

    /// Delete a session.
    pub fn delete(&self, id: &SessionId) -> Result<(), CacheError> {
        self.cache.delete(&self.session_key(id))
    }

    /// Check if a live session exists.
    pub fn exists(&self, id: &SessionId) -> Result<bool, CacheError> {
        Ok(self.get_versioned(id)?.is_some())
    }

    /// Drop every expired session from the backing store.
    pub fn purge_expired(&self) -> Result<usize, CacheError> {
        self.cache.purge_expired()
    }

    fn write(&self, session_data: &SessionData<T>) -> Result<(), CacheError> {
        self.cache.set_with_ttl(
            &self.session_key(&session_data.id),
            session_data,
            Some(session_data.remaining()),
        )
    }

    fn session_key(&self, id: &SessionId) -> String {
        format!("session:{}", id)
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    struct Basket {
        items: Vec<u64>,
    }

    fn sessions(ttl: Duration) -> Session<Basket> {
        Session::new(Cache::in_memory(), ttl)
    }

    #[test]
    fn test_session_id_new() {
        let id = SessionId::new("abc123");
        assert_eq!(id.as_str(), "abc123");
    }

    #[test]
    fn test_session_id_display() {
        let id = SessionId::new("display-test");
        assert_eq!(format!("{}", id), "display-test");
    }

    #[test]
    fn test_session_id_generate_format() {
        let id = SessionId::generate();
        let s = id.as_str();

        assert!(s.starts_with("sess_"));
        // Base64 encoded 18 bytes = 24 chars, plus "sess_" = 29 chars
        assert_eq!(s.len(), 29);
    }

    #[test]
    fn test_session_id_generate_uniqueness() {
        let id1 = SessionId::generate();
        let id2 = SessionId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_create_starts_with_default() {
        let sessions = sessions(Duration::from_secs(60));
        let (id, data) = sessions.create().unwrap();

        assert_eq!(data, Basket::default());
        assert_eq!(sessions.get(&id).unwrap(), Some(Basket::default()));
        assert!(sessions.exists(&id).unwrap());
    }

    #[test]
    fn test_unknown_session_is_absent() {
        let sessions = sessions(Duration::from_secs(60));
        assert_eq!(sessions.get(&SessionId::new("sess_unknown")).unwrap(), None);
    }

    #[test]
    fn test_update_persists_changes() {
        let sessions = sessions(Duration::from_secs(60));
        let (id, _) = sessions.create().unwrap();

        let len = sessions
            .update(&id, |basket| {
                basket.items.push(7);
                basket.items.len()
            })
            .unwrap();

        assert_eq!(len, 1);
        assert_eq!(sessions.get(&id).unwrap().unwrap().items, vec![7]);
    }

    #[test]
    fn test_set_keeps_expiry() {
        let sessions = sessions(Duration::from_secs(60));
        let (id, _) = sessions.create().unwrap();
        let before = sessions.get_versioned(&id).unwrap().unwrap();

        sessions.set(&id, Basket { items: vec![1, 2] }).unwrap();
        let after = sessions.get_versioned(&id).unwrap().unwrap();

        assert_eq!(after.expires_at, before.expires_at);
        assert_eq!(after.created_at, before.created_at);
        assert_eq!(after.data.items, vec![1, 2]);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let sessions = sessions(Duration::from_secs(60));
        let (a, _) = sessions.create().unwrap();
        let (b, _) = sessions.create().unwrap();

        sessions.update(&a, |basket| basket.items.push(1)).unwrap();

        assert_eq!(sessions.get(&b).unwrap(), Some(Basket::default()));
    }

    #[test]
    fn test_expired_session_is_absent() {
        let sessions = sessions(Duration::ZERO);
        let (id, _) = sessions.create().unwrap();

        assert_eq!(sessions.get(&id).unwrap(), None);
        assert!(matches!(
            sessions.update(&id, |basket| basket.items.push(1)),
            Err(CacheError::NotFound(_))
        ));
    }

    #[test]
    fn test_update_or_default() {
        let sessions = sessions(Duration::from_secs(60));
        let (id, _) = sessions.create().unwrap();

        let len = sessions
            .update_or_default(&id, |basket| {
                basket.items.push(4);
                basket.items.len()
            })
            .unwrap();
        assert_eq!(len, 1);
        assert_eq!(sessions.get(&id).unwrap().unwrap().items, vec![4]);

        let gone = SessionId::new("sess_gone");
        let len = sessions
            .update_or_default(&gone, |basket| {
                basket.items.push(4);
                basket.items.len()
            })
            .unwrap();
        assert_eq!(len, 1);
        assert!(!sessions.exists(&gone).unwrap());
    }

    #[test]
    fn test_delete() {
        let sessions = sessions(Duration::from_secs(60));
        let (id, _) = sessions.create().unwrap();

        sessions.delete(&id).unwrap();
        assert!(!sessions.exists(&id).unwrap());
    }
}
