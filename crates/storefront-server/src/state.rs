//! Shared application state.

use std::sync::Arc;

use storefront_cache::{Cache, Session};
use storefront_commerce::prelude::*;

use crate::config::StoreConfig;

/// State handed to every handler.
///
/// The catalog is immutable after startup. Carts live in the session store,
/// one per visitor.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub sessions: Arc<Session<Cart>>,
    pub config: Arc<StoreConfig>,
}

impl AppState {
    /// Build state with an in-memory session store.
    pub fn new(catalog: Catalog, config: StoreConfig) -> Self {
        let sessions = Session::new(Cache::in_memory(), config.session.ttl());
        Self::with_sessions(catalog, sessions, config)
    }

    /// Build state over an existing session manager.
    pub fn with_sessions(catalog: Catalog, sessions: Session<Cart>, config: StoreConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            sessions: Arc::new(sessions),
            config: Arc::new(config),
        }
    }
}
