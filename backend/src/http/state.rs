//! Application state for the HTTP server.

use std::sync::Arc;
use std::time::Duration;

use super::sessions::SessionStore;
use crate::services::AggregationSettings;
use crate::store::RecordStore;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Read-only flight table, loaded once at startup
    pub store: Arc<RecordStore>,
    /// Per-client filter parameters
    pub sessions: SessionStore,
    pub settings: Arc<AggregationSettings>,
}

impl AppState {
    /// Create a new application state around a loaded record store.
    pub fn new(store: Arc<RecordStore>, settings: AggregationSettings) -> Self {
        Self {
            store,
            sessions: SessionStore::new(),
            settings: Arc::new(settings),
        }
    }

    /// Replace the session table with one using the given idle TTL.
    pub fn with_session_idle_ttl(mut self, idle_ttl: Duration) -> Self {
        self.sessions = SessionStore::with_idle_ttl(idle_ttl);
        self
    }
}
