//! In-memory dashboard sessions.
//!
//! Each session owns its own `FilterParameters`; the record store behind them
//! is shared. Changes to one session never touch another.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use log::debug;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::DEFAULT_SESSION_IDLE_TTL;
use crate::models::FilterParameters;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub session_id: Uuid,
    pub parameters: FilterParameters,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Last read or write through the store.
    pub last_seen_at: DateTime<Utc>,
}

impl Session {
    fn is_idle(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now.signed_duration_since(self.last_seen_at)
            .to_std()
            .map(|idle| idle > ttl)
            .unwrap_or(false)
    }
}

/// Session table keyed by id.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, Session>>>,
    idle_ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_idle_ttl(DEFAULT_SESSION_IDLE_TTL)
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_ttl(idle_ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_ttl,
        }
    }

    pub fn idle_ttl(&self) -> Duration {
        self.idle_ttl
    }

    /// Register a new session with the given starting parameters.
    ///
    /// Idle sessions are swept first.
    pub fn create(&self, parameters: FilterParameters) -> Session {
        let now = Utc::now();
        let session = Session {
            session_id: Uuid::new_v4(),
            parameters,
            created_at: now,
            updated_at: now,
            last_seen_at: now,
        };

        let mut sessions = self.sessions.write();
        Self::sweep(&mut sessions, now, self.idle_ttl);
        sessions.insert(session.session_id, session.clone());
        session
    }

    /// Look up a session and mark it as seen.
    pub fn get(&self, id: &Uuid) -> Option<Session> {
        let mut sessions = self.sessions.write();
        let session = sessions.get_mut(id)?;
        session.last_seen_at = Utc::now();
        Some(session.clone())
    }

    /// Replace the parameters of an existing session.
    ///
    /// Returns `None` when the session no longer exists.
    pub fn set_parameters(&self, id: &Uuid, parameters: FilterParameters) -> Option<Session> {
        let mut sessions = self.sessions.write();
        let session = sessions.get_mut(id)?;
        let now = Utc::now();
        session.parameters = parameters;
        session.updated_at = now;
        session.last_seen_at = now;
        Some(session.clone())
    }

    pub fn remove(&self, id: &Uuid) -> bool {
        self.sessions.write().remove(id).is_some()
    }

    /// Drop every session idle for longer than the TTL as of `now`.
    /// Returns how many were removed.
    pub fn evict_idle(&self, now: DateTime<Utc>) -> usize {
        Self::sweep(&mut self.sessions.write(), now, self.idle_ttl)
    }

    fn sweep(sessions: &mut HashMap<Uuid, Session>, now: DateTime<Utc>, ttl: Duration) -> usize {
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_idle(now, ttl));
        let evicted = before - sessions.len();
        if evicted > 0 {
            debug!("Evicted {} idle sessions", evicted);
        }
        evicted
    }

    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DelayMetric;

    #[test]
    fn test_create_get_remove() {
        let store = SessionStore::new();
        let session = store.create(FilterParameters::default());
        assert_eq!(store.len(), 1);

        let found = store.get(&session.session_id).unwrap();
        assert_eq!(found.session_id, session.session_id);
        assert_eq!(found.parameters, session.parameters);
        assert!(found.last_seen_at >= session.last_seen_at);

        assert!(store.remove(&session.session_id));
        assert!(!store.remove(&session.session_id));
        assert!(store.is_empty());
    }

    #[test]
    fn test_sessions_are_isolated() {
        let store = SessionStore::new();
        let a = store.create(FilterParameters::default());
        let b = store.create(FilterParameters::default());

        let mut parameters = a.parameters.clone();
        parameters.metric = DelayMetric::Arrival;
        let updated = store.set_parameters(&a.session_id, parameters).unwrap();
        assert!(updated.updated_at >= a.updated_at);

        assert_eq!(store.get(&a.session_id).unwrap().parameters.metric, DelayMetric::Arrival);
        assert_eq!(store.get(&b.session_id).unwrap().parameters.metric, DelayMetric::Total);
    }

    #[test]
    fn test_set_parameters_unknown_session() {
        let store = SessionStore::new();
        assert!(store
            .set_parameters(&Uuid::new_v4(), FilterParameters::default())
            .is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_evict_idle_sessions() {
        let store = SessionStore::with_idle_ttl(Duration::from_secs(60));
        let stale = store.create(FilterParameters::default());
        let now = Utc::now();

        assert_eq!(store.evict_idle(now), 0);
        assert_eq!(store.evict_idle(now + chrono::Duration::seconds(61)), 1);
        assert!(store.get(&stale.session_id).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_recently_seen_session_survives_sweep() {
        let store = SessionStore::with_idle_ttl(Duration::from_secs(60));
        let kept = store.create(FilterParameters::default());
        let dropped = store.create(FilterParameters::default());

        // Backdate one session so only it is past the TTL.
        store
            .sessions
            .write()
            .get_mut(&dropped.session_id)
            .unwrap()
            .last_seen_at = Utc::now() - chrono::Duration::seconds(120);

        let fresh = store.create(FilterParameters::default());
        assert_eq!(store.len(), 2);
        assert!(store.get(&kept.session_id).is_some());
        assert!(store.get(&fresh.session_id).is_some());
        assert!(store.get(&dropped.session_id).is_none());
    }
}
