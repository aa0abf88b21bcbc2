use chrono::{DateTime, Utc};
use medstrat_core::config::Config;
use medstrat_core::error::{MedstratError, Result};
use medstrat_core::session::Session;
use medstrat_core::wizard::{Action, Outcome};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let sessions = SessionStore::new(config.sessions.capacity);
        Self {
            config: Arc::new(config),
            sessions,
        }
    }
}

// ---------------------------------------------------------------------------
// SessionStore
// ---------------------------------------------------------------------------

/// One live wizard session plus bookkeeping.
#[derive(Debug, Clone)]
pub struct SessionEntry {
    pub session: Session,
    pub created_at: DateTime<Utc>,
    pub touched_at: DateTime<Utc>,
    /// Monotonic access stamp; the lowest one is evicted first.
    last_access: u64,
}

#[derive(Default)]
struct Inner {
    entries: HashMap<Uuid, SessionEntry>,
    clock: u64,
}

impl Inner {
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    fn evict_lru(&mut self) -> Option<Uuid> {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, e)| e.last_access)
            .map(|(id, _)| *id)?;
        self.entries.remove(&oldest);
        Some(oldest)
    }

    fn touch(&mut self, id: &Uuid) -> Result<&mut SessionEntry> {
        let stamp = self.tick();
        let entry = self
            .entries
            .get_mut(id)
            .ok_or_else(|| MedstratError::SessionNotFound(id.to_string()))?;
        entry.last_access = stamp;
        entry.touched_at = Utc::now();
        Ok(entry)
    }
}

/// In-memory, capacity-bounded map of sessions keyed by id.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<Inner>>,
    capacity: usize,
}

impl SessionStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner::default())),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Start a fresh session, evicting the least recently touched one when
    /// the store is full.
    pub async fn create(&self) -> (Uuid, SessionEntry) {
        let mut inner = self.inner.write().await;
        while inner.entries.len() >= self.capacity {
            match inner.evict_lru() {
                Some(evicted) => tracing::info!(session = %evicted, "evicted idle session"),
                None => break,
            }
        }
        let id = Uuid::new_v4();
        let now = Utc::now();
        let entry = SessionEntry {
            session: Session::new(),
            created_at: now,
            touched_at: now,
            last_access: inner.tick(),
        };
        inner.entries.insert(id, entry.clone());
        (id, entry)
    }

    pub async fn get(&self, id: &Uuid) -> Result<SessionEntry> {
        let mut inner = self.inner.write().await;
        inner.touch(id).map(|e| e.clone())
    }

    /// Apply `action` to a copy of the session and store it only on success.
    pub async fn apply(&self, id: &Uuid, action: Action) -> Result<(Outcome, SessionEntry)> {
        let mut inner = self.inner.write().await;
        let entry = inner.touch(id)?;
        let mut next = entry.session.clone();
        let outcome = next.apply(action)?;
        entry.session = next;
        Ok((outcome, entry.clone()))
    }

    pub async fn remove(&self, id: &Uuid) -> Result<()> {
        let mut inner = self.inner.write().await;
        inner
            .entries
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| MedstratError::SessionNotFound(id.to_string()))
    }
}

/// Parse a path segment into a session id; malformed ids are simply unknown.
pub fn parse_session_id(raw: &str) -> Result<Uuid> {
    Uuid::parse_str(raw).map_err(|_| MedstratError::SessionNotFound(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_and_get() {
        let store = SessionStore::new(4);
        let (id, entry) = store.create().await;
        assert_eq!(entry.session, Session::new());
        let fetched = store.get(&id).await.unwrap();
        assert_eq!(fetched.session.step, 1);
        assert!(fetched.touched_at >= fetched.created_at);
    }

    #[tokio::test]
    async fn evicts_least_recently_touched() {
        let store = SessionStore::new(2);
        let (a, _) = store.create().await;
        let (b, _) = store.create().await;
        store.get(&a).await.unwrap();
        let (c, _) = store.create().await;

        assert_eq!(store.len().await, 2);
        assert!(store.get(&a).await.is_ok());
        assert!(store.get(&c).await.is_ok());
        assert!(matches!(
            store.get(&b).await,
            Err(MedstratError::SessionNotFound(_))
        ));
    }

    #[tokio::test]
    async fn failed_action_leaves_session_unchanged() {
        let store = SessionStore::new(4);
        let (id, _) = store.create().await;
        let err = store
            .apply(
                &id,
                Action::SelectSpecialty {
                    key: "astrology".into(),
                },
            )
            .await
            .unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(store.get(&id).await.unwrap().session, Session::new());
    }

    #[tokio::test]
    async fn remove_unknown_is_not_found() {
        let store = SessionStore::new(4);
        assert!(store.remove(&Uuid::new_v4()).await.is_err());
    }

    #[test]
    fn zero_capacity_is_clamped() {
        assert_eq!(SessionStore::new(0).capacity(), 1);
    }

    #[test]
    fn malformed_id_is_not_found() {
        assert!(matches!(
            parse_session_id("not-a-uuid"),
            Err(MedstratError::SessionNotFound(_))
        ));
    }
}
