//! In-memory session store
//!
//! Sessions are keyed by an opaque UUID carried in a cookie. The map is
//! sharded (DashMap), and a closure passed to [`SessionStore::with_session`]
//! runs while holding that one entry, so each request sees its session
//! atomically without blocking other diners.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use dashmap::DashMap;
use uuid::Uuid;

use super::state::OrderSession;

/// Opaque session identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Settings every new session is created with
#[derive(Debug, Clone, Copy)]
pub struct SessionDefaults {
    pub category_count: usize,
    pub max_quantity: u32,
    pub ttl_secs: u64,
}

#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Arc<DashMap<SessionId, OrderSession>>,
    defaults: SessionDefaults,
}

impl SessionStore {
    pub fn new(defaults: SessionDefaults) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            defaults,
        }
    }

    /// Create an empty session, dropping idle ones first
    pub fn create(&self) -> SessionId {
        self.purge_expired();

        let id = SessionId::new();
        self.sessions.insert(id, self.fresh());
        tracing::debug!(session = %id, active = self.sessions.len(), "Session created");
        id
    }

    /// Whether `id` refers to a live session
    pub fn contains(&self, id: &SessionId) -> bool {
        self.sessions
            .get(id)
            .is_some_and(|s| s.idle_secs() < self.defaults.ttl_secs)
    }

    /// Run `f` against the session, recreating it if it has gone away
    pub fn with_session<R>(&self, id: &SessionId, f: impl FnOnce(&mut OrderSession) -> R) -> R {
        let mut entry = self.sessions.entry(*id).or_insert_with(|| self.fresh());
        entry.touch();
        f(entry.value_mut())
    }

    /// Number of live sessions
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn fresh(&self) -> OrderSession {
        OrderSession::new(self.defaults.category_count, self.defaults.max_quantity)
    }

    fn purge_expired(&self) {
        let ttl = self.defaults.ttl_secs;
        let before = self.sessions.len();
        self.sessions.retain(|_, session| session.idle_secs() < ttl);
        let purged = before.saturating_sub(self.sessions.len());
        if purged > 0 {
            tracing::info!(purged, "Expired sessions removed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::MenuItem;

    fn store(ttl_secs: u64) -> SessionStore {
        SessionStore::new(SessionDefaults {
            category_count: 3,
            max_quantity: 10,
            ttl_secs,
        })
    }

    #[test]
    fn test_sessions_are_isolated() {
        let store = store(60);
        let a = store.create();
        let b = store.create();
        assert_ne!(a, b);

        let kopi = MenuItem {
            id: 1,
            name: "Kopi O".into(),
            price: Decimal::from(120),
        };
        store.with_session(&a, |s| s.cart.set_item(&kopi, true, 2));
        store.with_session(&a, |s| s.navigator.next());

        assert!(store.with_session(&b, |s| s.cart.is_empty()));
        assert_eq!(store.with_session(&b, |s| s.navigator.index()), 0);
        assert_eq!(store.with_session(&a, |s| s.cart.len()), 1);
    }

    #[test]
    fn test_unknown_session_recreated() {
        let store = store(60);
        let id = SessionId::new();
        assert!(!store.contains(&id));
        let empty = store.with_session(&id, |s| s.cart.is_empty());
        assert!(empty);
        assert!(store.contains(&id));
    }

    #[test]
    fn test_expired_sessions_purged_on_create() {
        let store = store(0);
        let old = store.create();
        // ttl 0: every session is immediately idle
        assert!(!store.contains(&old));
        store.create();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_session_id_parse() {
        let id = SessionId::new();
        let parsed: SessionId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
        assert!("not-a-uuid".parse::<SessionId>().is_err());
    }
}
