//! Session storage seam.
//!
//! The real session backend lives outside this service; the API only needs
//! to turn a session id into the raw [`Session`] payload.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tenantcrm_auth::Session;
use tenantcrm_core::SessionId;

pub trait SessionStore: Send + Sync {
    fn load(&self, id: &SessionId) -> Option<Session>;
}

impl<S> SessionStore for Arc<S>
where
    S: SessionStore + ?Sized,
{
    fn load(&self, id: &SessionId) -> Option<Session> {
        (**self).load(id)
    }
}

/// In-memory session store (dev/test).
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<SessionId, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `session` under a freshly minted id.
    pub fn insert(&self, session: Session) -> SessionId {
        let id = SessionId::generate();
        self.sessions
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(id.clone(), session);
        id
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(&self, id: &SessionId) -> Option<Session> {
        self.sessions
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(id)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn inserted_session_loads_by_minted_id() {
        let store = InMemorySessionStore::new();
        let first = Session::from_value(json!({ "tenant_id": "t-1" }));
        let second = Session::from_value(json!({ "tenant_id": "t-2" }));

        let a = store.insert(first.clone());
        let b = store.insert(second.clone());
        assert_ne!(a, b);
        assert_eq!(store.load(&a), Some(first));
        assert_eq!(store.load(&b), Some(second));
    }

    #[test]
    fn shared_store_loads_through_arc() {
        let store = Arc::new(InMemorySessionStore::new());
        let id = store.insert(Session::default());
        let dyn_store: Arc<dyn SessionStore> = store;
        assert_eq!(dyn_store.load(&id), Some(Session::default()));
    }

    #[test]
    fn unknown_id_loads_nothing() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.load(&SessionId::generate()), None);
    }
}
