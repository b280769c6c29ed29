//! In-memory session store for the web dashboard.
//!
//! A login mints a random UUID, stores the session role under it and
//! hands the UUID to the browser in a cookie. Sessions live for the
//! lifetime of the process; restarting the server logs everyone out.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::auth::SessionContext;

/// Name of the browser cookie carrying the session id.
pub const SESSION_COOKIE: &str = "bookstore_session";

/// Shared map from session id to session role.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, SessionContext>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a freshly authenticated session and returns its id.
    pub async fn insert(&self, ctx: SessionContext) -> Uuid {
        let id = Uuid::new_v4();
        self.inner.write().await.insert(id, ctx);
        debug!(session = %id, "Session created");
        id
    }

    /// Looks up the role for a session id.
    pub async fn get(&self, id: Uuid) -> Option<SessionContext> {
        self.inner.read().await.get(&id).copied()
    }

    /// Drops a session. No-op for unknown ids.
    pub async fn remove(&self, id: Uuid) {
        if self.inner.write().await.remove(&id).is_some() {
            debug!(session = %id, "Session removed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_get_remove() {
        let store = SessionStore::new();

        let id = store.insert(SessionContext::Customer { cust_id: 2 }).await;
        assert_eq!(
            store.get(id).await,
            Some(SessionContext::Customer { cust_id: 2 })
        );

        store.remove(id).await;
        assert_eq!(store.get(id).await, None);

        // removing again is a no-op
        store.remove(id).await;
    }

    #[tokio::test]
    async fn test_unknown_id_is_none() {
        let store = SessionStore::new();
        assert_eq!(store.get(Uuid::new_v4()).await, None);
    }

    #[tokio::test]
    async fn test_each_login_gets_a_distinct_id() {
        let store = SessionStore::new();
        let a = store.insert(SessionContext::Admin).await;
        let b = store.insert(SessionContext::Admin).await;
        assert_ne!(a, b);
        assert_eq!(store.get(a).await, Some(SessionContext::Admin));
        assert_eq!(store.get(b).await, Some(SessionContext::Admin));
    }
}
