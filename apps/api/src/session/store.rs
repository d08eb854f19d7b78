use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::session::models::Session;

/// All live sessions, keyed by id. Cloning the store shares the map.
///
/// Access goes through closures so the lock is never held across an await
/// point; LLM calls in particular happen outside the lock.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Session>>>,
}

impl SessionStore {
    /// Creates a fresh session and returns its id.
    pub async fn create(&self) -> Uuid {
        let id = Uuid::new_v4();
        self.inner.write().await.insert(id, Session::new(id));
        id
    }

    /// Removes a session. Returns false if the id was unknown.
    pub async fn destroy(&self, id: Uuid) -> bool {
        self.inner.write().await.remove(&id).is_some()
    }

    /// Runs `f` against the session under a read lock.
    pub async fn read<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&Session) -> R,
    ) -> Result<R, AppError> {
        let sessions = self.inner.read().await;
        let session = sessions
            .get(&id)
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
        Ok(f(session))
    }

    /// Runs `f` against the session under a write lock.
    pub async fn update<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut Session) -> R,
    ) -> Result<R, AppError> {
        let mut sessions = self.inner.write().await;
        let session = sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
        Ok(f(session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_then_read_roundtrip() {
        let store = SessionStore::default();
        let id = store.create().await;
        let read_id = store.read(id, |s| s.id).await.unwrap();
        assert_eq!(read_id, id);
    }

    #[tokio::test]
    async fn test_read_unknown_session_is_not_found() {
        let store = SessionStore::default();
        let err = store.read(Uuid::new_v4(), |_| ()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_mutates_state() {
        let store = SessionStore::default();
        let id = store.create().await;
        store
            .update(id, |s| s.shortlist.add("TU Berlin".to_string()))
            .await
            .unwrap();
        let count = store.read(id, |s| s.shortlist.len()).await.unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_destroy_removes_session() {
        let store = SessionStore::default();
        let id = store.create().await;
        assert!(store.destroy(id).await);
        assert!(!store.destroy(id).await);
        assert!(store.read(id, |_| ()).await.is_err());
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = SessionStore::default();
        let a = store.create().await;
        let b = store.create().await;
        store
            .update(a, |s| s.shortlist.add("TU Berlin".to_string()))
            .await
            .unwrap();
        let b_len = store.read(b, |s| s.shortlist.len()).await.unwrap();
        assert_eq!(b_len, 0);
    }
}
