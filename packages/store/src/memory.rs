use std::sync::{Arc, Mutex};

use crate::models::SessionRecord;
use crate::session::SessionStore;

/// In-memory SessionStore for testing and fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    record: Arc<Mutex<Option<SessionRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    async fn load(&self) -> Option<SessionRecord> {
        self.record.lock().unwrap().clone()
    }

    async fn save(&self, record: &SessionRecord) {
        *self.record.lock().unwrap() = Some(record.clone());
    }

    async fn clear(&self) {
        *self.record.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(token: &str) -> SessionRecord {
        SessionRecord {
            token: token.to_string(),
            token_type: "Bearer".to_string(),
            user_id: 1,
            user_name: "alice".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_save_and_load() {
        let store = MemoryStore::new();
        assert!(store.load().await.is_none());

        store.save(&record("abc")).await;
        let loaded = store.load().await.unwrap();
        assert_eq!(loaded.token, "abc");
        assert_eq!(loaded.user_name, "alice");
    }

    #[tokio::test]
    async fn test_save_replaces_previous_record() {
        let store = MemoryStore::new();
        store.save(&record("first")).await;
        store.save(&record("second")).await;

        assert_eq!(store.load().await.unwrap().token, "second");
    }

    #[tokio::test]
    async fn test_clear_is_idempotent() {
        let store = MemoryStore::new();
        store.save(&record("abc")).await;

        store.clear().await;
        assert!(store.load().await.is_none());

        // Clearing again with nothing stored is a no-op.
        store.clear().await;
        assert!(store.load().await.is_none());
    }
}
