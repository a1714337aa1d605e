//! Repository Integration Tests
//!
//! Tests for the stores, the persisted layout and the write queue.

#[cfg(test)]
mod tests {
    use crate::domain::{Category, ItemId, StoreError, StoreResult, TodoItem};
    use crate::repository::{
        open_store, Collection, KeyValueStore, MemoryStore, Snapshot, WriteQueue, STATUS_KEY,
        TODOS_KEY,
    };
    use crate::service::ListManager;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::Arc;

    /// Accepts reads, rejects every write
    struct ReadOnlyStore;

    #[async_trait]
    impl KeyValueStore for ReadOnlyStore {
        async fn get(&self, _key: &str) -> StoreResult<Option<String>> {
            Ok(None)
        }

        async fn set(&self, _key: &str, _value: &str) -> StoreResult<()> {
            Err(StoreError::Database(rusqlite::Error::InvalidQuery))
        }

        async fn remove(&self, _key: &str) -> StoreResult<()> {
            Err(StoreError::Database(rusqlite::Error::InvalidQuery))
        }

        async fn keys(&self) -> StoreResult<Vec<String>> {
            Ok(Vec::new())
        }
    }

    fn setup_test_store() -> Arc<dyn KeyValueStore> {
        // Use in-memory database for tests
        let store = open_store(&PathBuf::from(":memory:")).expect("Failed to open test store");
        Arc::new(store)
    }

    fn sample_snapshot() -> Snapshot {
        let mut todos = Collection::new();
        for (id, text, category, done) in [
            ("1666170000000", "Buy milk", Category::Work, false),
            ("1666170000001", "Tokyo", Category::Travel, true),
        ] {
            let mut item = TodoItem::new(ItemId::from(id), text.to_string(), category);
            item.done = done;
            todos.insert(item.id.clone(), item);
        }
        Snapshot {
            todos,
            category: Category::Travel,
        }
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let store = setup_test_store();
        assert!(store.get("@nothing").await.expect("Get failed").is_none());
    }

    #[tokio::test]
    async fn test_set_replaces_value() {
        let store = setup_test_store();

        store.set(STATUS_KEY, "true").await.expect("Set failed");
        store.set(STATUS_KEY, "false").await.expect("Set failed");

        let value = store.get(STATUS_KEY).await.unwrap();
        assert_eq!(value.as_deref(), Some("false"));
        assert_eq!(store.keys().await.unwrap(), vec![STATUS_KEY.to_string()]);
    }

    #[tokio::test]
    async fn test_remove_key() {
        let store = setup_test_store();
        store.set(TODOS_KEY, "{}").await.unwrap();

        store.remove(TODOS_KEY).await.expect("Remove failed");
        store.remove(TODOS_KEY).await.expect("Removing twice is fine");
        assert!(store.get(TODOS_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_sqlite_store_survives_reopen() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_path = dir.path().join("todo_tabs.db");

        {
            let store = open_store(&db_path).expect("Failed to open store");
            store.set(STATUS_KEY, "false").await.unwrap();
        }

        let reopened = open_store(&db_path).expect("Failed to reopen store");
        assert_eq!(reopened.get(STATUS_KEY).await.unwrap().as_deref(), Some("false"));
    }

    #[tokio::test]
    async fn test_snapshot_round_trip() {
        let store = setup_test_store();
        let snapshot = sample_snapshot();

        snapshot.save(store.as_ref()).await.expect("Save failed");
        let loaded = Snapshot::load(store.as_ref()).await;

        assert_eq!(loaded, snapshot);
    }

    #[tokio::test]
    async fn test_manager_round_trip_through_sqlite() {
        let store = setup_test_store();
        sample_snapshot().save(store.as_ref()).await.unwrap();

        let manager = ListManager::load(store.clone()).await;
        assert_eq!(manager.snapshot(), sample_snapshot());

        let travel: Vec<_> = manager.list_by_category(Category::Travel).collect();
        assert_eq!(travel.len(), 1);
        assert_eq!(travel[0].text, "Tokyo");
        assert!(travel[0].done);
    }

    #[tokio::test]
    async fn test_malformed_data_fails_open() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        store.set(TODOS_KEY, "{\"broken\": ").await.unwrap();
        store.set(STATUS_KEY, "\"travel\"").await.unwrap();

        let manager = ListManager::load(store).await;
        assert!(manager.is_empty());
        assert_eq!(manager.active_category(), Category::Work);
    }

    #[tokio::test]
    async fn test_write_failure_keeps_memory_state() {
        let mut manager = ListManager::load(Arc::new(ReadOnlyStore)).await;

        let id = manager.add("still here", Category::Work).expect("Add failed");
        manager.toggle_done(&id);
        manager.flush().await.expect("Flush failed");

        let item = manager.get(&id).unwrap();
        assert_eq!(item.text, "still here");
        assert!(item.done);
    }

    #[tokio::test]
    async fn test_write_queue_applies_in_order() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let queue = WriteQueue::spawn(store.clone());

        for value in ["true", "false", "true", "false"] {
            queue.enqueue(STATUS_KEY, value.to_string());
        }
        queue.flush().await.expect("Flush failed");

        assert_eq!(store.get(STATUS_KEY).await.unwrap().as_deref(), Some("false"));
    }

    #[tokio::test]
    async fn test_saved_layout_matches_stored_format() {
        let store = setup_test_store();
        let mut manager = ListManager::load(store.clone()).await;
        let id = manager.add("Tokyo", Category::Travel).unwrap();
        manager.set_active_category(Category::Travel);
        manager.flush().await.unwrap();

        let todos = store.get(TODOS_KEY).await.unwrap().expect("todos saved");
        let json: serde_json::Value = serde_json::from_str(&todos).unwrap();
        assert_eq!(
            json[id.as_str()],
            serde_json::json!({"text": "Tokyo", "working": false, "ischecked": false})
        );
        assert_eq!(store.get(STATUS_KEY).await.unwrap().as_deref(), Some("false"));
    }
}
