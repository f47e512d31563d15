use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use tokio::sync::RwLock;

use super::{RecordStore, SaveAck, StoreError};

/// In-process store, used by tests and for dry runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn load(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        let guard = self.collections.read().await;
        Ok(guard.get(collection).cloned().unwrap_or_default())
    }

    async fn save(&self, collection: &str, records: Vec<Value>) -> Result<SaveAck, StoreError> {
        let count = records.len();
        self.collections
            .write()
            .await
            .insert(collection.to_string(), records);
        Ok(SaveAck::now(collection, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.load("orders").await.unwrap().is_empty());

        let ack = store
            .save("orders", vec![json!({"id": "PED-1"}), json!({"id": "PED-2"})])
            .await
            .unwrap();
        assert_eq!(ack.count, 2);
        assert_eq!(store.load("orders").await.unwrap()[1]["id"], "PED-2");
    }
}
