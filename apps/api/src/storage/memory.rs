use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{KvStore, StoreError};

/// Process-local store. Nothing survives a restart; used in tests and for
/// throwaway sessions (`STORAGE_BACKEND=memory`).
#[derive(Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
