//! Persistence Store: durable key-value storage for the live document and
//! section order.
//!
//! The two halves live under independent, versionless keys. Loading never
//! fails: a missing or corrupt value for one key degrades to that half's
//! defaults without affecting the other.
//!
//! `AppState` holds a `PersistenceStore` wrapping an `Arc<dyn KvStore>`,
//! chosen at startup via `STORAGE_BACKEND`.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::{Config, StorageBackend};
use crate::document::migration::{migrate_document, migrate_order};
use crate::models::{ResumeDocument, SectionOrder};

pub mod file;
pub mod memory;
pub mod redis_store;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use redis_store::RedisStore;

pub const DOCUMENT_KEY: &str = "resume-data";
pub const ORDER_KEY: &str = "resume-sections";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// Minimal string key-value contract. Implement this to add a backend
/// without touching the session or handlers.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Reads and writes the serialized document and order. Only ever handles
/// copies; it never touches live state.
#[derive(Clone)]
pub struct PersistenceStore {
    kv: Arc<dyn KvStore>,
}

impl PersistenceStore {
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self { kv }
    }

    /// Writes both keys. Each write is attempted even if the other fails;
    /// the first error is returned for logging.
    pub async fn save(&self, doc: &ResumeDocument, order: &SectionOrder) -> Result<(), StoreError> {
        let doc_result = self.put(DOCUMENT_KEY, doc).await;
        let order_result = self.put(ORDER_KEY, order).await;
        debug!(
            "Saved resume state (document ok: {}, order ok: {})",
            doc_result.is_ok(),
            order_result.is_ok()
        );
        doc_result.and(order_result)
    }

    /// Loads and migrates both halves independently. Never fails.
    pub async fn load(&self) -> (ResumeDocument, SectionOrder) {
        let doc = migrate_document(self.read(DOCUMENT_KEY).await.as_ref());
        let order = migrate_order(self.read(ORDER_KEY).await.as_ref());
        (doc, order)
    }

    async fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string(value)?;
        self.kv.set(key, &json).await
    }

    async fn read(&self, key: &str) -> Option<Value> {
        let raw = match self.kv.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                info!("No stored value under '{key}'; starting from defaults");
                return None;
            }
            Err(e) => {
                warn!("Failed to read '{key}' from storage, using defaults: {e}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Stored '{key}' is not valid JSON, using defaults: {e}");
                None
            }
        }
    }
}

/// Builds the key-value backend selected in config.
pub async fn build_kv_store(config: &Config) -> anyhow::Result<Arc<dyn KvStore>> {
    let store: Arc<dyn KvStore> = match &config.storage_backend {
        StorageBackend::Memory => Arc::new(MemoryStore::default()),
        StorageBackend::File { dir } => Arc::new(FileStore::new(dir.clone())),
        StorageBackend::Redis { url } => Arc::new(RedisStore::connect(url).await?),
    };
    Ok(store)
}
