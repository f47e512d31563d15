//! Record store: one JSON array per collection key.
//!
//! The reporting code never writes; `save` exists for the screens that own the
//! records and for seeding.

pub mod json_dir;
pub mod memory;
pub mod sqlite;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use contracts::domain::common::AggregateRoot;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::shared::config::{resolve_path, StoreConfig, StoreKind};

pub use json_dir::JsonDirStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Record store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error on '{collection}': {source}")]
    Io {
        collection: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in '{collection}': {source}")]
    Json {
        collection: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Collection '{0}' is not a JSON array")]
    NotAnArray(String),

    #[error("Database error: {0}")]
    Db(#[from] sea_orm::DbErr),
}

/// Acknowledgement of a collection write
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveAck {
    pub collection: String,
    pub count: usize,
    pub timestamp: DateTime<Utc>,
}

impl SaveAck {
    pub fn now(collection: &str, count: usize) -> Self {
        Self {
            collection: collection.to_string(),
            count,
            timestamp: Utc::now(),
        }
    }
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All records of a collection; a collection never saved is empty
    async fn load(&self, collection: &str) -> Result<Vec<Value>, StoreError>;

    /// Replace a collection
    async fn save(&self, collection: &str, records: Vec<Value>) -> Result<SaveAck, StoreError>;
}

/// Parse a stored payload, which must be a JSON array
pub fn parse_collection(collection: &str, payload: &str) -> Result<Vec<Value>, StoreError> {
    let value: Value = serde_json::from_str(payload).map_err(|source| StoreError::Json {
        collection: collection.to_string(),
        source,
    })?;
    match value {
        Value::Array(items) => Ok(items),
        _ => Err(StoreError::NotAnArray(collection.to_string())),
    }
}

/// Serialize typed records into their collection
pub async fn save_collection<T>(store: &dyn RecordStore, records: &[T]) -> anyhow::Result<SaveAck>
where
    T: AggregateRoot + Serialize,
{
    let values = records
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()?;
    let ack = store.save(T::collection_name(), values).await?;
    tracing::info!("Saved {} record(s) to '{}'", ack.count, ack.collection);
    Ok(ack)
}

/// Open the store selected in config
pub async fn open_store(config: &StoreConfig) -> anyhow::Result<Box<dyn RecordStore>> {
    let path = resolve_path(&config.path);
    match config.kind {
        StoreKind::Json => {
            tracing::info!("Record store: JSON directory {}", path.display());
            Ok(Box::new(JsonDirStore::new(path)))
        }
        StoreKind::Sqlite => {
            tracing::info!("Record store: SQLite {}", path.display());
            Ok(Box::new(SqliteStore::open(&path).await?))
        }
    }
}
