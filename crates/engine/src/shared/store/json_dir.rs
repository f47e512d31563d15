use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;

use super::{parse_collection, RecordStore, SaveAck, StoreError};

/// Directory with one `<collection>.json` file per collection
#[derive(Debug, Clone)]
pub struct JsonDirStore {
    dir: PathBuf,
}

impl JsonDirStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn file_for(&self, collection: &str) -> PathBuf {
        self.dir.join(format!("{}.json", collection))
    }
}

fn io_error(collection: &str, source: std::io::Error) -> StoreError {
    StoreError::Io {
        collection: collection.to_string(),
        source,
    }
}

#[async_trait]
impl RecordStore for JsonDirStore {
    async fn load(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        let path = self.file_for(collection);
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => parse_collection(collection, text.trim_start_matches('\u{FEFF}')),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("{} not found, collection is empty", path.display());
                Ok(Vec::new())
            }
            Err(e) => Err(io_error(collection, e)),
        }
    }

    async fn save(&self, collection: &str, records: Vec<Value>) -> Result<SaveAck, StoreError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| io_error(collection, e))?;

        let count = records.len();
        let payload =
            serde_json::to_string_pretty(&Value::Array(records)).map_err(|source| {
                StoreError::Json {
                    collection: collection.to_string(),
                    source,
                }
            })?;

        // write-then-rename so a reader never sees a half-written file
        let path = self.file_for(collection);
        let tmp = self.dir.join(format!(".{}.json.tmp", collection));
        tokio::fs::write(&tmp, payload)
            .await
            .map_err(|e| io_error(collection, e))?;
        tokio::fs::rename(&tmp, &path)
            .await
            .map_err(|e| io_error(collection, e))?;

        Ok(SaveAck::now(collection, count))
    }
}
