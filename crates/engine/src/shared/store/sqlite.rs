use async_trait::async_trait;
use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, Statement};
use serde_json::Value;
use std::path::Path;

use super::{parse_collection, RecordStore, SaveAck, StoreError};

/// One row per collection; the payload is the JSON array
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "record_store")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub collection: String,
    pub payload: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

const CREATE_TABLE_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS record_store (
        collection TEXT PRIMARY KEY NOT NULL,
        payload TEXT NOT NULL,
        updated_at TEXT NOT NULL
    );
"#;

const UPSERT_SQL: &str = r#"
    INSERT INTO record_store (collection, payload, updated_at)
    VALUES (?, ?, ?)
    ON CONFLICT(collection) DO UPDATE SET
        payload = excluded.payload,
        updated_at = excluded.updated_at
"#;

/// Key-value record store in a SQLite file
#[derive(Debug, Clone)]
pub struct SqliteStore {
    conn: DatabaseConnection,
}

impl SqliteStore {
    pub async fn open(db_file: &Path) -> anyhow::Result<Self> {
        if let Some(parent) = db_file.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let absolute_path = if db_file.is_absolute() {
            db_file.to_path_buf()
        } else {
            std::env::current_dir()?.join(db_file)
        };
        // Normalize path separators and ensure proper URL form on Windows
        let normalized = absolute_path.to_string_lossy().replace('\\', "/");
        let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
        let prefix = if needs_leading_slash { "/" } else { "" };
        let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

        let conn = Database::connect(&db_url).await?;
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            CREATE_TABLE_SQL.to_string(),
        ))
        .await?;

        Ok(Self { conn })
    }
}

#[async_trait]
impl RecordStore for SqliteStore {
    async fn load(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
        let row = Entity::find_by_id(collection.to_string())
            .one(&self.conn)
            .await?;

        match row {
            Some(m) => parse_collection(collection, &m.payload),
            None => Ok(Vec::new()),
        }
    }

    async fn save(&self, collection: &str, records: Vec<Value>) -> Result<SaveAck, StoreError> {
        let count = records.len();
        let payload = serde_json::to_string(&Value::Array(records)).map_err(|source| {
            StoreError::Json {
                collection: collection.to_string(),
                source,
            }
        })?;

        let stmt = Statement::from_sql_and_values(
            DatabaseBackend::Sqlite,
            UPSERT_SQL,
            [
                collection.into(),
                payload.into(),
                Utc::now().to_rfc3339().into(),
            ],
        );
        self.conn.execute(stmt).await?;

        tracing::debug!("record_store: saved '{}' ({} record(s))", collection, count);
        Ok(SaveAck::now(collection, count))
    }
}
