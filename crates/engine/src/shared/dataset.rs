//! Boundary between the record store and the report computations.
//!
//! Every record is decoded and validated on its own. A record that fails is skipped
//! and reported as a `RecordIssue`; an unreadable collection is treated as empty.
//! Nothing past this point validates input again.

use contracts::domain::a001_worker::Worker;
use contracts::domain::a002_task_rate::TaskRate;
use contracts::domain::a003_advance::Advance;
use contracts::domain::a004_material::Material;
use contracts::domain::a005_project_tp::ProjectTp;
use contracts::domain::a006_order::Order;
use contracts::domain::a007_expense::Expense;
use contracts::domain::common::AggregateRoot;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::shared::store::RecordStore;

/// A record (or a whole collection) left out of the dataset
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordIssue {
    pub collection: String,
    /// Position in the stored array; `None` when the whole collection failed
    pub index: Option<usize>,
    pub record_id: Option<String>,
    pub reason: String,
}

/// All collections, decoded and validated
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub workers: Vec<Worker>,
    pub rates: Vec<TaskRate>,
    pub advances: Vec<Advance>,
    pub materials: Vec<Material>,
    pub projects: Vec<ProjectTp>,
    pub orders: Vec<Order>,
    pub expenses: Vec<Expense>,
    pub issues: Vec<RecordIssue>,
}

impl Dataset {
    pub async fn load(store: &dyn RecordStore) -> Self {
        let mut issues = Vec::new();

        let dataset = Self {
            workers: load_collection(store, &mut issues).await,
            rates: load_collection(store, &mut issues).await,
            advances: load_collection(store, &mut issues).await,
            materials: load_collection(store, &mut issues).await,
            projects: load_collection(store, &mut issues).await,
            orders: load_collection(store, &mut issues).await,
            expenses: load_collection(store, &mut issues).await,
            issues,
        };

        tracing::info!(
            "Dataset loaded: {} advance(s), {} expense(s), {} order(s), {} project(s), {} issue(s)",
            dataset.advances.len(),
            dataset.expenses.len(),
            dataset.orders.len(),
            dataset.projects.len(),
            dataset.issues.len()
        );

        dataset
    }
}

/// Load one collection, appending problems to `issues`
pub async fn load_collection<T>(store: &dyn RecordStore, issues: &mut Vec<RecordIssue>) -> Vec<T>
where
    T: AggregateRoot + DeserializeOwned,
{
    let collection = T::collection_name();
    match store.load(collection).await {
        Ok(raw) => {
            let (records, found) = decode_records::<T>(raw);
            tracing::debug!(
                "Loaded {}: {} record(s), {} skipped",
                T::full_name(),
                records.len(),
                found.len()
            );
            issues.extend(found);
            records
        }
        Err(e) => {
            tracing::error!("Cannot load {}: {}", T::full_name(), e);
            issues.push(RecordIssue {
                collection: collection.to_string(),
                index: None,
                record_id: None,
                reason: e.to_string(),
            });
            Vec::new()
        }
    }
}

/// Decode and validate raw records one by one
pub fn decode_records<T>(raw: Vec<Value>) -> (Vec<T>, Vec<RecordIssue>)
where
    T: AggregateRoot + DeserializeOwned,
{
    let collection = T::collection_name();
    let mut records = Vec::with_capacity(raw.len());
    let mut issues = Vec::new();

    for (index, value) in raw.into_iter().enumerate() {
        let raw_id = value
            .get("id")
            .and_then(Value::as_str)
            .map(str::to_string);

        let checked = serde_json::from_value::<T>(value)
            .map_err(|e| e.to_string())
            .and_then(|record| record.validate().map(|_| record));

        match checked {
            Ok(record) => records.push(record),
            Err(reason) => {
                tracing::warn!(
                    "Skipping {}[{}] (id={}): {}",
                    T::full_name(),
                    index,
                    raw_id.as_deref().unwrap_or("?"),
                    reason
                );
                issues.push(RecordIssue {
                    collection: collection.to_string(),
                    index: Some(index),
                    record_id: raw_id,
                    reason,
                });
            }
        }
    }

    (records, issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::store::{save_collection, MemoryStore, SaveAck, StoreError};
    use contracts::enums::{MaterialCategory, WorkerStatus, WorkerType};
    use async_trait::async_trait;
    use serde_json::json;

    #[test]
    fn test_bad_records_are_skipped_individually() {
        let raw = vec![
            json!({"id": "ADV-1", "workerId": "Juan", "rateId": "Instalación", "quantity": 2, "date": "2024-01-10", "totalPay": 100}),
            json!({"id": "ADV-2", "workerId": "Juan", "rateId": "Instalación", "quantity": "dos", "date": "2024-01-10", "totalPay": 100}),
            json!({"id": "ADV-3", "workerId": "Rosa", "rateId": "Pintura", "quantity": 0, "date": "2024-01-11", "totalPay": 0}),
            json!({"id": "ADV-4", "workerId": "Rosa", "rateId": "Pintura", "quantity": 1, "date": "10/01/2024", "totalPay": 5}),
        ];
        let (advances, issues) = decode_records::<Advance>(raw);

        assert_eq!(advances.len(), 1);
        assert_eq!(advances[0].id, "ADV-1");
        let ids: Vec<_> = issues.iter().map(|i| i.record_id.clone().unwrap()).collect();
        assert_eq!(ids, vec!["ADV-2", "ADV-3", "ADV-4"]);
        assert!(issues.iter().all(|i| i.collection == "advances"));
        assert_eq!(issues[1].index, Some(2));
    }

    #[tokio::test]
    async fn test_load_dataset_from_store() {
        let store = MemoryStore::new();
        store
            .save(
                "orders",
                vec![json!({"id": "PED-1001", "client": "Familia Quispe", "entity": "ET Norte", "moduleQty": 2, "priority": "Media", "status": "Aprobado", "createdAt": "10/1/2024"})],
            )
            .await
            .unwrap();
        store
            .save(
                "expenses",
                vec![json!({"id": "EXP-1", "description": "Clavos", "category": "Insumos", "amount": 35.5, "entityName": "ET Norte", "date": "2024-01-09"})],
            )
            .await
            .unwrap();

        let dataset = Dataset::load(&store).await;
        assert_eq!(dataset.orders.len(), 1);
        assert_eq!(dataset.expenses.len(), 1);
        assert!(dataset.advances.is_empty());
        assert!(dataset.issues.is_empty());
    }

    #[tokio::test]
    async fn test_saved_typed_records_reload() {
        let store = MemoryStore::new();
        let workers = vec![Worker {
            id: "W-1".into(),
            name: "Juan Pérez".into(),
            worker_type: WorkerType::Installer,
            specialty: "Montaje".into(),
            status: WorkerStatus::Active,
        }];
        let materials = vec![Material {
            id: "MAT-1".into(),
            name: "Triplay 4mm".into(),
            category: MaterialCategory::Plywood,
            stock: 3,
            unit: "plancha".into(),
            min_stock: 5,
        }];

        let ack = save_collection(&store, &workers).await.unwrap();
        assert_eq!(ack.collection, "workers");
        assert_eq!(ack.count, 1);
        save_collection(&store, &materials).await.unwrap();

        let dataset = Dataset::load(&store).await;
        assert_eq!(dataset.workers, workers);
        assert_eq!(dataset.materials, materials);
        assert!(dataset.issues.is_empty());
    }

    struct BrokenStore;

    #[async_trait]
    impl RecordStore for BrokenStore {
        async fn load(&self, collection: &str) -> Result<Vec<Value>, StoreError> {
            if collection == "rates" {
                return Err(StoreError::NotAnArray(collection.to_string()));
            }
            Ok(Vec::new())
        }

        async fn save(&self, collection: &str, records: Vec<Value>) -> Result<SaveAck, StoreError> {
            Ok(SaveAck::now(collection, records.len()))
        }
    }

    #[tokio::test]
    async fn test_unreadable_collection_degrades_to_empty() {
        let dataset = Dataset::load(&BrokenStore).await;
        assert!(dataset.rates.is_empty());
        assert_eq!(dataset.issues.len(), 1);
        assert_eq!(dataset.issues[0].collection, "rates");
        assert_eq!(dataset.issues[0].index, None);
    }
}
