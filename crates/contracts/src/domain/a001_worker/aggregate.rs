use crate::domain::common::AggregateRoot;
use crate::enums::{WorkerStatus, WorkerType};
use serde::{Deserialize, Serialize};

/// Работник цеха (агрегат a001)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    pub id: String,

    /// Отображаемое имя; именно оно замораживается в `Advance::worker_id`
    pub name: String,

    #[serde(rename = "type")]
    pub worker_type: WorkerType,

    pub specialty: String,

    pub status: WorkerStatus,
}

impl Worker {
    pub fn is_active(&self) -> bool {
        self.status == WorkerStatus::Active
    }
}

impl AggregateRoot for Worker {
    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Worker name must not be empty".into());
        }
        Ok(())
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "workers"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_reads_stored_layout() {
        let json = r#"{"id":"W-1","name":"Juan","type":"Instalador","specialty":"Módulos","status":"Activo"}"#;
        let w: Worker = serde_json::from_str(json).unwrap();
        assert_eq!(w.worker_type, WorkerType::Installer);
        assert!(w.is_active());
        assert!(w.validate().is_ok());
        assert_eq!(Worker::full_name(), "a001_workers");
    }
}
