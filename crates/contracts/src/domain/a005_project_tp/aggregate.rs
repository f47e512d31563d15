use crate::domain::common::AggregateRoot;
use serde::{Deserialize, Serialize};

/// Проект Techo Propio технической организации (агрегат a005)
///
/// Прогресс здесь не хранится, он вычисляется по выпускам. Устаревшее поле
/// `progress` в сохранённом JSON при чтении игнорируется.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTp {
    pub id: String,

    /// Название технической организации (ключ мягкой ссылки)
    pub entity_name: String,

    pub location: String,

    /// Количество жилых единиц по контракту
    pub total_viviendas: i64,

    pub doors_per_vivienda: i64,

    /// Свободный текст этапа ("Fabricación de Marcos", ...)
    pub stage: String,
}

impl ProjectTp {
    pub fn total_doors(&self) -> i64 {
        self.total_viviendas * self.doors_per_vivienda
    }
}

impl AggregateRoot for ProjectTp {
    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), String> {
        if self.entity_name.trim().is_empty() {
            return Err("Entity name must not be empty".into());
        }
        if self.total_viviendas < 0 || self.doors_per_vivienda < 0 {
            return Err("Housing and door counts must not be negative".into());
        }
        Ok(())
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "projects"
    }
}
