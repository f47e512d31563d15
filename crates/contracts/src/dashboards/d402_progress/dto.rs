use serde::{Deserialize, Serialize};

/// Выполнение заказа
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderProgress {
    pub order_id: String,
    /// Изготовлено дверей по заказу (без ограничения)
    pub finished_count: i64,
    /// module_qty × дверей в модуле
    pub total_required: i64,
    /// 0..=100
    pub progress_percent: u32,
}

/// Выполнение контракта технической организации
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityProgress {
    pub entity_name: String,
    /// Установлено модулей (без ограничения)
    pub completed_units: i64,
    /// Жилых единиц по контракту
    pub target_units: i64,
    /// 0..=100
    pub progress_percent: u32,
}
