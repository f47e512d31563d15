use crate::domain::common::AggregateRoot;
use crate::enums::OrderStatus;
use serde::{Deserialize, Serialize};

/// Заказ на изготовление модулей (агрегат a006)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Код заказа (e.g. "PED-4821"); сравнивается без учёта регистра
    pub id: String,

    pub client: String,

    /// Техническая организация; мягкая ссылка на `ProjectTp::entity_name`
    pub entity: String,

    /// Заказанное количество модулей
    pub module_qty: i64,

    #[serde(default)]
    pub priority: String,

    #[serde(default)]
    pub status: OrderStatus,

    /// Дата создания в том виде, в каком её сохранила форма
    #[serde(default)]
    pub created_at: String,
}

impl AggregateRoot for Order {
    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Order code must not be empty".into());
        }
        if self.module_qty < 0 {
            return Err(format!("Negative module quantity: {}", self.module_qty));
        }
        Ok(())
    }

    fn aggregate_index() -> &'static str {
        "a006"
    }

    fn collection_name() -> &'static str {
        "orders"
    }
}
