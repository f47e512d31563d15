use crate::domain::common::AggregateRoot;
use crate::enums::MaterialCategory;
use serde::{Deserialize, Serialize};

/// Материал на складе (агрегат a004)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub id: String,
    pub name: String,
    pub category: MaterialCategory,
    pub stock: i64,
    /// Единица измерения ("pies", "planchas", ...)
    pub unit: String,
    /// Порог для флага "низкий остаток"
    pub min_stock: i64,
}

impl Material {
    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.min_stock
    }

    /// Копия с остатком, изменённым на `delta`, но не ниже нуля
    pub fn adjusted(&self, delta: i64) -> Self {
        Self {
            stock: (self.stock + delta).max(0),
            ..self.clone()
        }
    }
}

impl AggregateRoot for Material {
    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Material name must not be empty".into());
        }
        if self.stock < 0 {
            return Err(format!("Negative stock: {}", self.stock));
        }
        Ok(())
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "materials"
    }
}
