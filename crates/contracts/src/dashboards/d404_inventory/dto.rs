use crate::enums::MaterialCategory;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LowStockItem {
    pub material_id: String,
    pub name: String,
    pub stock: i64,
    pub min_stock: i64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStock {
    pub category: MaterialCategory,
    pub items: usize,
    pub total_stock: i64,
}

/// Сводка по складу
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    pub low_stock: Vec<LowStockItem>,
    pub by_category: Vec<CategoryStock>,
}
