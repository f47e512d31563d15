use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Строка детализации выставляемого счёта
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingLine {
    pub date: NaiveDate,
    /// Код заказа (ID vivienda)
    pub order_id: Option<String>,
    pub quantity: i64,
    pub rate: f64,
    pub amount: f64,
}

/// Расчёт за монтаж по одной технической организации
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityBilling {
    pub entity_name: String,
    pub modules: i64,
    pub labor_cost: f64,
    pub revenue: f64,
    /// revenue − labor_cost
    pub projected_profit: f64,
    pub lines: Vec<BillingLine>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallationBilling {
    /// По убыванию выручки
    pub entities: Vec<EntityBilling>,
    pub total_billing: f64,
}
