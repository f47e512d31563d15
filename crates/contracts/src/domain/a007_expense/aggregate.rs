use crate::domain::common::AggregateRoot;
use crate::enums::ExpenseCategory;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Реальный расход по технической организации (агрегат a007)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    pub description: String,
    pub category: ExpenseCategory,
    pub amount: f64,
    /// Мягкая ссылка на организацию ("General" для общих расходов)
    pub entity_name: String,
    pub date: NaiveDate,
}

impl AggregateRoot for Expense {
    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), String> {
        if !self.amount.is_finite() {
            return Err(format!("Invalid amount: {}", self.amount));
        }
        Ok(())
    }

    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "expenses"
    }
}
