use crate::domain::common::AggregateRoot;
use crate::enums::RateCategory;
use serde::{Deserialize, Serialize};

/// Тариф сдельной работы (агрегат a002)
///
/// Запись справочника; её изменение не затрагивает уже зарегистрированные выпуски.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRate {
    pub id: String,
    pub description: String,
    pub category: RateCategory,
    pub unit_price: f64,
}

impl AggregateRoot for TaskRate {
    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), String> {
        if self.description.trim().is_empty() {
            return Err("Rate description must not be empty".into());
        }
        if !self.unit_price.is_finite() || self.unit_price < 0.0 {
            return Err(format!("Invalid unit price: {}", self.unit_price));
        }
        Ok(())
    }

    fn aggregate_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "rates"
    }
}
