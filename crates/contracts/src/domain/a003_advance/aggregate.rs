use crate::domain::a001_worker::Worker;
use crate::domain::a002_task_rate::TaskRate;
use crate::domain::a006_order::Order;
use crate::domain::common::AggregateRoot;
use crate::shared::constants::{
    GENERAL_ENTITY, INSTALLATION_BILLING_MARKER, INSTALLATION_MARKER, SPECIAL_RATE,
    UNKNOWN_WORKER,
};
use crate::shared::soft_ref::{contains_ignore_case, SoftRef};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Сдельный выпуск работника (агрегат a003)
///
/// Снимок на момент регистрации: работник и тариф фиксируются как текст,
/// `total_pay` как сумма. Из справочника тарифов он больше не пересчитывается.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advance {
    pub id: String,

    /// Имя работника на момент регистрации (не ID)
    pub worker_id: String,

    /// Описание тарифа на момент регистрации
    pub rate_id: String,

    pub quantity: i64,

    /// Дата выполнения работ (YYYY-MM-DD)
    pub date: NaiveDate,

    /// quantity × цена, зафиксированная при регистрации
    pub total_pay: f64,

    /// Код заказа в верхнем регистре (например, "PED-4821")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,

    /// Техническая организация заказа, скопированная при регистрации
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,
}

/// Данные формы, из которых регистрируется выпуск
#[derive(Debug, Clone)]
pub struct AdvanceDraft<'a> {
    pub worker: Option<&'a Worker>,
    pub rate: Option<&'a TaskRate>,
    pub order_id: &'a str,
    pub quantity: i64,
    /// Цена, применённая в форме; может отличаться от цены в справочнике
    pub unit_price: f64,
    pub date: NaiveDate,
}

impl Advance {
    /// Зафиксировать черновик как неизменяемый выпуск.
    ///
    /// Организация берётся из первого заказа, код которого совпадает без учёта
    /// регистра; если заказа нет, ставится `GENERAL`.
    pub fn capture(id: String, draft: AdvanceDraft<'_>, orders: &[Order]) -> Self {
        let order_id = draft.order_id.trim().to_uppercase();
        let entity_name = SoftRef::ignore_case(&order_id)
            .resolve(orders, |o| o.id.as_str())
            .map(|o| o.entity.clone())
            .unwrap_or_else(|| GENERAL_ENTITY.to_string());

        Self {
            id,
            worker_id: draft
                .worker
                .map(|w| w.name.clone())
                .unwrap_or_else(|| UNKNOWN_WORKER.to_string()),
            rate_id: draft
                .rate
                .map(|r| r.description.clone())
                .unwrap_or_else(|| SPECIAL_RATE.to_string()),
            quantity: draft.quantity,
            date: draft.date,
            total_pay: draft.quantity as f64 * draft.unit_price,
            order_id: Some(order_id),
            entity_name: Some(entity_name),
        }
    }

    /// totalPay / quantity, только для отображения
    pub fn effective_unit_price(&self) -> f64 {
        if self.quantity == 0 {
            0.0
        } else {
            self.total_pay / self.quantity as f64
        }
    }

    /// Учитывается недельным финансовым отчётом
    pub fn is_installation(&self) -> bool {
        contains_ignore_case(&self.rate_id, INSTALLATION_MARKER)
    }

    /// Учитывается в счетах за монтаж и прогрессе организации
    pub fn is_billable_installation(&self) -> bool {
        contains_ignore_case(&self.rate_id, INSTALLATION_BILLING_MARKER)
    }

    /// Организация выпуска; без организации попадает в `GENERAL`
    pub fn entity_or_general(&self) -> &str {
        self.entity_name.as_deref().unwrap_or(GENERAL_ENTITY)
    }
}

impl AggregateRoot for Advance {
    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), String> {
        if self.worker_id.trim().is_empty() {
            return Err("Advance without worker".into());
        }
        if self.quantity <= 0 {
            return Err(format!("Quantity must be positive, got {}", self.quantity));
        }
        if !self.total_pay.is_finite() || self.total_pay < 0.0 {
            return Err(format!("Invalid total pay: {}", self.total_pay));
        }
        Ok(())
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "advances"
    }
}
