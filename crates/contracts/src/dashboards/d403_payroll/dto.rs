use crate::domain::a003_advance::Advance;
use serde::{Deserialize, Serialize};

/// Выпуск в ведомости с фактической ценой за единицу
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollLine {
    #[serde(flatten)]
    pub advance: Advance,
    /// totalPay / quantity
    pub unit_price: f64,
}

/// Начисления одного работника
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkerPayroll {
    /// Имя, зафиксированное в выпусках
    pub worker_name: String,
    pub total_amount: f64,
    /// Сумма quantity
    pub total_tasks: i64,
    /// В хронологическом порядке
    pub detail: Vec<PayrollLine>,
}

/// Планилья (ведомость сдельной оплаты)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollReport {
    /// В порядке первого появления во входных данных
    pub workers: Vec<WorkerPayroll>,
    pub total_amount: f64,
    pub total_operations: i64,
}

impl PayrollReport {
    pub fn worker(&self, name: &str) -> Option<&WorkerPayroll> {
        self.workers.iter().find(|w| w.worker_name == name)
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }
}
