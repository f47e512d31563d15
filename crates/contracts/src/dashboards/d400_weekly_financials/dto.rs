use serde::{Deserialize, Serialize};

/// Ключ недели: (номер недели, календарный год)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WeekKey {
    pub year: i32,
    pub week: u32,
}

impl WeekKey {
    /// Подпись для отображения и сортировки ("Semana 2 - 2024")
    pub fn label(&self) -> String {
        format!("Semana {} - {}", self.week, self.year)
    }
}

/// Финансовые итоги одной ячейки недельного отчёта
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialTotals {
    /// Установленные модули (сумма quantity)
    pub modules: i64,
    /// Затраты на труд (сумма зафиксированных totalPay)
    pub labor: f64,
    /// Выставлено организации (модули × тариф)
    pub revenue: f64,
    /// Расходы на материалы и логистику, отнесённые к ячейке
    pub real_expenses: f64,
    /// revenue − (labor + real_expenses)
    pub profit: f64,
}

impl FinancialTotals {
    /// Поэлементная сумма: строки организаций сворачиваются в итог недели
    pub fn accumulate(&mut self, other: &FinancialTotals) {
        self.modules += other.modules;
        self.labor += other.labor;
        self.revenue += other.revenue;
        self.real_expenses += other.real_expenses;
        self.profit += other.profit;
    }
}

/// Одна техническая организация внутри недели
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityWeekRow {
    pub entity_name: String,
    #[serde(flatten)]
    pub totals: FinancialTotals,
}

/// Отчёт по одной неделе
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekReport {
    pub label: String,
    pub key: WeekKey,
    /// Строки организаций, отсортированные по имени
    pub entities: Vec<EntityWeekRow>,
    pub totals: FinancialTotals,
}

impl WeekReport {
    pub fn entity(&self, name: &str) -> Option<&EntityWeekRow> {
        self.entities.iter().find(|e| e.entity_name == name)
    }
}
