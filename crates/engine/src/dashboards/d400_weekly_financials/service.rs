use chrono::{Datelike, NaiveDate};
use contracts::dashboards::d400_weekly_financials::{
    EntityWeekRow, FinancialTotals, WeekKey, WeekReport,
};
use contracts::domain::a003_advance::Advance;
use contracts::domain::a007_expense::Expense;
use std::collections::BTreeMap;

use crate::dashboards::ReportSettings;

/// Week bucket of a date.
///
/// week = ceil((ordinal0 + weekday_of_jan1 + 1) / 7), weekdays counted from Sunday = 0.
/// This is not ISO-8601 numbering; existing exported reports use it.
pub fn week_key(date: NaiveDate) -> WeekKey {
    let ordinal0 = date.ordinal0();
    let weekday = date.weekday().num_days_from_sunday();
    let jan1_weekday = (weekday + 7 - ordinal0 % 7) % 7;
    let numerator = ordinal0 + jan1_weekday + 1;

    WeekKey {
        year: date.year(),
        week: numerator.div_ceil(7),
    }
}

/// Weekly profit and loss per technical entity.
///
/// Only installation advances ("instal" in the rate) produce revenue and open a week.
/// Expenses are attributed only to weeks already opened by installation work; the
/// rest are dropped. Weeks come out sorted by label, descending as text.
pub fn compute_weekly_financials(
    advances: &[Advance],
    expenses: &[Expense],
    settings: &ReportSettings,
) -> Vec<WeekReport> {
    let mut weeks: BTreeMap<WeekKey, BTreeMap<String, FinancialTotals>> = BTreeMap::new();

    for adv in advances.iter().filter(|a| a.is_installation()) {
        let cell = weeks
            .entry(week_key(adv.date))
            .or_default()
            .entry(adv.entity_or_general().to_string())
            .or_default();
        cell.modules += adv.quantity;
        cell.labor += adv.total_pay;
        cell.revenue += adv.quantity as f64 * settings.module_billing_rate;
    }

    let mut dropped = 0usize;
    for exp in expenses {
        let key = week_key(exp.date);
        match weeks.get_mut(&key) {
            Some(entities) => {
                entities
                    .entry(exp.entity_name.clone())
                    .or_default()
                    .real_expenses += exp.amount;
            }
            None => {
                dropped += 1;
                tracing::debug!(
                    "weekly financials: expense '{}' ({}) has no installation week {}",
                    exp.id,
                    exp.date,
                    key.label()
                );
            }
        }
    }

    let mut reports: Vec<WeekReport> = weeks
        .into_iter()
        .map(|(key, entities)| {
            let mut totals = FinancialTotals::default();
            let entities = entities
                .into_iter()
                .map(|(entity_name, mut cell)| {
                    cell.profit = cell.revenue - (cell.labor + cell.real_expenses);
                    totals.accumulate(&cell);
                    EntityWeekRow {
                        entity_name,
                        totals: cell,
                    }
                })
                .collect();

            WeekReport {
                label: key.label(),
                key,
                entities,
                totals,
            }
        })
        .collect();

    reports.sort_by(|a, b| b.label.cmp(&a.label));

    tracing::debug!(
        "weekly financials: {} week(s), {} expense(s) without installation week",
        reports.len(),
        dropped
    );

    reports
}
