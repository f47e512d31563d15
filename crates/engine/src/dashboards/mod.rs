pub mod d400_weekly_financials;
pub mod d401_installation_billing;
pub mod d402_progress;
pub mod d403_payroll;
pub mod d404_inventory;

use contracts::dashboards::d400_weekly_financials::WeekReport;
use contracts::dashboards::d401_installation_billing::InstallationBilling;
use contracts::dashboards::d402_progress::{EntityProgress, OrderProgress};
use contracts::dashboards::d403_payroll::PayrollReport;
use contracts::dashboards::d404_inventory::InventorySummary;
use serde::Serialize;

use crate::shared::dataset::{Dataset, RecordIssue};

/// Tunables of the report computations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportSettings {
    /// Billed per installed module
    pub module_billing_rate: f64,
    /// Doors making up one module
    pub doors_per_module: i64,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            module_billing_rate: contracts::shared::constants::MODULE_BILLING_RATE,
            doors_per_module: contracts::shared::constants::DOORS_PER_MODULE,
        }
    }
}

/// Every dashboard computed over one dataset
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportBundle {
    pub weekly_financials: Vec<WeekReport>,
    pub installation_billing: InstallationBilling,
    pub order_progress: Vec<OrderProgress>,
    pub entity_progress: Vec<EntityProgress>,
    pub payroll: PayrollReport,
    pub inventory: InventorySummary,
    pub issues: Vec<RecordIssue>,
}

pub fn build_report_bundle(dataset: &Dataset, settings: &ReportSettings) -> ReportBundle {
    ReportBundle {
        weekly_financials: d400_weekly_financials::compute_weekly_financials(
            &dataset.advances,
            &dataset.expenses,
            settings,
        ),
        installation_billing: d401_installation_billing::compute_installation_billing(
            &dataset.advances,
            settings,
        ),
        order_progress: d402_progress::compute_all_order_progress(
            &dataset.orders,
            &dataset.advances,
            settings,
        ),
        entity_progress: d402_progress::compute_all_entity_progress(
            &dataset.projects,
            &dataset.advances,
        ),
        payroll: d403_payroll::compute_payroll_by_worker(&dataset.advances),
        inventory: d404_inventory::compute_inventory_summary(&dataset.materials),
        issues: dataset.issues.clone(),
    }
}
