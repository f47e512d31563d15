use std::path::PathBuf;

use engine::dashboards::build_report_bundle;
use engine::projections::p900_payroll_matrix::build_export_matrix;
use engine::shared::config::{load_config, resolve_path, ConfigSource};
use engine::shared::dataset::Dataset;
use engine::shared::export::{write_csv, write_xlsx};
use engine::shared::format::{format_money, format_number};
use engine::shared::store::open_store;

const REPORTS_FILE: &str = "reports.json";
const CSV_FILE: &str = "planilla.csv";
const XLSX_FILE: &str = "planilla.xlsx";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let explicit_config = std::env::args().nth(1).map(PathBuf::from);
    let (config, source) = load_config(explicit_config.as_deref())?;

    engine::system::tracing::initialize(&resolve_path(&config.logging.dir))?;
    if let ConfigSource::Embedded {
        missing: Some(path),
    } = &source
    {
        tracing::warn!("config.toml not found at: {}", path.display());
    }
    tracing::info!("Configuration: {}", source);

    let store = open_store(&config.store).await?;
    let dataset = Dataset::load(store.as_ref()).await;

    let settings = config.reports.settings();
    let bundle = build_report_bundle(&dataset, &settings);
    let matrix = build_export_matrix(&dataset.advances, &dataset.rates);

    let export_dir = resolve_path(&config.export.dir);
    tokio::fs::create_dir_all(&export_dir).await?;

    let reports_path = export_dir.join(REPORTS_FILE);
    tokio::fs::write(&reports_path, serde_json::to_vec_pretty(&bundle)?).await?;
    tracing::info!("Reports written to {}", reports_path.display());

    let csv_path = export_dir.join(CSV_FILE);
    tokio::fs::write(&csv_path, write_csv(&matrix)?).await?;
    tracing::info!("Payroll CSV written to {}", csv_path.display());

    let xlsx_path = export_dir.join(XLSX_FILE);
    tokio::fs::write(&xlsx_path, write_xlsx(&matrix)?).await?;
    tracing::info!("Payroll workbook written to {}", xlsx_path.display());

    tracing::info!(
        "Weeks: {}, installation billing: {}, payroll: {} over {} operation(s), low stock items: {}",
        format_number(bundle.weekly_financials.len() as i64),
        format_money(bundle.installation_billing.total_billing),
        format_money(bundle.payroll.total_amount),
        format_number(bundle.payroll.total_operations),
        bundle.inventory.low_stock.len()
    );

    Ok(())
}
