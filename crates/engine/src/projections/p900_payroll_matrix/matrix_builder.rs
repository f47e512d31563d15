use chrono::NaiveDate;
use contracts::domain::a002_task_rate::TaskRate;
use contracts::domain::a003_advance::Advance;
use contracts::projections::p900_payroll_matrix::{
    Cell, ExportMatrix, LEADING_COLUMNS, WORKER_BLOCK_WIDTH,
};
use std::collections::BTreeMap;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Cross-tab of advances: one row group per date, one column block per worker.
///
/// A worker with several advances on the same date gets one row per advance; the
/// other workers are padded with blank cells on those rows. The rate catalog runs
/// down the first two columns independently of the dates, so the body is as long as
/// the longer of the two. The totals row sums totalPay per worker.
pub fn build_export_matrix(advances: &[Advance], rates: &[TaskRate]) -> ExportMatrix {
    let mut workers: Vec<String> = Vec::new();
    for adv in advances {
        if !workers.contains(&adv.worker_id) {
            workers.push(adv.worker_id.clone());
        }
    }

    let mut by_date: BTreeMap<NaiveDate, Vec<Vec<&Advance>>> = BTreeMap::new();
    let mut worker_totals = vec![0.0_f64; workers.len()];
    for adv in advances {
        let Some(widx) = workers.iter().position(|w| *w == adv.worker_id) else {
            continue;
        };
        by_date
            .entry(adv.date)
            .or_insert_with(|| vec![Vec::new(); workers.len()])[widx]
            .push(adv);
        worker_totals[widx] += adv.total_pay;
    }

    let width = LEADING_COLUMNS + workers.len() * WORKER_BLOCK_WIDTH;

    let mut date_rows: Vec<Vec<Cell>> = Vec::new();
    for (date, slots) in &by_date {
        let depth = slots.iter().map(Vec::len).max().unwrap_or(0);
        for i in 0..depth {
            let mut row = Vec::with_capacity(width);
            row.push(Cell::Blank);
            row.push(Cell::Blank);
            row.push(Cell::text(date.format(DATE_FORMAT).to_string()));
            for slot in slots {
                match slot.get(i) {
                    Some(adv) => {
                        row.push(Cell::text(adv.rate_id.clone()));
                        row.push(Cell::Integer(adv.quantity));
                        row.push(Cell::Currency(adv.total_pay));
                    }
                    None => row.extend(std::iter::repeat(Cell::Blank).take(WORKER_BLOCK_WIDTH)),
                }
            }
            date_rows.push(row);
        }
    }

    let body_len = date_rows.len().max(rates.len());
    let mut date_rows = date_rows.into_iter();
    let mut rows = Vec::with_capacity(body_len);
    for i in 0..body_len {
        let mut row = date_rows
            .next()
            .unwrap_or_else(|| vec![Cell::Blank; width]);
        if let Some(rate) = rates.get(i) {
            row[0] = Cell::text(rate.description.clone());
            row[1] = Cell::Currency(rate.unit_price);
        }
        rows.push(row);
    }

    let mut header = vec![Cell::text("Tarifa"), Cell::text("Precio"), Cell::text("Fecha")];
    for worker in &workers {
        header.push(Cell::text(format!("{} · Tarea", worker)));
        header.push(Cell::text("Cant."));
        header.push(Cell::text("Subtotal"));
    }

    let mut totals = vec![Cell::text("TOTAL"), Cell::Blank, Cell::Blank];
    for total in worker_totals {
        totals.push(Cell::Blank);
        totals.push(Cell::Blank);
        totals.push(Cell::Currency(total));
    }

    tracing::debug!(
        "export matrix: {} worker(s), {} date row(s), {} rate row(s)",
        workers.len(),
        by_date.len(),
        rates.len()
    );

    ExportMatrix {
        workers,
        header,
        rows,
        totals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d403_payroll::compute_payroll_by_worker;
    use contracts::enums::RateCategory;

    fn advance(worker: &str, rate: &str, qty: i64, pay: f64, d: &str) -> Advance {
        Advance {
            id: format!("ADV-{}-{}-{}", worker, rate, d),
            worker_id: worker.into(),
            rate_id: rate.into(),
            quantity: qty,
            date: NaiveDate::parse_from_str(d, DATE_FORMAT).unwrap(),
            total_pay: pay,
            order_id: None,
            entity_name: None,
        }
    }

    fn rate(desc: &str, price: f64) -> TaskRate {
        TaskRate {
            id: format!("R-{}", desc),
            description: desc.into(),
            category: RateCategory::Manufacturing,
            unit_price: price,
        }
    }

    fn sample() -> Vec<Advance> {
        vec![
            advance("Juan", "Armado", 3, 30.0, "2024-01-10"),
            advance("Rosa", "Pintura", 2, 16.0, "2024-01-10"),
            advance("Juan", "Lijado", 5, 10.0, "2024-01-10"),
            advance("Rosa", "Pintura", 1, 8.0, "2024-01-08"),
        ]
    }

    #[test]
    fn test_layout() {
        let m = build_export_matrix(&sample(), &[rate("Armado", 10.0)]);

        assert_eq!(m.workers, vec!["Juan", "Rosa"]);
        assert_eq!(m.width(), 9);
        assert_eq!(m.header[3], Cell::text("Juan · Tarea"));
        // 2024-01-08: one row; 2024-01-10: Juan has two advances
        assert_eq!(m.rows.len(), 3);
        assert_eq!(m.rows[0][2], Cell::text("2024-01-08"));
        assert_eq!(m.rows[0][0], Cell::text("Armado"));
        assert_eq!(m.rows[0][1], Cell::Currency(10.0));
        assert!(m.rows[0][3].is_blank());
        assert_eq!(m.rows[0][6], Cell::text("Pintura"));

        assert_eq!(m.rows[1][3], Cell::text("Armado"));
        assert_eq!(m.rows[2][3], Cell::text("Lijado"));
        assert_eq!(m.rows[2][4], Cell::Integer(5));
        assert!(m.rows[2][6].is_blank());
        assert!(m.rows[2][0].is_blank());

        assert_eq!(m.totals[0], Cell::text("TOTAL"));
        assert_eq!(m.totals[m.worker_column(0) + 2], Cell::Currency(40.0));
        assert_eq!(m.totals[m.worker_column(1) + 2], Cell::Currency(24.0));
        assert!(m.all_rows().all(|r| r.len() == m.width()));
    }

    #[test]
    fn test_rate_rows_extend_the_body() {
        let rates = vec![rate("A", 1.0), rate("B", 2.0), rate("C", 3.0)];
        let m = build_export_matrix(&[advance("Juan", "A", 1, 1.0, "2024-01-10")], &rates);
        assert_eq!(m.rows.len(), 3);
        assert_eq!(m.rows[2][0], Cell::text("C"));
        assert!(m.rows[2][2].is_blank());
        assert!(m.rows[2][3].is_blank());
    }

    #[test]
    fn test_every_advance_appears_once() {
        let advances = sample();
        let m = build_export_matrix(&advances, &[]);

        let mut seen = Vec::new();
        for row in &m.rows {
            let Cell::Text(date) = &row[2] else {
                continue;
            };
            for (w, worker) in m.workers.iter().enumerate() {
                let col = m.worker_column(w);
                if let (Cell::Text(task), Cell::Integer(qty)) = (&row[col], &row[col + 1]) {
                    seen.push((worker.clone(), date.clone(), task.clone(), *qty));
                }
            }
        }
        let mut expected: Vec<_> = advances
            .iter()
            .map(|a| {
                (
                    a.worker_id.clone(),
                    a.date.format(DATE_FORMAT).to_string(),
                    a.rate_id.clone(),
                    a.quantity,
                )
            })
            .collect();
        seen.sort();
        expected.sort();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_totals_match_payroll() {
        let advances = sample();
        let m = build_export_matrix(&advances, &[]);
        let payroll = compute_payroll_by_worker(&advances);
        for (w, worker) in m.workers.iter().enumerate() {
            let expected = payroll.worker(worker).unwrap().total_amount;
            assert_eq!(m.totals[m.worker_column(w) + 2], Cell::Currency(expected));
        }
    }

    #[test]
    fn test_empty_input() {
        let m = build_export_matrix(&[], &[]);
        assert!(m.rows.is_empty());
        assert_eq!(m.header.len(), 3);
        assert_eq!(m.totals.len(), 3);
    }
}
