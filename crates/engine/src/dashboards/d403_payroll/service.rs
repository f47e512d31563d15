use contracts::dashboards::d403_payroll::{PayrollLine, PayrollReport, WorkerPayroll};
use contracts::domain::a003_advance::Advance;

/// Planilla de pagos: advances grouped by the worker name frozen on them.
///
/// Workers appear in order of their first advance; each worker's detail is sorted
/// by date (stable, so same-day advances keep their input order).
pub fn compute_payroll_by_worker(advances: &[Advance]) -> PayrollReport {
    let mut workers: Vec<WorkerPayroll> = Vec::new();

    for adv in advances {
        let idx = match workers.iter().position(|w| w.worker_name == adv.worker_id) {
            Some(idx) => idx,
            None => {
                workers.push(WorkerPayroll {
                    worker_name: adv.worker_id.clone(),
                    total_amount: 0.0,
                    total_tasks: 0,
                    detail: Vec::new(),
                });
                workers.len() - 1
            }
        };

        let worker = &mut workers[idx];
        worker.total_amount += adv.total_pay;
        worker.total_tasks += adv.quantity;
        worker.detail.push(PayrollLine {
            advance: adv.clone(),
            unit_price: adv.effective_unit_price(),
        });
    }

    for worker in workers.iter_mut() {
        worker.detail.sort_by_key(|line| line.advance.date);
    }

    let total_amount = workers.iter().map(|w| w.total_amount).sum();
    let total_operations = advances.iter().map(|a| a.quantity).sum();

    PayrollReport {
        workers,
        total_amount,
        total_operations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn advance(id: &str, worker: &str, qty: i64, pay: f64, d: &str) -> Advance {
        Advance {
            id: id.into(),
            worker_id: worker.into(),
            rate_id: "Armado de hoja".into(),
            quantity: qty,
            date: NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap(),
            total_pay: pay,
            order_id: None,
            entity_name: None,
        }
    }

    #[test]
    fn test_groups_by_worker_name() {
        let advances = vec![
            advance("A1", "Juan", 3, 45.0, "2024-01-12"),
            advance("A2", "Rosa", 2, 30.0, "2024-01-10"),
            advance("A3", "Juan", 4, 48.0, "2024-01-09"),
        ];
        let report = compute_payroll_by_worker(&advances);

        assert_eq!(report.worker_count(), 2);
        assert_eq!(report.workers[0].worker_name, "Juan");
        let juan = report.worker("Juan").unwrap();
        assert_eq!(juan.total_amount, 93.0);
        assert_eq!(juan.total_tasks, 7);
        let ids: Vec<&str> = juan.detail.iter().map(|l| l.advance.id.as_str()).collect();
        assert_eq!(ids, vec!["A3", "A1"]);
        assert_eq!(juan.detail[0].unit_price, 12.0);
        assert_eq!(report.total_operations, 9);
    }

    #[test]
    fn test_payroll_conservation() {
        let advances = vec![
            advance("A1", "Juan", 3, 45.5, "2024-01-12"),
            advance("A2", "Rosa", 2, 30.25, "2024-01-10"),
            advance("A3", "Luis", 1, 12.0, "2024-01-10"),
            advance("A4", "Rosa", 6, 72.0, "2024-01-11"),
        ];
        let report = compute_payroll_by_worker(&advances);
        let workers_sum: f64 = report.workers.iter().map(|w| w.total_amount).sum();
        let pay_sum: f64 = advances.iter().map(|a| a.total_pay).sum();
        assert_eq!(workers_sum, pay_sum);
        assert_eq!(report.total_amount, pay_sum);
    }

    #[test]
    fn test_empty_input() {
        let report = compute_payroll_by_worker(&[]);
        assert_eq!(report.worker_count(), 0);
        assert_eq!(report.total_amount, 0.0);
    }
}
