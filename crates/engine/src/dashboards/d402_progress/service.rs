use contracts::dashboards::d402_progress::{EntityProgress, OrderProgress};
use contracts::domain::a003_advance::Advance;
use contracts::domain::a005_project_tp::ProjectTp;
use contracts::domain::a006_order::Order;
use contracts::shared::soft_ref::SoftRef;

use crate::dashboards::ReportSettings;

/// Progress is capped here for orders and entities alike; raw counts stay uncapped
const PROGRESS_CAP: u32 = 100;

/// round(done / target × 100), clamped to 0..=100; zero target yields 0
pub fn progress_percent(done: i64, target: i64) -> u32 {
    if target <= 0 || done <= 0 {
        return 0;
    }
    let percent = (done as f64 / target as f64 * 100.0).round();
    if percent >= PROGRESS_CAP as f64 {
        PROGRESS_CAP
    } else {
        percent as u32
    }
}

/// Doors produced against an order (any task type), matched by order code ignoring case
pub fn compute_order_progress(
    order: &Order,
    advances: &[Advance],
    settings: &ReportSettings,
) -> OrderProgress {
    let finished_count = SoftRef::ignore_case(&order.id).join_sum(
        advances,
        |a| a.order_id.as_deref(),
        |a| a.quantity,
    );
    let total_required = order.module_qty * settings.doors_per_module;

    OrderProgress {
        order_id: order.id.clone(),
        finished_count,
        total_required,
        progress_percent: progress_percent(finished_count, total_required),
    }
}

/// Installed modules of an entity against its contracted housing units.
///
/// Only advances whose rate contains "instala" count; one installed module
/// completes one vivienda.
pub fn compute_entity_progress(project: &ProjectTp, advances: &[Advance]) -> EntityProgress {
    let installed: Vec<&Advance> = advances
        .iter()
        .filter(|a| a.is_billable_installation())
        .collect();
    let completed_units = SoftRef::exact(&project.entity_name).join_sum(
        &installed,
        |a| a.entity_name.as_deref(),
        |a| a.quantity,
    );

    EntityProgress {
        entity_name: project.entity_name.clone(),
        completed_units,
        target_units: project.total_viviendas,
        progress_percent: progress_percent(completed_units, project.total_viviendas),
    }
}

/// Progress of every order, in input order
pub fn compute_all_order_progress(
    orders: &[Order],
    advances: &[Advance],
    settings: &ReportSettings,
) -> Vec<OrderProgress> {
    orders
        .iter()
        .map(|o| compute_order_progress(o, advances, settings))
        .collect()
}

/// Progress of every project, in input order
pub fn compute_all_entity_progress(
    projects: &[ProjectTp],
    advances: &[Advance],
) -> Vec<EntityProgress> {
    projects
        .iter()
        .map(|p| compute_entity_progress(p, advances))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::enums::OrderStatus;

    fn advance(rate: &str, qty: i64, order: Option<&str>, entity: Option<&str>) -> Advance {
        Advance {
            id: "ADV".into(),
            worker_id: "Juan".into(),
            rate_id: rate.into(),
            quantity: qty,
            date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            total_pay: 1.0,
            order_id: order.map(str::to_string),
            entity_name: entity.map(str::to_string),
        }
    }

    fn order(id: &str, module_qty: i64) -> Order {
        Order {
            id: id.into(),
            client: "Familia Rojas".into(),
            entity: "ET Norte".into(),
            module_qty,
            priority: "Alta".into(),
            status: OrderStatus::Manufacturing,
            created_at: String::new(),
        }
    }

    fn project(viviendas: i64) -> ProjectTp {
        ProjectTp {
            id: "TP-1".into(),
            entity_name: "ET Norte".into(),
            location: "Chiclayo".into(),
            total_viviendas: viviendas,
            doors_per_vivienda: 4,
            stage: "Instalación".into(),
        }
    }

    #[test]
    fn test_order_progress_full_and_over_delivered() {
        let o = order("PED-1001", 2);
        let settings = ReportSettings::default();

        let advances = vec![
            advance("Armado", 6, Some("PED-1001"), None),
            advance("Pintura", 4, Some("ped-1001"), None),
        ];
        let p = compute_order_progress(&o, &advances, &settings);
        assert_eq!(p.total_required, 10);
        assert_eq!(p.finished_count, 10);
        assert_eq!(p.progress_percent, 100);

        let mut more = advances.clone();
        more.push(advance("Armado", 5, Some("PED-1001"), None));
        let p = compute_order_progress(&o, &more, &settings);
        assert_eq!(p.finished_count, 15);
        assert_eq!(p.progress_percent, 100);
    }

    #[test]
    fn test_order_progress_rounds_and_ignores_other_orders() {
        let o = order("PED-2002", 3);
        let advances = vec![
            advance("Armado", 1, Some("PED-2002"), None),
            advance("Armado", 50, Some("PED-9999"), None),
            advance("Armado", 50, None, None),
        ];
        let p = compute_order_progress(&o, &advances, &ReportSettings::default());
        // 1 / 15 = 6.67%
        assert_eq!(p.progress_percent, 7);
    }

    #[test]
    fn test_zero_targets_yield_zero() {
        let o = order("PED-0", 0);
        let advances = vec![advance("Instalación", 3, Some("PED-0"), Some("ET Norte"))];
        assert_eq!(
            compute_order_progress(&o, &advances, &ReportSettings::default()).progress_percent,
            0
        );
        assert_eq!(compute_entity_progress(&project(0), &advances).progress_percent, 0);
    }

    #[test]
    fn test_entity_progress_counts_installed_modules_only() {
        let advances = vec![
            advance("Instalación Módulo", 5, None, Some("ET Norte")),
            advance("Pintura", 40, None, Some("ET Norte")),
            advance("Instalación Módulo", 5, None, Some("ET Sur")),
            advance("Instalación Módulo", 5, None, Some("et norte")),
        ];
        let p = compute_entity_progress(&project(20), &advances);
        assert_eq!(p.completed_units, 5);
        assert_eq!(p.progress_percent, 25);

        let p = compute_entity_progress(&project(4), &advances);
        assert_eq!(p.completed_units, 5);
        assert_eq!(p.progress_percent, 100);
    }

    #[test]
    fn test_progress_bounds() {
        for target in 0..30 {
            for done in 0..60 {
                let p = progress_percent(done, target);
                assert!(p <= 100);
            }
        }
    }
}
