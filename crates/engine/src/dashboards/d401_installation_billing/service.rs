use contracts::dashboards::d401_installation_billing::{
    BillingLine, EntityBilling, InstallationBilling,
};
use contracts::domain::a003_advance::Advance;

use crate::dashboards::ReportSettings;

/// Liquidación comercial: what each technical entity owes for installed modules.
///
/// Counts advances whose rate contains "instala". Entities keep the order in which
/// they first appear, then are sorted by revenue, highest first.
pub fn compute_installation_billing(
    advances: &[Advance],
    settings: &ReportSettings,
) -> InstallationBilling {
    let mut entities: Vec<EntityBilling> = Vec::new();

    for adv in advances.iter().filter(|a| a.is_billable_installation()) {
        let name = adv.entity_or_general();
        let idx = match entities.iter().position(|e| e.entity_name == name) {
            Some(idx) => idx,
            None => {
                entities.push(EntityBilling {
                    entity_name: name.to_string(),
                    modules: 0,
                    labor_cost: 0.0,
                    revenue: 0.0,
                    projected_profit: 0.0,
                    lines: Vec::new(),
                });
                entities.len() - 1
            }
        };

        let amount = adv.quantity as f64 * settings.module_billing_rate;
        let entity = &mut entities[idx];
        entity.modules += adv.quantity;
        entity.labor_cost += adv.total_pay;
        entity.revenue += amount;
        entity.lines.push(BillingLine {
            date: adv.date,
            order_id: adv.order_id.clone(),
            quantity: adv.quantity,
            rate: settings.module_billing_rate,
            amount,
        });
    }

    for entity in entities.iter_mut() {
        entity.projected_profit = entity.revenue - entity.labor_cost;
    }

    entities.sort_by(|a, b| {
        b.revenue
            .total_cmp(&a.revenue)
            .then_with(|| a.entity_name.cmp(&b.entity_name))
    });

    let total_billing = entities.iter().map(|e| e.revenue).sum();

    InstallationBilling {
        entities,
        total_billing,
    }
}
