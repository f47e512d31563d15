use contracts::dashboards::d404_inventory::{CategoryStock, InventorySummary, LowStockItem};
use contracts::domain::a004_material::Material;
use std::collections::BTreeMap;

/// Low-stock listing and stock per material category
pub fn compute_inventory_summary(materials: &[Material]) -> InventorySummary {
    let low_stock = materials
        .iter()
        .filter(|m| m.is_low_stock())
        .map(|m| LowStockItem {
            material_id: m.id.clone(),
            name: m.name.clone(),
            stock: m.stock,
            min_stock: m.min_stock,
            unit: m.unit.clone(),
        })
        .collect();

    let mut categories: BTreeMap<_, (usize, i64)> = BTreeMap::new();
    for m in materials {
        let entry = categories.entry(m.category).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += m.stock;
    }

    let by_category = categories
        .into_iter()
        .map(|(category, (items, total_stock))| CategoryStock {
            category,
            items,
            total_stock,
        })
        .collect();

    InventorySummary {
        low_stock,
        by_category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::MaterialCategory;

    fn material(id: &str, category: MaterialCategory, stock: i64, min_stock: i64) -> Material {
        Material {
            id: id.into(),
            name: format!("Material {}", id),
            category,
            stock,
            unit: "und".into(),
            min_stock,
        }
    }

    #[test]
    fn test_inventory_summary() {
        let materials = vec![
            material("MAT-1", MaterialCategory::Wood, 5, 10),
            material("MAT-2", MaterialCategory::Wood, 40, 10),
            material("MAT-3", MaterialCategory::Hardware, 10, 10),
        ];
        let summary = compute_inventory_summary(&materials);

        let low: Vec<&str> = summary.low_stock.iter().map(|m| m.material_id.as_str()).collect();
        assert_eq!(low, vec!["MAT-1", "MAT-3"]);

        assert_eq!(summary.by_category.len(), 2);
        assert_eq!(summary.by_category[0].category, MaterialCategory::Wood);
        assert_eq!(summary.by_category[0].items, 2);
        assert_eq!(summary.by_category[0].total_stock, 45);
    }
}
