use serde::{Deserialize, Serialize};

/// Статья реального расхода (материалы, логистика)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    #[serde(rename = "Madera")]
    Wood,
    #[serde(rename = "Herrajes")]
    Fittings,
    #[serde(rename = "Insumos")]
    Supplies,
    #[serde(rename = "Logística")]
    Logistics,
    #[serde(rename = "Otros")]
    Other,
}

impl ExpenseCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Wood => "Madera",
            ExpenseCategory::Fittings => "Herrajes",
            ExpenseCategory::Supplies => "Insumos",
            ExpenseCategory::Logistics => "Logística",
            ExpenseCategory::Other => "Otros",
        }
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
