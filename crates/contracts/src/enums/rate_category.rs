use serde::{Deserialize, Serialize};

/// Категория тарифа (вид работ)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RateCategory {
    #[serde(rename = "Fabricación")]
    Manufacturing,
    #[serde(rename = "Pintura")]
    Painting,
    #[serde(rename = "Instalación")]
    Installation,
    #[serde(rename = "Especial")]
    Special,
}

impl RateCategory {
    pub fn label(&self) -> &'static str {
        match self {
            RateCategory::Manufacturing => "Fabricación",
            RateCategory::Painting => "Pintura",
            RateCategory::Installation => "Instalación",
            RateCategory::Special => "Especial",
        }
    }
}

impl std::fmt::Display for RateCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
