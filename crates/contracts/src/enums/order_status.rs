use serde::{Deserialize, Serialize};

/// Статус заказа (этап жизненного цикла)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "Cotizado")]
    Quoted,
    #[serde(rename = "Aprobado")]
    Approved,
    #[serde(rename = "En fabricación")]
    Manufacturing,
    #[serde(rename = "Terminado")]
    Finished,
    #[serde(rename = "Instalado")]
    Installed,
    #[serde(rename = "Entregado")]
    Delivered,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Quoted => "Cotizado",
            OrderStatus::Approved => "Aprobado",
            OrderStatus::Manufacturing => "En fabricación",
            OrderStatus::Finished => "Terminado",
            OrderStatus::Installed => "Instalado",
            OrderStatus::Delivered => "Entregado",
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Quoted
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
