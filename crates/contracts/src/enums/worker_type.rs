use serde::{Deserialize, Serialize};

/// Специализация работника цеха
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkerType {
    #[serde(rename = "Carpintero")]
    Carpenter,
    #[serde(rename = "Pintor")]
    Painter,
    #[serde(rename = "Instalador")]
    Installer,
}

impl WorkerType {
    /// Сохранённая метка, как её записывает форма регистрации
    pub fn label(&self) -> &'static str {
        match self {
            WorkerType::Carpenter => "Carpintero",
            WorkerType::Painter => "Pintor",
            WorkerType::Installer => "Instalador",
        }
    }

    pub fn all() -> Vec<WorkerType> {
        vec![
            WorkerType::Carpenter,
            WorkerType::Painter,
            WorkerType::Installer,
        ]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.label() == label)
    }
}

impl std::fmt::Display for WorkerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkerStatus {
    #[serde(rename = "Activo")]
    Active,
    #[serde(rename = "Inactivo")]
    Inactive,
}

impl WorkerStatus {
    pub fn label(&self) -> &'static str {
        match self {
            WorkerStatus::Active => "Activo",
            WorkerStatus::Inactive => "Inactivo",
        }
    }
}

impl std::fmt::Display for WorkerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
