use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MaterialCategory {
    #[serde(rename = "Madera")]
    Wood,
    #[serde(rename = "Triplay")]
    Plywood,
    #[serde(rename = "Acabado")]
    Finish,
    #[serde(rename = "Ferretería")]
    Hardware,
}

impl MaterialCategory {
    pub fn label(&self) -> &'static str {
        match self {
            MaterialCategory::Wood => "Madera",
            MaterialCategory::Plywood => "Triplay",
            MaterialCategory::Finish => "Acabado",
            MaterialCategory::Hardware => "Ferretería",
        }
    }
}

impl std::fmt::Display for MaterialCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
