use serde::{Deserialize, Serialize};

/// Тип целевого продукта.
///
/// Drive products are short-term promotional pushes bounded by the campaign
/// deadline; Focus products are long-running priority items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductType {
    #[serde(rename = "Distribusi Drive")]
    Drive,
    #[serde(rename = "Item Fokus")]
    Focus,
}

impl ProductType {
    /// Wire code (legacy literal kept for backup compatibility).
    pub fn code(&self) -> &'static str {
        match self {
            ProductType::Drive => "Distribusi Drive",
            ProductType::Focus => "Item Fokus",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ProductType::Drive => "Distribution Drive",
            ProductType::Focus => "Focus Item",
        }
    }

    pub fn all() -> [ProductType; 2] {
        [ProductType::Drive, ProductType::Focus]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Distribusi Drive" => Some(ProductType::Drive),
            "Item Fokus" => Some(ProductType::Focus),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
