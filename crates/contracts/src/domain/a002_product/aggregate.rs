use crate::domain::common::{AggregateId, BaseAggregate};
use crate::enums::ProductType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::TargetCoverage;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(pub Uuid);

impl ProductId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProductId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Целевой продукт кампании (Drive или Focus) с картой покрытия по уровням.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(flatten)]
    pub base: BaseAggregate<ProductId>,

    #[serde(rename = "type")]
    pub product_type: ProductType,

    #[serde(rename = "basePrice")]
    pub base_price: f64,

    /// Inactive products are invisible to the coverage engine.
    #[serde(rename = "isActive", default)]
    pub is_active: bool,

    #[serde(rename = "targetCoverage", default)]
    pub target_coverage: TargetCoverage,
}

impl Product {
    pub fn new_for_insert(
        name: String,
        product_type: ProductType,
        base_price: f64,
        target_coverage: TargetCoverage,
    ) -> Self {
        Self {
            base: BaseAggregate::new(ProductId::new_v4(), name),
            product_type,
            base_price,
            is_active: true,
            target_coverage,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Compound key for bulk upsert: case-insensitive name + type.
    pub fn upsert_key(&self) -> (String, ProductType) {
        (self.base.name.trim().to_lowercase(), self.product_type)
    }

    pub fn update(&mut self, dto: &ProductDto) {
        self.base.name = dto.name.clone();
        self.product_type = dto.product_type;
        self.base_price = dto.base_price;
        self.target_coverage = dto.target_coverage.clone();
        self.base.comment = dto.comment.clone();
    }

    pub fn toggle_active(&mut self) {
        self.is_active = !self.is_active;
        self.base.touch();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.name.trim().is_empty() {
            return Err("Product name must not be empty".into());
        }
        if self.base_price <= 0.0 {
            return Err("Base price must be greater than zero".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.base.touch();
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    #[serde(rename = "basePrice")]
    pub base_price: f64,
    #[serde(rename = "targetCoverage", default)]
    pub target_coverage: TargetCoverage,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::StoreLevel;

    #[test]
    fn new_products_start_active() {
        let product = Product::new_for_insert(
            "Kopi Sachet".into(),
            ProductType::Drive,
            12_500.0,
            TargetCoverage::new(),
        );
        assert!(product.is_active);
    }

    #[test]
    fn upsert_key_ignores_case_and_padding() {
        let a = Product::new_for_insert(
            " Kopi Sachet ".into(),
            ProductType::Drive,
            1.0,
            TargetCoverage::new(),
        );
        let b = Product::new_for_insert(
            "KOPI SACHET".into(),
            ProductType::Drive,
            2.0,
            TargetCoverage::new(),
        );
        assert_eq!(a.upsert_key(), b.upsert_key());

        let c = Product::new_for_insert(
            "Kopi Sachet".into(),
            ProductType::Focus,
            2.0,
            TargetCoverage::new(),
        );
        assert_ne!(a.upsert_key(), c.upsert_key());
    }

    #[test]
    fn serde_round_trip_keeps_coverage() {
        let coverage: TargetCoverage = [(StoreLevel::Ritel, 60.0), (StoreLevel::Ws1, 0.0)]
            .into_iter()
            .collect();
        let product = Product::new_for_insert(
            "Mie Instan".into(),
            ProductType::Focus,
            3_200.0,
            coverage.clone(),
        );
        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back.target_coverage, coverage);
        assert_eq!(back.product_type, ProductType::Focus);
    }
}
