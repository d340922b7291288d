use crate::domain::common::{AggregateId, BaseAggregate};
use crate::enums::StoreLevel;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StoreId(pub Uuid);

impl StoreId {
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

impl AggregateId for StoreId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(StoreId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Торговая точка из ростера мерчендайзера.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    #[serde(flatten)]
    pub base: BaseAggregate<StoreId>,

    pub level: StoreLevel,
}

impl Store {
    pub fn new_for_insert(name: String, level: StoreLevel) -> Self {
        Self {
            base: BaseAggregate::new(StoreId::new_v4(), name),
            level,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &StoreDto) {
        self.base.name = dto.name.clone();
        self.level = dto.level;
        self.base.comment = dto.comment.clone();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.name.trim().is_empty() {
            return Err("Store name must not be empty".into());
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
pub struct StoreDto {
    pub id: Option<String>,
    pub name: String,
    pub level: StoreLevel,
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_blank_name() {
        let store = Store::new_for_insert("  ".to_string(), StoreLevel::Ritel);
        assert!(store.validate().is_err());
    }

    #[test]
    fn serde_flattens_base_fields() {
        let store = Store::new_for_insert("Toko Berkah".to_string(), StoreLevel::Ws1);
        let json = serde_json::to_value(&store).unwrap();
        assert_eq!(json["name"], "Toko Berkah");
        assert_eq!(json["level"], "Ws 1");
        let back: Store = serde_json::from_value(json).unwrap();
        assert_eq!(back.base.id, store.base.id);
        assert_eq!(back.level, StoreLevel::Ws1);
    }
}
