use super::EntityMetadata;
use serde::{Deserialize, Serialize};

/// Обязательные поля каждого агрегата: id, имя, метаданные
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseAggregate<Id> {
    pub id: Id,
    /// Отображаемое имя записи
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default)]
    pub metadata: EntityMetadata,
}

impl<Id> BaseAggregate<Id> {
    pub fn new(id: Id, name: String) -> Self {
        Self {
            id,
            name,
            comment: None,
            metadata: EntityMetadata::new(),
        }
    }

    /// Отметить запись изменённой
    pub fn touch(&mut self) {
        self.metadata.touch();
    }
}
