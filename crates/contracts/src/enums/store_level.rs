use serde::{Deserialize, Serialize};

/// Уровни (тиры) торговых точек, от крупного опта к мелкой рознице.
///
/// Serialized with the legacy wire literals ("Ws 1", "Ritel L", ...) so that
/// backups written by earlier builds keep loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StoreLevel {
    #[serde(rename = "Ws 1")]
    Ws1,
    #[serde(rename = "Ws 2")]
    Ws2,
    #[serde(rename = "Ritel L")]
    RitelL,
    Ritel,
    Others,
}

impl StoreLevel {
    /// Wire code, also the display label.
    pub fn code(&self) -> &'static str {
        match self {
            StoreLevel::Ws1 => "Ws 1",
            StoreLevel::Ws2 => "Ws 2",
            StoreLevel::RitelL => "Ritel L",
            StoreLevel::Ritel => "Ritel",
            StoreLevel::Others => "Others",
        }
    }

    /// All levels, ordered highest-volume first.
    pub fn all() -> [StoreLevel; 5] {
        [
            StoreLevel::Ws1,
            StoreLevel::Ws2,
            StoreLevel::RitelL,
            StoreLevel::Ritel,
            StoreLevel::Others,
        ]
    }

    /// Парсинг из строки (CSV-импорт, восстановление бэкапа).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Ws 1" => Some(StoreLevel::Ws1),
            "Ws 2" => Some(StoreLevel::Ws2),
            "Ritel L" => Some(StoreLevel::RitelL),
            "Ritel" => Some(StoreLevel::Ritel),
            "Others" => Some(StoreLevel::Others),
            _ => None,
        }
    }
}

impl std::fmt::Display for StoreLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_round_trip() {
        for level in StoreLevel::all() {
            assert_eq!(StoreLevel::from_code(level.code()), Some(level));
        }
        assert_eq!(StoreLevel::from_code("ws 1"), None);
    }

    #[test]
    fn serde_uses_wire_literals() {
        let json = serde_json::to_string(&StoreLevel::RitelL).unwrap();
        assert_eq!(json, "\"Ritel L\"");
        let back: StoreLevel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, StoreLevel::RitelL);
    }
}
