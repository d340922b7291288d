use crate::enums::StoreLevel;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sparse per-level coverage target map.
///
/// Presence semantics are deliberate and observable:
/// - a level *absent* from the map means "no target set for this tier";
/// - a level present with `0.0` means "the target is literally 0%".
///
/// Both contribute zero to the required store count, but the UI shows them
/// differently, so the distinction must survive a save/load round trip.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetCoverage(BTreeMap<StoreLevel, f64>);

impl TargetCoverage {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Set a target percentage for a level, clamped to [0, 100].
    pub fn set(&mut self, level: StoreLevel, percent: f64) {
        self.0.insert(level, percent.clamp(0.0, 100.0));
    }

    /// Remove the target for a level entirely ("no target set").
    pub fn clear(&mut self, level: StoreLevel) {
        self.0.remove(&level);
    }

    /// Target percentage, `None` when no target is set for the level.
    pub fn get(&self, level: StoreLevel) -> Option<f64> {
        self.0.get(&level).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Levels that have a target set, with their percentages.
    pub fn iter(&self) -> impl Iterator<Item = (StoreLevel, f64)> + '_ {
        self.0.iter().map(|(level, pct)| (*level, *pct))
    }
}

impl FromIterator<(StoreLevel, f64)> for TargetCoverage {
    fn from_iter<T: IntoIterator<Item = (StoreLevel, f64)>>(iter: T) -> Self {
        let mut coverage = Self::new();
        for (level, pct) in iter {
            coverage.set(level, pct);
        }
        coverage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_zero_are_distinct() {
        let mut coverage = TargetCoverage::new();
        coverage.set(StoreLevel::Ritel, 0.0);

        assert_eq!(coverage.get(StoreLevel::Ritel), Some(0.0));
        assert_eq!(coverage.get(StoreLevel::Ws1), None);
        assert!(!coverage.is_empty());

        // The distinction survives serialization.
        let json = serde_json::to_string(&coverage).unwrap();
        let back: TargetCoverage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, coverage);
    }

    #[test]
    fn set_clamps_to_percent_range() {
        let mut coverage = TargetCoverage::new();
        coverage.set(StoreLevel::Ws1, 150.0);
        coverage.set(StoreLevel::Ws2, -5.0);
        assert_eq!(coverage.get(StoreLevel::Ws1), Some(100.0));
        assert_eq!(coverage.get(StoreLevel::Ws2), Some(0.0));
    }

    #[test]
    fn clear_removes_the_level() {
        let mut coverage: TargetCoverage = [(StoreLevel::Ritel, 60.0)].into_iter().collect();
        coverage.clear(StoreLevel::Ritel);
        assert!(coverage.is_empty());
    }
}
