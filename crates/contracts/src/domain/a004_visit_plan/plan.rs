use crate::domain::a001_store::StoreId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Planning days: Monday (1) through Saturday (6). Sunday is not planned.
pub const VISIT_DAYS: std::ops::RangeInclusive<u8> = 1..=6;

/// Week plan of store visits, keyed by day index.
///
/// Order within a day is irrelevant; the plan is only referentially coupled
/// to the store registry: deleting a store must drop it from every day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DailyVisitPlan(BTreeMap<u8, Vec<StoreId>>);

impl DailyVisitPlan {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Stores planned for a day; empty slice for unplanned or invalid days.
    pub fn stores_for_day(&self, day: u8) -> &[StoreId] {
        self.0.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn store_count(&self, day: u8) -> usize {
        self.stores_for_day(day).len()
    }

    pub fn contains(&self, day: u8, store_id: StoreId) -> bool {
        self.stores_for_day(day).contains(&store_id)
    }

    /// Replace the plan for one day. Days outside Mon..Sat are ignored.
    pub fn set_day(&mut self, day: u8, mut store_ids: Vec<StoreId>) {
        if !VISIT_DAYS.contains(&day) {
            return;
        }
        store_ids.sort();
        store_ids.dedup();
        if store_ids.is_empty() {
            self.0.remove(&day);
        } else {
            self.0.insert(day, store_ids);
        }
    }

    /// Referential cleanup after a store is deleted from the registry.
    pub fn remove_store(&mut self, store_id: StoreId) {
        for ids in self.0.values_mut() {
            ids.retain(|id| *id != store_id);
        }
        self.0.retain(|_, ids| !ids.is_empty());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_day_dedups_and_validates_day() {
        let store = StoreId::new_v4();
        let mut plan = DailyVisitPlan::new();
        plan.set_day(2, vec![store, store]);
        assert_eq!(plan.store_count(2), 1);

        // Sunday (7) and 0 are not planning days.
        plan.set_day(7, vec![store]);
        plan.set_day(0, vec![store]);
        assert_eq!(plan.store_count(7), 0);
        assert_eq!(plan.store_count(0), 0);
    }

    #[test]
    fn remove_store_cascades_over_all_days() {
        let kept = StoreId::new_v4();
        let deleted = StoreId::new_v4();
        let mut plan = DailyVisitPlan::new();
        plan.set_day(1, vec![kept, deleted]);
        plan.set_day(4, vec![deleted]);

        plan.remove_store(deleted);

        assert_eq!(plan.stores_for_day(1), &[kept][..]);
        assert!(!plan.contains(4, deleted));
        assert_eq!(plan.store_count(4), 0);
    }

    #[test]
    fn empty_day_clears_the_entry() {
        let store = StoreId::new_v4();
        let mut plan = DailyVisitPlan::new();
        plan.set_day(3, vec![store]);
        plan.set_day(3, vec![]);
        let json = serde_json::to_string(&plan).unwrap();
        assert_eq!(json, "{}");
    }
}
