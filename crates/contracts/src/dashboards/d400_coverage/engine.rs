//! The coverage engine proper.
//!
//! Failure semantics: never panics, never errors. A sale whose store or
//! product no longer resolves contributes nothing; a target level with zero
//! stores is vacuously satisfied. Partial or stale data must never take the
//! dashboard down.

use crate::domain::a001_store::{Store, StoreId};
use crate::domain::a002_product::{Product, ProductId};
use crate::domain::a003_sale::Sale;
use crate::enums::{ProductType, StoreLevel};
use chrono::{Datelike, Days, NaiveDate};
use std::collections::{BTreeMap, HashMap, HashSet};

use super::dto::{ProductCoverage, StoreProgress, TargetsMet, WeekStats, WeeklyStats};

/// Required store count for one level: `ceil(n × pct / 100)`.
///
/// Zero stores at the level means zero required, whatever the percentage.
pub fn required_count(level_store_count: usize, percent: f64) -> u32 {
    if level_store_count == 0 {
        return 0;
    }
    (level_store_count as f64 * percent / 100.0).ceil() as u32
}

fn stores_by_level(stores: &[Store]) -> BTreeMap<StoreLevel, Vec<StoreId>> {
    let mut by_level: BTreeMap<StoreLevel, Vec<StoreId>> = BTreeMap::new();
    for store in stores {
        by_level.entry(store.level).or_default().push(store.base.id);
    }
    by_level
}

/// Distinct registered stores with at least one sale for `product_id`.
///
/// Sales pointing at store ids missing from the registry are dropped, so a
/// deleted store stops counting toward `achieved` on the next recompute.
fn achieved_store_ids(product_id: ProductId, stores: &[Store], sales: &[Sale]) -> HashSet<StoreId> {
    let registered: HashSet<StoreId> = stores.iter().map(|s| s.base.id).collect();
    sales
        .iter()
        .filter(|sale| sale.product_id == product_id)
        .map(|sale| sale.store_id)
        .filter(|id| registered.contains(id))
        .collect()
}

/// Coverage for a single product: summed required counts vs distinct
/// achieving stores.
///
/// Only levels *present* in the sparse target map contribute; a present
/// level with zero registered stores is skipped entirely.
pub fn product_coverage(product: &Product, stores: &[Store], sales: &[Sale]) -> ProductCoverage {
    let by_level = stores_by_level(stores);

    let mut target = 0u32;
    for (level, pct) in product.target_coverage.iter() {
        let level_store_count = by_level.get(&level).map(Vec::len).unwrap_or(0);
        if level_store_count == 0 {
            continue;
        }
        target += required_count(level_store_count, pct);
    }

    let achieved = achieved_store_ids(product.base.id, stores, sales).len() as u32;

    ProductCoverage { achieved, target }
}

/// Fully-met product counts per type, over active products only.
///
/// A product with an empty target map is excluded, not auto-passed. A target
/// level with zero stores is vacuously satisfied, consistent with the
/// required-count-is-zero rule, so the two computations never disagree.
pub fn targets_met(products: &[Product], stores: &[Store], sales: &[Sale]) -> TargetsMet {
    let by_level = stores_by_level(stores);

    let mut result = TargetsMet::default();
    for product in products.iter().filter(|p| p.is_active) {
        if product.target_coverage.is_empty() {
            continue;
        }

        let achieved = achieved_store_ids(product.base.id, stores, sales);
        let mut met = true;
        for (level, pct) in product.target_coverage.iter() {
            let level_stores = match by_level.get(&level) {
                Some(ids) if !ids.is_empty() => ids,
                _ => continue,
            };
            let required = required_count(level_stores.len(), pct);
            let achieved_at_level =
                level_stores.iter().filter(|id| achieved.contains(id)).count() as u32;
            if achieved_at_level < required {
                met = false;
                break;
            }
        }

        if met {
            match product.product_type {
                ProductType::Drive => result.drive_met += 1,
                ProductType::Focus => result.focus_met += 1,
            }
        }
    }
    result
}

/// Monday and Sunday of the week containing `date` (Sunday counts as the
/// 7th day of its week, not the 1st of the next).
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = date.weekday().num_days_from_monday() as u64;
    let monday = date
        .checked_sub_days(Days::new(offset))
        .unwrap_or(date);
    let sunday = monday.checked_add_days(Days::new(6)).unwrap_or(monday);
    (monday, sunday)
}

fn stats_for_window(
    sales: &[Sale],
    product_types: &HashMap<ProductId, ProductType>,
    from: NaiveDate,
    to: NaiveDate,
) -> WeekStats {
    let mut visited: HashSet<StoreId> = HashSet::new();
    let mut stats = WeekStats::default();

    for sale in sales {
        let day = sale.date.date_naive();
        if day < from || day > to {
            continue;
        }
        visited.insert(sale.store_id);
        // A sale referencing a deleted product is counted as a visit but
        // contributes to neither achievement tally.
        match product_types.get(&sale.product_id) {
            Some(ProductType::Drive) => stats.drive_achieved += 1,
            Some(ProductType::Focus) => stats.focus_achieved += 1,
            None => {}
        }
    }

    stats.visited_stores = visited.len() as u32;
    stats
}

/// Week-over-week aggregates relative to `reference_date`.
pub fn weekly_stats(sales: &[Sale], products: &[Product], reference_date: NaiveDate) -> WeeklyStats {
    let product_types: HashMap<ProductId, ProductType> = products
        .iter()
        .map(|p| (p.base.id, p.product_type))
        .collect();

    let (monday, sunday) = week_bounds(reference_date);
    let last_monday = monday.checked_sub_days(Days::new(7)).unwrap_or(monday);
    let last_sunday = monday.checked_sub_days(Days::new(1)).unwrap_or(monday);

    WeeklyStats {
        this_week: stats_for_window(sales, &product_types, monday, sunday),
        last_week: stats_for_window(sales, &product_types, last_monday, last_sunday),
    }
}

/// Per-store checklist progress over the active catalog, for the dashboard
/// store cards and the progress-status filter.
pub fn store_progress(store_id: StoreId, products: &[Product], sales: &[Sale]) -> StoreProgress {
    let achieved_products: HashSet<ProductId> = sales
        .iter()
        .filter(|sale| sale.store_id == store_id)
        .map(|sale| sale.product_id)
        .collect();

    let mut progress = StoreProgress::default();
    for product in products.iter().filter(|p| p.is_active) {
        let achieved = achieved_products.contains(&product.base.id);
        match product.product_type {
            ProductType::Drive => {
                progress.drive_total += 1;
                if achieved {
                    progress.drive_achieved += 1;
                }
            }
            ProductType::Focus => {
                progress.focus_total += 1;
                if achieved {
                    progress.focus_achieved += 1;
                }
            }
        }
    }
    progress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_product::TargetCoverage;
    use chrono::{TimeZone, Utc};

    fn store(level: StoreLevel) -> Store {
        Store::new_for_insert(format!("store-{}", level), level)
    }

    fn stores_at(level: StoreLevel, n: usize) -> Vec<Store> {
        (0..n).map(|_| store(level)).collect()
    }

    fn drive_product(coverage: &[(StoreLevel, f64)]) -> Product {
        Product::new_for_insert(
            "Drive product".into(),
            ProductType::Drive,
            100.0,
            coverage.iter().copied().collect(),
        )
    }

    fn sale_on(store_id: StoreId, product_id: ProductId, date: NaiveDate) -> Sale {
        Sale {
            store_id,
            product_id,
            quantity: 1,
            date: Utc
                .from_utc_datetime(&date.and_hms_opt(12, 0, 0).unwrap()),
        }
    }

    #[test]
    fn deterministic_across_repeated_calls() {
        let stores = stores_at(StoreLevel::Ritel, 5);
        let product = drive_product(&[(StoreLevel::Ritel, 40.0)]);
        let sales = vec![Sale::log(stores[0].base.id, product.base.id, 1)];

        let first = product_coverage(&product, &stores, &sales);
        for _ in 0..10 {
            assert_eq!(product_coverage(&product, &stores, &sales), first);
        }
    }

    #[test]
    fn level_with_zero_stores_contributes_nothing() {
        let stores = stores_at(StoreLevel::Ritel, 4);
        // Ws1 is targeted at 100% but no Ws1 store exists.
        let product = drive_product(&[(StoreLevel::Ritel, 50.0), (StoreLevel::Ws1, 100.0)]);

        let coverage = product_coverage(&product, &stores, &[]);
        assert_eq!(coverage.target, 2);
    }

    #[test]
    fn required_count_rounds_up() {
        // 7 stores at 50% → ceil(3.5) = 4, not 3.
        assert_eq!(required_count(7, 50.0), 4);
        assert_eq!(required_count(10, 60.0), 6);
        assert_eq!(required_count(9, 60.0), 6);
        assert_eq!(required_count(0, 100.0), 0);
        assert_eq!(required_count(3, 0.0), 0);
    }

    #[test]
    fn duplicate_sales_count_once() {
        let stores = stores_at(StoreLevel::Ritel, 3);
        let product = drive_product(&[(StoreLevel::Ritel, 100.0)]);
        let sales = vec![
            Sale::log(stores[0].base.id, product.base.id, 1),
            Sale::log(stores[0].base.id, product.base.id, 5),
        ];

        let coverage = product_coverage(&product, &stores, &sales);
        assert_eq!(coverage.achieved, 1);
    }

    #[test]
    fn empty_coverage_map_is_never_met() {
        let stores = stores_at(StoreLevel::Ritel, 2);
        let product = drive_product(&[]);
        // Both stores "achieved" it, but there is nothing to meet.
        let sales = vec![
            Sale::log(stores[0].base.id, product.base.id, 1),
            Sale::log(stores[1].base.id, product.base.id, 1),
        ];

        let met = targets_met(&[product.clone()], &stores, &sales);
        assert_eq!(met, TargetsMet::default());

        // And the coverage result reads "not applicable", not "complete".
        let coverage = product_coverage(&product, &stores, &sales);
        assert!(!coverage.has_target());
        assert!(!coverage.is_met());
        assert_eq!(coverage.display_percent(), 0.0);
    }

    #[test]
    fn dangling_product_reference_is_ignored() {
        let stores = stores_at(StoreLevel::Ritel, 2);
        let product = drive_product(&[(StoreLevel::Ritel, 100.0)]);
        let phantom = ProductId::new_v4();
        let today = NaiveDate::from_ymd_opt(2025, 6, 11).unwrap();
        let sales = vec![sale_on(stores[0].base.id, phantom, today)];

        let coverage = product_coverage(&product, &stores, &sales);
        assert_eq!(coverage.achieved, 0);

        // The dangling sale still marks the store as visited, but feeds
        // neither achievement counter.
        let weekly = weekly_stats(&sales, &[product], today);
        assert_eq!(weekly.this_week.visited_stores, 1);
        assert_eq!(weekly.this_week.drive_achieved, 0);
        assert_eq!(weekly.this_week.focus_achieved, 0);
    }

    #[test]
    fn week_window_starts_monday() {
        // Wednesday 2025-06-11 → week is Mon 06-09 .. Sun 06-15.
        let wednesday = NaiveDate::from_ymd_opt(2025, 6, 11).unwrap();
        let (monday, sunday) = week_bounds(wednesday);
        assert_eq!(monday, NaiveDate::from_ymd_opt(2025, 6, 9).unwrap());
        assert_eq!(sunday, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());

        // A Sunday reference belongs to the week it closes.
        let sunday_ref = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert_eq!(week_bounds(sunday_ref).0, monday);
    }

    #[test]
    fn preceding_sunday_falls_into_last_week() {
        let stores = stores_at(StoreLevel::Ritel, 2);
        let product = drive_product(&[(StoreLevel::Ritel, 100.0)]);
        let wednesday = NaiveDate::from_ymd_opt(2025, 6, 11).unwrap();
        let preceding_sunday = NaiveDate::from_ymd_opt(2025, 6, 8).unwrap();

        let sales = vec![
            sale_on(stores[0].base.id, product.base.id, wednesday),
            sale_on(stores[1].base.id, product.base.id, preceding_sunday),
        ];

        let weekly = weekly_stats(&sales, &[product], wednesday);
        assert_eq!(weekly.this_week.visited_stores, 1);
        assert_eq!(weekly.this_week.drive_achieved, 1);
        assert_eq!(weekly.last_week.visited_stores, 1);
        assert_eq!(weekly.last_week.drive_achieved, 1);
        assert_eq!(weekly.visited_delta(), 0);
    }

    #[test]
    fn weekly_counts_records_not_distinct_stores() {
        let stores = stores_at(StoreLevel::Ritel, 1);
        let drive = drive_product(&[(StoreLevel::Ritel, 100.0)]);
        let focus = Product::new_for_insert(
            "Focus product".into(),
            ProductType::Focus,
            50.0,
            TargetCoverage::new(),
        );
        let day = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let sales = vec![
            sale_on(stores[0].base.id, drive.base.id, day),
            sale_on(stores[0].base.id, drive.base.id, day),
            sale_on(stores[0].base.id, focus.base.id, day),
        ];

        let weekly = weekly_stats(&sales, &[drive, focus], day);
        assert_eq!(weekly.this_week.visited_stores, 1);
        assert_eq!(weekly.this_week.drive_achieved, 2);
        assert_eq!(weekly.this_week.focus_achieved, 1);
    }

    // End-to-end: 10 Ritel stores, 60% target → required 6.
    #[test]
    fn coverage_scenario_under_and_over_threshold() {
        let stores = stores_at(StoreLevel::Ritel, 10);
        let product = drive_product(&[(StoreLevel::Ritel, 60.0)]);

        // 5 distinct achieving stores: 5 < 6, not met, ~83.3%.
        let mut sales: Vec<Sale> = stores[..5]
            .iter()
            .map(|s| Sale::log(s.base.id, product.base.id, 1))
            .collect();

        let coverage = product_coverage(&product, &stores, &sales);
        assert_eq!(coverage.target, 6);
        assert_eq!(coverage.achieved, 5);
        assert!(!coverage.is_met());
        assert!((coverage.display_percent() - 83.333).abs() < 0.01);
        assert_eq!(targets_met(&[product.clone()], &stores, &sales), TargetsMet::default());

        // A 6th store tips it over.
        sales.push(Sale::log(stores[5].base.id, product.base.id, 1));
        let met = targets_met(&[product.clone()], &stores, &sales);
        assert_eq!(met.drive_met, 1);
        assert_eq!(met.focus_met, 0);
    }

    #[test]
    fn deleting_an_achieving_store_drops_it_from_achieved() {
        let mut stores = stores_at(StoreLevel::Ritel, 10);
        let product = drive_product(&[(StoreLevel::Ritel, 60.0)]);
        let sales: Vec<Sale> = stores[..6]
            .iter()
            .map(|s| Sale::log(s.base.id, product.base.id, 1))
            .collect();
        assert_eq!(targets_met(&[product.clone()], &stores, &sales).drive_met, 1);

        // Delete one achieving store; its sale record stays behind.
        stores.remove(0);

        let coverage = product_coverage(&product, &stores, &sales);
        // 9 stores at 60% still requires ceil(5.4) = 6, achieved drops to 5.
        assert_eq!(coverage.target, 6);
        assert_eq!(coverage.achieved, 5);
        assert_eq!(targets_met(&[product], &stores, &sales).drive_met, 0);
    }

    #[test]
    fn inactive_products_are_invisible() {
        let stores = stores_at(StoreLevel::Ritel, 2);
        let mut product = drive_product(&[(StoreLevel::Ritel, 50.0)]);
        let sales = vec![Sale::log(stores[0].base.id, product.base.id, 1)];
        assert_eq!(targets_met(&[product.clone()], &stores, &sales).drive_met, 1);

        product.toggle_active();
        assert_eq!(targets_met(&[product.clone()], &stores, &sales).drive_met, 0);
        assert_eq!(store_progress(stores[0].base.id, &[product], &sales).drive_total, 0);
    }

    #[test]
    fn store_progress_classification() {
        use super::super::dto::StoreProgressFilter;

        let stores = stores_at(StoreLevel::Ritel, 1);
        let store_id = stores[0].base.id;
        let products: Vec<Product> = vec![
            drive_product(&[]),
            drive_product(&[]),
            Product::new_for_insert(
                "Focus product".into(),
                ProductType::Focus,
                50.0,
                TargetCoverage::new(),
            ),
        ];

        // Nothing achieved: 0/2 drive, 0/1 focus → needs attention.
        let progress = store_progress(store_id, &products, &[]);
        assert!(StoreProgressFilter::NeedsAttention.matches(&progress));
        assert!(!StoreProgressFilter::Completed.matches(&progress));

        // Everything achieved → completed.
        let sales: Vec<Sale> = products
            .iter()
            .map(|p| Sale::log(store_id, p.base.id, 1))
            .collect();
        let progress = store_progress(store_id, &products, &sales);
        assert!(StoreProgressFilter::Completed.matches(&progress));
        assert!(!StoreProgressFilter::NeedsAttention.matches(&progress));
        assert!(StoreProgressFilter::All.matches(&progress));
    }
}
