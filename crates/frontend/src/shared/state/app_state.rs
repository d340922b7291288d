//! Single source of truth for the per-user data set.
//!
//! Every collection is an `RwSignal`; every mutator replaces the value and
//! writes the whole collection back to localStorage. There is no partial
//! update path, the data volumes here are a field rep's roster, not a
//! warehouse.

use crate::shared::data::local_db::{self, Collection, Scope};
use crate::shared::export;
use chrono::Utc;
use contracts::domain::a001_store::{CsvStoreRow, Store, StoreDto, StoreId};
use contracts::domain::a002_product::{Product, ProductDto, ProductId, TargetCoverage};
use contracts::domain::a003_sale::{self, Sale};
use contracts::domain::a004_visit_plan::DailyVisitPlan;
use contracts::domain::a005_settings::Settings;
use contracts::enums::{ProductType, StoreLevel};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Serialized form of a full data set, used by backup and restore.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppBackup {
    pub stores: Vec<Store>,
    pub products: Vec<Product>,
    pub sales: Vec<Sale>,
    pub settings: Settings,
    #[serde(rename = "dailyVisitPlan", default)]
    pub visit_plan: DailyVisitPlan,
}

#[derive(Clone, Copy)]
pub struct AppState {
    pub stores: RwSignal<Vec<Store>>,
    pub products: RwSignal<Vec<Product>>,
    pub sales: RwSignal<Vec<Sale>>,
    pub settings: RwSignal<Settings>,
    pub visit_plan: RwSignal<DailyVisitPlan>,
    scope: StoredValue<Scope>,
}

impl AppState {
    pub fn load_for_user(user_id: &str) -> Self {
        Self::load(Scope::User(user_id.to_string()))
    }

    pub fn load(scope: Scope) -> Self {
        let stores: Vec<Store> = local_db::read_or(&scope, Collection::Stores, Vec::new());
        let products: Vec<Product> = local_db::read_or(&scope, Collection::Products, Vec::new());
        let sales = local_db::read_or(&scope, Collection::Sales, Vec::new());
        let settings = local_db::read_or(&scope, Collection::Settings, Settings::default());
        let visit_plan = local_db::read_or(&scope, Collection::VisitPlan, DailyVisitPlan::new());

        let state = Self {
            stores: RwSignal::new(stores),
            products: RwSignal::new(products),
            sales: RwSignal::new(sales),
            settings: RwSignal::new(settings),
            visit_plan: RwSignal::new(visit_plan),
            scope: StoredValue::new(scope),
        };

        // First run on this device: give the user something to look at.
        if state.stores.with_untracked(|s| s.is_empty())
            && state.products.with_untracked(|p| p.is_empty())
        {
            log::info!("empty data set, seeding demo stores and products");
            state.seed_demo_data();
        }

        state
    }

    fn persist_stores(&self) {
        self.stores
            .with_untracked(|stores| self.write(Collection::Stores, stores));
    }

    fn persist_products(&self) {
        self.products
            .with_untracked(|products| self.write(Collection::Products, products));
    }

    fn persist_sales(&self) {
        self.sales
            .with_untracked(|sales| self.write(Collection::Sales, sales));
    }

    fn write<T: Serialize>(&self, collection: Collection, value: &T) {
        self.scope
            .with_value(|scope| local_db::write(scope, collection, value));
    }

    // ------------------------------------------------------------------
    // Stores
    // ------------------------------------------------------------------

    pub fn add_store(&self, name: String, level: StoreLevel) -> Result<(), String> {
        let mut store = Store::new_for_insert(name, level);
        store.validate()?;
        store.before_write();
        self.stores.update(|stores| stores.push(store));
        self.persist_stores();
        Ok(())
    }

    pub fn update_store(&self, id: StoreId, dto: &StoreDto) -> Result<(), String> {
        // Проверяем на копии, чтобы невалидный ввод не испортил состояние
        let candidate = self.stores.with_untracked(|stores| {
            stores.iter().find(|s| s.base.id == id).map(|store| {
                let mut updated = store.clone();
                updated.update(dto);
                updated
            })
        });
        let Some(mut updated) = candidate else {
            return Err("Toko tidak ditemukan.".into());
        };
        updated.validate()?;
        updated.before_write();

        self.stores.update(|stores| {
            if let Some(store) = stores.iter_mut().find(|s| s.base.id == id) {
                *store = updated;
            }
        });
        self.persist_stores();
        Ok(())
    }

    /// Delete a store and its visit plan entries.
    pub fn delete_store(&self, id: StoreId) {
        self.stores.update(|stores| {
            stores.retain(|store| store.base.id != id);
        });
        self.visit_plan.update(|plan| plan.remove_store(id));
        self.persist_stores();
        self.visit_plan
            .with_untracked(|plan| self.write(Collection::VisitPlan, plan));
    }

    pub fn bulk_add_stores(&self, rows: Vec<CsvStoreRow>) -> usize {
        let count = rows.len();
        self.stores.update(|stores| {
            for row in rows {
                let mut store = Store::new_for_insert(row.name, row.level);
                store.before_write();
                stores.push(store);
            }
        });
        self.persist_stores();
        count
    }

    // ------------------------------------------------------------------
    // Products
    // ------------------------------------------------------------------

    pub fn add_product(&self, dto: &ProductDto) -> Result<(), String> {
        let mut product = Product::new_for_insert(
            dto.name.clone(),
            dto.product_type,
            dto.base_price,
            dto.target_coverage.clone(),
        );
        product.base.comment = dto.comment.clone();
        product.validate()?;
        product.before_write();
        self.products.update(|products| products.push(product));
        self.persist_products();
        Ok(())
    }

    pub fn update_product(&self, id: ProductId, dto: &ProductDto) -> Result<(), String> {
        let candidate = self.products.with_untracked(|products| {
            products.iter().find(|p| p.base.id == id).map(|product| {
                let mut updated = product.clone();
                updated.update(dto);
                updated
            })
        });
        let Some(mut updated) = candidate else {
            return Err("Produk tidak ditemukan.".into());
        };
        updated.validate()?;
        updated.before_write();

        self.products.update(|products| {
            if let Some(product) = products.iter_mut().find(|p| p.base.id == id) {
                *product = updated;
            }
        });
        self.persist_products();
        Ok(())
    }

    pub fn toggle_product_status(&self, id: ProductId) {
        self.products.update(|products| {
            if let Some(product) = products.iter_mut().find(|p| p.base.id == id) {
                product.toggle_active();
            }
        });
        self.persist_products();
    }

    /// Bulk import: rows matching an existing `(name, type)` key update that
    /// product in place, the rest are inserted. Returns (inserted, updated).
    pub fn bulk_upsert_products(&self, rows: Vec<ProductDto>) -> (usize, usize) {
        let mut inserted = 0;
        let mut updated = 0;
        self.products.update(|products| {
            for dto in rows {
                let key = (dto.name.trim().to_lowercase(), dto.product_type);
                if let Some(existing) = products.iter_mut().find(|p| p.upsert_key() == key) {
                    existing.update(&dto);
                    existing.before_write();
                    updated += 1;
                } else {
                    let mut product = Product::new_for_insert(
                        dto.name,
                        dto.product_type,
                        dto.base_price,
                        dto.target_coverage,
                    );
                    product.before_write();
                    products.push(product);
                    inserted += 1;
                }
            }
        });
        self.persist_products();
        (inserted, updated)
    }

    // ------------------------------------------------------------------
    // Sales
    // ------------------------------------------------------------------

    pub fn log_sale(&self, store_id: StoreId, product_id: ProductId) {
        self.sales
            .update(|sales| sales.push(Sale::log(store_id, product_id, 1)));
        self.persist_sales();
    }

    /// Unchecking a product clears every record for the pair.
    pub fn delete_sale(&self, store_id: StoreId, product_id: ProductId) {
        self.sales
            .update(|sales| a003_sale::delete_pair(sales, store_id, product_id));
        self.persist_sales();
    }

    pub fn has_sale(&self, store_id: StoreId, product_id: ProductId) -> bool {
        self.sales
            .with(|sales| sales.iter().any(|s| s.matches_pair(store_id, product_id)))
    }

    // ------------------------------------------------------------------
    // Settings / visit plan
    // ------------------------------------------------------------------

    pub fn update_settings(&self, settings: Settings) -> Result<(), String> {
        settings.validate()?;
        self.settings.set(settings);
        self.settings
            .with_untracked(|settings| self.write(Collection::Settings, settings));
        Ok(())
    }

    pub fn set_day_plan(&self, day: u8, store_ids: Vec<StoreId>) {
        self.visit_plan.update(|plan| plan.set_day(day, store_ids));
        self.visit_plan
            .with_untracked(|plan| self.write(Collection::VisitPlan, plan));
    }

    // ------------------------------------------------------------------
    // Backup / restore / reset
    // ------------------------------------------------------------------

    pub fn backup(&self) -> Result<(), String> {
        let backup = AppBackup {
            stores: self.stores.get_untracked(),
            products: self.products.get_untracked(),
            sales: self.sales.get_untracked(),
            settings: self.settings.get_untracked(),
            visit_plan: self.visit_plan.get_untracked(),
        };
        let filename = format!(
            "sales-monitor-backup-{}.json",
            Utc::now().format("%Y-%m-%d")
        );
        export::download_json(&backup, &filename)
    }

    pub fn restore(&self, json: &str) -> Result<(), String> {
        let backup: AppBackup =
            serde_json::from_str(json).map_err(|e| format!("File backup tidak valid: {}", e))?;

        self.stores.set(backup.stores);
        self.products.set(backup.products);
        self.sales.set(backup.sales);
        self.settings.set(backup.settings);
        self.visit_plan.set(backup.visit_plan);

        self.persist_stores();
        self.persist_products();
        self.persist_sales();
        self.settings
            .with_untracked(|settings| self.write(Collection::Settings, settings));
        self.visit_plan
            .with_untracked(|plan| self.write(Collection::VisitPlan, plan));
        Ok(())
    }

    /// Wipe the whole data set for this scope.
    pub fn reset(&self) {
        self.scope.with_value(|scope| {
            for collection in Collection::all() {
                local_db::remove(scope, collection);
            }
        });
        self.stores.set(Vec::new());
        self.products.set(Vec::new());
        self.sales.set(Vec::new());
        self.settings.set(Settings::default());
        self.visit_plan.set(DailyVisitPlan::new());
    }

    // ------------------------------------------------------------------
    // Demo seed
    // ------------------------------------------------------------------

    fn seed_demo_data(&self) {
        let distribution = [
            (StoreLevel::Ws1, 2),
            (StoreLevel::Ws2, 34),
            (StoreLevel::RitelL, 24),
            (StoreLevel::Ritel, 25),
            (StoreLevel::Others, 11),
        ];
        self.stores.update(|stores| {
            for (level, count) in distribution {
                for i in 1..=count {
                    stores.push(Store::new_for_insert(format!("Toko {} {}", level, i), level));
                }
            }
        });

        let drive_targets = |ritel_l: f64, last: (StoreLevel, f64)| {
            let mut coverage = TargetCoverage::new();
            coverage.set(StoreLevel::Ws1, 70.0);
            coverage.set(StoreLevel::Ws2, 60.0);
            coverage.set(StoreLevel::RitelL, ritel_l);
            coverage.set(last.0, last.1);
            coverage
        };
        let focus_targets = || {
            let mut coverage = TargetCoverage::new();
            coverage.set(StoreLevel::Ws1, 80.0);
            coverage.set(StoreLevel::Ws2, 70.0);
            coverage.set(StoreLevel::RitelL, 60.0);
            coverage.set(StoreLevel::Ritel, 50.0);
            coverage
        };

        let seed: [(&str, ProductType, f64, TargetCoverage); 8] = [
            ("KOPI MAYOR PACK", ProductType::Drive, 150_000.0, drive_targets(50.0, (StoreLevel::Ritel, 50.0))),
            ("KOPI TOP SUSU SCT", ProductType::Drive, 120_000.0, drive_targets(50.0, (StoreLevel::Ritel, 50.0))),
            ("SEDAAP MIE GORENG", ProductType::Drive, 95_000.0, drive_targets(50.0, (StoreLevel::Ritel, 40.0))),
            ("KECAP SEDAAP", ProductType::Drive, 75_000.0, drive_targets(50.0, (StoreLevel::Ritel, 40.0))),
            ("POWER F", ProductType::Drive, 110_000.0, drive_targets(50.0, (StoreLevel::Others, 70.0))),
            ("Snack Kentang Premium", ProductType::Focus, 210_000.0, focus_targets()),
            ("Susu UHT Cokelat 1L", ProductType::Focus, 250_000.0, focus_targets()),
            ("Deterjen Cair Konsentrat", ProductType::Focus, 180_000.0, focus_targets()),
        ];
        self.products.update(|products| {
            for (name, product_type, price, coverage) in seed {
                products.push(Product::new_for_insert(
                    name.to_string(),
                    product_type,
                    price,
                    coverage,
                ));
            }
        });

        self.persist_stores();
        self.persist_products();
    }
}
