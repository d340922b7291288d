//! Weekly stat cards plus overall targets-met progress.

use crate::shared::components::{ProgressBar, StatCard};
use crate::shared::state::app_state::AppState;
use chrono::Utc;
use contracts::dashboards::d400_coverage::engine;
use contracts::enums::ProductType;
use leptos::prelude::*;

#[component]
pub fn PerformancePanel() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState context not found");

    let weekly = Signal::derive(move || {
        let sales = state.sales.get();
        let products = state.products.get();
        engine::weekly_stats(&sales, &products, Utc::now().date_naive())
    });

    let overall = Signal::derive(move || {
        let products = state.products.get();
        let stores = state.stores.get();
        let sales = state.sales.get();
        engine::targets_met(&products, &stores, &sales)
    });

    let active_count = move |product_type: ProductType| {
        state.products.with(|products| {
            products
                .iter()
                .filter(|p| p.is_active && p.product_type == product_type)
                .count() as u32
        })
    };

    let store_count = move || state.stores.with(|stores| stores.len());

    view! {
        <div class="performance-panel">
            <section>
                <h3 class="section-title">"Kinerja Mingguan"</h3>
                <div class="stat-grid">
                    <StatCard
                        title="Toko Dikunjungi".to_string()
                        value=Signal::derive(move || weekly.get().this_week.visited_stores)
                        delta=Signal::derive(move || weekly.get().visited_delta())
                    />
                    <StatCard
                        title="Target Drive Tercapai".to_string()
                        value=Signal::derive(move || weekly.get().this_week.drive_achieved)
                        delta=Signal::derive(move || weekly.get().drive_delta())
                    />
                    <StatCard
                        title="Target Fokus Tercapai".to_string()
                        value=Signal::derive(move || weekly.get().this_week.focus_achieved)
                        delta=Signal::derive(move || weekly.get().focus_delta())
                    />
                </div>
            </section>

            <section>
                <h3 class="section-title">"Progres Total"</h3>
                <div class="overall-grid">
                    <div class="card">
                        <h4 class="card__title">"Total Toko"</h4>
                        <p class="card__big-number">{store_count}</p>
                    </div>
                    <div class="card">
                        <h4 class="card__title">"Target Distribusi Drive Tercapai"</h4>
                        <p class="card__big-number">
                            {move || {
                                format!(
                                    "{} / {} produk",
                                    overall.get().drive_met,
                                    active_count(ProductType::Drive),
                                )
                            }}
                        </p>
                        <ProgressBar
                            value=Signal::derive(move || overall.get().drive_met)
                            max=Signal::derive(move || active_count(ProductType::Drive).max(1))
                        />
                    </div>
                    <div class="card">
                        <h4 class="card__title">"Target Item Fokus Tercapai"</h4>
                        <p class="card__big-number">
                            {move || {
                                format!(
                                    "{} / {} produk",
                                    overall.get().focus_met,
                                    active_count(ProductType::Focus),
                                )
                            }}
                        </p>
                        <ProgressBar
                            value=Signal::derive(move || overall.get().focus_met)
                            max=Signal::derive(move || active_count(ProductType::Focus).max(1))
                        />
                    </div>
                </div>
            </section>
        </div>
    }
}
