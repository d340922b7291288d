//! Per-product coverage rings, split by product type, with the Drive
//! phase countdown.

use crate::shared::components::ProgressRing;
use crate::shared::icons::icon;
use crate::shared::state::app_state::AppState;
use chrono::{Datelike, Utc};
use contracts::dashboards::d400_coverage::engine;
use contracts::domain::a005_settings::Settings;
use contracts::enums::ProductType;
use leptos::prelude::*;

/// The Drive month is split in two phases: the 1st..15th and the rest.
fn current_phase() -> (u32, i64) {
    let today = Utc::now().date_naive();
    let (phase, end) = if today.day() <= 15 {
        (1, today.with_day(15).unwrap_or(today))
    } else {
        (2, Settings::end_of_month(today))
    };
    // Inclusive of the end day itself
    let remaining = (end - today).num_days() + 1;
    (phase, remaining)
}

#[component]
fn PhaseCountdown() -> impl IntoView {
    let (phase, days_remaining) = current_phase();

    let countdown = if days_remaining <= 0 {
        view! { <span class="countdown--over">"Fase Berakhir"</span> }.into_any()
    } else if days_remaining == 1 {
        view! { <span class="countdown--last">"Hari Terakhir!"</span> }.into_any()
    } else {
        view! {
            <span>
                "Sisa " <strong>{days_remaining}</strong> " hari"
            </span>
        }
        .into_any()
    };

    view! {
        <div class="phase-countdown">
            <span class="phase-countdown__icon">{icon("clock")}</span>
            <div>
                <p class="phase-countdown__phase">
                    {format!("Distribusi Drive - Fase {}", phase)}
                </p>
                <p class="phase-countdown__remaining">{countdown}</p>
            </div>
        </div>
    }
}

#[component]
fn RingGrid(product_type: ProductType) -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState context not found");

    let products = move || {
        state.products.with(|products| {
            products
                .iter()
                .filter(|p| p.is_active && p.product_type == product_type)
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <Show
            when=move || !products().is_empty()
            fallback=move || {
                view! {
                    <p class="empty-state">
                        {format!("Tidak ada target {} yang aktif.", product_type.display_name())}
                    </p>
                }
            }
        >
            <div class="ring-grid">
                <For
                    each=products
                    key=|product| (product.base.id, product.base.metadata.version)
                    children=move |product| {
                        let name = product.base.name.clone();
                        let coverage = Signal::derive(move || {
                            let stores = state.stores.get();
                            let sales = state.sales.get();
                            engine::product_coverage(&product, &stores, &sales)
                        });
                        view! {
                            <div class="ring-card">
                                <h4 class="ring-card__name">{name}</h4>
                                <ProgressRing coverage=coverage />
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}

#[component]
pub fn TargetsPanel() -> impl IntoView {
    view! {
        <div class="targets-panel">
            <section>
                <div class="targets-panel__header">
                    <div>
                        <h3 class="section-title">"Distribusi Drive"</h3>
                        <p class="section-subtitle">
                            "Target jangka pendek untuk mendorong penetrasi produk baru \
                             atau promosi. Kecepatan adalah kunci!"
                        </p>
                    </div>
                    <PhaseCountdown />
                </div>
                <RingGrid product_type=ProductType::Drive />
            </section>

            <section>
                <h3 class="section-title">"Item Fokus"</h3>
                <p class="section-subtitle">
                    "Produk prioritas jangka panjang yang menjadi andalan. \
                     Konsistensi dan cakupan luas adalah tujuan utama."
                </p>
                <RingGrid product_type=ProductType::Focus />
            </section>
        </div>
    }
}
