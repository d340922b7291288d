//! Карточка магазина на дашборде и чеклист продуктов по магазину.

use crate::shared::components::{Modal, ProgressBar};
use crate::shared::state::app_state::AppState;
use contracts::dashboards::d400_coverage::engine;
use contracts::domain::a001_store::{Store, StoreId};
use contracts::domain::a002_product::Product;
use contracts::enums::{ProductType, StoreLevel};
use leptos::prelude::*;

#[component]
fn ChecklistSection(
    store_id: StoreId,
    store_level: StoreLevel,
    product_type: ProductType,
) -> impl IntoView {
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

    let row = move |product: Product| {
        let product_id = product.base.id;
        let name = product.base.name.clone();
        let base_price = product.base_price;

        let checked = Signal::derive(move || state.has_sale(store_id, product_id));
        let price = Signal::derive(move || {
            state
                .settings
                .with(|s| s.discounted_price(base_price, store_level))
        });

        let on_toggle = move |_| {
            if checked.get_untracked() {
                state.delete_sale(store_id, product_id);
            } else {
                state.log_sale(store_id, product_id);
            }
        };

        view! {
            <label class="checklist__row">
                <input
                    type="checkbox"
                    prop:checked=checked
                    on:change=on_toggle
                />
                <span class="checklist__name">{name}</span>
                <span class="checklist__price">
                    {move || format!("Rp {:.0}", price.get())}
                </span>
            </label>
        }
    };

    view! {
        <section class="checklist__section">
            <h4 class="checklist__heading">{product_type.to_string()}</h4>
            <Show
                when=move || !products().is_empty()
                fallback=|| view! { <p class="empty-state">"Tidak ada target produk aktif."</p> }
            >
                <For
                    each=products
                    key=|product| product.base.id
                    children=row
                />
            </Show>
        </section>
    }
}

#[component]
pub fn StoreCard(store: Store) -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState context not found");
    let show_checklist = RwSignal::new(false);

    let store_id = store.base.id;
    let store_level = store.level;
    let store_name = store.base.name.clone();
    let modal_title = store.base.name.clone();

    let progress = Signal::derive(move || {
        let products = state.products.get();
        let sales = state.sales.get();
        engine::store_progress(store_id, &products, &sales)
    });

    let card_class = move || {
        let p = progress.get();
        if p.is_completed() {
            "store-card store-card--completed"
        } else if p.needs_attention() {
            "store-card store-card--attention"
        } else {
            "store-card"
        }
    };

    view! {
        <div class=card_class>
            <div class="store-card__header">
                <h4 class="store-card__name">{store_name}</h4>
                <span class="store-card__level">{store.level.to_string()}</span>
            </div>

            <ProgressBar
                value=Signal::derive(move || progress.get().drive_achieved)
                max=Signal::derive(move || progress.get().drive_total.max(1))
                label="Drive".to_string()
            />
            <ProgressBar
                value=Signal::derive(move || progress.get().focus_achieved)
                max=Signal::derive(move || progress.get().focus_total.max(1))
                label="Fokus".to_string()
            />

            <button
                class="button button--secondary store-card__action"
                on:click=move |_| show_checklist.set(true)
            >
                "Cek Target"
            </button>

            <Show when=move || show_checklist.get()>
                <Modal
                    title=modal_title.clone()
                    on_close=Callback::new(move |_| show_checklist.set(false))
                >
                    <div class="checklist">
                        <ChecklistSection
                            store_id=store_id
                            store_level=store_level
                            product_type=ProductType::Drive
                        />
                        <ChecklistSection
                            store_id=store_id
                            store_level=store_level
                            product_type=ProductType::Focus
                        />
                    </div>
                </Modal>
            </Show>
        </div>
    }
}
