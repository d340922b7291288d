//! Target products: coverage cards, add/edit form, CSV bulk upsert.

use crate::shared::components::{Modal, ProgressRing};
use crate::shared::icons::icon;
use crate::shared::notifications::{NotificationKind, Notifications};
use crate::shared::state::app_state::AppState;
use contracts::dashboards::d400_coverage::engine;
use contracts::domain::a002_product::{parse_product_csv, Product, ProductDto, TargetCoverage};
use contracts::enums::{ProductType, StoreLevel};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

#[component]
fn ProductForm(
    on_close: Callback<()>,
    #[prop(optional_no_strip)] product_to_edit: Option<Product>,
) -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState context not found");
    let notifications = use_context::<Notifications>().expect("Notifications context not found");

    let editing = StoredValue::new(product_to_edit.as_ref().map(|p| p.base.id));
    let is_edit = product_to_edit.is_some();

    let (name, set_name) = signal(
        product_to_edit
            .as_ref()
            .map(|p| p.base.name.clone())
            .unwrap_or_default(),
    );
    let (product_type, set_product_type) = signal(
        product_to_edit
            .as_ref()
            .map(|p| p.product_type)
            .unwrap_or(ProductType::Drive),
    );
    let (base_price, set_base_price) = signal(
        product_to_edit
            .as_ref()
            .map(|p| p.base_price.to_string())
            .unwrap_or_default(),
    );
    // Sparse map edited in place: an empty input keeps the level absent
    let coverage = RwSignal::new(
        product_to_edit
            .as_ref()
            .map(|p| p.target_coverage.clone())
            .unwrap_or_default(),
    );
    let (error, set_error) = signal(Option::<String>::None);

    let on_coverage_input = move |level: StoreLevel, raw: String| {
        coverage.update(|map: &mut TargetCoverage| {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                map.clear(level);
            } else if let Ok(percent) = trimmed.parse::<f64>() {
                map.set(level, percent);
            }
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Ok(price) = base_price.get_untracked().trim().parse::<f64>() else {
            set_error.set(Some("Harga dasar tidak valid.".to_string()));
            return;
        };

        let dto = ProductDto {
            id: None,
            name: name.get_untracked(),
            product_type: product_type.get_untracked(),
            base_price: price,
            target_coverage: coverage.get_untracked(),
            comment: None,
        };

        let result = match editing.get_value() {
            Some(id) => state.update_product(id, &dto),
            None => state.add_product(&dto),
        };

        match result {
            Ok(()) => {
                notifications.push(
                    NotificationKind::Success,
                    "Produk",
                    "Produk berhasil disimpan.",
                );
                on_close.run(());
            }
            Err(e) => set_error.set(Some(e)),
        }
    };

    let coverage_inputs = StoreLevel::all()
        .into_iter()
        .map(|level| {
            view! {
                <div class="form-group form-group--inline">
                    <label>{format!("Target {} (%)", level)}</label>
                    <input
                        type="number"
                        min="0"
                        max="100"
                        placeholder="tanpa target"
                        prop:value=move || {
                            coverage
                                .with(|map| map.get(level).map(|p| p.to_string()))
                                .unwrap_or_default()
                        }
                        on:input=move |ev| on_coverage_input(level, event_target_value(&ev))
                    />
                </div>
            }
        })
        .collect_view();

    view! {
        <form class="form" on:submit=on_submit>
            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <div class="form-group">
                <label for="product-name">"Nama Produk"</label>
                <input
                    type="text"
                    id="product-name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                    required
                />
            </div>
            <div class="form-group">
                <label for="product-type">"Tipe"</label>
                <select
                    id="product-type"
                    on:change=move |ev| {
                        if let Some(pt) = ProductType::from_code(&event_target_value(&ev)) {
                            set_product_type.set(pt);
                        }
                    }
                >
                    <option
                        value=ProductType::Drive.code()
                        selected=move || product_type.get() == ProductType::Drive
                    >
                        {ProductType::Drive.display_name()}
                    </option>
                    <option
                        value=ProductType::Focus.code()
                        selected=move || product_type.get() == ProductType::Focus
                    >
                        {ProductType::Focus.display_name()}
                    </option>
                </select>
            </div>
            <div class="form-group">
                <label for="product-price">"Harga Dasar"</label>
                <input
                    type="number"
                    id="product-price"
                    min="0"
                    step="any"
                    prop:value=move || base_price.get()
                    on:input=move |ev| set_base_price.set(event_target_value(&ev))
                    required
                />
            </div>
            <fieldset class="form-fieldset">
                <legend>"Target Coverage per Level"</legend>
                <p class="form-hint">
                    "Kosongkan kolom untuk level tanpa target. Isi 0 untuk target 0%."
                </p>
                {coverage_inputs}
            </fieldset>
            <div class="form-actions">
                <button type="button" class="button" on:click=move |_| on_close.run(())>
                    "Batal"
                </button>
                <button type="submit" class="button button--primary">
                    {if is_edit { "Update" } else { "Tambah" }}
                </button>
            </div>
        </form>
    }
}

#[component]
fn ProductCard(product: Product, on_edit: Callback<Product>) -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState context not found");

    let id = product.base.id;
    let product_for_edit = product.clone();
    let product_for_coverage = product.clone();

    let coverage = Signal::derive(move || {
        let stores = state.stores.get();
        let sales = state.sales.get();
        engine::product_coverage(&product_for_coverage, &stores, &sales)
    });

    let targets_summary = product
        .target_coverage
        .iter()
        .map(|(level, percent)| format!("{}: {}%", level, percent))
        .collect::<Vec<_>>()
        .join(" · ");
    let targets_summary = if targets_summary.is_empty() {
        "Tanpa target".to_string()
    } else {
        targets_summary
    };

    let is_active = product.is_active;
    let type_badge = match product.product_type {
        ProductType::Drive => "badge badge--drive",
        ProductType::Focus => "badge badge--focus",
    };

    view! {
        <div class=move || {
            if is_active {
                "product-card"
            } else {
                "product-card product-card--inactive"
            }
        }>
            <div class="product-card__header">
                <span class=type_badge>{product.product_type.to_string()}</span>
                <h4 class="product-card__name">{product.base.name.clone()}</h4>
            </div>
            <ProgressRing coverage=coverage />
            <p class="product-card__price">
                {format!("Rp {:.0}", product.base_price)}
            </p>
            <p class="product-card__targets">{targets_summary}</p>
            <div class="product-card__actions">
                <button
                    class="button button--icon"
                    title="Edit"
                    on:click=move |_| on_edit.run(product_for_edit.clone())
                >
                    {icon("pencil")}
                </button>
                <button
                    class="button"
                    on:click=move |_| state.toggle_product_status(id)
                >
                    {if is_active { "Nonaktifkan" } else { "Aktifkan" }}
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn TargetsPage() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState context not found");
    let notifications = use_context::<Notifications>().expect("Notifications context not found");

    let (modal_open, set_modal_open) = signal(false);
    let product_to_edit = RwSignal::new(Option::<Product>::None);

    let open_modal = move |product: Option<Product>| {
        product_to_edit.set(product);
        set_modal_open.set(true);
    };
    let close_modal = Callback::new(move |_: ()| {
        product_to_edit.set(None);
        set_modal_open.set(false);
    });
    let on_edit = Callback::new(move |product: Product| open_modal(Some(product)));

    // Bulk upsert by (name, type) key
    let on_import_file = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());
        let Some(file) = input.as_ref().and_then(|i| i.files()).and_then(|f| f.get(0)) else {
            return;
        };
        if let Some(input) = input {
            input.set_value("");
        }

        spawn_local(async move {
            let text = match JsFuture::from(file.text()).await {
                Ok(value) => value.as_string().unwrap_or_default(),
                Err(e) => {
                    notifications.push(
                        NotificationKind::Error,
                        "Impor gagal",
                        &format!("Gagal membaca file: {:?}", e),
                    );
                    return;
                }
            };

            match parse_product_csv(&text) {
                Ok(result) => {
                    let (inserted, updated) = state.bulk_upsert_products(result.rows);
                    let mut summary = format!(
                        "{} produk baru, {} produk diperbarui.",
                        inserted, updated
                    );
                    if !result.error_lines.is_empty() {
                        let lines = result
                            .error_lines
                            .iter()
                            .map(|n| n.to_string())
                            .collect::<Vec<_>>()
                            .join(", ");
                        summary.push_str(&format!(
                            " {} baris gagal (baris ke: {}).",
                            result.error_lines.len(),
                            lines
                        ));
                    }
                    notifications.push(NotificationKind::Success, "Impor selesai", &summary);
                }
                Err(e) => {
                    notifications.push(NotificationKind::Error, "Impor gagal", &e.to_string())
                }
            }
        });
    };

    let section = move |product_type: ProductType| {
        let products = move || {
            state
                .products
                .get()
                .into_iter()
                .filter(move |p| p.product_type == product_type)
                .collect::<Vec<_>>()
        };
        view! {
            <section class="product-section">
                <h3 class="product-section__title">{product_type.display_name()}</h3>
                <Show
                    when=move || !products().is_empty()
                    fallback=|| view! { <p class="empty-state">"Belum ada produk."</p> }
                >
                    <div class="product-grid">
                        <For
                            each=products
                            key=|product| (product.base.id, product.base.metadata.version)
                            children=move |product: Product| {
                                view! { <ProductCard product=product on_edit=on_edit /> }
                            }
                        />
                    </div>
                </Show>
            </section>
        }
    };

    view! {
        <div class="page">
            <div class="page__header">
                <h2 class="page__title">"Target Produk"</h2>
                <div class="page__actions">
                    <label class="button">
                        {icon("upload")}
                        "Impor CSV"
                        <input
                            type="file"
                            accept=".csv,text/csv"
                            style="display: none;"
                            on:change=on_import_file
                        />
                    </label>
                    <button class="button button--primary" on:click=move |_| open_modal(None)>
                        {icon("plus")}
                        "Tambah Produk"
                    </button>
                </div>
            </div>

            <Show when=move || modal_open.get()>
                <Modal
                    title=if product_to_edit.get_untracked().is_some() {
                        "Edit Produk".to_string()
                    } else {
                        "Tambah Produk".to_string()
                    }
                    on_close=close_modal
                >
                    <ProductForm
                        on_close=close_modal
                        product_to_edit=product_to_edit.get_untracked()
                    />
                </Modal>
            </Show>

            {section(ProductType::Drive)}
            {section(ProductType::Focus)}
        </div>
    }
}
