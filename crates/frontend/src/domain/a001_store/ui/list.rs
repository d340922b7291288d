//! Store roster: searchable, sortable table with CSV import.

use crate::shared::components::Modal;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    create_sort_toggle, filter_list, get_sort_indicator, sort_list, SearchInput, Searchable,
    Sortable,
};
use crate::shared::notifications::{NotificationKind, Notifications};
use crate::shared::state::app_state::AppState;
use contracts::domain::a001_store::{parse_store_csv, Store, StoreDto};
use contracts::enums::StoreLevel;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::cmp::Ordering;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

impl Searchable for Store {
    fn matches_filter(&self, filter: &str) -> bool {
        self.base
            .name
            .to_lowercase()
            .contains(&filter.trim().to_lowercase())
    }
}

impl Sortable for Store {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "level" => self
                .level
                .cmp(&other.level)
                .then_with(|| self.base.name.to_lowercase().cmp(&other.base.name.to_lowercase())),
            _ => self
                .base
                .name
                .to_lowercase()
                .cmp(&other.base.name.to_lowercase()),
        }
    }
}

#[component]
fn StoreForm(on_close: Callback<()>, #[prop(optional_no_strip)] store_to_edit: Option<Store>) -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState context not found");
    let notifications = use_context::<Notifications>().expect("Notifications context not found");

    let editing = StoredValue::new(store_to_edit.as_ref().map(|s| s.base.id));
    let is_edit = store_to_edit.is_some();

    let (name, set_name) = signal(
        store_to_edit
            .as_ref()
            .map(|s| s.base.name.clone())
            .unwrap_or_default(),
    );
    let (level, set_level) = signal(
        store_to_edit
            .as_ref()
            .map(|s| s.level)
            .unwrap_or(StoreLevel::Ritel),
    );
    let (error, set_error) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let result = match editing.get_value() {
            Some(id) => state.update_store(
                id,
                &StoreDto {
                    id: None,
                    name: name.get_untracked(),
                    level: level.get_untracked(),
                    comment: None,
                },
            ),
            None => state.add_store(name.get_untracked(), level.get_untracked()),
        };

        match result {
            Ok(()) => {
                notifications.push(NotificationKind::Success, "Toko", "Toko berhasil disimpan.");
                on_close.run(());
            }
            Err(e) => set_error.set(Some(e)),
        }
    };

    let level_options = StoreLevel::all()
        .into_iter()
        .map(|lvl| {
            view! {
                <option value=lvl.code() selected=move || level.get() == lvl>
                    {lvl.to_string()}
                </option>
            }
        })
        .collect_view();

    view! {
        <form class="form" on:submit=on_submit>
            <Show when=move || error.get().is_some()>
                <div class="error-message">{move || error.get().unwrap_or_default()}</div>
            </Show>
            <div class="form-group">
                <label for="store-name">"Nama Toko"</label>
                <input
                    type="text"
                    id="store-name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                    required
                />
            </div>
            <div class="form-group">
                <label for="store-level">"Level Toko"</label>
                <select
                    id="store-level"
                    on:change=move |ev| {
                        if let Some(lvl) = StoreLevel::from_code(&event_target_value(&ev)) {
                            set_level.set(lvl);
                        }
                    }
                >
                    {level_options}
                </select>
            </div>
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
pub fn StoresPage() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState context not found");
    let notifications = use_context::<Notifications>().expect("Notifications context not found");

    let (modal_open, set_modal_open) = signal(false);
    let store_to_edit = RwSignal::new(Option::<Store>::None);

    let (filter, set_filter) = signal(String::new());
    let selected_levels = RwSignal::new(Vec::<StoreLevel>::new());
    let (sort_field, set_sort_field) = signal("name".to_string());
    let (sort_ascending, set_sort_ascending) = signal(true);

    let open_modal = move |store: Option<Store>| {
        store_to_edit.set(store);
        set_modal_open.set(true);
    };
    let close_modal = Callback::new(move |_: ()| {
        store_to_edit.set(None);
        set_modal_open.set(false);
    });

    let toggle_level = move |level: StoreLevel| {
        selected_levels.update(|levels| {
            if let Some(pos) = levels.iter().position(|l| *l == level) {
                levels.remove(pos);
            } else {
                levels.push(level);
            }
        });
    };

    let on_delete = move |store: Store| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Hapus toko \"{}\"?", store.base.name))
                    .ok()
            })
            .unwrap_or(false);
        if confirmed {
            state.delete_store(store.base.id);
        }
    };

    // CSV import: hidden file input, parse in contracts, report per-line errors
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

            match parse_store_csv(&text) {
                Ok(result) => {
                    let added = state.bulk_add_stores(result.rows);
                    let mut summary = format!("Berhasil menambahkan {} toko.", added);
                    if !result.error_lines.is_empty() {
                        let lines = result
                            .error_lines
                            .iter()
                            .map(|n| n.to_string())
                            .collect::<Vec<_>>()
                            .join(", ");
                        summary.push_str(&format!(
                            " {} baris gagal diimpor (baris ke: {}).",
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

    let visible_stores = move || {
        let mut stores = state.stores.get();
        let levels = selected_levels.get();
        if !levels.is_empty() {
            stores.retain(|store| levels.contains(&store.level));
        }
        let mut stores = filter_list(stores, &filter.get());
        sort_list(&mut stores, &sort_field.get(), sort_ascending.get());
        stores
    };

    let level_chips = StoreLevel::all()
        .into_iter()
        .map(|level| {
            view! {
                <button
                    class=move || {
                        if selected_levels.get().contains(&level) {
                            "chip chip--active"
                        } else {
                            "chip"
                        }
                    }
                    on:click=move |_| toggle_level(level)
                >
                    {level.to_string()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="page">
            <div class="page__header">
                <h2 class="page__title">"Toko"</h2>
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
                        "Tambah Toko"
                    </button>
                </div>
            </div>

            <div class="filter-panel">
                <SearchInput
                    value=filter
                    on_change=Callback::new(move |value| set_filter.set(value))
                    placeholder="Cari nama toko..."
                />
                <div class="filter-panel__chips">
                    <span class="filter-panel__label">"Level Toko:"</span>
                    {level_chips}
                    <Show when=move || !selected_levels.get().is_empty()>
                        <button
                            class="button button--icon"
                            title="Reset filter level"
                            on:click=move |_| selected_levels.set(Vec::new())
                        >
                            {icon("x")}
                        </button>
                    </Show>
                </div>
            </div>

            <Show when=move || modal_open.get()>
                <Modal
                    title=if store_to_edit.get_untracked().is_some() {
                        "Edit Toko".to_string()
                    } else {
                        "Tambah Toko".to_string()
                    }
                    on_close=close_modal
                >
                    <StoreForm on_close=close_modal store_to_edit=store_to_edit.get_untracked() />
                </Modal>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <th
                            class="data-table__sortable"
                            on:click=create_sort_toggle(
                                "name",
                                sort_field.into(),
                                set_sort_field,
                                set_sort_ascending,
                            )
                        >
                            {move || {
                                format!(
                                    "Nama{}",
                                    get_sort_indicator(&sort_field.get(), "name", sort_ascending.get()),
                                )
                            }}
                        </th>
                        <th
                            class="data-table__sortable"
                            on:click=create_sort_toggle(
                                "level",
                                sort_field.into(),
                                set_sort_field,
                                set_sort_ascending,
                            )
                        >
                            {move || {
                                format!(
                                    "Level{}",
                                    get_sort_indicator(&sort_field.get(), "level", sort_ascending.get()),
                                )
                            }}
                        </th>
                        <th>""</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=visible_stores
                        key=|store| store.base.id
                        children=move |store: Store| {
                            let edit_store = store.clone();
                            let delete_store = store.clone();
                            view! {
                                <tr>
                                    <td>{store.base.name.clone()}</td>
                                    <td>{store.level.to_string()}</td>
                                    <td class="data-table__actions">
                                        <button
                                            class="button button--icon"
                                            title="Edit"
                                            on:click=move |_| open_modal(Some(edit_store.clone()))
                                        >
                                            {icon("pencil")}
                                        </button>
                                        <button
                                            class="button button--icon button--danger"
                                            title="Hapus"
                                            on:click=move |_| on_delete(delete_store.clone())
                                        >
                                            {icon("trash")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <Show when=move || visible_stores().is_empty()>
                <p class="empty-state">"Belum ada toko yang cocok."</p>
            </Show>
        </div>
    }
}
